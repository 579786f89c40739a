use anyhow::Result;
use magic_square::core::ConfigProvider;
use magic_square::utils::validation::Validate;
use magic_square::{AppConfig, Grid, Locale, MagicSquareError, SquareChecker};
use tempfile::TempDir;

#[test]
fn test_load_full_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("magic-square.toml");
    std::fs::write(
        &config_path,
        r#"
[server]
host = "0.0.0.0"
port = 8088

[validation]
max_grid_size = 4
include_values = true

[messages]
locale = "en"

[logging]
level = "debug"
json = true
"#,
    )?;

    let config = AppConfig::from_file(&config_path)?;
    config.validate()?;

    assert_eq!(config.bind_address(), "0.0.0.0:8088");
    assert_eq!(config.max_grid_size(), 4);
    assert!(config.include_values());
    assert_eq!(config.locale(), Locale::En);
    assert!(config.logging.json);

    // 設定直接影響驗證器
    let checker = SquareChecker::from_provider(&config);
    let too_big = Grid::from_values(vec![vec![1; 5]; 5]);
    assert!(matches!(
        checker.check(&too_big),
        Err(MagicSquareError::GridTooLargeError { size: 5, max: 4 })
    ));

    let ok = checker.check(&Grid::from_values(vec![vec![1]]))?;
    assert_eq!(ok.message, "It is a valid magic square! Sum: 1");
    Ok(())
}

#[test]
fn test_config_file_with_env_substitution() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("env.toml");
    std::fs::write(
        &config_path,
        r#"
[server]
host = "${MAGIC_SQUARE_FILE_TEST_HOST}"
"#,
    )?;

    std::env::set_var("MAGIC_SQUARE_FILE_TEST_HOST", "10.0.0.7");
    let config = AppConfig::from_file(&config_path)?;
    assert_eq!(config.server.host, "10.0.0.7");
    assert_eq!(config.server.port, 5000);
    Ok(())
}

#[test]
fn test_out_of_range_config_fails_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "[validation]\nmax_grid_size = 500\n")?;

    let config = AppConfig::from_file(&config_path)?;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, MagicSquareError::InvalidConfigValueError { .. }));
    assert!(err.to_string().contains("validation.max_grid_size"));
    Ok(())
}
