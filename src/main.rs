use clap::Parser;
use magic_square::adapters::http;
use magic_square::utils::error::{ErrorSeverity, MagicSquareError};
use magic_square::utils::{logger, validation::Validate};
use magic_square::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(e.severity()));
        }
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(&config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }

    tracing::info!("Starting magic-square server");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(e.severity()));
    }

    let listener = match http::bind(&config.bind_address()).await {
        Ok(listener) => listener,
        Err(e) => fail(&e),
    };

    println!("Magic square checker running at http://{}", config.bind_address());
    println!("Press Ctrl+C to stop");

    if let Err(e) = http::serve(listener, &config, http::shutdown_signal()).await {
        fail(&e);
    }

    tracing::info!("✅ Server stopped");
    Ok(())
}

fn fail(e: &MagicSquareError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(e.severity()));
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
