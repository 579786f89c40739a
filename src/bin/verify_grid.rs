use clap::Parser;
use magic_square::adapters::dto::GridInput;
use magic_square::config::toml_config::MAX_GRID_SIZE_LIMIT;
use magic_square::utils::error::{MagicSquareError, Result};
use magic_square::utils::{logger, validation};
use magic_square::{Grid, Locale, SquareChecker, VerifyResponse};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "verify-grid")]
#[command(about = "Check a grid from a JSON file or stdin and print the verdict")]
struct Args {
    /// JSON file holding {"grid": [...]} or a bare array of rows; stdin when omitted
    file: Option<PathBuf>,

    /// Language for labels and messages (en, es)
    #[arg(long, default_value = "es")]
    locale: Locale,

    /// Largest accepted grid dimension
    #[arg(long, default_value_t = MAX_GRID_SIZE_LIMIT)]
    max_grid_size: usize,

    /// Include the cells of every line in the output
    #[arg(long)]
    include_values: bool,

    #[arg(long)]
    pretty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn read_grid(file: Option<&PathBuf>) -> Result<Grid> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let input: GridInput = serde_json::from_str(&content)?;
    Ok(input.into_grid())
}

fn run(args: &Args) -> Result<bool> {
    let grid = read_grid(args.file.as_ref())?;
    validation::validate_range("max_grid_size", args.max_grid_size, 1, MAX_GRID_SIZE_LIMIT)?;

    let checker = SquareChecker::new(args.max_grid_size, args.locale);
    let result = checker.check(&grid)?;

    let response = VerifyResponse::from_result(&result, args.include_values);
    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(result.is_valid)
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose, "warn");

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            report(&e);
            std::process::exit(2);
        }
    }
}

fn report(e: &MagicSquareError) {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}
