#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use magic_square::config::lambda::LambdaConfig;
#[cfg(feature = "lambda")]
use magic_square::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use magic_square::{SquareChecker, VerifyRequest, VerifyResponse};

#[cfg(feature = "lambda")]
async fn function_handler(
    checker: &SquareChecker,
    include_values: bool,
    event: LambdaEvent<VerifyRequest>,
) -> Result<VerifyResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Verifying grid");

    let result = checker
        .check(&event.payload.grid)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    Ok(VerifyResponse::from_result(&result, include_values))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_json_logger("info");

    // 創建Lambda配置
    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let checker = SquareChecker::from_provider(&config);
    let checker = &checker;
    let include_values = config.include_values;

    run(service_fn(move |event: LambdaEvent<VerifyRequest>| async move {
        function_handler(checker, include_values, event).await
    }))
    .await
}
