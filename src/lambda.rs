#[cfg(feature = "lambda")]
use aws_config::BehaviorVersion;
#[cfg(feature = "lambda")]
use aws_sdk_s3::config::Region;
#[cfg(feature = "lambda")]
use aws_sdk_s3::Client as S3Client;
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use mala_direta_pcl::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use mala_direta_pcl::{BatchPayload, BatchProcessor, BatchResponse, LambdaConfig, S3Storage};

#[cfg(feature = "lambda")]
async fn function_handler(
    processor: &BatchProcessor<S3Storage, LambdaConfig>,
    event: LambdaEvent<BatchPayload>,
) -> Result<BatchResponse, Error> {
    let payload = event.payload;
    tracing::info!(
        "Received batch {} ({} files)",
        payload.batch_id,
        payload.files.len()
    );

    Ok(processor.handle(&payload).await)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let lambda_config = LambdaConfig::from_env()?;
    lambda_config.validate()?;

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .region(Region::new(lambda_config.s3_region.clone()))
        .force_path_style(true)
        .build();
    let storage = S3Storage::new(S3Client::from_conf(s3_config));

    let processor = BatchProcessor::new(storage, lambda_config);
    let processor = &processor;

    run(service_fn(move |event: LambdaEvent<BatchPayload>| async move {
        function_handler(processor, event).await
    }))
    .await
}
