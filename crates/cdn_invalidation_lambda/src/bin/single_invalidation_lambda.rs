use cdn_invalidation_lambda::adapters::cloudfront::CloudFrontSubmitter;
use cdn_invalidation_lambda::config::HandlerConfig;
use cdn_invalidation_lambda::handlers::response::HandlerResponse;
use cdn_invalidation_lambda::handlers::single::handle_single_event;
use cdn_invalidation_lambda::logging::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    config: &HandlerConfig,
    submitter: &CloudFrontSubmitter,
) -> Result<HandlerResponse, Error> {
    handle_single_event(event.payload, config, submitter)
        .await
        .map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging()?;

    let config = HandlerConfig::from_env();
    let submitter = CloudFrontSubmitter::from_environment().await;

    lambda_runtime::run(service_fn(|event| {
        handle_request(event, &config, &submitter)
    }))
    .await
}
