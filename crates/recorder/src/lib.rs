use crate::handler::handle_s3_batch;
use lambda_runtime::LambdaEvent;
use model::event::ObjectCreatedEvent;
use model::{Error, HandlerResponse};
use std::future::Future;
use std::pin::Pin;
use store::RowStore;

pub mod config;
mod handler;

/// Creates a handler function recording S3 object keys, designed for use with `lambda_runtime::run()`
///
/// Expects the function to receive an object-created `S3Event` and writes one
/// row per record to `store` before acknowledging the batch.
///
/// ```ignore
/// use aws_config::BehaviorVersion;
/// use lambda_runtime::service_fn;
/// use model::Error;
/// use recorder::config::RecorderConfig;
/// use recorder::recorder_fn;
/// use store_dynamodb::DynamoDbRowStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Error> {
///     let config: RecorderConfig = RecorderConfig::from_env()?;
///     let dynamodb_client: aws_sdk_dynamodb::Client =
///         aws_sdk_dynamodb::Client::new(&aws_config::load_defaults(BehaviorVersion::latest()).await);
///     let store: DynamoDbRowStore = DynamoDbRowStore::new(dynamodb_client, config.table_name);
///
///     lambda_runtime::run(service_fn(recorder_fn(&store))).await
/// }
/// ```
pub fn recorder_fn<'a>(
    store: &'a dyn RowStore,
) -> impl Fn(RecorderLambdaEvent) -> Pin<Box<dyn Future<Output = Result<HandlerResponse, Error>> + 'a>>
{
    move |event: RecorderLambdaEvent| Box::pin(handle_s3_batch(store, event))
}

pub type RecorderLambdaEvent = LambdaEvent<ObjectCreatedEvent>;
