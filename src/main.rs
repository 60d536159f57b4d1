use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, tracing};
use model::Error;
use recorder::config::RecorderConfig;
use recorder::recorder_fn;
use store_dynamodb::DynamoDbRowStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Fails the init phase before any invocation is accepted
    let config: RecorderConfig = RecorderConfig::from_env().inspect_err(|err| {
        tracing::error!("Unable to start, {err}");
    })?;

    let dynamodb_client: aws_sdk_dynamodb::Client =
        aws_sdk_dynamodb::Client::new(&aws_config::load_defaults(BehaviorVersion::latest()).await);

    let store: DynamoDbRowStore = DynamoDbRowStore::new(dynamodb_client, config.table_name);

    tracing::info!(table = %store.table_name(), "Recording S3 object keys");

    lambda_runtime::run(service_fn(recorder_fn(&store))).await
}
