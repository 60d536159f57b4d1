use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::error::ResourceNotFoundException;
use aws_smithy_mocks::{mock, mock_client, Rule};
use lambda_runtime::{Context, LambdaEvent};
use model::env::DYNAMO_TABLE;
use model::event::{NotificationRecord, ObjectCreatedEvent};
use std::env;

/// Test table name
pub const TEST_TABLE: &str = "test_files";

/// Create an object-created event with a record per key, in order
pub fn object_created_event(keys: &[&str]) -> ObjectCreatedEvent {
    ObjectCreatedEvent {
        records: keys
            .iter()
            .map(|&key| NotificationRecord::with_key(key))
            .collect(),
    }
}

/// Wrap a payload as the runtime would deliver it
pub fn lambda_event<T>(payload: T) -> LambdaEvent<T> {
    LambdaEvent::new(payload, Context::default())
}

/// A `put_item` rule which accepts every put
pub fn accepting_put_item_rule() -> Rule {
    mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .sequence()
        .output(|| PutItemOutput::builder().build())
        .repeatedly()
        .build()
}

/// A `put_item` rule which rejects every put as targeting a missing table
pub fn failing_put_item_rule() -> Rule {
    mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .sequence()
        .error(table_not_found)
        .repeatedly()
        .build()
}

/// A `put_item` rule which accepts `accepted` puts and then rejects every later one
pub fn failing_after_put_item_rule(accepted: usize) -> Rule {
    mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .sequence()
        .output(|| PutItemOutput::builder().build())
        .times(accepted)
        .error(table_not_found)
        .repeatedly()
        .build()
}

fn table_not_found() -> PutItemError {
    PutItemError::ResourceNotFoundException(
        ResourceNotFoundException::builder()
            .message("Requested resource not found")
            .build(),
    )
}

/// A mock DynamoDB client answering from a single rule
pub fn mock_dynamodb_client(rule: &Rule) -> aws_sdk_dynamodb::Client {
    mock_client!(aws_sdk_dynamodb, [rule])
}

/// A mock DynamoDB client which rejects every put as targeting a missing table
pub fn create_failing_dynamodb_client() -> aws_sdk_dynamodb::Client {
    mock_dynamodb_client(&failing_put_item_rule())
}

/// Setup default environment variables used in testing
pub fn setup_default_env() {
    unsafe {
        env::set_var(DYNAMO_TABLE, TEST_TABLE);
    }
}
