use async_trait::async_trait;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::AttributeValue;
use lambda_runtime::tracing;
use model::FileRow;
use store::StoreErrorReason::{BackendFailure, BadRow};
use store::StoreOperation::PutRow;
use store::{RowStore, StoreError};
use std::collections::HashMap;

/// Writes rows into a single DynamoDB table with `PutItem`.
pub struct DynamoDbRowStore {
    table_name: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
}

impl DynamoDbRowStore {
    pub fn new(dynamodb_client: aws_sdk_dynamodb::Client, table_name: String) -> Self {
        DynamoDbRowStore {
            table_name,
            dynamodb_client,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn put_item(
        &self,
        item: HashMap<String, AttributeValue>,
    ) -> Result<PutItemOutput, SdkError<PutItemError, HttpResponse>> {
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
    }
}

#[async_trait]
impl RowStore for DynamoDbRowStore {
    async fn put_row(&self, row: FileRow) -> Result<(), StoreError> {
        let item: HashMap<String, AttributeValue> = serde_dynamo::to_item(&row)
            .map_err(|err| StoreError::new(row.filename.clone(), PutRow, BadRow(err.to_string())))?;

        tracing::debug!(table = %self.table_name, filename = %row.filename, "Putting item");

        self.put_item(item).await.map_err(|err| {
            StoreError::new(row.filename.clone(), PutRow, BackendFailure(err.into()))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::operation::put_item::PutItemInput;
    use aws_smithy_mocks::{mock, mock_client, Rule};
    use model::FILENAME;
    use test_utils::{
        accepting_put_item_rule, create_failing_dynamodb_client, mock_dynamodb_client, TEST_TABLE,
    };

    fn filename_of(input: &PutItemInput) -> Option<&str> {
        input
            .item()
            .and_then(|item| item.get(FILENAME))
            .and_then(|value| value.as_s().ok())
            .map(String::as_str)
    }

    #[tokio::test]
    async fn put_row_writes_filename_attribute() {
        let put_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item)
            .match_requests(|input| {
                input.table_name() == Some(TEST_TABLE)
                    && filename_of(input) == Some("a/b.txt")
                    && input.item().map(HashMap::len) == Some(1)
            })
            .sequence()
            .output(|| PutItemOutput::builder().build())
            .build();
        let client: aws_sdk_dynamodb::Client = mock_client!(aws_sdk_dynamodb, [&put_item_rule]);

        let store: DynamoDbRowStore = DynamoDbRowStore::new(client, TEST_TABLE.to_string());

        store
            .put_row(FileRow::new("a/b.txt"))
            .await
            .expect("Put should succeed");

        assert_eq!(1, put_item_rule.num_calls());
    }

    #[tokio::test]
    async fn put_row_makes_one_call_per_row() {
        let put_item_rule: Rule = accepting_put_item_rule();
        let store: DynamoDbRowStore =
            DynamoDbRowStore::new(mock_dynamodb_client(&put_item_rule), TEST_TABLE.to_string());

        for filename in ["x", "y", "x"] {
            store
                .put_row(FileRow::new(filename))
                .await
                .expect("Put should succeed");
        }

        assert_eq!(3, put_item_rule.num_calls());
    }

    #[tokio::test]
    async fn put_row_surfaces_backend_failure() {
        let store: DynamoDbRowStore =
            DynamoDbRowStore::new(create_failing_dynamodb_client(), TEST_TABLE.to_string());

        let err: StoreError = store
            .put_row(FileRow::new("a/b.txt"))
            .await
            .expect_err("Put should fail");

        assert_eq!("a/b.txt", err.row_key);
        assert_eq!(PutRow, err.operation);
        assert!(matches!(err.reason, BackendFailure(_)));
    }
}
