/// Environment variable containing the destination DynamoDB table name
pub const DYNAMO_TABLE: &str = "DYNAMO_TABLE";
