use serde::{Deserialize, Serialize};

pub mod env;
pub mod event;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Attribute holding the object key in the destination table.
pub const FILENAME: &str = "filename";

/// Body returned for every successfully handled invocation.
pub const ACKNOWLEDGEMENT: &str = "OK";

/// A single row written to the destination table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub filename: String,
}

impl FileRow {
    pub fn new(filename: impl Into<String>) -> Self {
        FileRow {
            filename: filename.into(),
        }
    }
}

/// Fixed response returned once every record has been written.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    // JSON encoded string literal
    pub body: String,
}

impl HandlerResponse {
    pub fn ok() -> Self {
        HandlerResponse {
            status_code: 200,
            body: format!("\"{ACKNOWLEDGEMENT}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_to_fixed_shape() {
        let json: String = serde_json::to_string(&HandlerResponse::ok()).unwrap();

        assert_eq!(r#"{"statusCode":200,"body":"\"OK\""}"#, json);
    }

    #[test]
    fn response_body_is_json_string() {
        let body: String = serde_json::from_str(&HandlerResponse::ok().body).unwrap();

        assert_eq!(ACKNOWLEDGEMENT, body);
    }
}
