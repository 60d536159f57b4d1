//! Object-created notification payload delivered by S3.
//!
//! Only the fields needed to locate the object key are modelled, everything
//! else in a record is ignored. Nested fields are optional and the key is kept
//! as raw JSON, a malformed record is reported when it is reached and the
//! records before it are still written.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ObjectCreatedEvent {
    #[serde(rename = "Records")]
    pub records: Vec<NotificationRecord>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NotificationRecord {
    #[serde(default)]
    pub s3: Option<S3Entity>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct S3Entity {
    #[serde(default)]
    pub object: Option<S3Object>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct S3Object {
    #[serde(default)]
    pub key: Option<Value>,
}

impl NotificationRecord {
    /// A record pointing at the given object key.
    pub fn with_key(key: impl Into<String>) -> Self {
        NotificationRecord {
            s3: Some(S3Entity {
                object: Some(S3Object {
                    key: Some(Value::String(key.into())),
                }),
            }),
        }
    }

    /// Resolve `s3.object.key`, `index` is the position of this record in the batch.
    pub fn object_key(&self, index: usize) -> Result<&str, RecordError> {
        let s3: &S3Entity = self
            .s3
            .as_ref()
            .ok_or(RecordError::missing(index, MissingField::S3))?;
        let object: &S3Object = s3
            .object
            .as_ref()
            .ok_or(RecordError::missing(index, MissingField::Object))?;
        let key: &Value = object
            .key
            .as_ref()
            .filter(|key| !key.is_null())
            .ok_or(RecordError::missing(index, MissingField::Key))?;

        key.as_str().ok_or_else(|| {
            RecordError::new(index, RecordErrorReason::KeyNotString(key.to_string()))
        })
    }
}

/// A record which doesn't carry a usable object key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    pub index: usize,
    pub reason: RecordErrorReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordErrorReason {
    Missing(MissingField),
    // Holds the offending value as JSON
    KeyNotString(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    S3,
    Object,
    Key,
}

impl MissingField {
    fn path(&self) -> &'static str {
        match self {
            MissingField::S3 => "s3",
            MissingField::Object => "s3.object",
            MissingField::Key => "s3.object.key",
        }
    }
}

impl RecordError {
    pub fn new(index: usize, reason: RecordErrorReason) -> Self {
        RecordError { index, reason }
    }

    pub fn missing(index: usize, field: MissingField) -> Self {
        RecordError::new(index, RecordErrorReason::Missing(field))
    }
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            RecordErrorReason::Missing(field) => {
                write!(f, "record {} is missing {}", self.index, field.path())
            }
            RecordErrorReason::KeyNotString(value) => write!(
                f,
                "record {} has non-string {}: {}",
                self.index,
                MissingField::Key.path(),
                value
            ),
        }
    }
}

impl std::error::Error for RecordError {}
