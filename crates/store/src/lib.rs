use ::model::Error;
use async_trait::async_trait;
use model::FileRow;
use std::fmt::{Debug, Display, Formatter};

/// Destination for rows produced from object-created events.
///
/// Every write is an unconditional put, an existing row with the same key is overwritten.
#[async_trait]
pub trait RowStore: Send + Sync {
    async fn put_row(&self, row: FileRow) -> Result<(), StoreError>;
}

/// Errors arising from writing rows.
#[derive(Debug)]
pub struct StoreError {
    pub row_key: String,

    pub operation: StoreOperation,
    pub reason: StoreErrorReason,
}

#[derive(Debug)]
pub enum StoreErrorReason {
    // The row couldn't be converted into the backend representation
    BadRow(String),
    // An error from the underlying store
    BackendFailure(Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    PutRow,
}

impl StoreError {
    pub fn new(row_key: String, operation: StoreOperation, reason: StoreErrorReason) -> Self {
        StoreError {
            row_key,
            operation,
            reason,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            StoreErrorReason::BadRow(msg) => write!(
                f,
                "{:?} failed for {}: bad row, {}",
                self.operation, self.row_key, msg
            ),
            StoreErrorReason::BackendFailure(err) => write!(
                f,
                "{:?} failed for {}: backend failure, {}",
                self.operation, self.row_key, err
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            StoreErrorReason::BadRow(_) => None,
            StoreErrorReason::BackendFailure(err) => Some(err.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_row_key_and_cause() {
        let err: StoreError = StoreError::new(
            "a/b.txt".to_string(),
            StoreOperation::PutRow,
            StoreErrorReason::BackendFailure("throttled".into()),
        );

        assert_eq!(
            "PutRow failed for a/b.txt: backend failure, throttled",
            err.to_string()
        );
    }

    #[test]
    fn backend_failure_exposes_source() {
        let err: StoreError = StoreError::new(
            "x".to_string(),
            StoreOperation::PutRow,
            StoreErrorReason::BackendFailure("denied".into()),
        );

        let source = std::error::Error::source(&err).expect("Backend failure has a source");
        assert_eq!("denied", source.to_string());
    }
}
