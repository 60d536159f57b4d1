use async_trait::async_trait;
use model::FileRow;
use store::{RowStore, StoreError};
use std::sync::{Arc, Mutex};

/// Row store holding every write in the order it was made.
#[derive(Default, Clone)]
pub struct InMemoryRowStore {
    rows: Arc<Mutex<Vec<FileRow>>>,
}

impl InMemoryRowStore {
    /// Snapshot of every row written so far, oldest first.
    pub fn rows(&self) -> Vec<FileRow> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl RowStore for InMemoryRowStore {
    async fn put_row(&self, row: FileRow) -> Result<(), StoreError> {
        self.rows.lock().unwrap().push(row);

        Ok(())
    }
}
