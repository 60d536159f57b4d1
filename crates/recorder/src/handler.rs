use lambda_runtime::tracing::{Instrument, Span};
use lambda_runtime::{tracing, LambdaEvent};
use model::event::{NotificationRecord, ObjectCreatedEvent};
use model::{Error, FileRow, HandlerResponse};
use store::{RowStore, StoreError};

pub(crate) async fn handle_s3_batch(
    store: &dyn RowStore,
    event: LambdaEvent<ObjectCreatedEvent>,
) -> Result<HandlerResponse, Error> {
    let records: Vec<NotificationRecord> = event.payload.records;

    tracing::info!(
        request_id = %event.context.request_id,
        "Handling batch of [{}] from S3",
        records.len()
    );

    // Records are written one after another, the first failure ends the invocation
    for (index, record) in records.iter().enumerate() {
        let key: &str = record.object_key(index).inspect_err(|err| {
            tracing::error!("Failed to read record, {err}");
        })?;

        let record_span: Span = tracing::span!(tracing::Level::INFO, "S3 Record", index, key);

        write_row(store, key).instrument(record_span).await?;
    }

    tracing::info!("Recorded [{}] files", records.len());

    Ok(HandlerResponse::ok())
}

async fn write_row(store: &dyn RowStore, key: &str) -> Result<(), StoreError> {
    store.put_row(FileRow::new(key)).await.inspect_err(|err| {
        tracing::error!("Failed to write row, {err}");
    })?;

    tracing::debug!("Wrote row");

    Ok(())
}
