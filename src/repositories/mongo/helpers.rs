use mongodb::bson::doc;
use mongodb::error::Result as MongoResult;
use mongodb::Database;
use tracing::Instrument;

/// Ensures a unique index on `id`; safe to repeat.
pub async fn initialize_coll(
    coll_name: impl Into<::mongodb::bson::Bson>,
    db: &Database,
) -> MongoResult<()> {
    db.run_command(
        doc! {
            "createIndexes": coll_name.into(),
            "indexes": [{
                "name": "unique_id",
                "key": {
                    "id": 1
                },
                "unique": true
            }],
        },
        None,
    )
    .instrument(tracing::trace_span!("run_command"))
    .await?;

    Ok(())
}
