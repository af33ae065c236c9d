use sea_orm::{AccessMode, DatabaseTransaction, DbErr, TransactionTrait};

/// Begin a `READ ONLY` transaction at the default isolation level.
///
/// Every statement inside sees one snapshot, and writes are rejected by the
/// server.
pub async fn begin_read_only<C: TransactionTrait<Transaction = DatabaseTransaction>>(db: &C) -> Result<DatabaseTransaction, DbErr> {
    db.begin_with_config(None, Some(AccessMode::ReadOnly)).await
}
