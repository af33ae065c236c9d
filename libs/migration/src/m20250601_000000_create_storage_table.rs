use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Columns that get a single-column btree index.
const INDEXED: [(StorageTable, &str); 7] = [
    (StorageTable::StorageCategory, "idx_storage_table_storage_category"),
    (StorageTable::ShopId, "idx_storage_table_shop_id"),
    (StorageTable::CountryCode, "idx_storage_table_country_code"),
    (StorageTable::Active, "idx_storage_table_active"),
    (StorageTable::Width, "idx_storage_table_width"),
    (StorageTable::Height, "idx_storage_table_height"),
    (StorageTable::Depth, "idx_storage_table_depth"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StorageTable::Table)
                    .if_not_exists()
                    .col(string_len(StorageTable::StorageDataId, 255).primary_key())
                    .col(integer(StorageTable::StorageCategory))
                    .col(integer(StorageTable::ShopId))
                    .col(string_len(StorageTable::ItemId, 255))
                    .col(text(StorageTable::ItemTitle))
                    .col(text(StorageTable::ItemUrl))
                    .col(text(StorageTable::PrimaryImageUrl))
                    .col(json(StorageTable::ImageUrlList).default("[]"))
                    .col(double(StorageTable::Price))
                    .col(string_len_null(StorageTable::Ean, 256))
                    .col(string_len(StorageTable::CountryCode, 8))
                    .col(boolean(StorageTable::Active).default(true))
                    .col(double(StorageTable::Height))
                    .col(double(StorageTable::Width))
                    .col(double(StorageTable::Depth))
                    .col(json(StorageTable::Colors).default("[]"))
                    .col(json(StorageTable::Materials).default("[]"))
                    .col(
                        timestamp_with_time_zone(StorageTable::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(string_len_null(StorageTable::SellerName, 256))
                    .col(double_null(StorageTable::BoxLikelihood))
                    .col(json_null(StorageTable::BoxFeatures))
                    .col(double_null(StorageTable::ShelfLikelihood))
                    .col(json_null(StorageTable::ShelfFeatures))
                    .col(json_null(StorageTable::ShelfGenres))
                    .to_owned(),
            )
            .await?;

        for (column, name) in INDEXED {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(StorageTable::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(StorageTable::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum StorageTable {
    Table,
    StorageDataId,
    StorageCategory,
    ShopId,
    ItemId,
    ItemTitle,
    ItemUrl,
    PrimaryImageUrl,
    ImageUrlList,
    Price,
    Ean,
    CountryCode,
    Active,
    Height,
    Width,
    Depth,
    Colors,
    Materials,
    UpdatedAt,
    SellerName,
    BoxLikelihood,
    BoxFeatures,
    ShelfLikelihood,
    ShelfFeatures,
    ShelfGenres,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::DbBackend;

    #[test]
    fn test_index_names_are_unique() {
        let names: std::collections::HashSet<_> = INDEXED.iter().map(|(_, n)| *n).collect();
        assert_eq!(names.len(), INDEXED.len());
    }

    #[test]
    fn test_width_index_statement() {
        let (column, name) = INDEXED[4];
        let stmt = DbBackend::Postgres.build(
            &Index::create()
                .name(name)
                .table(StorageTable::Table)
                .col(column)
                .to_owned(),
        );
        assert_eq!(
            stmt.sql,
            r#"CREATE INDEX "idx_storage_table_width" ON "storage_table" ("width")"#
        );
    }
}
