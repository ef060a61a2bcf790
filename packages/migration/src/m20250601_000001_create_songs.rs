use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Expr, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Songs {
    Table,
    Id,
    Name,
    Artist,
    Album,
    ReleaseDate,
    Genre,
    DurationInSeconds,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // songs
        manager
            .create_table(
                Table::create()
                    .table(Songs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Songs::Id)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Songs::Name).text().not_null())
                    .col(ColumnDef::new(Songs::Artist).text().not_null())
                    .col(ColumnDef::new(Songs::Album).text().not_null())
                    .col(ColumnDef::new(Songs::ReleaseDate).date().not_null())
                    .col(ColumnDef::new(Songs::Genre).text().not_null())
                    .col(
                        ColumnDef::new(Songs::DurationInSeconds)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Songs::CreatedAt)
                            .timestamp_with_time_zone()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Songs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(Songs::DurationInSeconds).gt(0))
                    .to_owned(),
            )
            .await?;

        // List filters hit genre and artist with equality predicates.
        manager
            .create_index(
                Index::create()
                    .name("ix_songs_genre")
                    .table(Songs::Table)
                    .col(Songs::Genre)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_songs_artist")
                    .table(Songs::Table)
                    .col(Songs::Artist)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop indexes before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_songs_artist")
                    .table(Songs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_songs_genre")
                    .table(Songs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Songs::Table).to_owned())
            .await?;

        Ok(())
    }
}
