//! Create `pokemon` table.
//! Names are stored lowercase; the unique index is what turns a second
//! "Pikachu" into a conflict.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pokemon::Table)
                    .if_not_exists()
                    .col(uuid(Pokemon::Id).primary_key())
                    .col(string_len(Pokemon::Name, 64).not_null())
                    .col(json_binary(Pokemon::Attributes).not_null())
                    .col(timestamp_with_time_zone(Pokemon::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Pokemon::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pokemon_name_unique")
                    .table(Pokemon::Table)
                    .col(Pokemon::Name)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pokemon::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pokemon {
    Table,
    Id,
    Name,
    Attributes,
    CreatedAt,
    UpdatedAt,
}
