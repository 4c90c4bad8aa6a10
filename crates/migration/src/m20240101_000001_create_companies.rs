//! Create `companies` table.
//!
//! `code` is the natural primary key and is never updated.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(text(Companies::Code).primary_key())
                    .col(text(Companies::Name).unique_key())
                    .col(text(Companies::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Companies::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Companies { Table, Code, Name, Description }
