//! Create `invoices` table.
//! Each invoice belongs to exactly one company; deleting the company removes its invoices.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoices::Id))
                    .col(text(Invoices::CompCode))
                    .col(double(Invoices::Amt).check(Expr::col(Invoices::Amt).gt(0)))
                    .col(boolean(Invoices::Paid).default(false))
                    .col(date(Invoices::AddDate).default(Expr::current_date()))
                    .col(date_null(Invoices::PaidDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoices_comp_code")
                            .from(Invoices::Table, Invoices::CompCode)
                            .to(Companies::Table, Companies::Code)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Company detail reads filter invoices by comp_code
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_invoices_comp_code")
                    .table(Invoices::Table)
                    .col(Invoices::CompCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Invoices::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Invoices {
    Table,
    Id,
    CompCode,
    Amt,
    Paid,
    AddDate,
    PaidDate,
}

#[derive(DeriveIden)]
enum Companies { Table, Code }
