use sea_orm_migration::{prelude::*, schema::*};

use super::m20240301_000005_create_company_table::Company;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::Id))
                    .col(string(Location::Name))
                    .col(boolean(Location::Active).default(true))
                    .col(string(Location::Address))
                    .col(integer(Location::CompanyId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_company_id")
                            .from(Location::Table, Location::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Location {
    #[sea_orm(iden = "locations")]
    Table,
    Id,
    Name,
    Active,
    Address,
    CompanyId,
}
