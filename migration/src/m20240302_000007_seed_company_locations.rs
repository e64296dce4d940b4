use sea_orm_migration::{
    prelude::*,
    sea_orm::{ConnectionTrait, DbBackend},
};

use super::{
    m20240301_000005_create_company_table::Company,
    m20240301_000006_create_location_table::Location,
};

const SEED_COMPANY_ID: i32 = 1;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let company = Query::insert()
            .into_table(Company::Table)
            .columns([Company::Id, Company::Name, Company::Active])
            .values_panic([SEED_COMPANY_ID.into(), "Rental HQ".into(), true.into()])
            .to_owned();
        manager.exec_stmt(company).await?;

        let locations = Query::insert()
            .into_table(Location::Table)
            .columns([
                Location::Name,
                Location::Active,
                Location::Address,
                Location::CompanyId,
            ])
            .values_panic([
                "Kolar".into(),
                true.into(),
                "Kolar Road 1".into(),
                SEED_COMPANY_ID.into(),
            ])
            .values_panic([
                "Arera".into(),
                true.into(),
                "Arera Colony 12".into(),
                SEED_COMPANY_ID.into(),
            ])
            .to_owned();
        manager.exec_stmt(locations).await?;

        // Explicit ids leave the serial behind on Postgres.
        if manager.get_database_backend() == DbBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared(
                    "SELECT setval(pg_get_serial_sequence('companies', 'id'), (SELECT MAX(id) FROM companies))",
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let locations = Query::delete()
            .from_table(Location::Table)
            .and_where(Expr::col(Location::CompanyId).eq(SEED_COMPANY_ID))
            .to_owned();
        manager.exec_stmt(locations).await?;

        let company = Query::delete()
            .from_table(Company::Table)
            .and_where(Expr::col(Company::Id).eq(SEED_COMPANY_ID))
            .to_owned();
        manager.exec_stmt(company).await
    }
}
