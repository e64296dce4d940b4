use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmpCar::Table)
                    .if_not_exists()
                    .col(pk_auto(EmpCar::Id))
                    .col(string(EmpCar::EmpName))
                    .col(string(EmpCar::CarNumber))
                    .col(string(EmpCar::CarModel))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmpCar::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmpCar {
    #[sea_orm(iden = "emp_cars")]
    Table,
    Id,
    EmpName,
    CarNumber,
    CarModel,
}
