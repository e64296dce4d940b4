use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Apartment::Table)
                    .if_not_exists()
                    .col(pk_auto(Apartment::Id))
                    .col(string(Apartment::Name))
                    .col(text(Apartment::Description))
                    .col(double(Apartment::FloorArea))
                    .col(double(Apartment::PricePerMonth))
                    .col(integer(Apartment::NumberOfRooms))
                    .col(double(Apartment::GeolocationLat))
                    .col(double(Apartment::GeolocationLong))
                    .col(string(Apartment::AssociatedRealtor))
                    .col(
                        timestamp_with_time_zone(Apartment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Apartment::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Apartment::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_apartments_name")
                    .table(Apartment::Table)
                    .col(Apartment::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Apartment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Apartment {
    #[sea_orm(iden = "apartments")]
    Table,
    Id,
    Name,
    Description,
    FloorArea,
    PricePerMonth,
    NumberOfRooms,
    GeolocationLat,
    GeolocationLong,
    AssociatedRealtor,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
