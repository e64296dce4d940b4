use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApartmentUser::Table)
                    .if_not_exists()
                    .col(pk_auto(ApartmentUser::Id))
                    .col(string(ApartmentUser::Name))
                    .col(string(ApartmentUser::UserEmail))
                    .col(string(ApartmentUser::UserAddress))
                    .col(
                        timestamp_with_time_zone(ApartmentUser::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ApartmentUser::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(ApartmentUser::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApartmentUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApartmentUser {
    #[sea_orm(iden = "apartment_users")]
    Table,
    Id,
    Name,
    UserEmail,
    UserAddress,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
