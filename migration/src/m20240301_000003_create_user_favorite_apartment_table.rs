use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000001_create_apartment_table::Apartment,
    m20240301_000002_create_apartment_user_table::ApartmentUser,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteApartment::Table)
                    .if_not_exists()
                    .col(pk_auto(UserFavoriteApartment::Id))
                    .col(integer(UserFavoriteApartment::UserId))
                    .col(integer(UserFavoriteApartment::ApartmentId))
                    .col(
                        timestamp_with_time_zone(UserFavoriteApartment::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(UserFavoriteApartment::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_apartment_user_id")
                            .from(UserFavoriteApartment::Table, UserFavoriteApartment::UserId)
                            .to(ApartmentUser::Table, ApartmentUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_apartment_apartment_id")
                            .from(
                                UserFavoriteApartment::Table,
                                UserFavoriteApartment::ApartmentId,
                            )
                            .to(Apartment::Table, Apartment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_favorite_apartments_user_apartment")
                    .table(UserFavoriteApartment::Table)
                    .col(UserFavoriteApartment::UserId)
                    .col(UserFavoriteApartment::ApartmentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavoriteApartment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFavoriteApartment {
    #[sea_orm(iden = "user_favorite_apartments")]
    Table,
    Id,
    UserId,
    ApartmentId,
    CreatedAt,
    UpdatedAt,
}
