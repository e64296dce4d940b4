use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_favorite_apartments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub apartment_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::apartment_user::Entity",
        from = "Column::UserId",
        to = "super::apartment_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ApartmentUser,
    #[sea_orm(
        belongs_to = "super::apartment::Entity",
        from = "Column::ApartmentId",
        to = "super::apartment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Apartment,
}

impl Related<super::apartment_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApartmentUser.def()
    }
}

impl Related<super::apartment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apartment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
