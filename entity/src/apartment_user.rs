use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "apartment_users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub user_email: String,
    pub user_address: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_favorite_apartment::Entity")]
    UserFavoriteApartment,
}

impl Related<super::user_favorite_apartment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteApartment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
