use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "apartments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub floor_area: f64,
    #[sea_orm(column_type = "Double")]
    pub price_per_month: f64,
    pub number_of_rooms: i32,
    #[sea_orm(column_type = "Double")]
    pub geolocation_lat: f64,
    #[sea_orm(column_type = "Double")]
    pub geolocation_long: f64,
    pub associated_realtor: String,
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
