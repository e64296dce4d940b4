use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "emp_cars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub emp_name: String,
    pub car_number: String,
    pub car_model: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
