pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_apartment_table;
mod m20240301_000002_create_apartment_user_table;
mod m20240301_000003_create_user_favorite_apartment_table;
mod m20240301_000004_create_emp_car_table;
mod m20240301_000005_create_company_table;
mod m20240301_000006_create_location_table;
mod m20240302_000007_seed_company_locations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_apartment_table::Migration),
            Box::new(m20240301_000002_create_apartment_user_table::Migration),
            Box::new(m20240301_000003_create_user_favorite_apartment_table::Migration),
            Box::new(m20240301_000004_create_emp_car_table::Migration),
            Box::new(m20240301_000005_create_company_table::Migration),
            Box::new(m20240301_000006_create_location_table::Migration),
            Box::new(m20240302_000007_seed_company_locations::Migration),
        ]
    }
}
