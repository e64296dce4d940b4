//! Employee car factory for creating test car entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employee cars with customizable fields.
pub struct EmpCarFactory<'a> {
    db: &'a DatabaseConnection,
    emp_name: String,
    car_number: String,
    car_model: String,
}

impl<'a> EmpCarFactory<'a> {
    /// Creates a new EmpCarFactory with unique employee name and car number.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            emp_name: format!("employee {}", id),
            car_number: format!("mp04-{:04}", id),
            car_model: "swift".to_string(),
        }
    }

    pub fn emp_name(mut self, emp_name: impl Into<String>) -> Self {
        self.emp_name = emp_name.into();
        self
    }

    pub fn car_number(mut self, car_number: impl Into<String>) -> Self {
        self.car_number = car_number.into();
        self
    }

    pub fn car_model(mut self, car_model: impl Into<String>) -> Self {
        self.car_model = car_model.into();
        self
    }

    /// Builds and inserts the car entity into the database.
    pub async fn build(self) -> Result<entity::emp_car::Model, DbErr> {
        entity::emp_car::ActiveModel {
            emp_name: ActiveValue::Set(self.emp_name),
            car_number: ActiveValue::Set(self.car_number),
            car_model: ActiveValue::Set(self.car_model),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employee car with default values.
pub async fn create_emp_car(db: &DatabaseConnection) -> Result<entity::emp_car::Model, DbErr> {
    EmpCarFactory::new(db).build().await
}
