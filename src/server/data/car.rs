//! Employee car data repository

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::car::{Car, CarPage, CreateCarParam, UpdateCarParam};

pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCarParam) -> Result<Car, DbErr> {
        let entity = entity::emp_car::ActiveModel {
            emp_name: ActiveValue::Set(param.emp_name),
            car_number: ActiveValue::Set(param.car_number),
            car_model: ActiveValue::Set(param.car_model),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Car::from_entity(entity))
    }

    /// Checks whether any car matches the employee name or the car number,
    /// ignoring case
    pub async fn name_or_number_exists(
        &self,
        emp_name: &str,
        car_number: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::EmpCar::find()
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::emp_car::Column::EmpName)))
                            .eq(emp_name.to_lowercase()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::emp_car::Column::CarNumber)))
                            .eq(car_number.to_lowercase()),
                    ),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists cars ordered by employee name, descending
    pub async fn get_paginated(&self, page: CarPage) -> Result<Vec<Car>, DbErr> {
        let entities = entity::prelude::EmpCar::find()
            .order_by_desc(entity::emp_car::Column::EmpName)
            .limit(page.limit)
            .offset(page.offset())
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Car::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, DbErr> {
        let entity = entity::prelude::EmpCar::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Car::from_entity))
    }

    /// Applies the provided changes to a car
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - The updated car as stored
    /// - `Ok(None)` - No car has this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateCarParam) -> Result<Option<Car>, DbErr> {
        let Some(entity) = entity::prelude::EmpCar::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(emp_name) = param.emp_name {
            active.emp_name = ActiveValue::Set(emp_name);
        }
        if let Some(car_number) = param.car_number {
            active.car_number = ActiveValue::Set(car_number);
        }
        if let Some(car_model) = param.car_model {
            active.car_model = ActiveValue::Set(car_model);
        }

        // Nothing to write when no field changed; the update would be an empty SET.
        if active.is_changed() {
            active.update(self.db).await?;
        }

        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::EmpCar::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
