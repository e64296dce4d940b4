//! Apartment factory for creating test apartment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test apartments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::apartment::ApartmentFactory;
///
/// let apartment = ApartmentFactory::new(&db)
///     .name("Lake View")
///     .price_per_month(12000.0)
///     .build()
///     .await?;
/// ```
pub struct ApartmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    floor_area: f64,
    price_per_month: f64,
    number_of_rooms: i32,
    lat: f64,
    long: f64,
    associated_realtor: String,
    deleted: bool,
}

impl<'a> ApartmentFactory<'a> {
    /// Creates a new ApartmentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Apartment {id}"` where id is auto-incremented
    /// - floor_area: `700.0`, price_per_month: `10000.0`, number_of_rooms: `3`
    /// - not soft-deleted
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Apartment {}", id),
            description: "Two balconies".to_string(),
            floor_area: 700.0,
            price_per_month: 10000.0,
            number_of_rooms: 3,
            lat: 23.2,
            long: 77.4,
            associated_realtor: "rahul".to_string(),
            deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn floor_area(mut self, floor_area: f64) -> Self {
        self.floor_area = floor_area;
        self
    }

    pub fn price_per_month(mut self, price_per_month: f64) -> Self {
        self.price_per_month = price_per_month;
        self
    }

    pub fn number_of_rooms(mut self, number_of_rooms: i32) -> Self {
        self.number_of_rooms = number_of_rooms;
        self
    }

    pub fn associated_realtor(mut self, realtor: impl Into<String>) -> Self {
        self.associated_realtor = realtor.into();
        self
    }

    /// Marks the apartment as soft-deleted on insert.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the apartment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::apartment::Model)` - Created apartment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::apartment::Model, DbErr> {
        let now = Utc::now();
        entity::apartment::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            floor_area: ActiveValue::Set(self.floor_area),
            price_per_month: ActiveValue::Set(self.price_per_month),
            number_of_rooms: ActiveValue::Set(self.number_of_rooms),
            geolocation_lat: ActiveValue::Set(self.lat),
            geolocation_long: ActiveValue::Set(self.long),
            associated_realtor: ActiveValue::Set(self.associated_realtor),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an apartment with default values.
///
/// Shorthand for `ApartmentFactory::new(db).build().await`.
pub async fn create_apartment(db: &DatabaseConnection) -> Result<entity::apartment::Model, DbErr> {
    ApartmentFactory::new(db).build().await
}
