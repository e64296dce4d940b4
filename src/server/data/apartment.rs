//! Apartment data repository for database operations
//!
//! Provides the `ApartmentRepository` for managing apartments in the database. Apartments
//! are soft-deleted: every read ignores rows whose `deleted_at` is set.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::apartment::{
    Apartment, ApartmentFilter, CreateApartmentParam, Pagination, UpdateApartmentParam,
};

/// Repository providing database operations for apartment management.
pub struct ApartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApartmentRepository<'a> {
    /// Creates a new ApartmentRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ApartmentRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new apartment
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the apartment data
    ///
    /// # Returns
    /// - `Ok(Apartment)` - The created apartment
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateApartmentParam) -> Result<Apartment, DbErr> {
        let now = Utc::now();
        let entity = entity::apartment::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            floor_area: ActiveValue::Set(param.floor_area),
            price_per_month: ActiveValue::Set(param.price_per_month),
            number_of_rooms: ActiveValue::Set(param.number_of_rooms),
            geolocation_lat: ActiveValue::Set(param.geolocation.lat),
            geolocation_long: ActiveValue::Set(param.geolocation.long),
            associated_realtor: ActiveValue::Set(param.associated_realtor),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Apartment::from_entity(entity))
    }

    /// Checks whether a live apartment already uses the given name
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Apartment::find()
            .filter(entity::apartment::Column::Name.eq(name))
            .filter(entity::apartment::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists live apartments ordered by ID
    ///
    /// Filter fields equal to zero are ignored, the others are equality filters.
    ///
    /// # Arguments
    /// - `pagination` - Limit and offset of the window to return
    /// - `filter` - Floor area, monthly price and room count filters
    ///
    /// # Returns
    /// - `Ok(Vec<Apartment>)` - Matching apartments, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        pagination: Pagination,
        filter: ApartmentFilter,
    ) -> Result<Vec<Apartment>, DbErr> {
        let mut query = entity::prelude::Apartment::find()
            .filter(entity::apartment::Column::DeletedAt.is_null());

        if filter.floor_area != 0.0 {
            query = query.filter(entity::apartment::Column::FloorArea.eq(filter.floor_area));
        }
        if filter.price_per_month != 0.0 {
            query = query
                .filter(entity::apartment::Column::PricePerMonth.eq(filter.price_per_month));
        }
        if filter.number_of_rooms != 0 {
            query =
                query.filter(entity::apartment::Column::NumberOfRooms.eq(filter.number_of_rooms));
        }

        let entities = query
            .order_by_asc(entity::apartment::Column::Id)
            .limit(pagination.limit)
            .offset(pagination.offset)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Apartment::from_entity).collect())
    }

    /// Finds a live apartment by ID
    ///
    /// # Returns
    /// - `Ok(Some(Apartment))` - The apartment exists and is not deleted
    /// - `Ok(None)` - No live apartment has this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Apartment>, DbErr> {
        let entity = self.find_live(id).await?;

        Ok(entity.map(Apartment::from_entity))
    }

    /// Applies the provided changes to a live apartment and bumps `updated_at`
    ///
    /// # Returns
    /// - `Ok(Some(Apartment))` - The updated apartment as stored
    /// - `Ok(None)` - No live apartment has this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateApartmentParam,
    ) -> Result<Option<Apartment>, DbErr> {
        let Some(entity) = self.find_live(id).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(floor_area) = param.floor_area {
            active.floor_area = ActiveValue::Set(floor_area);
        }
        if let Some(price_per_month) = param.price_per_month {
            active.price_per_month = ActiveValue::Set(price_per_month);
        }
        if let Some(number_of_rooms) = param.number_of_rooms {
            active.number_of_rooms = ActiveValue::Set(number_of_rooms);
        }
        if let Some(geolocation) = param.geolocation {
            active.geolocation_lat = ActiveValue::Set(geolocation.lat);
            active.geolocation_long = ActiveValue::Set(geolocation.long);
        }
        if let Some(realtor) = param.associated_realtor {
            active.associated_realtor = ActiveValue::Set(realtor);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    /// Soft-deletes an apartment by stamping `deleted_at`
    ///
    /// # Returns
    /// - `Ok(())` - The apartment was marked deleted (or did not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Apartment::update_many()
            .filter(entity::apartment::Column::Id.eq(id))
            .col_expr(
                entity::apartment::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    async fn find_live(&self, id: i32) -> Result<Option<entity::apartment::Model>, DbErr> {
        entity::prelude::Apartment::find_by_id(id)
            .filter(entity::apartment::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }
}
