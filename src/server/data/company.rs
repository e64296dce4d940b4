//! Company and location data repository
//!
//! Companies are read-only here; rows are provisioned by migrations.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::company::{Company, Location};

pub struct CompanyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every company with its locations, both ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Company>, DbErr> {
        let rows = entity::prelude::Company::find()
            .find_with_related(entity::prelude::Location)
            .order_by_asc(entity::company::Column::Id)
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(company, locations)| Company::from_entity(company, locations))
            .collect())
    }

    /// Finds a company by ID together with its locations
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DbErr> {
        let Some(company) = entity::prelude::Company::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let locations = company
            .find_related(entity::prelude::Location)
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Company::from_entity(company, locations)))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Company::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Returns the locations of a company ordered by ID
    pub async fn get_locations(&self, company_id: i32) -> Result<Vec<Location>, DbErr> {
        let entities = entity::prelude::Location::find()
            .filter(entity::location::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Location::from_entity).collect())
    }
}
