//! Company and location factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active company named `"Company {id}"`.
///
/// # Returns
/// - `Ok(entity::company::Model)` - Created company
/// - `Err(DbErr)` - Database error during insert
pub async fn create_company(db: &DatabaseConnection) -> Result<entity::company::Model, DbErr> {
    let now = Utc::now();
    entity::company::ActiveModel {
        name: ActiveValue::Set(format!("Company {}", next_id())),
        active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an active location belonging to the provided company.
///
/// # Arguments
/// - `db` - Database connection
/// - `company_id` - ID of the owning company
pub async fn create_location(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::location::Model, DbErr> {
    let id = next_id();
    entity::location::ActiveModel {
        name: ActiveValue::Set(format!("Location {}", id)),
        active: ActiveValue::Set(true),
        address: ActiveValue::Set(format!("{} Main Road", id)),
        company_id: ActiveValue::Set(company_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
