//! Favorite factory linking apartment users to apartments.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite row for the given user and apartment.
///
/// Both referenced rows must already exist.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the apartment user
/// - `apartment_id` - ID of the apartment
///
/// # Returns
/// - `Ok(entity::user_favorite_apartment::Model)` - Created favorite
/// - `Err(DbErr)` - Database error during insert
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    apartment_id: i32,
) -> Result<entity::user_favorite_apartment::Model, DbErr> {
    let now = Utc::now();
    entity::user_favorite_apartment::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        apartment_id: ActiveValue::Set(apartment_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
