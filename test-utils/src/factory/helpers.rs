//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an apartment user, an apartment, and a favorite linking the two.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, apartment, favorite))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_favorite_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::apartment_user::Model,
        entity::apartment::Model,
        entity::user_favorite_apartment::Model,
    ),
    DbErr,
> {
    let user = crate::factory::apartment_user::create_apartment_user(db).await?;
    let apartment = crate::factory::apartment::create_apartment(db).await?;
    let favorite =
        crate::factory::user_favorite_apartment::create_favorite(db, user.id, apartment.id)
            .await?;

    Ok((user, apartment, favorite))
}

/// Creates a company with the given number of locations.
///
/// # Returns
/// - `Ok((company, locations))` - The company and its locations in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_company_with_locations(
    db: &DatabaseConnection,
    locations: usize,
) -> Result<(entity::company::Model, Vec<entity::location::Model>), DbErr> {
    let company = crate::factory::company::create_company(db).await?;

    let mut created = Vec::with_capacity(locations);
    for _ in 0..locations {
        created.push(crate::factory::company::create_location(db, company.id).await?);
    }

    Ok((company, created))
}
