//! Apartment user factory for creating test apartment user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test apartment users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::apartment_user::ApartmentUserFactory;
///
/// let user = ApartmentUserFactory::new(&db)
///     .name("karan")
///     .user_email("karan@example.com")
///     .build()
///     .await?;
/// ```
pub struct ApartmentUserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    user_email: String,
    user_address: String,
    deleted: bool,
}

impl<'a> ApartmentUserFactory<'a> {
    /// Creates a new ApartmentUserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"user{id}"` where id is auto-incremented
    /// - user_email: `"user{id}@example.com"`
    /// - user_address: `"kolar"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("user{}", id),
            user_email: format!("user{}@example.com", id),
            user_address: "kolar".to_string(),
            deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn user_email(mut self, user_email: impl Into<String>) -> Self {
        self.user_email = user_email.into();
        self
    }

    pub fn user_address(mut self, user_address: impl Into<String>) -> Self {
        self.user_address = user_address.into();
        self
    }

    /// Marks the user as soft-deleted on insert.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the apartment user entity into the database.
    pub async fn build(self) -> Result<entity::apartment_user::Model, DbErr> {
        let now = Utc::now();
        entity::apartment_user::ActiveModel {
            name: ActiveValue::Set(self.name),
            user_email: ActiveValue::Set(self.user_email),
            user_address: ActiveValue::Set(self.user_address),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an apartment user with default values.
pub async fn create_apartment_user(
    db: &DatabaseConnection,
) -> Result<entity::apartment_user::Model, DbErr> {
    ApartmentUserFactory::new(db).build().await
}
