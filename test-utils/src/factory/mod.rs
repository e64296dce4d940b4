//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key relationships through the
//! helpers in `helpers`.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::apartment_user::create_apartment_user(&db).await?;
//!     let apartment = factory::apartment::create_apartment(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, apartment, favorite) =
//!         factory::helpers::create_favorite_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let apartment = factory::apartment::ApartmentFactory::new(&db)
//!     .name("Lake View")
//!     .number_of_rooms(3)
//!     .build()
//!     .await?;
//! ```

pub mod apartment;
pub mod apartment_user;
pub mod company;
pub mod emp_car;
pub mod helpers;
pub mod user_favorite_apartment;

pub use apartment::create_apartment;
pub use apartment_user::create_apartment_user;
pub use company::{create_company, create_location};
pub use emp_car::create_emp_car;
pub use user_favorite_apartment::create_favorite;
