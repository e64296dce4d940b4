pub use super::apartment::Entity as Apartment;
pub use super::apartment_user::Entity as ApartmentUser;
pub use super::company::Entity as Company;
pub use super::emp_car::Entity as EmpCar;
pub use super::location::Entity as Location;
pub use super::user_favorite_apartment::Entity as UserFavoriteApartment;
