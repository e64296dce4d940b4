use crate::server::{
    error::AppError,
    model::{
        apartment::{
            ApartmentFilter, CreateApartmentParam, Geolocation, Pagination,
            UpdateApartmentParam,
        },
        apartment_user::{ApartmentUserFilter, CreateApartmentUserParam},
        car::{CarPage, CreateCarParam},
    },
    service::{
        apartment::ApartmentService, apartment_user::ApartmentUserService, car::CarService,
        company::CompanyService, favorite::FavoriteService,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
