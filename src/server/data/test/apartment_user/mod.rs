use crate::server::{
    data::apartment_user::ApartmentUserRepository,
    model::apartment_user::{
        ApartmentUserFilter, CreateApartmentUserParam, UpdateApartmentUserParam,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_filtered;
mod update;
