use crate::server::{
    data::apartment::ApartmentRepository,
    model::apartment::{
        ApartmentFilter, CreateApartmentParam, Geolocation, Pagination, UpdateApartmentParam,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod soft_delete;
mod update;

fn window(limit: u64, offset: u64) -> Pagination {
    Pagination { limit, offset }
}
