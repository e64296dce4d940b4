use crate::server::{
    data::car::CarRepository,
    model::car::{CarPage, CreateCarParam, UpdateCarParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;
