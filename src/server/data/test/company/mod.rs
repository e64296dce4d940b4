use crate::server::data::company::CompanyRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get;
