use sea_orm::DatabaseConnection;

use crate::server::{
    data::company::CompanyRepository,
    error::AppError,
    model::company::{Company, Location},
};

pub const COMPANY_NOT_FOUND: &str = "company Id not exist.";

pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Company>, AppError> {
        Ok(CompanyRepository::new(self.db).get_all().await?)
    }

    pub async fn view(&self, id: i32) -> Result<Company, AppError> {
        CompanyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(COMPANY_NOT_FOUND.to_string()))
    }

    /// Returns the locations of an existing company
    pub async fn locations(&self, company_id: i32) -> Result<Vec<Location>, AppError> {
        let repo = CompanyRepository::new(self.db);

        if !repo.exists(company_id).await? {
            return Err(AppError::NotFound(COMPANY_NOT_FOUND.to_string()));
        }

        Ok(repo.get_locations(company_id).await?)
    }
}
