use async_trait::async_trait;
use thiserror::Error;

use crate::models::employee::{Employee, NewEmployee};
use crate::planner::UpdatePlan;

pub mod postgres;
#[cfg(test)]
pub mod memory;

pub use postgres::PgEmployeeRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {}", .constraint.as_deref().unwrap_or("unknown"))]
    UniqueViolation { constraint: Option<String> },
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::UniqueViolation {
                    constraint: db_err.constraint().map(str::to_string),
                };
            }
        }
        StoreError::Database(err)
    }
}

/// Row-level access to the `employees` table. Mutations report how many rows
/// they touched so callers can tell a vanished row from a successful write.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, StoreError>;
    async fn exists(&self, id: i32) -> Result<bool, StoreError>;
    async fn insert(&self, employee: &NewEmployee) -> Result<i32, StoreError>;
    async fn replace(&self, id: i32, employee: &NewEmployee) -> Result<u64, StoreError>;
    async fn apply(&self, plan: &UpdatePlan) -> Result<u64, StoreError>;
    async fn delete(&self, id: i32) -> Result<u64, StoreError>;
}
