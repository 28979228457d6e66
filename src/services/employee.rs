use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeePatch, NewEmployee};
use crate::planner::plan_partial_update;
use crate::repository::{EmployeeRepository, StoreError};
use crate::utils::validation::validate_payload;

pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Employee with ID {} not found", id))
}

fn store_failure(context: String, err: StoreError) -> AppError {
    error!("{}: {:?}", context, err);
    AppError::unexpected(context, err)
}

fn duplicate_emp_no(emp_no: &str, err: StoreError) -> AppError {
    warn!("Duplicate employee number detected: {} ({})", emp_no, err);
    AppError::Conflict(format!("Employee number {} already exists", emp_no))
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        EmployeeService { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<Employee>, AppError> {
        self.repo
            .find_all()
            .await
            .map_err(|err| store_failure("Error occurred while retrieving employees".to_string(), err))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Employee, AppError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|err| store_failure(format!("Error occurred while retrieving employee with ID {}", id), err))?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, employee: &NewEmployee) -> Result<i32, AppError> {
        validate_payload(employee)?;

        let id = self.repo.insert(employee).await.map_err(|err| match err {
            StoreError::UniqueViolation { .. } => duplicate_emp_no(&employee.emp_no, err),
            err => store_failure("Error occurred while creating employee".to_string(), err),
        })?;

        info!("Created employee {} ({})", id, employee.emp_no);
        Ok(id)
    }

    pub async fn replace(&self, id: i32, employee: &NewEmployee) -> Result<(), AppError> {
        self.ensure_exists(id, "updating").await?;
        validate_payload(employee)?;

        let rows = self.repo.replace(id, employee).await.map_err(|err| match err {
            StoreError::UniqueViolation { .. } => duplicate_emp_no(&employee.emp_no, err),
            err => store_failure(format!("Error occurred while updating employee with ID {}", id), err),
        })?;
        if rows == 0 {
            return Err(not_found(id));
        }

        info!("Replaced employee {}", id);
        Ok(())
    }

    /// Writes only the supplied fields. An empty patch touches nothing.
    pub async fn partial_update(&self, id: i32, patch: &EmployeePatch) -> Result<(), AppError> {
        self.ensure_exists(id, "patching").await?;

        let plan = plan_partial_update(id, patch);
        if plan.is_empty() {
            debug!("Empty patch for employee {}, nothing to write", id);
            return Ok(());
        }

        let rows = self.repo.apply(&plan).await.map_err(|err| match err {
            StoreError::UniqueViolation { .. } => {
                duplicate_emp_no(patch.emp_no.as_deref().unwrap_or_default(), err)
            }
            err => store_failure(format!("Error updating employee with ID {}", id), err),
        })?;
        if rows == 0 {
            let context = format!("Patch of employee with ID {} matched no rows after existence check", id);
            error!("{}", context);
            return Err(AppError::Unexpected { context, source: None });
        }

        info!("Patched {} field(s) of employee {}", plan.changes().len(), plan.id());
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.ensure_exists(id, "deleting").await?;

        let rows = self
            .repo
            .delete(id)
            .await
            .map_err(|err| store_failure(format!("Error occurred while deleting employee with ID {}", id), err))?;
        if rows == 0 {
            return Err(not_found(id));
        }

        info!("Deleted employee {}", id);
        Ok(())
    }

    async fn ensure_exists(&self, id: i32, action: &str) -> Result<(), AppError> {
        let exists = self.repo.exists(id).await.map_err(|err| {
            store_failure(format!("Error occurred while {} employee with ID {}", action, id), err)
        })?;
        if !exists {
            return Err(not_found(id));
        }
        Ok(())
    }
}
