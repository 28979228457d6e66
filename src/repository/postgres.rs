use async_trait::async_trait;
use sqlx::PgPool;

use super::{EmployeeRepository, StoreError};
use crate::models::employee::{Employee, NewEmployee};
use crate::planner::UpdatePlan;

const SELECT_EMPLOYEE: &str = "SELECT id, emp_no, emp_name, address_line1, address_line2, address_line3, \
     date_of_join, status, image FROM employees";

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeRepository { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(&format!("{} ORDER BY id", SELECT_EMPLOYEE))
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(&format!("{} WHERE id = $1", SELECT_EMPLOYEE))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<i32, StoreError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO employees (emp_no, emp_name, address_line1, address_line2, address_line3, date_of_join, status, image) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
        )
        .bind(&employee.emp_no)
        .bind(&employee.emp_name)
        .bind(&employee.address_line1)
        .bind(&employee.address_line2)
        .bind(&employee.address_line3)
        .bind(employee.date_of_join)
        .bind(employee.status)
        .bind(&employee.image)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn replace(&self, id: i32, employee: &NewEmployee) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE employees SET emp_no = $1, emp_name = $2, address_line1 = $3, address_line2 = $4, \
             address_line3 = $5, date_of_join = $6, status = $7, image = $8 WHERE id = $9",
        )
        .bind(&employee.emp_no)
        .bind(&employee.emp_name)
        .bind(&employee.address_line1)
        .bind(&employee.address_line2)
        .bind(&employee.address_line3)
        .bind(employee.date_of_join)
        .bind(employee.status)
        .bind(&employee.image)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn apply(&self, plan: &UpdatePlan) -> Result<u64, StoreError> {
        let Some(mut query) = plan.to_query() else {
            return Ok(0);
        };
        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
