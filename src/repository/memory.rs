use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{EmployeeRepository, StoreError};
use crate::models::employee::{Employee, NewEmployee};
use crate::planner::{Column, FieldValue, UpdatePlan};

/// `employees` table kept in a map, with the same unique key on `emp_no`.
#[derive(Default)]
pub struct MemoryEmployeeRepository {
    state: Mutex<State>,
    writes: Mutex<usize>,
}

#[derive(Default)]
struct State {
    rows: BTreeMap<i32, Employee>,
    last_id: i32,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mutating statements that reached the table.
    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn record_write(&self) {
        *self.writes.lock().unwrap() += 1;
    }
}

fn unique_violation() -> StoreError {
    StoreError::UniqueViolation { constraint: Some("employees_emp_no_key".to_string()) }
}

fn emp_no_taken(rows: &BTreeMap<i32, Employee>, emp_no: &str, except: i32) -> bool {
    rows.values().any(|row| row.id != except && row.emp_no == emp_no)
}

fn apply_change(employee: &mut Employee, column: Column, value: &FieldValue) {
    match (column, value) {
        (Column::EmpNo, FieldValue::Text(v)) => employee.emp_no = v.clone(),
        (Column::EmpName, FieldValue::Text(v)) => employee.emp_name = v.clone(),
        (Column::AddressLine1, FieldValue::Text(v)) => employee.address_line1 = v.clone(),
        (Column::AddressLine2, FieldValue::Text(v)) => employee.address_line2 = Some(v.clone()),
        (Column::AddressLine3, FieldValue::Text(v)) => employee.address_line3 = Some(v.clone()),
        (Column::DateOfJoin, FieldValue::Timestamp(v)) => employee.date_of_join = *v,
        (Column::Status, FieldValue::Flag(v)) => employee.status = *v,
        (Column::Image, FieldValue::Text(v)) => employee.image = v.clone(),
        (column, value) => panic!("type mismatch for {}: {:?}", column.name(), value),
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.state.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, StoreError> {
        Ok(self.state.lock().unwrap().rows.get(&id).cloned())
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.state.lock().unwrap().rows.contains_key(&id))
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<i32, StoreError> {
        let mut state = self.state.lock().unwrap();
        if emp_no_taken(&state.rows, &employee.emp_no, 0) {
            return Err(unique_violation());
        }
        state.last_id += 1;
        let id = state.last_id;
        state.rows.insert(id, employee.clone().into_employee(id));
        drop(state);
        self.record_write();
        Ok(id)
    }

    async fn replace(&self, id: i32, employee: &NewEmployee) -> Result<u64, StoreError> {
        let mut state = self.state.lock().unwrap();
        if emp_no_taken(&state.rows, &employee.emp_no, id) {
            return Err(unique_violation());
        }
        let Some(row) = state.rows.get_mut(&id) else {
            return Ok(0);
        };
        *row = employee.clone().into_employee(id);
        drop(state);
        self.record_write();
        Ok(1)
    }

    async fn apply(&self, plan: &UpdatePlan) -> Result<u64, StoreError> {
        if plan.is_empty() {
            return Ok(0);
        }
        let mut state = self.state.lock().unwrap();
        for (column, value) in plan.changes() {
            if let (Column::EmpNo, FieldValue::Text(emp_no)) = (column, value) {
                if emp_no_taken(&state.rows, emp_no, plan.id()) {
                    return Err(unique_violation());
                }
            }
        }
        let Some(row) = state.rows.get_mut(&plan.id()) else {
            return Ok(0);
        };
        for (column, value) in plan.changes() {
            apply_change(row, *column, value);
        }
        drop(state);
        self.record_write();
        Ok(1)
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let removed = self.state.lock().unwrap().rows.remove(&id);
        if removed.is_none() {
            return Ok(0);
        }
        self.record_write();
        Ok(1)
    }
}

/// Fails every call the way a lost database connection would.
pub struct BrokenEmployeeRepository;

#[async_trait]
impl EmployeeRepository for BrokenEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Employee>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn exists(&self, _id: i32) -> Result<bool, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _employee: &NewEmployee) -> Result<i32, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn replace(&self, _id: i32, _employee: &NewEmployee) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn apply(&self, _plan: &UpdatePlan) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i32) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}
