//! Turns a sparse [`EmployeePatch`] into the minimal column update for one row.
//!
//! Only columns the caller supplied end up in the plan. Values are never
//! checked against the create/replace rules here: a patch may set any field to
//! any value its type allows, including an empty string.

use chrono::NaiveDateTime;
use sqlx::{Postgres, QueryBuilder};

use crate::models::employee::EmployeePatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    EmpNo,
    EmpName,
    AddressLine1,
    AddressLine2,
    AddressLine3,
    DateOfJoin,
    Status,
    Image,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::EmpNo => "emp_no",
            Column::EmpName => "emp_name",
            Column::AddressLine1 => "address_line1",
            Column::AddressLine2 => "address_line2",
            Column::AddressLine3 => "address_line3",
            Column::DateOfJoin => "date_of_join",
            Column::Status => "status",
            Column::Image => "image",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Timestamp(NaiveDateTime),
    Flag(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePlan {
    id: i32,
    changes: Vec<(Column, FieldValue)>,
}

pub fn plan_partial_update(id: i32, patch: &EmployeePatch) -> UpdatePlan {
    let mut changes = Vec::new();

    let texts = [
        (Column::EmpNo, &patch.emp_no),
        (Column::EmpName, &patch.emp_name),
        (Column::AddressLine1, &patch.address_line1),
        (Column::AddressLine2, &patch.address_line2),
        (Column::AddressLine3, &patch.address_line3),
    ];
    for (column, value) in texts {
        if let Some(value) = value {
            changes.push((column, FieldValue::Text(value.clone())));
        }
    }
    if let Some(date_of_join) = patch.date_of_join {
        changes.push((Column::DateOfJoin, FieldValue::Timestamp(date_of_join)));
    }
    if let Some(status) = patch.status {
        changes.push((Column::Status, FieldValue::Flag(status)));
    }
    if let Some(image) = &patch.image {
        changes.push((Column::Image, FieldValue::Text(image.clone())));
    }

    UpdatePlan { id, changes }
}

impl UpdatePlan {
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn changes(&self) -> &[(Column, FieldValue)] {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// A single `UPDATE ... WHERE id = $n` with every value bound, or `None`
    /// when there is nothing to write.
    pub fn to_query(&self) -> Option<QueryBuilder<'static, Postgres>> {
        if self.is_empty() {
            return None;
        }

        let mut query = QueryBuilder::new("UPDATE employees SET ");
        let mut separated = query.separated(", ");
        for (column, value) in &self.changes {
            separated.push(format!("{} = ", column.name()));
            match value {
                FieldValue::Text(text) => separated.push_bind_unseparated(text.clone()),
                FieldValue::Timestamp(ts) => separated.push_bind_unseparated(*ts),
                FieldValue::Flag(flag) => separated.push_bind_unseparated(*flag),
            };
        }
        query.push(" WHERE id = ");
        query.push_bind(self.id);
        Some(query)
    }
}
