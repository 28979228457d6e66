use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::datetime;
use crate::utils::validation::{validate_not_blank, validate_not_default_date};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub emp_no: String,
    pub emp_name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub date_of_join: NaiveDateTime,
    pub status: bool,
    pub image: String,
}

/// Full representation accepted by create and replace. Missing required
/// fields deserialize to their defaults and are rejected by validation.
#[derive(Deserialize, Serialize, Validate, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub emp_no: String,
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub emp_name: String,
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub address_line3: Option<String>,
    #[serde(default, deserialize_with = "datetime::deserialize")]
    #[validate(custom = "validate_not_default_date")]
    pub date_of_join: NaiveDateTime,
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    #[validate(custom = "validate_not_blank")]
    pub image: String,
}

impl NewEmployee {
    pub fn into_employee(self, id: i32) -> Employee {
        Employee {
            id,
            emp_no: self.emp_no,
            emp_name: self.emp_name,
            address_line1: self.address_line1,
            address_line2: self.address_line2,
            address_line3: self.address_line3,
            date_of_join: self.date_of_join,
            status: self.status,
            image: self.image,
        }
    }
}

/// Sparse change set. `None` (field absent or `null`) leaves the column as is;
/// `Some` carries the new value even when it is `false` or an empty string.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default)]
    pub emp_no: Option<String>,
    #[serde(default)]
    pub emp_name: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub address_line3: Option<String>,
    #[serde(default, deserialize_with = "datetime::deserialize_option")]
    pub date_of_join: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub image: Option<String>,
}
