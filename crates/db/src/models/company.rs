//! Company entity model and DTOs.

use gameportal_core::patch::double_option;
use gameportal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A company row from the `companies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Company {
    pub company_id: DbId,
    pub name: String,
    pub founded_year: Option<i32>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new company.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompany {
    pub name: String,
    pub founded_year: Option<i32>,
    pub country: Option<String>,
    pub website: Option<String>,
}

/// DTO for updating an existing company. Nullable columns can be cleared
/// with an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompany {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub founded_year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub country: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub website: Option<Option<String>>,
}
