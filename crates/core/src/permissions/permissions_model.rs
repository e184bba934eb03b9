//! Domain models for permissions.

use serde::{Deserialize, Serialize};

/// Identity of the member a permission check is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caller {
    pub member_id: Option<i64>,
}

impl Caller {
    pub fn member(member_id: i64) -> Self {
        Self {
            member_id: Some(member_id),
        }
    }

    pub fn anonymous() -> Self {
        Self { member_id: None }
    }

    pub fn is_logged_in(&self) -> bool {
        self.member_id.is_some()
    }
}

/// A permission code the catalogue registers with the permission
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDefinition {
    pub code: &'static str,
    pub name: &'static str,
    pub help: &'static str,
    pub category: &'static str,
    pub sort: i32,
}

/// Outcome of a bulk enable/disable action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkActionResult {
    /// Records that were changed
    pub updated: Vec<i64>,
    /// Records left untouched because the caller may not edit them
    pub skipped: Vec<i64>,
}
