//! Student domain models and DTOs.
//!
//! Request/response shapes for the student endpoints plus the student entity
//! itself. Validation attributes live here; enforcement belongs to the
//! service layer.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A student's system access status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "student_status", rename_all = "UPPERCASE")]
pub enum StudentStatus {
    Active,
    Inactive,
}

/// A student record.
///
/// The backing row also carries a password hash; it is deliberately absent
/// here so it can never be serialized into a response.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub roll: Option<i32>,
    pub status: StudentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Query parameters for filtering and paginating the student list.
///
/// Handlers pass these through untouched; clamping happens in the service.
#[derive(Debug, Clone, PartialEq, Deserialize, IntoParams)]
pub struct StudentQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// Substring match on the student's name
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub roll: Option<i32>,
}

impl StudentQuery {
    /// Page number, defaulting to 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, defaulting to 10 and clamped between 1 and 100.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

/// DTO for creating a new student.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(max = 50))]
    pub class_name: Option<String>,
    #[validate(length(max = 50))]
    pub section: Option<String>,
    pub roll: Option<i32>,
}

/// DTO for updating an existing student.
///
/// All fields are optional; only provided fields are written.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema, Validate)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub class_name: Option<String>,
    #[validate(length(max = 50))]
    pub section: Option<String>,
    pub roll: Option<i32>,
}

/// Request body for the status endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StudentStatusDto {
    pub status: StudentStatus,
}

/// A status change as handed to the service: target student, the reviewer
/// who made the call, and the requested status.
#[derive(Debug, Clone, PartialEq)]
pub struct SetStudentStatus {
    pub user_id: Uuid,
    pub reviewer_id: Uuid,
    pub status: StudentStatus,
}

/// Confirmation envelope returned by mutating operations.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response envelope for the list endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
}
