//! HTTP handlers for the student endpoints.
//!
//! Each handler translates one request into exactly one [`StudentService`]
//! call and returns the service's result as JSON. Failures are not handled
//! here; they propagate as [`AppError`] responses.

use crate::middleware::auth::AuthUser;
use crate::modules::students::model::{
    CreateStudentDto, MessageResponse, SetStudentStatus, Student, StudentListResponse,
    StudentQuery, StudentStatusDto, UpdateStudentDto,
};
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/students",
    params(
        StudentQuery
    ),
    responses(
        (status = 200, description = "List of students", body = StudentListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    Query(query): Query<StudentQuery>,
) -> Result<Json<StudentListResponse>, AppError> {
    let students = state.students.get_all_students(query).await?;
    Ok(Json(StudentListResponse { students }))
}

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "Student created successfully", body = MessageResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    Json(dto): Json<CreateStudentDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = state.students.add_new_student(dto).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Student>, AppError> {
    let student = state.students.get_student_detail(id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated successfully", body = MessageResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateStudentDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = state.students.update_student(id, dto).await?;
    Ok(Json(response))
}

#[utoipa::path(
    patch,
    path = "/api/students/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    request_body = StudentStatusDto,
    responses(
        (status = 200, description = "Student status changed successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn set_student_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Json(dto): Json<StudentStatusDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let reviewer_id = auth_user.user_id()?;

    let response = state
        .students
        .set_student_status(SetStudentStatus {
            user_id: id,
            reviewer_id,
            status: dto.status,
        })
        .await?;

    Ok(Json(response))
}
