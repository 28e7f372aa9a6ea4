use crate::modules::students::controller::{
    create_student, get_student, get_students, set_student_status, update_student,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students).post(create_student))
        .route("/{id}", get(get_student).put(update_student))
        .route("/{id}/status", patch(set_student_status))
}
