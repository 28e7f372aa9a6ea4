use async_trait::async_trait;
use axum::Router;
use axum::http::StatusCode;
use chrono::Utc;
use rollbook::config::cors::CorsConfig;
use rollbook::config::jwt::JwtConfig;
use rollbook::modules::students::model::{
    CreateStudentDto, MessageResponse, SetStudentStatus, Student, StudentQuery, StudentStatus,
    UpdateStudentDto,
};
use rollbook::modules::students::service::StudentService;
use rollbook::router::init_router;
use rollbook::state::AppState;
use rollbook::utils::errors::AppError;
use rollbook::utils::jwt::create_access_token;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// One recorded invocation of the service boundary.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum ServiceCall {
    GetAllStudents(StudentQuery),
    AddNewStudent(CreateStudentDto),
    GetStudentDetail(Uuid),
    UpdateStudent(Uuid, UpdateStudentDto),
    SetStudentStatus(SetStudentStatus),
}

/// Recording [`StudentService`] used to pin the handler-to-service contract.
///
/// Every invocation is recorded; results (or a failure) are configured per
/// test.
pub struct MockStudentService {
    calls: Mutex<Vec<ServiceCall>>,
    students: Vec<Student>,
    detail: Option<Student>,
    message: MessageResponse,
    fail_with: Option<(StatusCode, String)>,
}

#[allow(dead_code)]
impl MockStudentService {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            students: Vec::new(),
            detail: None,
            message: MessageResponse {
                message: "ok".to_string(),
            },
            fail_with: None,
        }
    }

    pub fn with_students(mut self, students: Vec<Student>) -> Self {
        self.students = students;
        self
    }

    pub fn with_detail(mut self, student: Student) -> Self {
        self.detail = Some(student);
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = MessageResponse {
            message: message.to_string(),
        };
        self
    }

    pub fn failing(mut self, status: StatusCode, message: &str) -> Self {
        self.fail_with = Some((status, message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ServiceCall) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);
        match &self.fail_with {
            Some((status, message)) => {
                Err(AppError::new(*status, anyhow::anyhow!(message.clone())))
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StudentService for MockStudentService {
    async fn get_all_students(&self, query: StudentQuery) -> Result<Vec<Student>, AppError> {
        self.record(ServiceCall::GetAllStudents(query))?;
        Ok(self.students.clone())
    }

    async fn add_new_student(&self, dto: CreateStudentDto) -> Result<MessageResponse, AppError> {
        self.record(ServiceCall::AddNewStudent(dto))?;
        Ok(self.message.clone())
    }

    async fn get_student_detail(&self, id: Uuid) -> Result<Student, AppError> {
        self.record(ServiceCall::GetStudentDetail(id))?;
        self.detail
            .clone()
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))
    }

    async fn update_student(
        &self,
        id: Uuid,
        dto: UpdateStudentDto,
    ) -> Result<MessageResponse, AppError> {
        self.record(ServiceCall::UpdateStudent(id, dto))?;
        Ok(self.message.clone())
    }

    async fn set_student_status(
        &self,
        request: SetStudentStatus,
    ) -> Result<MessageResponse, AppError> {
        self.record(ServiceCall::SetStudentStatus(request))?;
        Ok(self.message.clone())
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app(service: Arc<MockStudentService>) -> Router {
    let state = AppState {
        students: service,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub fn auth_token_for(reviewer_id: Uuid) -> String {
    create_access_token(reviewer_id, "reviewer@example.com", &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn sample_student(id: Uuid, name: &str, email: &str) -> Student {
    let now = Utc::now();
    Student {
        id,
        name: name.to_string(),
        email: email.to_string(),
        class_name: Some("10".to_string()),
        section: Some("A".to_string()),
        roll: Some(7),
        status: StudentStatus::Active,
        created_at: now,
        updated_at: now,
    }
}
