use crate::modules::students::model::{
    CreateStudentDto, MessageResponse, SetStudentStatus, Student, StudentQuery, UpdateStudentDto,
};
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;
use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};
use uuid::Uuid;
use validator::Validate;

const STUDENT_COLUMNS: &str =
    "id, name, email, class_name, section, roll, status, created_at, updated_at";

/// The service boundary the student handlers call through.
///
/// Owns validation, persistence and side effects; handlers only translate
/// requests into these calls and serialize the results.
#[async_trait]
pub trait StudentService: Send + Sync {
    async fn get_all_students(&self, query: StudentQuery) -> Result<Vec<Student>, AppError>;
    async fn add_new_student(&self, dto: CreateStudentDto) -> Result<MessageResponse, AppError>;
    async fn get_student_detail(&self, id: Uuid) -> Result<Student, AppError>;
    async fn update_student(
        &self,
        id: Uuid,
        dto: UpdateStudentDto,
    ) -> Result<MessageResponse, AppError>;
    async fn set_student_status(
        &self,
        request: SetStudentStatus,
    ) -> Result<MessageResponse, AppError>;
}

/// PostgreSQL-backed [`StudentService`].
pub struct PgStudentService {
    db: PgPool,
    mailer: EmailService,
}

impl PgStudentService {
    pub fn new(db: PgPool, mailer: EmailService) -> Self {
        Self { db, mailer }
    }

    fn map_unique_violation(error: sqlx::Error, email: &str) -> AppError {
        if let sqlx::Error::Database(db_err) = &error {
            if db_err.is_unique_violation() {
                return AppError::bad_request(anyhow::anyhow!(
                    "Student with email {} already exists",
                    email
                ));
            }
        }
        AppError::database(anyhow::Error::from(error))
    }
}

#[async_trait]
impl StudentService for PgStudentService {
    #[instrument(skip(self))]
    async fn get_all_students(&self, query: StudentQuery) -> Result<Vec<Student>, AppError> {
        let sql = format!(
            r#"
            SELECT {STUDENT_COLUMNS}
            FROM students
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR class_name = $2)
              AND ($3::text IS NULL OR section = $3)
              AND ($4::int4 IS NULL OR roll = $4)
            ORDER BY name
            LIMIT $5 OFFSET $6
            "#
        );

        let students = sqlx::query_as::<_, Student>(&sql)
            .bind(&query.name)
            .bind(&query.class_name)
            .bind(&query.section)
            .bind(query.roll)
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.db)
            .await
            .context("Failed to fetch students")
            .map_err(AppError::database)?;

        Ok(students)
    }

    #[instrument(skip(self, dto))]
    async fn add_new_student(&self, dto: CreateStudentDto) -> Result<MessageResponse, AppError> {
        dto.validate()
            .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

        let hashed_password = hash_password(&dto.password)?;

        let sql = format!(
            r#"
            INSERT INTO students (name, email, password, class_name, section, roll)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {STUDENT_COLUMNS}
            "#
        );

        let student = sqlx::query_as::<_, Student>(&sql)
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&hashed_password)
            .bind(&dto.class_name)
            .bind(&dto.section)
            .bind(dto.roll)
            .fetch_one(&self.db)
            .await
            .map_err(|e| Self::map_unique_violation(e, &dto.email))?;

        let message = match self
            .mailer
            .send_verification_email(&student.email, &student.name)
            .await
        {
            Ok(()) => "Student added and verification email sent successfully.",
            Err(error) => {
                warn!(student_id = %student.id, %error, "Verification email delivery failed");
                "Student added, but failed to send verification email."
            }
        };

        Ok(MessageResponse {
            message: message.to_string(),
        })
    }

    #[instrument(skip(self))]
    async fn get_student_detail(&self, id: Uuid) -> Result<Student, AppError> {
        let sql = format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1");

        let student = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .context("Failed to fetch student by ID")
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        Ok(student)
    }

    #[instrument(skip(self, dto))]
    async fn update_student(
        &self,
        id: Uuid,
        dto: UpdateStudentDto,
    ) -> Result<MessageResponse, AppError> {
        dto.validate()
            .map_err(|e| AppError::unprocessable(anyhow::anyhow!("Validation failed: {}", e)))?;

        let existing = self.get_student_detail(id).await?;

        let name = dto.name.unwrap_or(existing.name);
        let email = dto.email.unwrap_or(existing.email);
        let class_name = dto.class_name.or(existing.class_name);
        let section = dto.section.or(existing.section);
        let roll = dto.roll.or(existing.roll);

        sqlx::query(
            r#"
            UPDATE students
            SET name = $1, email = $2, class_name = $3, section = $4, roll = $5,
                updated_at = NOW()
            WHERE id = $6
            "#,
        )
        .bind(&name)
        .bind(&email)
        .bind(&class_name)
        .bind(&section)
        .bind(roll)
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(|e| Self::map_unique_violation(e, &email))?;

        Ok(MessageResponse {
            message: "Student updated successfully".to_string(),
        })
    }

    #[instrument(skip(self))]
    async fn set_student_status(
        &self,
        request: SetStudentStatus,
    ) -> Result<MessageResponse, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE students
            SET status = $1, status_changed_by = $2, status_changed_at = NOW(),
                updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(request.status)
        .bind(request.reviewer_id)
        .bind(request.user_id)
        .execute(&self.db)
        .await
        .context("Failed to update student status")
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Student not found")));
        }

        Ok(MessageResponse {
            message: "Student status changed successfully".to_string(),
        })
    }
}
