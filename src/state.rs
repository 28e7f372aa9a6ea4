use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::email::EmailConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::students::service::{PgStudentService, StudentService};
use crate::utils::email::EmailService;

#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentService>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;
    let mailer = EmailService::new(EmailConfig::from_env());

    AppState {
        students: Arc::new(PgStudentService::new(db, mailer)),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
