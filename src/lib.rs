//! # Rollbook API
//!
//! A student records REST API built with Rust, Axum, and PostgreSQL.
//!
//! ## Overview
//!
//! Rollbook exposes a small student-management surface: listing, creating,
//! reading, updating, and changing the access status of student records.
//! HTTP handlers are thin adapters; each translates one request into one
//! call on the [`modules::students::service::StudentService`] trait, which
//! owns validation, persistence, and side effects such as verification
//! emails.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Environment-driven configuration (DB, JWT, SMTP, CORS)
//! ├── middleware/       # Bearer-token auth extractor
//! ├── modules/          # Feature modules
//! │   └── students/    # Student records
//! └── utils/            # Shared utilities (errors, JWT, email, passwords)
//! ```
//!
//! The students module follows a consistent structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: service trait and its PostgreSQL implementation
//! - `model.rs`: entities and DTOs
//! - `router.rs`: Axum route table
//!
//! ## Security Considerations
//!
//! - Passwords are hashed using bcrypt and never serialized in responses
//! - Status changes record the reviewing caller's identity from the JWT
//! - JWT secrets should be cryptographically random

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
