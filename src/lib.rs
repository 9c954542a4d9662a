//! Persistence core of a medical-appointment service: user accounts
//! (patients and doctors) and doctor profiles linked to a specialty
//! reference table. The web layer on top of this crate owns routing,
//! sessions and serialization; this crate owns the rows and the rules
//! that must hold when they are written.

pub mod accounts;
pub mod config;
pub mod db;
pub mod doctors;
pub mod error;
pub mod specialties;
pub mod telemetry;

pub use config::AppConfig;
pub use db::AppState;
pub use error::StoreError;
