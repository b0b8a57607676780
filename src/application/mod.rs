//! Application layer - Use cases and orchestration

pub mod dashboard;
pub mod init;
pub mod manage_config;

pub use dashboard::{Dashboard, DashboardView};
pub use manage_config::ConfigService;
