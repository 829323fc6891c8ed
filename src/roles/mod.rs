// src/roles/mod.rs — Agent persona and company role files

pub mod loader;
pub mod types;

pub use loader::{RoleConfig, RoleSource};
pub use types::{CompanyConfig, Fact, ServerConfig};
