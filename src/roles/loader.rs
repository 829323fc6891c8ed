// src/roles/loader.rs — Load the four role files, all-or-nothing, with hardcoded defaults

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::types::{CompanyConfig, ServerConfig};
use crate::infra::errors::ScreenpassError;
use crate::infra::paths;

/// Everything the orchestrator needs from the roles directory.
#[derive(Debug, Clone)]
pub struct RoleConfig {
    pub server: ServerConfig,
    pub company_a: CompanyConfig,
    pub company_b: CompanyConfig,
    /// Extra screening questions from `questions.json`.
    pub questions: Vec<String>,
    pub source: RoleSource,
}

/// Where the role config came from.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleSource {
    /// Hardcoded fallback (a role file was missing or malformed)
    Defaults,
    /// Role files under this directory
    Directory(PathBuf),
}

impl std::fmt::Display for RoleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Defaults => write!(f, "defaults"),
            Self::Directory(p) => write!(f, "dir:{}", p.display()),
        }
    }
}

impl RoleConfig {
    /// Load from `roles_dir`. Any failure in any file discards all four and
    /// returns [`RoleConfig::defaults`].
    pub fn load(roles_dir: &Path) -> Self {
        match Self::try_load(roles_dir) {
            Ok(config) => {
                tracing::info!(source = %config.source, "Loaded role config");
                config
            }
            Err(e) => {
                tracing::warn!("Error loading role files, using defaults: {}", e);
                Self::defaults()
            }
        }
    }

    pub fn try_load(roles_dir: &Path) -> Result<Self, ScreenpassError> {
        let server: ServerConfig = read_json(&paths::server_config_path(roles_dir))?;
        let company_a: CompanyConfig = read_json(&paths::company_a_path(roles_dir))?;
        let company_b: CompanyConfig = read_json(&paths::company_b_path(roles_dir))?;
        let questions: serde_json::Value = read_json(&paths::questions_path(roles_dir))?;

        Ok(Self {
            server,
            company_a,
            company_b,
            questions: extract_questions(&questions),
            source: RoleSource::Directory(roles_dir.to_path_buf()),
        })
    }

    pub fn defaults() -> Self {
        Self {
            server: ServerConfig::default(),
            company_a: CompanyConfig::new("Company A", 4, 4),
            company_b: CompanyConfig::new("Company B", 1, 4),
            questions: Vec::new(),
            source: RoleSource::Defaults,
        }
    }

    /// Case-insensitive company lookup. Anything other than `companyA` or
    /// `companyB` (including an empty name) resolves to companyA.
    pub fn company(&self, name: &str) -> &CompanyConfig {
        if name.eq_ignore_ascii_case("companyb") {
            &self.company_b
        } else {
            &self.company_a
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ScreenpassError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ScreenpassError::Config(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| ScreenpassError::Config(format!("{}: {}", path.display(), e)))
}

/// Accepts `["q1", "q2"]` or `{"questions": ["q1", "q2"]}`; anything else
/// yields no questions.
fn extract_questions(value: &serde_json::Value) -> Vec<String> {
    let list = match value {
        serde_json::Value::Array(items) => items.as_slice(),
        serde_json::Value::Object(map) => match map.get("questions") {
            Some(serde_json::Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };

    list.iter()
        .filter_map(|q| q.as_str())
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(String::from)
        .collect()
}
