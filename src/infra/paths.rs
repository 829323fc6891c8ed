// src/infra/paths.rs — On-disk layout
//
// Role files are read from a roles directory (default `roles/`), results are
// written under a results directory (default `results/`). Both are relative
// to the working directory unless the app config says otherwise.

use std::path::{Path, PathBuf};

pub const SERVER_CONFIG_FILE: &str = "server_config.json";
pub const COMPANY_A_FILE: &str = "companyA.json";
pub const COMPANY_B_FILE: &str = "companyB.json";
pub const QUESTIONS_FILE: &str = "questions.json";

/// Default app config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "screenpass.toml";

pub fn server_config_path(roles_dir: &Path) -> PathBuf {
    roles_dir.join(SERVER_CONFIG_FILE)
}

pub fn company_a_path(roles_dir: &Path) -> PathBuf {
    roles_dir.join(COMPANY_A_FILE)
}

pub fn company_b_path(roles_dir: &Path) -> PathBuf {
    roles_dir.join(COMPANY_B_FILE)
}

pub fn questions_path(roles_dir: &Path) -> PathBuf {
    roles_dir.join(QUESTIONS_FILE)
}

/// Full transcripts: results/audit/
pub fn audit_dir(results_dir: &Path) -> PathBuf {
    results_dir.join("audit")
}

/// LLM summaries: results/summary/
pub fn summary_dir(results_dir: &Path) -> PathBuf {
    results_dir.join("summary")
}

pub fn sentiment_log_path(results_dir: &Path) -> PathBuf {
    results_dir.join("sentiment.csv")
}

pub fn decisions_log_path(results_dir: &Path) -> PathBuf {
    results_dir.join("decisions.csv")
}

/// Ensure the results subdirectories exist (idempotent).
pub fn ensure_results_dirs(results_dir: &Path) -> std::io::Result<()> {
    for dir in [audit_dir(results_dir), summary_dir(results_dir)] {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let root = Path::new("results");
        assert_eq!(audit_dir(root), PathBuf::from("results/audit"));
        assert_eq!(summary_dir(root), PathBuf::from("results/summary"));
        assert_eq!(sentiment_log_path(root), PathBuf::from("results/sentiment.csv"));
        assert_eq!(decisions_log_path(root), PathBuf::from("results/decisions.csv"));
        assert_eq!(
            server_config_path(Path::new("roles")),
            PathBuf::from("roles/server_config.json")
        );
    }

    #[test]
    fn test_ensure_results_dirs_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        ensure_results_dirs(tmp.path()).unwrap();
        ensure_results_dirs(tmp.path()).unwrap();
        assert!(audit_dir(tmp.path()).is_dir());
        assert!(summary_dir(tmp.path()).is_dir());
    }
}
