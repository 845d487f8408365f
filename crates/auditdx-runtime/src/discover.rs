use crate::Result;
use std::path::{Path, PathBuf};

/// Locate the audited project checkout based on priority:
/// 1. Explicit path (--project-root flag)
/// 2. AUDITDX_PROJECT_ROOT environment variable
/// 3. Well-known checkout locations, first one with a backend/ marker
/// 4. Current working directory
pub fn find_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }

    if let Some(env_root) = std::env::var_os("AUDITDX_PROJECT_ROOT") {
        return Ok(PathBuf::from(env_root));
    }

    let cwd = std::env::current_dir()?;
    let found = scan_candidates(&cwd, dirs::home_dir().as_deref());
    Ok(found.unwrap_or(cwd))
}

/// Checkout locations worth trying, nearest first. The Codespaces path is
/// where the project's devcontainer mounts the repository.
fn scan_candidates(cwd: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let mut candidates = vec![cwd.to_path_buf(), cwd.join("local-business-audit")];
    if let Some(parent) = cwd.parent() {
        candidates.push(parent.join("local-business-audit"));
    }
    candidates.push(cwd.join("react-audit").join("local-business-audit"));
    candidates.push(PathBuf::from("/workspaces/react-audit/local-business-audit"));
    if let Some(home) = home {
        candidates.push(home.join("local-business-audit"));
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.join("backend").exists())
}
