use std::env;
use std::path::PathBuf;

pub fn env_flag_enabled(name: &str) -> bool {
    let Ok(value) = env::var(name) else {
        return false;
    };
    let normalized = value.trim().to_ascii_lowercase();
    matches!(normalized.as_str(), "1" | "true" | "yes" | "on")
}

/// Trimmed value of `name`; unset and blank are both treated as absent.
pub fn env_value(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn env_path_override(name: &str) -> Option<PathBuf> {
    env_value(name).map(PathBuf::from)
}
