use std::path::Path;

use anyhow::Context;
use serde_json::{json, Value};

// Same key the site stores its dark-mode flag under.
const DARK_MODE_KEY: &str = "safetyAppDarkMode";

/// Read the persisted dark-mode flag. A missing file, unreadable JSON or an
/// absent key all default to light mode.
pub fn dark_mode(path: &Path) -> bool {
    let Ok(text) = std::fs::read_to_string(path) else {
        return false;
    };
    let Ok(value) = serde_json::from_str::<Value>(&text) else {
        return false;
    };
    value
        .get(DARK_MODE_KEY)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

pub fn set_dark_mode(path: &Path, enabled: bool) -> anyhow::Result<()> {
    let mut value = std::fs::read_to_string(path)
        .ok()
        .and_then(|text| serde_json::from_str::<Value>(&text).ok())
        .filter(Value::is_object)
        .unwrap_or_else(|| json!({}));
    value[DARK_MODE_KEY] = Value::Bool(enabled);
    std::fs::write(path, serde_json::to_string_pretty(&value)?)
        .with_context(|| format!("failed to write prefs {}", path.display()))?;
    Ok(())
}
