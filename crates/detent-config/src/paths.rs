//! Platform-specific paths for panel files.
//!
//! - **User config**: `~/.config/detent/` (Linux), `~/Library/Application Support/detent/` (macOS), `%APPDATA%\detent\` (Windows)
//! - **User panels**: `<user config>/panels/`
//!
//! # Example
//!
//! ```rust,no_run
//! use detent_config::paths;
//!
//! if let Some(path) = paths::find_panel("mixer") {
//!     println!("Found panel at: {:?}", path);
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::{ConfigError, Panel, get_factory_panel};

/// Application name used for directory paths.
const APP_NAME: &str = "detent";

/// Subdirectory name for panels.
const PANELS_SUBDIR: &str = "panels";

/// Returns the user-specific configuration directory.
///
/// Falls back to the current directory if the platform config directory
/// cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the user-specific panels directory.
pub fn user_panels_dir() -> PathBuf {
    user_config_dir().join(PANELS_SUBDIR)
}

/// Find a panel file by path or name.
///
/// An existing file path wins. Otherwise `name` (with or without `.toml`)
/// is looked up in the user panels directory.
pub fn find_panel(name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };

    let user_path = user_panels_dir().join(filename);
    user_path.is_file().then_some(user_path)
}

/// Resolve a panel from a file path, a factory name or a user panel name.
///
/// # Errors
///
/// [`ConfigError::PanelNotFound`] if nothing matches, or the load error of
/// the file that was found.
pub fn open_panel(name: &str) -> Result<Panel, ConfigError> {
    let path = Path::new(name);
    if path.is_file() {
        return Panel::load(path);
    }
    if let Some(panel) = get_factory_panel(name) {
        return Ok(panel);
    }
    match find_panel(name) {
        Some(path) => Panel::load(path),
        None => Err(ConfigError::PanelNotFound(name.to_string())),
    }
}

/// Ensure the user panels directory exists and return it.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_panels_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_panels_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
    }
    Ok(dir)
}

/// List all panel files in the user panels directory.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_panels() -> Vec<PathBuf> {
    list_panels_in_dir(&user_panels_dir())
}

fn list_panels_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut panels: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    panels.sort();
    panels
}

/// Get the panel name from a file path (the file stem).
///
/// ```rust
/// use detent_config::paths::panel_name_from_path;
/// use std::path::Path;
///
/// let name = panel_name_from_path(Path::new("/path/to/mixer.toml"));
/// assert_eq!(name, Some("mixer".to_string()));
/// ```
pub fn panel_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_user_panels_dir() {
        let dir = user_panels_dir();
        assert!(dir.ends_with("detent/panels"));
        assert!(dir.starts_with(user_config_dir()));
    }

    #[test]
    fn test_find_panel_by_path() {
        let temp_dir = TempDir::new().unwrap();
        let panel_path = temp_dir.path().join("test.toml");
        fs::write(&panel_path, "name = \"test\"").unwrap();

        let found = find_panel(panel_path.to_str().unwrap());
        assert_eq!(found, Some(panel_path));
    }

    #[test]
    fn test_find_panel_not_found() {
        assert!(find_panel("nonexistent_panel_12345").is_none());
    }

    #[test]
    fn test_open_panel_prefers_file_then_factory() {
        let temp_dir = TempDir::new().unwrap();
        let panel_path = temp_dir.path().join("demo.toml");
        fs::write(&panel_path, "name = \"Local\"").unwrap();

        let local = open_panel(panel_path.to_str().unwrap()).unwrap();
        assert_eq!(local.name, "Local");

        let factory = open_panel("demo").unwrap();
        assert_eq!(factory.name, "Demo");
    }

    #[test]
    fn test_open_panel_missing() {
        assert!(matches!(
            open_panel("nonexistent_panel_12345"),
            Err(ConfigError::PanelNotFound(ref name)) if name == "nonexistent_panel_12345"
        ));
    }

    #[test]
    fn test_list_panels_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.toml"), "").unwrap();
        fs::write(temp_dir.path().join("a.toml"), "").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

        let panels = list_panels_in_dir(temp_dir.path());
        let names: Vec<_> = panels
            .iter()
            .filter_map(|p| panel_name_from_path(p))
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_list_panels_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_panels_in_dir(&temp_dir.path().join("absent")).is_empty());
    }
}
