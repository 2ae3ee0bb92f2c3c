//! Saving exported drawings and encoding them for transport.

use super::types::ExportError;
use crate::config::ExportConfig;
use base64::{Engine as _, engine::general_purpose};
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save drawings to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for FileSaveConfig {
    fn from(config: &ExportConfig) -> Self {
        Self {
            save_directory: expand_tilde(&config.save_directory),
            filename_template: config.filename_template.clone(),
        }
    }
}

/// Whether every `%` specifier in `template` is one chrono understands.
pub fn is_valid_filename_template(template: &str) -> bool {
    !StrftimeItems::new(template).any(|item| matches!(item, Item::Error))
}

/// Generate a PNG filename based on the template and current time.
pub fn generate_filename(template: &str) -> Result<String, ExportError> {
    let mut filename = String::new();
    write!(filename, "{}", Local::now().format(template))
        .map_err(|_| ExportError::InvalidTemplate(template.to_string()))?;
    filename.push_str(".png");
    Ok(filename)
}

/// Ensure the save directory exists, creating it if necessary.
fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save PNG bytes under a generated name in the configured directory.
///
/// # Returns
/// Path to the saved file
pub fn save_png(png: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let file_path = directory.join(generate_filename(&config.filename_template)?);
    write_png(png, &file_path)?;
    Ok(file_path)
}

/// Write PNG bytes to an explicit path, creating parent directories.
pub fn write_png(png: &[u8], file_path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        png.len()
    );
    fs::write(file_path, png)?;
    Ok(())
}

/// Encodes PNG bytes as a `data:image/png;base64,...` URL.
pub fn to_data_url(png: &[u8]) -> String {
    format!(
        "{}{}",
        PNG_DATA_URL_PREFIX,
        general_purpose::STANDARD.encode(png)
    )
}

/// Returns the payload of a data URL (everything after the first comma).
///
/// Input without a comma is returned unchanged.
pub fn strip_data_url(encoded: &str) -> &str {
    encoded
        .split_once(',')
        .map_or(encoded, |(_, payload)| payload)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("magic-art-%Y%m%d").unwrap();
        assert!(filename.starts_with("magic-art-20"));
        assert!(filename.ends_with(".png"));
    }

    #[test]
    fn test_unknown_specifier_is_an_error() {
        assert!(!is_valid_filename_template("magic-art-%Q"));
        assert!(is_valid_filename_template("magic-art-%Y-%m-%d_%H%M%S"));

        let err = generate_filename("magic-art-%Q").unwrap_err();
        assert!(matches!(err, ExportError::InvalidTemplate(ref t) if t == "magic-art-%Q"));
    }

    #[test]
    fn test_save_png_rejects_bad_template() {
        let temp = tempfile::tempdir().unwrap();
        let config = FileSaveConfig {
            save_directory: temp.path().to_path_buf(),
            filename_template: "art-%Q".to_string(),
        };
        assert!(matches!(
            save_png(b"png-bytes", &config),
            Err(ExportError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_data_url_round_trip() {
        let url = to_data_url(b"\x89PNG");
        assert_eq!(url, "data:image/png;base64,iVBORw==");
        assert_eq!(strip_data_url(&url), "iVBORw==");
        assert_eq!(strip_data_url("iVBORw=="), "iVBORw==");
    }

    #[test]
    fn test_save_png_creates_directory() {
        let temp = tempfile::tempdir().unwrap();
        let config = FileSaveConfig {
            save_directory: temp.path().join("nested").join("art"),
            filename_template: "drawing".to_string(),
        };
        let path = save_png(b"png-bytes", &config).unwrap();
        assert!(path.ends_with("drawing.png"));
        assert_eq!(fs::read(&path).unwrap(), b"png-bytes");
    }
}
