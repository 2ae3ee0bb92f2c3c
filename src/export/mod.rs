//! Canvas export: PNG files on disk and base64 data URLs.

pub mod file;
pub mod types;

pub use file::{
    FileSaveConfig, expand_tilde, generate_filename, is_valid_filename_template, save_png,
    strip_data_url, to_data_url, write_png,
};
pub use types::ExportError;
