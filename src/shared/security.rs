use crate::shared::error::DismantleError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum input file size (100 MB).
/// Order exports above this are rejected before parsing.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks an input table file before it is opened.
///
/// # Security
/// Uses `symlink_metadata()` so that the link itself is inspected, not its target.
///
/// # Errors
/// - `InputNotFound` if nothing exists at `path`
/// - `SecurityError` if the path is a symbolic link or exceeds `MAX_FILE_SIZE`
/// - `FileReadError` if the path is not a regular file
///
/// # Returns
/// The file size in bytes
pub fn check_input_file(path: &Path) -> Result<u64> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DismantleError::InputNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        Err(e) => {
            return Err(DismantleError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Failed to read metadata: {}", e),
            }
            .into());
        }
    };

    if metadata.is_symlink() {
        return Err(DismantleError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input path is a symbolic link".to_string(),
            hint: "Pass the real file path instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(DismantleError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    check_file_size(metadata.len(), path, MAX_FILE_SIZE)?;
    Ok(metadata.len())
}

/// Rejects files larger than `max_size`
pub fn check_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(DismantleError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the export into smaller files".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Checks that an output path can be written without following a link.
///
/// # Errors
/// - `FileWriteError` if the parent directory does not exist
/// - `SecurityError` if the output path already exists as a symbolic link
pub fn check_output_target(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(DismantleError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(DismantleError::SecurityError {
                path: path.to_path_buf(),
                reason: "Output path is a symbolic link".to_string(),
                hint: "Write to a regular file path instead".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
