use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and schedulers to distinguish between rejected
/// input data and infrastructure failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the expanded table was written
    Success = 0,
    /// The order or master table was rejected (missing columns, bad quantities, ...)
    InputRejected = 1,
    /// Invalid command-line arguments (clap parsing errors, unsupported output format)
    InvalidArguments = 2,
    /// Application error (file I/O, config file, cancellation, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InputRejected => write!(f, "Input Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for bundle dismantling.
///
/// `Validation` and `DataType` are raised by the domain services and carry
/// enough context to locate the offending row. The remaining variants belong
/// to the file adapters around the core.
#[derive(Debug, Error)]
pub enum DismantleError {
    /// A required column is missing, a bundle code is blank, or a sheet is empty in strict mode
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A quantity cell is missing, non-numeric, negative or not finite
    #[error("Invalid quantity for {location}: {details}\n\n💡 Hint: Quantities must be finite, non-negative numbers")]
    DataType { location: String, details: String },

    #[error("Input file not found: {path}\n\n💡 Hint: Please verify the path passed to --orders / --master")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Sheet '{sheet}' not found in {path}\nAvailable sheets: {available}\n\n💡 Hint: Run `bundle-dismantle sheets <FILE>` to list the sheet names")]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: String,
    },

    #[error("Unsupported file format: {path}\nDetails: {details}")]
    UnsupportedFormat { path: PathBuf, details: String },

    /// A config file value is out of range; reported like other config file failures
    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },

    #[error("Template already exists: {path}\n\n💡 Hint: Remove the file or choose another directory with --dir")]
    TemplateExists { path: PathBuf },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Processing was cancelled before completion; no output was written")]
    Cancelled,
}

impl DismantleError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        DismantleError::InvalidConfig {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DismantleError::Validation {
            message: message.into(),
        }
    }

    /// Quantity error on an order row, located by order number and SKU
    pub fn order_quantity(order_number: &str, sku: &str, details: impl fmt::Display) -> Self {
        DismantleError::DataType {
            location: format!("order '{}' (SKU '{}')", order_number, sku),
            details: details.to_string(),
        }
    }

    /// Quantity error on a master row, located by parent and child code
    pub fn component_quantity(
        parent_code: &str,
        child_code: &str,
        row: usize,
        details: impl fmt::Display,
    ) -> Self {
        DismantleError::DataType {
            location: format!(
                "bundle '{}' component '{}' (master row {})",
                parent_code, child_code, row
            ),
            details: details.to_string(),
        }
    }

    /// True for errors caused by the content of the input tables
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            DismantleError::Validation { .. } | DismantleError::DataType { .. }
        )
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            DismantleError::Validation { .. } | DismantleError::DataType { .. } => {
                ExitCode::InputRejected
            }
            DismantleError::UnsupportedFormat { .. } => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}
