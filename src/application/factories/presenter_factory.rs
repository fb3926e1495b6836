use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::OutputPresenter;
use chrono::{DateTime, Local, TimeZone};
use std::path::{Path, PathBuf};

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use bundle_dismantle::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }

    /// `Result_YYYYMMDD_HHMMSS.<ext>` for the given instant
    pub fn default_file_name<Tz: TimeZone>(format: OutputFormat, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("Result_{}.{}", at.format("%Y%m%d_%H%M%S"), format.extension())
    }

    /// File presenter target inside `directory`, named from the local time
    pub fn timestamped_in(directory: &Path, format: OutputFormat) -> PresenterType {
        let file_name = Self::default_file_name(format, &Local::now());
        PresenterType::File(directory.join(file_name))
    }
}
