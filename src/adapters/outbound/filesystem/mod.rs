/// Filesystem adapters for file I/O operations
mod file_writer;
mod table_reader;
mod template_directory;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use table_reader::FileSystemTableReader;
pub use template_directory::CsvTemplateDirectory;
