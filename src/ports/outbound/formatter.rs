use crate::application::dto::DismantleResponse;
use crate::shared::Result;

/// ResultFormatter port for rendering the expanded table
///
/// This port abstracts the output encoding (CSV, JSON, Markdown).
pub trait ResultFormatter {
    /// Renders a dismantling response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &DismantleResponse) -> Result<String>;
}
