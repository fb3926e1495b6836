use crate::bundle_dismantling::services::TemplateGenerator;
use crate::ports::outbound::{ProgressReporter, TemplateWriter};
use crate::shared::error::DismantleError;
use crate::shared::Result;
use std::path::PathBuf;

/// GenerateTemplatesUseCase - writes starter order and master tables
///
/// Existing files are never overwritten, and a run either writes every
/// template or leaves none behind.
pub struct GenerateTemplatesUseCase<TW, PR> {
    template_writer: TW,
    progress_reporter: PR,
}

impl<TW, PR> GenerateTemplatesUseCase<TW, PR>
where
    TW: TemplateWriter,
    PR: ProgressReporter,
{
    pub fn new(template_writer: TW, progress_reporter: PR) -> Self {
        Self {
            template_writer,
            progress_reporter,
        }
    }

    /// Writes every template
    ///
    /// # Returns
    /// Paths of the written files
    ///
    /// # Errors
    /// - `TemplateExists` if any target file already exists (nothing is written)
    /// - The writer's error if a write fails; templates written before the
    ///   failure are removed again
    pub fn execute(&self) -> Result<Vec<PathBuf>> {
        let templates = TemplateGenerator::all();

        for (file_name, _) in &templates {
            if self.template_writer.exists(file_name) {
                return Err(DismantleError::TemplateExists {
                    path: self.template_writer.target(file_name),
                }
                .into());
            }
        }

        let mut written: Vec<(&str, PathBuf)> = Vec::with_capacity(templates.len());
        for (file_name, table) in &templates {
            match self.template_writer.write(file_name, table) {
                Ok(path) => {
                    self.progress_reporter
                        .report(&format!("📄 Template written: {}", path.display()));
                    written.push((*file_name, path));
                }
                Err(e) => {
                    self.roll_back(&written);
                    return Err(e);
                }
            }
        }

        self.progress_reporter
            .report_completion(&format!("✅ {} template(s) created", written.len()));
        Ok(written.into_iter().map(|(_, path)| path).collect())
    }

    fn roll_back(&self, written: &[(&str, PathBuf)]) {
        for (file_name, path) in written {
            if let Err(e) = self.template_writer.remove(file_name) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Could not remove {}: {}",
                    path.display(),
                    e
                ));
            }
        }
    }
}
