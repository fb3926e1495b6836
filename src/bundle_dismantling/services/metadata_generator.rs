use crate::bundle_dismantling::domain::RunMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator service for stamping a dismantling run
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Metadata with the current UTC timestamp and a fresh run id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> RunMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let run_id = format!("urn:uuid:{}", Uuid::new_v4());

        RunMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            run_id,
        )
    }

    /// Uses the compile-time package name and version
    pub fn generate_default_metadata() -> RunMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = MetadataGenerator::generate_metadata("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(metadata.run_id().starts_with("urn:uuid:"));
        assert!(metadata.timestamp().contains('T'));
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = MetadataGenerator::generate_default_metadata();
        assert_eq!(metadata.tool_name(), "bundle-dismantle");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_run_ids_are_unique() {
        let first = MetadataGenerator::generate_default_metadata();
        let second = MetadataGenerator::generate_default_metadata();
        assert_ne!(first.run_id(), second.run_id());
    }
}
