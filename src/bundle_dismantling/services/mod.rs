mod bundle_expander;
mod mapping_index;
mod metadata_generator;
pub mod table_decoder;
pub mod template_generator;

pub use bundle_expander::BundleExpander;
pub use mapping_index::MappingIndex;
pub use metadata_generator::MetadataGenerator;
pub use table_decoder::TableDecoder;
pub use template_generator::TemplateGenerator;
