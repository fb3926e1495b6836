/// Domain layer - bundle dismantling value objects and pure services
///
/// Nothing in this module performs I/O; tables arrive already parsed.
pub mod domain;
pub mod services;
