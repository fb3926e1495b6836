/// Result alias used by the application and adapter layers.
/// Domain services return `DismantleError` directly; it converts into `anyhow::Error` on `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
