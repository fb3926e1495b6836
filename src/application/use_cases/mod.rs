/// Use cases module containing application business logic orchestration
mod dismantle_bundles;
mod generate_templates;

pub use dismantle_bundles::DismantleBundlesUseCase;
pub use generate_templates::GenerateTemplatesUseCase;
