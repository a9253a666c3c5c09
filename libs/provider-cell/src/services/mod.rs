pub mod directory;
pub mod availability;

pub use directory::{ProviderDirectory, StaticProviderDirectory};
pub use availability::AvailabilityService;
