pub mod errors;
pub mod types;

pub use errors::ConfigError;
pub use types::Rgb;
