pub mod chronometer;
pub mod configuration;
pub mod logger;

pub use chronometer::Chronometer;
pub use configuration::Configuration;
pub use logger::{Logger, PartialLogger};
