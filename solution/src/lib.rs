mod configuration;
pub mod encoding;
pub mod json_serialisation;
pub mod test_utilities;

pub use configuration::Configuration;
pub use encoding::DecodeError;
