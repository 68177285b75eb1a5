//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::PromissoriaPaths;
pub use settings::Settings;
