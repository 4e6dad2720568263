pub mod configuration;
pub mod elements;
pub mod nucleus;
