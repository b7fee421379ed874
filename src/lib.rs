pub mod config;
pub mod message;
pub mod store;
pub mod style;
