pub mod config;
pub use config::*;

pub mod smtp;
pub use smtp::*;
