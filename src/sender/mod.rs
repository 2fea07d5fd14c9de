pub mod sender;
pub use sender::*;

pub mod smtp;
pub use smtp::*;
