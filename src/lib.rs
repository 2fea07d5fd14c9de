pub mod email;
pub use email::*;

pub mod input;

pub mod sender;
pub use sender::*;

pub mod workflow;
