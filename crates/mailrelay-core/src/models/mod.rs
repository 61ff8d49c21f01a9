/// Data models
pub mod email;

pub use email::*;
