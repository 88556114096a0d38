#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod shuffle;
pub mod time;
pub mod wheel;

pub use error::Error;
pub use time::Clock;
