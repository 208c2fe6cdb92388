pub mod config;
pub mod error;
pub mod grid;
pub mod page;
pub mod render;

pub use error::{Error, ErrorKind, Result};
