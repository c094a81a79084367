pub mod direction;
pub mod error;
pub mod field;
pub mod showcase_config;
pub mod style;

pub use direction::*;
pub use error::*;
pub use field::*;
pub use showcase_config::*;
pub use style::*;
