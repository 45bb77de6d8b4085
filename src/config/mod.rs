//! Client and dev backend settings: types, env loading, value checks.

pub mod loader;
pub mod types;
pub mod validator;

pub use loader::*;
pub use types::*;
pub use validator::*;
