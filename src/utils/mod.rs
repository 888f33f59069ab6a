// Shared helpers

pub mod dates;
pub mod storage;
pub mod validation;

pub use dates::*;
pub use storage::*;
pub use validation::{ValidationError, RegistrationForm};
