pub mod clean;
pub mod error;

pub use error::DeleteError;
