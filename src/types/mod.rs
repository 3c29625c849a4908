pub mod outcome;
pub mod target;

pub use outcome::Outcome;
pub use target::TargetPath;
