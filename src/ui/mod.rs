//! UI Module - separation of terminal output concerns
//!
//! Core logic never prints directly. Commands construct a concrete reporter
//! and hand it to the runner:
//!
//! ```text
//! ┌─────────────┐
//! │   Commands  │  (clean)
//! └──────┬──────┘
//!        │ constructs
//!        ▼
//! ┌─────────────┐
//! │  Reporter   │  trait seam, swapped for a buffer in tests
//! └──────┬──────┘
//!        │ implemented by
//!        ▼
//! ┌─────────────┐
//! │   Console   │  line-oriented stdout contract
//! └─────────────┘
//! ```

pub mod output;
pub mod reporter;

pub use output::ConsoleReporter;
pub use reporter::Reporter;
