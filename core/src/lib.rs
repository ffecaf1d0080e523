#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Diagnostic formatting engine for xception.
//!
//! Builds messages that describe a bad argument or index without ever
//! failing because of the value being described:
//!
//! ```text
//! value ──► stringify ──► literal ──┐
//! name  ──────────────────► literal ├──► message ──► Because ──► Xception
//! reasons ──► reason (stringify) ───┘
//! ```

mod because;
pub mod config;
mod error;
mod literal;
pub mod message;
mod reason;
mod stringify;
pub mod traits;
mod value;

pub use because::Because;
pub use config::FormatConfig;
pub use error::{ErrorKind, Result, UsageError, Xception};
pub use literal::{literal_encode, write_literal};
pub use message::{
    DiagnosticMessage, Subject, SubjectKind, argument_out_of_range, index_out_of_range,
    invalid_argument, null_argument, out_of_range,
};
pub use reason::reasons_to_string;
pub use stringify::{NULL, TOSTRING_EXCEPTION, safe_to_string, string_representation};
pub use traits::{Nullable, ParameterError};
pub use value::Value;
