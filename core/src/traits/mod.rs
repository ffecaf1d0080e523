//! Traits at the boundary between xception and the code it describes.
//!
//! ```text
//! Nullable        (is this value the absent marker?)
//! ParameterError  (which parameter does this error blame?)
//!     ├── Xception
//!     └── UsageError
//! ```
//!
//! The `specialize` module holds the dispatch traits used by the `argument!`
//! family of macros to turn an arbitrary expression into a [`Value`]. It is
//! not part of the public API.
//!
//! [`Value`]: crate::Value

mod error;
mod nullable;
#[doc(hidden)]
pub mod specialize;

pub use error::ParameterError;
pub use nullable::Nullable;
