#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
pub use xception_core::*;
pub use xception_macros::*;

#[doc(hidden)]
pub mod __private {
    pub use xception_core::traits::specialize::*;
}
