#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Procedural macros for xception.
//!
//! These macros resolve the *name* of the argument being described from the
//! expression itself, so it never drifts out of sync with the code:
//!
//! - [`argument!`]: the argument is invalid
//! - [`argument_null!`]: the argument is null
//! - [`argument_out_of_range!`]: the argument is out of range
//! - [`index_out_of_range!`]: the index is out of range
//!
//! # Quick Start
//!
//! ```ignore
//! use xception::argument_out_of_range;
//!
//! fn set_max(max: u32) -> Result<(), xception::Xception> {
//!     if max > 50 {
//!         return Err(argument_out_of_range!(max, "should be at most", 50)?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Subjects
//!
//! The first macro argument must identify a member: a variable (`max`), a
//! path (`Self::LIMIT`) or a named field (`self.limits.max`). Parentheses,
//! references and casts around it are ignored when resolving the name. Any
//! other expression is a compile error, since it has no name to report.
//!
//! # Values
//!
//! The subject and every reason are rendered according to their type:
//!
//! - `Option<T>` or `&Option<T>`: `None` is null; `Some(v)` renders `v` when
//!   `T: Display` and the type name of `T` otherwise
//! - `T: Display`: its own text
//! - anything else: its type name

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod expand;
mod subject;

use expand::Entry;

/// Builds an invalid-argument error.
///
/// Expands to an expression of type
/// `Result<xception::Xception, xception::UsageError>`.
///
/// # Syntax
///
/// ```ignore
/// argument!(subject, reason, more_reasons...)
/// ```
///
/// # Example
///
/// ```ignore
/// let foo = 100;
/// let err = argument!(foo, "reason1")?;
/// assert_eq!(
///     err.to_string(),
///     r#"Argument "foo" with value "100" is invalid: foo reason1"#
/// );
/// ```
#[proc_macro]
pub fn argument(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as subject::SubjectInput);
    expand::described(Entry::Argument, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Builds a null-argument error.
///
/// The subject must implement `xception::Nullable`. If it is not actually
/// null at runtime the result is a `UsageError`, since that usually means
/// the wrong argument was named.
///
/// # Example
///
/// ```ignore
/// let field: Option<&str> = None;
/// let err = argument_null!(field)?;
/// assert_eq!(err.to_string(), r#"Argument "field" cannot be null."#);
/// ```
#[proc_macro]
pub fn argument_null(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as subject::SubjectInput);
    expand::null(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Builds an argument-out-of-range error.
///
/// The first reason must be neither null nor empty.
///
/// # Example
///
/// ```ignore
/// let max = 100;
/// let err = argument_out_of_range!(max, "reason1", "reason2")?;
/// assert_eq!(
///     err.to_string(),
///     r#"Argument "max" with value "100" is out of range: max reason1 reason2"#
/// );
/// ```
#[proc_macro]
pub fn argument_out_of_range(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as subject::SubjectInput);
    expand::described(Entry::ArgumentOutOfRange, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Builds an index-out-of-range error.
///
/// The first reason must be neither null nor empty. Index errors carry no
/// parameter name.
///
/// # Example
///
/// ```ignore
/// let idx = 100;
/// let err = index_out_of_range!(idx, "exceeds length", 3)?;
/// assert_eq!(
///     err.to_string(),
///     r#"Index "idx" with value "100" is out of range: idx exceeds length 3"#
/// );
/// ```
#[proc_macro]
pub fn index_out_of_range(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as subject::SubjectInput);
    expand::described(Entry::IndexOutOfRange, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
