//! Joining of caller-supplied reason fragments.

use crate::stringify::safe_to_string;
use crate::value::Value;

/// Renders `first` followed by each of `rest`, separated by single spaces.
///
/// Every fragment goes through [`safe_to_string`], so absent fragments show
/// up as `<NULL>` and failing ones as `<TOSTRING_EXCEPTION>`. Fragments are
/// neither trimmed nor filtered: an empty fragment still contributes its
/// separating space.
pub fn reasons_to_string(first: Value<'_>, rest: &[Value<'_>]) -> String {
    let mut out = safe_to_string(first);
    for fragment in rest {
        out.push(' ');
        out.push_str(&safe_to_string(*fragment));
    }
    out
}
