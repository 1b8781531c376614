//! Textual representation of values and function types in failure messages.

use std::fmt::Debug;

use crate::config::TypeNameStyle;

/// Render a value the way failure messages show it.
///
/// Uses `Debug`, so strings are quoted and `None` is distinguishable from `"None"`.
pub fn render_value<T: Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

/// Render a type name according to `style`.
pub fn render_type_name(name: &str, style: TypeNameStyle) -> String {
    match style {
        TypeNameStyle::Simple => simple_type_name(name),
        TypeNameStyle::Qualified => name.to_string(),
    }
}

/// Strip module paths from every path inside a type name.
///
/// `core::option::Option<alloc::string::String>` becomes `Option<String>` and
/// `my_crate::tests::check::{{closure}}` becomes `{{closure}}`. A `::` after a
/// `>` separates a type from its associated item and is kept:
/// `core::f64::<impl f64>::sqrt` becomes `<impl f64>::sqrt`.
pub fn simple_type_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment_start = 0;
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            if out.ends_with('>') {
                out.push_str("::");
                segment_start = out.len();
            } else {
                out.truncate(segment_start);
            }
            continue;
        }
        out.push(c);
        // `{{closure}}` is a path segment of its own.
        if !(c.is_alphanumeric() || matches!(c, '_' | '{' | '}')) {
            segment_start = out.len();
        }
    }

    out
}
