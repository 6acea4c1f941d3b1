//! HTML building blocks shared by the gallery views.
//!
//! Every string that originates from the server passes through
//! [`escape_text`] or [`escape_attr`] before it reaches markup.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Separator inserted between visual rows of controls.
pub const ROW_BREAK: &str = "<br>";

/// Escapes a string for use as element text content.
pub fn escape_text(value: &str) -> String {
    encode_text(value).into_owned()
}

/// Escapes a string for use inside a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    encode_double_quoted_attribute(value).into_owned()
}

/// Concatenates rendered items, inserting [`ROW_BREAK`] before every item
/// whose index is non-zero and divisible by `row_length`.
///
/// A `row_length` of 0 disables row breaks.
pub fn wrap_rows<I>(items: I, row_length: usize) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut html = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if row_length > 0 && i > 0 && i % row_length == 0 {
            html.push_str(ROW_BREAK);
        }
        html.push_str(&item);
    }
    html
}

/// Inline error shown in place of a view's content.
pub fn error_notice(context: &str, message: &str) -> String {
    format!(
        "<p class=\"error\" role=\"alert\">{}: {}</p>",
        escape_text(context),
        escape_text(message)
    )
}
