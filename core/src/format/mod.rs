mod report;

pub use report::Report;

use crate::trace::{self, StackCapture, TraceSelector};
use crate::value::Value;

/// Build the full dump text for one value: the optional message, the
/// type-specific descriptive record, then the rendered stack context.
///
/// Never fails for any input and has no side effects; identical inputs over
/// an unchanged stack produce identical strings.
pub fn format_value(
    value: &Value,
    message: Option<&str>,
    selector: TraceSelector,
    capture: &dyn StackCapture,
) -> String {
    let mut msg = message.unwrap_or_default().to_string();
    if !msg.is_empty() && !msg.ends_with('\n') {
        msg.push('\n');
    }

    let record = describe(value);
    let stack = trace::capture(capture, selector).render();

    format!(
        "{msg}{} details: {}{stack}",
        capitalize(value.type_of()),
        record.render()
    )
}

/// The type-specific descriptive record. A closed type-switch with an
/// explicit default arm: anything without a special shape is used as-is.
fn describe(value: &Value) -> Report {
    match value {
        Value::Null => Report::Map(vec![("value".to_string(), Report::leaf("NULL"))]),
        Value::Bool(b) => Report::Map(vec![(
            "value".to_string(),
            Report::leaf(if *b { "true" } else { "false" }),
        )]),
        Value::Str(s) => Report::Map(vec![
            ("type".to_string(), Report::leaf("string")),
            (
                "length".to_string(),
                Report::leaf(s.chars().count().to_string()),
            ),
            ("original".to_string(), Report::leaf(format!("\"{s}\""))),
        ]),
        Value::Record(record) => Report::Map(vec![
            ("type".to_string(), Report::leaf("object")),
            ("properties".to_string(), Report::from(value)),
            (
                "methods".to_string(),
                Report::List(
                    record
                        .methods
                        .iter()
                        .map(|name| Report::leaf(name.as_str()))
                        .collect(),
                ),
            ),
            ("original".to_string(), Report::leaf(value.to_string())),
        ]),
        other => Report::from(other),
    }
}

/// Uppercase the first character of the type tag (`"NULL"` stays `"NULL"`).
fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
