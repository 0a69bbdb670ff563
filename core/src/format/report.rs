use crate::trace::StackFrame;
use crate::value::Value;

/// Transient descriptive tree built for one dump and discarded with it.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Leaf(String),
    List(Vec<Report>),
    Map(Vec<(String, Report)>),
}

const INDENT: &str = "    ";

impl Report {
    pub fn leaf(text: impl Into<String>) -> Self {
        Report::Leaf(text.into())
    }

    /// Recursive, indentation-based rendering. Nested maps and lists keep
    /// their structure; empty collections render their markers, never
    /// nothing.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        match self {
            Report::Leaf(text) => out.push_str(text),
            Report::List(items) => {
                if items.is_empty() {
                    out.push_str("[]");
                    return;
                }
                out.push_str("[\n");
                for item in items {
                    indent(out, depth + 1);
                    item.render_into(out, depth + 1);
                    out.push('\n');
                }
                indent(out, depth);
                out.push(']');
            }
            Report::Map(entries) => {
                if entries.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str("{\n");
                for (key, node) in entries {
                    indent(out, depth + 1);
                    out.push_str(key);
                    out.push_str(": ");
                    node.render_into(out, depth + 1);
                    out.push('\n');
                }
                indent(out, depth);
                out.push('}');
            }
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// The untransformed tree for a value, used by the formatter's default arm
/// and for the `properties` slot of object dumps.
impl From<&Value> for Report {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Report::leaf("null"),
            Value::Bool(b) => Report::leaf(b.to_string()),
            Value::Int(n) => Report::leaf(n.to_string()),
            Value::Float(n) => Report::leaf(n.to_string()),
            Value::Str(s) => Report::leaf(format!("\"{s}\"")),
            Value::Array(items) => Report::List(items.iter().map(Report::from).collect()),
            Value::Map(entries) => Report::Map(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Report::from(value)))
                    .collect(),
            ),
            Value::Record(record) => Report::Map(
                record
                    .fields
                    .iter()
                    .map(|(key, value)| (key.clone(), Report::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&StackFrame> for Report {
    fn from(frame: &StackFrame) -> Self {
        let mut entries = vec![(
            "function".to_string(),
            Report::leaf(frame.function.clone()),
        )];
        if let Some(module) = &frame.module {
            entries.push(("module".to_string(), Report::leaf(module.clone())));
        }
        entries.push(("file".to_string(), Report::leaf(frame.file.clone())));
        entries.push(("line".to_string(), Report::leaf(frame.line.to_string())));
        Report::Map(entries)
    }
}
