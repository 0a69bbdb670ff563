use std::fmt;

use super::Value;

/// Compact single-line form, used for the `original` slot of descriptive
/// records and by the REPL echo. The multi-line dump lives in
/// [`crate::format`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Array(items) => {
                let items: Vec<String> = items.iter().map(Value::to_string).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Map(entries) => {
                let pairs: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect();
                write!(f, "{{ {} }}", pairs.join(", "))
            }
            Value::Record(record) => {
                let pairs: Vec<String> = record
                    .fields
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect();
                write!(f, "{} {{ {} }}", record.class_name, pairs.join(", "))
            }
        }
    }
}
