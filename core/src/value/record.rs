use super::Value;

/// An object-like value: a named type together with its fields and the
/// names of its callable members.
///
/// Fields keep insertion order so dumps read the way the record was built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub class_name: String,
    pub fields: Vec<(String, Value)>,
    pub methods: Vec<String>,
}

impl Record {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn method(mut self, name: impl Into<String>) -> Self {
        self.methods.push(name.into());
        self
    }
}
