/// How much stack context a dump should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceSelector {
    /// Just the one-line call-site summary.
    #[default]
    None,
    /// The summary plus the nearest frame outside the helper.
    Last,
    /// The summary plus every frame outside the helper, innermost first.
    All,
}

impl TraceSelector {
    /// Lenient, case-insensitive parse. Unrecognized input (including `"0"`
    /// and typos like `"al"`) means `None`: a debugging aid degrades to less
    /// trace rather than failing.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "last" => TraceSelector::Last,
            "2" | "all" => TraceSelector::All,
            _ => TraceSelector::None,
        }
    }
}

impl From<&str> for TraceSelector {
    fn from(input: &str) -> Self {
        TraceSelector::parse(input)
    }
}

impl From<i64> for TraceSelector {
    fn from(code: i64) -> Self {
        match code {
            1 => TraceSelector::Last,
            2 => TraceSelector::All,
            _ => TraceSelector::None,
        }
    }
}

impl<T: Into<TraceSelector>> From<Option<T>> for TraceSelector {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
