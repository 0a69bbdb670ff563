use std::fs;

use crate::errors::{GanderError, SourceError};
use crate::trace::{self, StackCapture, TraceSelector};

/// Best-effort recovery of the immediate caller's declared parameter names.
///
/// This scrapes source text: the caller's frame gives a file and function
/// name, the file is searched for the `fn <name>` declaration, and the
/// parenthesized list is split on top-level commas down to bare names. It
/// goes wrong on macro-generated callers, files that moved since the build,
/// and names that occur earlier in the file as other declarations. Never
/// feed the result into anything load-bearing.
pub fn caller_parameter_names(
    capture: &dyn StackCapture,
) -> Result<Vec<String>, GanderError> {
    let summary = trace::capture(capture, TraceSelector::Last);
    let frame = summary.frames.first().ok_or(SourceError::NoCallerFrame)?;

    let code = fs::read_to_string(&frame.file).map_err(|err| SourceError::Unreadable {
        path: frame.file.clone(),
        reason: err.to_string(),
    })?;

    let name = frame.bare_name();
    let list = parameter_list(&code, name).ok_or_else(|| SourceError::SignatureNotFound {
        function: name.to_string(),
        path: frame.file.clone(),
    })?;

    Ok(split_parameters(list))
}

/// The text between the parentheses of `fn <name>…(…)`, tolerating generic
/// parameters before the list and multi-line lists inside it.
fn parameter_list<'a>(code: &'a str, name: &str) -> Option<&'a str> {
    let mut from = 0;
    while let Some(found) = code[from..].find("fn ") {
        let at = from + found;
        from = at + 3;

        let rest = code[at + 3..].trim_start();
        let Some(after) = rest.strip_prefix(name) else {
            continue;
        };
        // Reject prefix matches like `fn run_fast` when looking for `run`.
        if after
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            continue;
        }

        let Some(open) = after.find('(') else {
            continue;
        };
        let mut depth = 0usize;
        for (idx, ch) in after[open..].char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&after[open + 1..open + idx]);
                    }
                }
                _ => {}
            }
        }
        return None;
    }
    None
}

/// Split on top-level commas, then reduce each piece to its bare name: the
/// pattern before `:`, minus `&`/`mut`, receivers dropped. Patterns that are
/// not plain identifiers come through as written.
fn split_parameters(list: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut depth = 0i32;
    let mut piece = String::new();

    for ch in list.chars() {
        match ch {
            '<' | '(' | '[' => {
                depth += 1;
                piece.push(ch);
            }
            '>' | ')' | ']' => {
                depth -= 1;
                piece.push(ch);
            }
            ',' if depth <= 0 => {
                push_name(&mut names, &piece);
                piece.clear();
            }
            _ => piece.push(ch),
        }
    }
    push_name(&mut names, &piece);
    names
}

fn push_name(names: &mut Vec<String>, piece: &str) {
    let pattern = piece.split(':').next().unwrap_or_default().trim();
    let pattern = pattern.trim_start_matches('&').trim();
    let pattern = pattern.strip_prefix("mut ").unwrap_or(pattern).trim();
    if pattern.is_empty() || pattern == "self" || pattern == "mut" {
        return;
    }
    names.push(pattern.to_string());
}
