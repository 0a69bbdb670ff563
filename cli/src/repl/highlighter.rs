use std::borrow::Cow;

use owo_colors::OwoColorize;

const LITERALS: [&str; 3] = ["true", "false", "null"];

pub fn highlight_line(line: &str) -> Cow<'_, str> {
    if line.starts_with('.') {
        return Cow::Owned(line.bright_blue().to_string());
    }
    let mut out = line.to_string();
    for literal in LITERALS {
        out = out.replace(literal, &literal.cyan().to_string());
    }
    Cow::Owned(out)
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}

pub fn highlight_hint(hint: &str) -> Cow<'_, str> {
    Cow::Owned(hint.bright_black().to_string())
}
