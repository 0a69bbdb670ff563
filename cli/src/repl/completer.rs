use rustyline::completion::Pair;

const COMMANDS: &[&str] = &[".help", ".trace", ".log", ".params", ".stats", ".exit"];
const LITERALS: &[&str] = &["true", "false", "null"];

pub fn complete_line(line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let safe_pos = pos.min(line.len());
    let prefix = &line[..safe_pos];

    if prefix.starts_with('.') {
        let matches = COMMANDS
            .iter()
            .copied()
            .filter(|cmd| cmd.starts_with(prefix))
            .collect::<Vec<_>>();
        return (0, pairs(&matches));
    }

    let start = word_start(prefix);
    let needle = &prefix[start..];
    if needle.is_empty() {
        return (start, Vec::new());
    }
    let words = LITERALS
        .iter()
        .copied()
        .filter(|word| word.starts_with(needle))
        .collect::<Vec<_>>();
    (start, pairs(&words))
}

fn pairs(values: &[&str]) -> Vec<Pair> {
    values
        .iter()
        .map(|v| Pair {
            display: (*v).to_string(),
            replacement: (*v).to_string(),
        })
        .collect()
}

fn word_start(prefix: &str) -> usize {
    prefix
        .char_indices()
        .rev()
        .find(|(_, ch)| !is_ident_char(*ch))
        .map_or(0, |(idx, ch)| idx + ch.len_utf8())
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
