pub fn hint_for(line: &str, pos: usize) -> Option<String> {
    if pos < line.len() {
        return None;
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed == "." {
        return Some("help".to_string());
    }
    if trimmed == ".trace" {
        return Some(" none|last|all".to_string());
    }
    if trimmed == "{" {
        return Some("\"key\": \"value\"}".to_string());
    }

    None
}
