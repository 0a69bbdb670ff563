mod completer;
mod helper;
mod highlighter;
mod hinter;

use gander::{Debugger, StatsTarget, TraceSelector, Value};
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;

struct ReplState {
    debugger: Debugger,
    selector: TraceSelector,
    to_log: bool,
}

pub fn run() -> rustyline::Result<()> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper));

    let mut state = ReplState {
        debugger: Debugger::new(),
        selector: TraceSelector::None,
        to_log: false,
    };

    println!(
        "{} {}",
        "gander".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!(
        "{}",
        "Enter a JSON value to dump it; .help for commands".bright_black()
    );

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);
                if handle_command(trimmed, &mut state) {
                    continue;
                }
                dump_line(&state, trimmed);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn handle_command(trimmed: &str, state: &mut ReplState) -> bool {
    if trimmed == ".exit" || trimmed == "exit" {
        std::process::exit(0);
    }
    if trimmed == ".help" {
        println!("{}", ".help                show commands".bright_blue());
        println!(
            "{}",
            ".trace <none|last|all>  stack detail for dumps".bright_blue()
        );
        println!(
            "{}",
            ".log                 toggle log-sink routing".bright_blue()
        );
        println!(
            "{}",
            ".params              parameter names of this frame".bright_blue()
        );
        println!(
            "{}",
            ".stats               time a sample workload".bright_blue()
        );
        println!("{}", ".exit                exit REPL".bright_blue());
        return true;
    }
    if let Some(level) = trimmed.strip_prefix(".trace ") {
        state.selector = TraceSelector::parse(level);
        println!("{}", format!("trace set to {:?}", state.selector).green());
        return true;
    }
    if trimmed == ".log" {
        state.to_log = !state.to_log;
        let routing = if state.to_log { "log sink" } else { "display sink" };
        println!("{}", format!("dumps now go to the {routing}").green());
        return true;
    }
    if trimmed == ".params" {
        match state.debugger.caller_parameter_names() {
            Ok(names) => println!("{}", format!("{names:?}").bright_blue()),
            Err(err) => eprintln!("{} {err}", "params error:".red().bold()),
        }
        return true;
    }
    if trimmed == ".stats" {
        run_sample_stats(state);
        return true;
    }
    false
}

/// A small workload wrapped in `run_with_stats`, so the statistics record
/// has something to measure.
fn run_sample_stats(state: &ReplState) {
    let target = if state.to_log {
        StatsTarget::Log
    } else {
        StatsTarget::Page
    };
    let total = state.debugger.run_with_stats(target, || {
        (0..1_000_000u64).filter(|n| n % 3 == 0).sum::<u64>()
    });
    println!("{}", format!("workload result: {total}").bright_black());
}

fn dump_line(state: &ReplState, line: &str) {
    match serde_json::from_str::<serde_json::Value>(line) {
        Ok(json) => {
            let value = Value::from(json);
            if state.to_log {
                state.debugger.log_dump(value, None, state.selector, false);
            } else {
                state.debugger.display_dump(value, None, state.selector, false);
            }
        }
        Err(err) => eprintln!("{} {err}", "parse error:".red().bold()),
    }
}

pub fn needs_more_input(source: &str) -> bool {
    let mut braces = 0i32;
    let mut brackets = 0i32;
    let mut in_string = false;
    let mut escaped = false;

    for ch in source.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
            continue;
        }
        if ch == '"' {
            in_string = !in_string;
            continue;
        }
        if in_string {
            continue;
        }
        match ch {
            '{' => braces += 1,
            '}' => braces -= 1,
            '[' => brackets += 1,
            ']' => brackets -= 1,
            _ => {}
        }
    }

    in_string || braces > 0 || brackets > 0
}
