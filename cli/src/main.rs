use std::process;

use clap::Parser;
use owo_colors::OwoColorize;

use gander::{TraceSelector, Value};

mod demo;
mod repl;

#[derive(Parser)]
#[command(name = "gander", about = "A debug-inspection sandbox for the gander library")]
struct Cli {
    /// Run the sandbox scenario (its last dump terminates the process)
    #[arg(long)]
    demo: bool,
    /// Dump one JSON value and exit
    #[arg(long)]
    eval: Option<String>,
    /// Message to print above the dump
    #[arg(long)]
    message: Option<String>,
    /// Stack detail: none, last, or all
    #[arg(long, default_value = "none")]
    trace: String,
    /// Route the dump to the log sink instead of the display sink
    #[arg(long)]
    log: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    // Log dumps land on the `log` facade; without a backend they would be
    // invisible, so the sandbox installs env_logger wide open.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "gander".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    if cli.demo {
        demo::run();
        return;
    }

    if let Some(source) = cli.eval {
        let value = match serde_json::from_str::<serde_json::Value>(&source) {
            Ok(json) => Value::from(json),
            Err(err) => {
                eprintln!("{} invalid JSON: {err}", "error:".red().bold());
                process::exit(1);
            }
        };
        let selector = TraceSelector::parse(&cli.trace);
        if cli.log {
            gander::log_dump(value, cli.message.as_deref(), selector, false);
        } else {
            gander::display_dump(value, cli.message.as_deref(), selector, false);
        }
        return;
    }

    if let Err(err) = repl::run() {
        eprintln!("{} {err}", "repl error:".red().bold());
        process::exit(1);
    }
}
