//! Sandbox scenario, kept as a `c() -> b() -> a()` call chain so the stack
//! dumps have real frames to show.

use gander::{Record, Value};

pub fn run() {
    c();
}

fn a() {
    gander::display_dump(
        true,
        Some("What happens if I enter a boolean into the debugger and request it show no backtrace?"),
        "",
        false,
    );

    let object = Record::new("Debugger")
        .method("log_dump")
        .method("display_dump")
        .method("caller_parameter_names")
        .method("run_with_stats");
    gander::display_dump(
        object,
        Some("What happens if I enter an object and request only the 'last' call in the backtrace?"),
        "last",
        false,
    );

    gander::display_dump(
        Value::Null,
        Some("What happens if I pass no object ('null'), request a full backtrace ('all') and ask to terminate?"),
        "all",
        true,
    );

    println!("This is never shown, that's what.");
}

fn b() {
    a();
}

fn c() {
    b();
}
