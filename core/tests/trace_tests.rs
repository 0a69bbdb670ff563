use gander::trace::capture;
use gander::{StackCapture, StackFrame, TraceSelector};

struct ScriptedCapture(Vec<StackFrame>);

impl StackCapture for ScriptedCapture {
    fn frames(&self) -> Vec<StackFrame> {
        self.0.clone()
    }
}

fn frame(function: &str, file: &str, line: u32) -> StackFrame {
    StackFrame {
        function: function.to_string(),
        file: file.to_string(),
        line,
        module: function.rfind("::").map(|idx| function[..idx].to_string()),
    }
}

fn scripted() -> ScriptedCapture {
    ScriptedCapture(vec![
        frame("backtrace::backtrace::trace", "backtrace/src/lib.rs", 1),
        frame("gander::trace::capture::capture", "core/src/trace/capture.rs", 80),
        frame("gander::debugger::Debugger::log_dump", "core/src/debugger.rs", 70),
        frame("demo::a", "demo/src/main.rs", 9),
        frame("demo::b", "demo/src/main.rs", 21),
        frame("demo::c", "demo/src/main.rs", 26),
    ])
}

#[test]
fn none_yields_no_frames_at_any_depth() {
    let summary = capture(&scripted(), TraceSelector::None);

    assert!(summary.frames.is_empty());
    assert_eq!(summary.caller, "(Debug in demo/src/main.rs at line: 9)");
}

#[test]
fn last_yields_exactly_the_nearest_caller() {
    let summary = capture(&scripted(), TraceSelector::Last);

    assert_eq!(summary.frames.len(), 1);
    assert_eq!(summary.frames[0].function, "demo::a");
}

#[test]
fn all_yields_every_non_helper_frame_innermost_first() {
    let summary = capture(&scripted(), TraceSelector::All);

    let names: Vec<&str> = summary
        .frames
        .iter()
        .map(|f| f.function.as_str())
        .collect();
    assert_eq!(names, ["demo::a", "demo::b", "demo::c"]);
}

#[test]
fn helper_frames_never_reach_the_output() {
    let rendered = capture(&scripted(), TraceSelector::All).render();

    assert!(!rendered.contains("gander::"));
    assert!(!rendered.contains("backtrace::"));
}

#[test]
fn empty_stack_produces_empty_summary_and_no_frames() {
    let summary = capture(&ScriptedCapture(Vec::new()), TraceSelector::All);

    assert!(summary.caller.is_empty());
    assert!(summary.frames.is_empty());
    // Empty selection still renders its collection marker.
    assert_eq!(summary.render(), "\n[]");
}

#[test]
fn all_helper_stack_behaves_like_an_empty_one() {
    let capture_source = ScriptedCapture(vec![
        frame("gander::format::format_value", "core/src/format/mod.rs", 20),
        frame("gander::debugger::Debugger::log_dump", "core/src/debugger.rs", 70),
    ]);
    let summary = capture(&capture_source, TraceSelector::Last);

    assert!(summary.caller.is_empty());
    assert!(summary.frames.is_empty());
}

#[test]
fn none_renders_just_the_summary_line() {
    let rendered = capture(&scripted(), TraceSelector::None).render();

    assert_eq!(rendered, "(Debug in demo/src/main.rs at line: 9)\n");
}

#[test]
fn unresolved_and_noise_frames_are_stripped_while_leading() {
    let capture_source = ScriptedCapture(vec![
        frame("<unknown>", "", 0),
        frame("std::backtrace::Backtrace::capture", "library/std/src/backtrace.rs", 1),
        frame("demo::main", "demo/src/main.rs", 3),
    ]);
    let summary = capture(&capture_source, TraceSelector::All);

    assert_eq!(summary.frames.len(), 1);
    assert_eq!(summary.frames[0].function, "demo::main");
}

#[test]
fn only_leading_helper_frames_are_discarded() {
    let capture_source = ScriptedCapture(vec![
        frame("gander::debugger::Debugger::log_dump", "core/src/debugger.rs", 70),
        frame("demo::wrapper", "demo/src/lib.rs", 12),
        frame("gander::params::caller_parameter_names", "core/src/params.rs", 30),
        frame("demo::main", "demo/src/main.rs", 3),
    ]);
    let summary = capture(&capture_source, TraceSelector::All);

    // Stripping stops at the first non-helper frame; later frames are kept
    // as-is, whatever they belong to.
    assert_eq!(summary.frames.len(), 3);
    assert_eq!(summary.frames[0].function, "demo::wrapper");
}

#[test]
fn trait_impl_frames_count_as_helper_frames() {
    let capture_source = ScriptedCapture(vec![
        frame(
            "<gander::trace::capture::RuntimeCapture as gander::trace::capture::StackCapture>::frames",
            "core/src/trace/capture.rs",
            24,
        ),
        frame("demo::main", "demo/src/main.rs", 3),
    ]);
    let summary = capture(&capture_source, TraceSelector::Last);

    assert_eq!(summary.frames.len(), 1);
    assert_eq!(summary.frames[0].function, "demo::main");
}

#[test]
fn bare_name_is_the_final_path_segment() {
    assert_eq!(frame("demo::nested::run", "x.rs", 1).bare_name(), "run");
    assert_eq!(frame("main", "x.rs", 1).bare_name(), "main");
}
