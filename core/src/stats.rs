use std::time::Instant;

use crate::debugger::Debugger;
use crate::trace::TraceSelector;
use crate::value::Value;

/// Where [`Debugger::run_with_stats`] routes its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsTarget {
    /// The debugger's log sink.
    #[default]
    Log,
    /// The debugger's display sink.
    Page,
    /// Drop the record; the wrapped call still runs and returns.
    Discard,
}

impl StatsTarget {
    /// Lenient like [`TraceSelector::parse`]; unrecognized targets discard.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "log" => StatsTarget::Log,
            "2" | "page" => StatsTarget::Page,
            _ => StatsTarget::Discard,
        }
    }
}

impl From<&str> for StatsTarget {
    fn from(input: &str) -> Self {
        StatsTarget::parse(input)
    }
}

impl From<i64> for StatsTarget {
    fn from(code: i64) -> Self {
        match code {
            1 => StatsTarget::Log,
            2 => StatsTarget::Page,
            _ => StatsTarget::Discard,
        }
    }
}

/// Run `f`, dump `{Runtime, Memory usage}` to the chosen sink, and pass
/// `f`'s result through so the wrapped call is transparent to its caller.
///
/// Measurement happens after the call, output after measurement, one sink
/// write per invocation (none for [`StatsTarget::Discard`]). Statistics are
/// best-effort: there is no handling around `f`, so a panic inside it
/// propagates and abandons the record entirely.
pub(crate) fn run_with_stats<T>(
    debugger: &Debugger,
    target: StatsTarget,
    f: impl FnOnce() -> T,
) -> T {
    let started = Instant::now();
    let rss_before = peak_rss_bytes();

    let output = f();

    let runtime = started.elapsed();
    let memory_use = peak_rss_bytes().saturating_sub(rss_before);

    let statistics = Value::Map(vec![
        ("Runtime".to_string(), Value::Str(format!("{runtime:?}"))),
        ("Memory usage".to_string(), Value::Int(memory_use as i64)),
    ]);

    match target {
        StatsTarget::Log => {
            debugger.log_dump(statistics, Some("Runtime:"), TraceSelector::None, false)
        }
        StatsTarget::Page => {
            debugger.display_dump(statistics, Some("Runtime:"), TraceSelector::None, false)
        }
        StatsTarget::Discard => {}
    }

    output
}

/// Peak resident set size of the process, in bytes. Best-effort: 0 where the
/// probe is unavailable, which makes the reported delta 0 as well.
#[cfg(unix)]
fn peak_rss_bytes() -> u64 {
    // SAFETY: getrusage only writes into the struct handed to it.
    unsafe {
        let mut usage: libc::rusage = std::mem::zeroed();
        if libc::getrusage(libc::RUSAGE_SELF, &mut usage) != 0 {
            return 0;
        }
        // ru_maxrss is kilobytes on Linux, bytes on macOS.
        #[cfg(target_os = "macos")]
        let bytes = usage.ru_maxrss as u64;
        #[cfg(not(target_os = "macos"))]
        let bytes = (usage.ru_maxrss as u64) * 1024;
        bytes
    }
}

#[cfg(not(unix))]
fn peak_rss_bytes() -> u64 {
    0
}
