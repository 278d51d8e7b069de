/// User interface and status output utilities
///
/// This module handles:
/// - Serialized console output
/// - Colored terminal text
/// - Status message formatting
use crate::runner::Report;
use crate::types::Outcome;
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

/// Execute a function with exclusive access to console output
fn status_lock<F>(f: F)
where
    F: FnOnce(),
{
    lazy_static! {
        static ref LOCK: Mutex<()> = Mutex::new(());
    }
    let _guard = LOCK.lock();
    f();
}

/// Print the "git-versioning: " prefix for status messages
fn print_status_header() {
    eprint!("git-versioning: ");
}

/// Print colored text to stderr, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        match term::stderr() {
            Some(ref mut t) => {
                if t.fg(fg).is_err() {
                    return false;
                }
                let _ = t.attr(term::Attr::Bold);
                if write!(t, "{}", s).is_err() {
                    return false;
                }
                let _ = t.reset();
                true
            }
            None => false,
        }
    }
}

/// Print a status message with "git-versioning: " prefix
pub fn status(s: &str) {
    status_lock(|| {
        print_status_header();
        eprintln!("{}", s);
    });
}

/// Print a warning message with colored "warning" prefix
pub fn print_warning(msg: &str) {
    status_lock(|| {
        print_color("warning", term::color::BRIGHT_YELLOW);
        eprintln!(": {}", msg);
    });
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    status_lock(|| {
        eprintln!();
        print_color("error", term::color::BRIGHT_RED);
        eprintln!(": {}", msg);
        eprintln!();
    });
}

/// One-line summary of a finished run
pub fn summary_line(report: &Report) -> String {
    let info = report.outcome.info();
    let mut line = match &report.outcome {
        Outcome::Resolved { .. } => format!("{} @ {}", info.branch, info.revision_short),
        Outcome::Degraded { cause, .. } => format!("placeholder revision ({})", cause),
    };
    if let Some(clean) = info.clean {
        if !report.outcome.is_degraded() {
            line.push_str(&format!(" [strict clean: {}, loose clean: {}]", clean.strict_clean, clean.loose_clean));
        }
    }
    match &report.written {
        Some(path) => line.push_str(&format!(" -> {}", path.display())),
        None => line.push_str(" (dry run)"),
    }
    line
}
