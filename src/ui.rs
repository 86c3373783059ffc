//! Centralized UI formatting and color utilities
//!
//! Console presentation for the CLI: severity glyphs, verdict coloring, and
//! the quiet-mode flag. Report strings themselves stay uncolored so they are
//! byte-deterministic; color is applied only at print time.

use colored::{ColoredString, Colorize};

use crate::model::Severity;
use crate::report::{VERDICT_NEEDS_REVISION, VERDICT_READY};

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("INTAKE_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored icon for an issue severity.
///
/// Icons:
/// - Error: ✗ (red)
/// - Warning: ⚠ (yellow)
pub fn severity_icon(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "✗".red(),
        Severity::Warning => "⚠".yellow(),
    }
}

/// Colorize a report line for terminal display. Verdict lines get their
/// status color, check lines keep their glyphs readable.
pub fn colorize_report_line(line: &str) -> String {
    if line == VERDICT_READY {
        return line.green().bold().to_string();
    }
    if line == VERDICT_NEEDS_REVISION {
        return line.red().bold().to_string();
    }
    if line.ends_with('✓') {
        return line.replace('✓', &"✓".green().to_string());
    }
    if line.ends_with('✗') {
        return line.replace('✗', &"✗".red().to_string());
    }
    line.to_string()
}

/// Print a report to stdout with terminal colors, honoring quiet mode for
/// everything except the verdict.
pub fn print_report(report: &str) {
    for line in report.lines() {
        if is_quiet() && line != VERDICT_READY && line != VERDICT_NEEDS_REVISION {
            continue;
        }
        println!("{}", colorize_report_line(line));
    }
}
