//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors (stderr)
//! - Cyan: hints (stderr)
//! - Dimmed: secondary status lines

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ secret db not found in namespace prod`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ set $EDITOR or pass --editor`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan().for_stderr(), style(msg).cyan().for_stderr());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a dimmed status line to stdout.
///
/// Example: `No changes detected.`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Print a plain status line to stdout, uncolored so scripts can match it.
///
/// Example: `secret/db edited`
pub fn status(msg: &str) {
    println!("{}", msg);
}
