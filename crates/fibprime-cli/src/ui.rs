//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print a plain detail line under a header.
pub fn print_detail(label: &str, value: &str) {
    if is_color_disabled() {
        println!("  {label}: {value}");
    } else {
        println!("  {}: {value}", style(label).dim());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print a finding that ends the search. Goes to stdout: it is the result.
pub fn print_found(text: &str) {
    if is_color_disabled() {
        println!("[FOUND] {text}");
    } else {
        println!("{} {text}", style("[FOUND]").yellow().bold());
    }
}

/// Print a warning message.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        println!("[WARN] {text}");
    } else {
        println!("{} {text}", style("[WARN]").yellow());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
