//! Shared CLI output helpers for consistent operator-facing text.
//!
//! In JSON mode every command writes exactly one JSON document to stdout, so
//! the line helpers below stay silent and only [`document`] prints. Errors
//! always go to stderr.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use crate::error::Result;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit a machine-readable JSON document instead of tables.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// True when human-readable lines should not be printed.
fn suppressed() -> bool {
    let config = read_config();
    config.json || config.quiet
}

/// Print a serializable value as the command's JSON document.
pub fn document<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the application header with name and version.
pub fn header() {
    if suppressed() {
        return;
    }
    println!(
        "{} {}",
        "arbmatch".if_supports_color(Stream::Stdout, |t| t.bold()),
        env!("CARGO_PKG_VERSION").if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

/// Print a section header.
pub fn section(title: &str) {
    if suppressed() {
        return;
    }
    println!();
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if suppressed() {
        return;
    }
    println!(
        "  {:<16} {}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        value
    );
}

/// Print a success line.
pub fn success(message: &str) {
    if suppressed() {
        return;
    }
    println!("  {} {}", "✓".if_supports_color(Stream::Stdout, |t| t.green()), message);
}

/// Print a warning line. Shown even in quiet mode.
pub fn warning(message: &str) {
    if is_json() {
        return;
    }
    println!("  {} {}", "⚠".if_supports_color(Stream::Stdout, |t| t.yellow()), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "error": message }));
        return;
    }
    eprintln!("  {} {}", "×".if_supports_color(Stream::Stderr, |t| t.red()), message);
}

/// Print a note/hint.
pub fn note(message: &str) {
    if suppressed() {
        return;
    }
    println!("  {}", message.if_supports_color(Stream::Stdout, |t| t.dimmed()));
}

/// Print a pre-rendered block (tables), indented.
pub fn block(text: &str) {
    if suppressed() {
        return;
    }
    for line in text.lines() {
        println!("  {line}");
    }
}

/// Format dollars with sign coloring: green for gains, red for losses.
pub fn money(value: Decimal) -> String {
    let text = format!("${:.2}", value.round_dp(2));
    if value > Decimal::ZERO {
        format!("{}", text.if_supports_color(Stream::Stdout, |t| t.green()))
    } else if value < Decimal::ZERO {
        format!("{}", text.if_supports_color(Stream::Stdout, |t| t.red()))
    } else {
        text
    }
}

/// Format a percentage with sign coloring.
pub fn percent(value: Decimal) -> String {
    let text = format!("{:.2}%", value.round_dp(2));
    if value > Decimal::ZERO {
        format!("{}", text.if_supports_color(Stream::Stdout, |t| t.green()))
    } else if value < Decimal::ZERO {
        format!("{}", text.if_supports_color(Stream::Stdout, |t| t.red()))
    } else {
        text
    }
}
