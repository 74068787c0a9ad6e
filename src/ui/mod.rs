//! Console presentation
//!
//! Summary lines go to stdout. Everything else (verbose diagnostics, the
//! fetch spinner, per-record changes) goes to stderr so stdout stays a single
//! machine-readable line.

pub mod summary;

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::merge::{Change, ChangeKind};

/// Stderr reporter gated by `--verbose`
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Diagnostic line, shown only in verbose mode
    pub fn debug(&self, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{}", Style::new().dim().apply_to(message.as_ref()));
        }
    }

    /// Per-record change line, shown only in verbose mode
    pub fn change(&self, change: &Change) {
        if self.verbose {
            eprintln!("{}", format_change(change));
        }
    }

    /// Spinner shown while `message` is in progress
    ///
    /// indicatif hides it when stderr is not a terminal. Verbose mode prints a
    /// plain line instead so it does not interleave with debug output.
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.verbose {
            self.debug(format!("{message}..."));
            return None;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template(&format!("{{spinner}} {message}..."))
        {
            pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
        }
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    }
}

/// Clear a spinner created by [`Reporter::spinner`]
pub fn finish_spinner(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}

/// Render one change, e.g. `  ~ Name (2020-01-01 -> 2021-01-01)`
pub fn format_change(change: &Change) -> String {
    match &change.kind {
        ChangeKind::Updated { from, to } => format!(
            "  {} {} ({} -> {})",
            Style::new().yellow().apply_to("~"),
            Style::new().bold().apply_to(&change.name),
            from,
            to
        ),
        ChangeKind::Added => format!(
            "  {} {}",
            Style::new().green().apply_to("+"),
            Style::new().bold().apply_to(&change.name)
        ),
    }
}
