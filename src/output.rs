//! Console output: per-locale spinners and colored summaries.
//!
//! Spinners only draw on a terminal. Without one, each finished file is
//! printed as a plain line instead so piped output keeps the same facts.

use crate::api::RemoteFile;
use crate::status::LocaleStatus;
use crate::sync::{SyncDirection, SyncOutcome, SyncProgress, SyncReport};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(80);

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
}

/// A single spinner for one-shot operations such as `status`
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        if !std::io::stderr().is_terminal() {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style());
        bar.set_message(message.into());
        bar.enable_steady_tick(TICK);
        Self { bar: Some(bar) }
    }

    pub fn succeed(self, message: impl Into<String>) {
        let line = format!("{} {}", "✔".green(), message.into());
        match self.bar {
            Some(bar) => bar.finish_with_message(line),
            None => println!("{}", line),
        }
    }

    pub fn fail(self, message: impl Into<String>) {
        let line = format!("{} {}", "✖".red(), message.into());
        match self.bar {
            Some(bar) => bar.finish_with_message(line),
            None => eprintln!("{}", line),
        }
    }
}

/// One spinner per file, keyed by locale.
pub struct ConsoleProgress {
    multi: Option<MultiProgress>,
    bars: Mutex<HashMap<String, ProgressBar>>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        let multi = std::io::stderr().is_terminal().then(MultiProgress::new);
        Self {
            multi,
            bars: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

fn started_message(direction: SyncDirection, file: &RemoteFile) -> String {
    match direction {
        SyncDirection::Pull => format!(
            "Pulling file for {} locale in {}",
            file.locale_code.bold(),
            file.name
        ),
        SyncDirection::Push => format!(
            "Pushing file for {} locale : {}",
            file.locale_code.bold(),
            file.name
        ),
    }
}

/// Final line for a finished file
pub fn outcome_line(direction: SyncDirection, outcome: &SyncOutcome) -> String {
    let verb = match direction {
        SyncDirection::Pull => "pulled",
        SyncDirection::Push => "pushed",
    };
    if outcome.is_success() {
        let mut line = format!(
            "{} {}\t{} {}",
            "✔".green(),
            outcome.locale_code.bold(),
            verb,
            outcome.file_name
        );
        if let Some(detail) = &outcome.detail {
            line.push_str(&format!(" ({})", detail).dimmed().to_string());
        }
        line
    } else {
        format!(
            "{} {}\tfailed to {} {}: {}",
            "✖".red(),
            outcome.locale_code.bold(),
            direction.as_str(),
            outcome.file_name,
            outcome.detail.as_deref().unwrap_or("unknown error").red()
        )
    }
}

impl SyncProgress for ConsoleProgress {
    fn file_started(&self, direction: SyncDirection, file: &RemoteFile) {
        let Some(multi) = &self.multi else {
            return;
        };
        let bar = multi.add(ProgressBar::new_spinner());
        bar.set_style(spinner_style());
        bar.set_message(started_message(direction, file));
        bar.enable_steady_tick(TICK);
        if let Ok(mut bars) = self.bars.lock() {
            bars.insert(file.locale_code.clone(), bar);
        }
    }

    fn file_finished(&self, direction: SyncDirection, outcome: &SyncOutcome) {
        let line = outcome_line(direction, outcome);
        let bar = self
            .bars
            .lock()
            .ok()
            .and_then(|mut bars| bars.remove(&outcome.locale_code));
        match bar {
            Some(bar) => bar.finish_with_message(line),
            None if outcome.is_success() => println!("{}", line),
            None => eprintln!("{}", line),
        }
    }
}

/// Print warnings for unmatched locales and the closing summary line.
pub fn print_report(report: &SyncReport) {
    for locale in &report.unmatched_locales {
        eprintln!(
            "{} locale {} has no file in this project, skipped",
            "warning:".yellow().bold(),
            locale.bold()
        );
    }

    let failed = report.failed();
    let summary = format!(
        "{}: {} succeeded, {} failed",
        report.direction.as_str(),
        report.succeeded(),
        failed
    );
    if failed > 0 {
        println!("{}", summary.red());
    } else {
        println!("{}", summary.green());
    }
}

/// Print one line per locale with its completion.
pub fn print_status(statuses: &[LocaleStatus]) {
    for status in statuses {
        let percent = format!("{}%", status.percent_display());
        if status.empty {
            println!(
                "{}\t Translated: {} {}",
                status.locale_code,
                percent.green(),
                "(no strings)".dimmed()
            );
        } else {
            println!("{}\t Translated: {}", status.locale_code, percent.green());
        }
    }
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".red().bold(), err);
}
