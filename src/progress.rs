use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::pluralize;

const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// A reporter only when stderr is an interactive terminal
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_discovery(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("{} Discovering schedule files...", style("🔍").cyan());
        let spinner = self.create_spinner("Walking directories...");
        self.current_bar = Some(spinner);
    }

    pub fn reading_file(&self, path: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Reading: {}...", path.display()));
        } else {
            let _ = self.term.clear_line();
            eprint!(
                "\r{} Reading: {}... ",
                style(self.next_frame()).cyan(),
                style(path.display()).dim()
            );
        }
    }

    pub fn finish_discovery(&mut self, count: usize, failed: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        let summary = discovery_summary(count, failed);
        if count == 0 {
            eprintln!("\r{} {}", style("✗").red(), summary);
        } else {
            eprintln!("\r{} {}", style("✓").green(), summary);
        }
    }

    /// Start the evaluation bar; the returned handle is cheap to clone into
    /// worker threads
    pub fn start_evaluation(&mut self, total: usize) -> ProgressBar {
        let pb = self.create_progress_bar(total as u64, "Evaluating schedules");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn finish_evaluation(&mut self, unfinishable: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        if unfinishable == 0 {
            eprintln!(
                "{} Every schedule can be finished! {}",
                style("✓").green().bold(),
                style("🎓").dim()
            );
        } else {
            eprintln!(
                "{} {} {} cannot be finished",
                style("⚠").yellow().bold(),
                style(unfinishable).red().bold(),
                pluralize("outcome", unfinishable)
            );
        }
    }
}

/// One-line outcome of discovery, naming files that failed to load
fn discovery_summary(count: usize, failed: usize) -> String {
    let found = match (count, failed) {
        (0, 0) => return "No schedules found".to_string(),
        (0, _) => "No valid schedules found".to_string(),
        _ => format!("Discovery complete: found {} {}", count, pluralize("schedule", count)),
    };

    if failed == 0 {
        found
    } else {
        format!(
            "{found} ({} {} could not be loaded)",
            failed,
            pluralize("file", failed)
        )
    }
}
