use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
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
        }
    }

    /// A reporter when stderr is an interactive terminal
    pub fn for_terminal() -> Option<Self> {
        let reporter = Self::new();
        reporter.term.is_term().then_some(reporter)
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn checking_document(&self, path: &Path) {
        let _ = self.term.clear_line();
        eprint!(
            "\r{} Found: {}... ",
            style(self.next_frame()).cyan(),
            style(path.display()).dim()
        );
    }

    pub fn finish_discovery(&self, count: usize) {
        let _ = self.term.clear_line();
        if count == 0 {
            eprintln!("\r{} No graph documents found", style("✗").red());
        } else {
            eprintln!(
                "\r{} Discovery complete: found {} {}",
                style("✓").green(),
                style(count).yellow().bold(),
                pluralize("document", count)
            );
        }
    }

    pub fn start_rendering(&self, total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Rendering");
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }
}
