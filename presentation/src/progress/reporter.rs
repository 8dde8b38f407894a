//! Progress reporting for a workflow run

use colored::Colorize;
use faqsmith_application::WorkflowProgress;
use faqsmith_domain::WorkflowStage;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner that follows the stages of a run
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, stage: WorkflowStage) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        let pb = slot.take().unwrap_or_else(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        pb.set_prefix(stage.display_name());
        *slot = Some(pb);
    }

    fn finish(&self, message: String) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowProgress for ProgressReporter {
    fn on_stage_change(&self, _from: WorkflowStage, to: WorkflowStage) {
        match to {
            WorkflowStage::Done => self.finish(format!("{}", "done".green())),
            WorkflowStage::ErrorHalted => self.finish(format!("{}", "halted".red())),
            WorkflowStage::Idle | WorkflowStage::SelectingSource => {}
            stage => self.start_spinner(stage),
        }
    }

    fn on_status(&self, message: &str) {
        if let Ok(slot) = self.spinner.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(message.to_string());
        }
    }

    fn on_warning(&self, message: &str) {
        let line = format!("{} {}", "!".yellow(), message);
        if let Ok(slot) = self.spinner.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.println(line);
            return;
        }
        eprintln!("{}", line);
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl WorkflowProgress for SimpleProgress {
    fn on_stage_change(&self, _from: WorkflowStage, to: WorkflowStage) {
        match to {
            WorkflowStage::Idle | WorkflowStage::SelectingSource => {}
            WorkflowStage::ErrorHalted => eprintln!("{} {}", "x".red(), to.display_name().bold()),
            WorkflowStage::Done => eprintln!("{} {}", "v".green(), to.display_name().bold()),
            stage => eprintln!("{} {}", "->".cyan(), stage.display_name().bold()),
        }
    }

    fn on_status(&self, message: &str) {
        eprintln!("   {}", message);
    }

    fn on_warning(&self, message: &str) {
        eprintln!("   {} {}", "!".yellow(), message);
    }
}
