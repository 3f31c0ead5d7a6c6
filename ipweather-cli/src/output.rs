//! Human-friendly rendering of the widget's regions.

use chrono::Local;
use ipweather_core::{CycleOutcome, CycleReport, DisplayState, MemoryView, Region};

pub fn format_report(view: &MemoryView, report: &CycleReport) -> String {
    let time = report.completed_at.with_timezone(&Local).format("%H:%M:%S");
    let mut out = format!("[{time}] {}\n", outcome_label(report.outcome));

    match view.display_state() {
        DisplayState::Loading => out.push_str("  loading...\n"),
        DisplayState::Failure => {
            out.push_str("  Unable to retrieve weather for your location.\n");
        }
        DisplayState::Content => {
            let regions = view.snapshot();
            for region in [Region::City, Region::Temperature, Region::Sky, Region::WeatherIcon] {
                let state = regions.get(&region).cloned().unwrap_or_default();
                let text = state.text.unwrap_or_else(|| "-".to_string());
                match state.color {
                    Some(color) => {
                        out.push_str(&format!("  {:<13}{text} ({color})\n", region.as_str()));
                    }
                    None => out.push_str(&format!("  {:<13}{text}\n", region.as_str())),
                }
            }
        }
    }

    out
}

fn outcome_label(outcome: CycleOutcome) -> &'static str {
    match outcome {
        CycleOutcome::Content => "updated",
        CycleOutcome::Failure => "failed",
        CycleOutcome::Stalled => "no response",
    }
}
