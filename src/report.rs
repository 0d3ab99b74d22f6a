//! Presence reports and their text/JSON rendering
//!
//! A [`PresenceReport`] keeps every intermediate of one computation so the
//! CLI can explain a total, not just print it.

use crate::cli::OutputFormat;
use crate::interval::{BoundingInterval, Interval, NormalizedIntervalList};
use serde::Serialize;

/// Breakdown of one joint-presence computation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceReport {
    /// Bounding lesson window
    pub lesson: BoundingInterval,
    /// Pupil spans after clipping and merging
    pub pupil: NormalizedIntervalList,
    /// Tutor spans after clipping and merging
    pub tutor: NormalizedIntervalList,
    /// Total pupil time inside the lesson
    pub pupil_presence: u64,
    /// Total tutor time inside the lesson
    pub tutor_presence: u64,
    /// Spans where both were present
    pub joint: Vec<Interval>,
    /// Sum of joint span durations
    pub total: u64,
}

impl PresenceReport {
    pub fn new(
        lesson: BoundingInterval,
        pupil: NormalizedIntervalList,
        tutor: NormalizedIntervalList,
        joint: Vec<Interval>,
    ) -> Self {
        Self {
            lesson,
            pupil_presence: pupil.total_length(),
            tutor_presence: tutor.total_length(),
            total: joint.iter().map(Interval::duration).sum(),
            pupil,
            tutor,
            joint,
        }
    }

    fn write_details(&self, out: &mut String) {
        let joint = if self.joint.is_empty() {
            "(none)".to_string()
        } else {
            self.joint
                .iter()
                .map(Interval::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        out.push_str(&format!("lesson: {} ({})\n", self.lesson, self.lesson.width()));
        out.push_str(&format!("pupil:  {} ({})\n", self.pupil, self.pupil_presence));
        out.push_str(&format!("tutor:  {} ({})\n", self.tutor, self.tutor_presence));
        out.push_str(&format!("joint:  {}\n", joint));
        out.push_str(&format!("total:  {}\n", self.total));
    }
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Crate version that produced the output
    pub version: String,
    /// Format name
    pub format: String,
    /// One entry per input document
    pub results: Vec<PresenceReport>,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "copresence-json-v1".to_string(),
            results: Vec::new(),
        }
    }

    pub fn add_report(&mut self, report: PresenceReport) {
        self.results.push(report);
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Output settings collected from the command line
#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    pub format: OutputFormat,
    /// Print the per-participant breakdown in text mode
    pub details: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            details: false,
        }
    }
}

/// Render reports in the configured format, newline-terminated
pub fn render(reports: Vec<PresenceReport>, config: &ReportConfig) -> serde_json::Result<String> {
    match config.format {
        OutputFormat::Json => {
            let mut output = JsonOutput::new();
            for report in reports {
                output.add_report(report);
            }
            output.to_json().map(|json| json + "\n")
        }
        OutputFormat::Text => Ok(render_text(&reports, config.details)),
    }
}

fn render_text(reports: &[PresenceReport], details: bool) -> String {
    let mut out = String::new();
    for (i, report) in reports.iter().enumerate() {
        if details {
            if i > 0 {
                out.push('\n');
            }
            report.write_details(&mut out);
        } else {
            out.push_str(&format!("{}\n", report.total));
        }
    }
    out
}
