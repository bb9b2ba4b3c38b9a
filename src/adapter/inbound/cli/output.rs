//! CLI output formatting.
//!
//! Results go to stdout, everything else to stderr, so the default JSON
//! output can be piped straight into other tools. Quiet mode suppresses the
//! stderr summary but never the results.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::command::ColorChoice;
use super::validate;
use crate::application::ViewPointReport;
use crate::domain::ViewPoint;
use crate::error::{InputError, Result};
use crate::infrastructure::config::settings::OutputFormat;

/// Runtime output mode shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputMode {
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputMode {
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

static OUTPUT_MODE: OnceLock<RwLock<OutputMode>> = OnceLock::new();

fn mode_cell() -> &'static RwLock<OutputMode> {
    OUTPUT_MODE.get_or_init(|| RwLock::new(OutputMode::default()))
}

fn read_mode() -> OutputMode {
    match mode_cell().read() {
        Ok(mode) => *mode,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_mode(mode: OutputMode) {
    match mode_cell().write() {
        Ok(mut current) => *current = mode,
        Err(poisoned) => *poisoned.into_inner() = mode,
    }
}

/// Apply output settings from CLI flags.
///
/// Call this early in the entry point, before anything is printed.
pub fn configure(mode: OutputMode, color: ColorChoice) {
    write_mode(mode);
    match color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => owo_colors::unset_override(),
    }
}

#[derive(Tabled)]
struct ViewPointRow {
    #[tabled(rename = "Element")]
    element_id: i64,
    #[tabled(rename = "Height")]
    height: f64,
}

/// Render view points in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_view_points(view_points: &[ViewPoint], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view_points)?),
        OutputFormat::Table => {
            let rows = view_points.iter().map(|view_point| ViewPointRow {
                element_id: view_point.element_id().value(),
                height: view_point.height(),
            });
            Ok(Table::new(rows).with(Style::rounded()).to_string())
        }
    }
}

/// Print the search results to stdout and a summary to stderr.
///
/// # Errors
///
/// Returns an error if the results cannot be rendered.
pub fn view_points(report: &ViewPointReport, format: OutputFormat) -> Result<()> {
    println!("{}", render_view_points(&report.view_points, format)?);

    if format == OutputFormat::Table {
        summary(report);
    }
    Ok(())
}

fn summary(report: &ViewPointReport) {
    if read_mode().quiet {
        return;
    }

    let line = format!(
        "{} view points from {} elements in {}ms",
        report.view_points.len(),
        report.element_count,
        report.elapsed.as_millis()
    );
    eprintln!(
        "{}",
        line.if_supports_color(Stream::Stderr, |text| text.dimmed())
    );
}

/// Print a rejected-argument message with its hint to stderr.
pub fn input_error(err: &InputError) {
    error(err);
    if !read_mode().quiet {
        let hint = format!("help: {}", validate::hint(err));
        eprintln!(
            "  {}",
            hint.if_supports_color(Stream::Stderr, |text| text.dimmed())
        );
    }
    error("An error occurred processing the input parameters.");
}

/// Print an error line to stderr.
pub fn error(message: impl Display) {
    let mark = "×";
    eprintln!(
        "{} {}",
        mark.if_supports_color(Stream::Stderr, |text| text.red()),
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ElementId;

    fn sample() -> Vec<ViewPoint> {
        vec![
            ViewPoint::new(ElementId::new(4), 2.5),
            ViewPoint::new(ElementId::new(1), 1.25),
        ]
    }

    #[test]
    fn json_is_a_pretty_array() {
        let rendered = render_view_points(&sample(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                { "element_id": 4, "value": 2.5 },
                { "element_id": 1, "value": 1.25 }
            ])
        );
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn empty_json_is_an_empty_array() {
        assert_eq!(render_view_points(&[], OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn table_has_headers_and_rows() {
        let rendered = render_view_points(&sample(), OutputFormat::Table).unwrap();
        assert!(rendered.contains("Element"));
        assert!(rendered.contains("Height"));
        assert!(rendered.contains("2.5"));
        assert!(rendered.contains("1.25"));
    }

    #[test]
    fn configure_stores_the_output_mode() {
        configure(OutputMode::new(true), ColorChoice::Never);
        assert!(read_mode().quiet);

        configure(OutputMode::default(), ColorChoice::Auto);
        assert!(!read_mode().quiet);
    }

    #[test]
    fn table_shows_negative_element_ids() {
        let rendered =
            render_view_points(&[ViewPoint::new(ElementId::new(-8), 1.0)], OutputFormat::Table)
                .unwrap();
        assert!(rendered.contains("-8"));
    }
}
