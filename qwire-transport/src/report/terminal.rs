use super::{styles::Styles, Cell, Curve, PlotFrame, ReportError, ReportingSink};
use itertools::Itertools;
use owo_colors::OwoColorize;
use std::path::Path;

/// Prints tables and curve summaries to the terminal, and writes curves out as delimited text
pub struct TerminalSink {
    term: console::Term,
    styles: Styles,
    /// Every curve rendered since the last save
    curves: Vec<(PlotFrame, Curve)>,
}

impl TerminalSink {
    /// A sink writing to `term`
    pub fn new(term: console::Term) -> Self {
        let mut styles = Styles::default();
        if console::colors_enabled() {
            styles.colorize();
        }
        Self {
            term,
            styles,
            curves: Vec::new(),
        }
    }

    /// A sink writing to standard output
    pub fn stdout() -> Self {
        Self::new(console::Term::stdout())
    }
}

impl ReportingSink for TerminalSink {
    fn render_table(&mut self, field_names: &[&str], rows: &[Vec<Cell>]) -> Result<(), ReportError> {
        let rendered: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        let mut widths: Vec<usize> = field_names.iter().map(|name| name.len()).collect();
        for row in rendered.iter() {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.len());
            }
        }

        let rule = widths
            .iter()
            .map(|width| "-".repeat(width + 2))
            .join("+");
        let rule = format!("+{}+", rule);

        let header = field_names
            .iter()
            .zip(widths.iter())
            .map(|(name, width)| format!(" {:^width$} ", name, width = width))
            .join("|");

        self.term.write_line(&rule)?;
        self.term
            .write_line(&format!("|{}|", header.style(self.styles.header_style)))?;
        self.term.write_line(&rule)?;
        for row in rendered.iter() {
            let line = row
                .iter()
                .zip(widths.iter())
                .map(|(cell, width)| format!(" {:>width$} ", cell, width = width))
                .join("|");
            self.term.write_line(&format!("|{}|", line))?;
        }
        self.term.write_line(&rule)?;
        Ok(())
    }

    fn render_plot(&mut self, frame: &PlotFrame, curve: Curve) -> Result<(), ReportError> {
        let (minimum, maximum) = curve
            .y
            .iter()
            .filter(|value| value.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &value| {
                (lo.min(value), hi.max(value))
            });
        let label = curve
            .label
            .clone()
            .unwrap_or_else(|| format!("curve {}", self.curves.len()));
        self.term.write_line(&format!(
            "{} {}: {} points, {} in [{:.4}, {:.4}]",
            frame.title.style(self.styles.title_style),
            label.style(self.styles.label_style),
            curve.x.len(),
            frame.axis_labels.1,
            minimum,
            maximum,
        ))?;
        self.curves.push((frame.clone(), curve));
        Ok(())
    }

    fn save_figure(&mut self, path: &Path) -> Result<(), ReportError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["figure", "curve", "label", "x", "y"])?;
        for (index, (frame, curve)) in self.curves.iter().enumerate() {
            let label = curve.label.as_deref().unwrap_or_default();
            let index = index.to_string();
            for (x, y) in curve.x.iter().zip(curve.y.iter()) {
                let (x, y) = (x.to_string(), y.to_string());
                writer.write_record([
                    frame.title.as_str(),
                    index.as_str(),
                    label,
                    x.as_str(),
                    y.as_str(),
                ])?;
            }
        }
        writer.flush()?;
        tracing::info!("Wrote {} curves to {}", self.curves.len(), path.display());
        self.curves.clear();
        Ok(())
    }
}
