use super::{Cell, Curve, PlotFrame, ReportError, ReportingSink};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
/// A `ReportingSink` which keeps everything it receives
pub struct MemorySink {
    /// Field names and rows of every rendered table
    pub tables: Vec<(Vec<String>, Vec<Vec<Cell>>)>,
    /// Every rendered curve with its frame
    pub plots: Vec<(PlotFrame, Curve)>,
    /// Paths passed to `save_figure`
    pub saved: Vec<PathBuf>,
}

impl MemorySink {
    /// An empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// The curves rendered into the plot titled `title`
    pub fn curves_titled<'a>(&'a self, title: &'a str) -> impl Iterator<Item = &'a Curve> + 'a {
        self.plots
            .iter()
            .filter(move |(frame, _)| frame.title == title)
            .map(|(_, curve)| curve)
    }
}

impl ReportingSink for MemorySink {
    fn render_table(&mut self, field_names: &[&str], rows: &[Vec<Cell>]) -> Result<(), ReportError> {
        self.tables.push((
            field_names.iter().map(|name| name.to_string()).collect(),
            rows.to_vec(),
        ));
        Ok(())
    }

    fn render_plot(&mut self, frame: &PlotFrame, curve: Curve) -> Result<(), ReportError> {
        self.plots.push((frame.clone(), curve));
        Ok(())
    }

    fn save_figure(&mut self, path: &Path) -> Result<(), ReportError> {
        self.saved.push(path.to_path_buf());
        Ok(())
    }
}
