//! Chart rendering and the HTML report that collects the figures.

pub mod boxplot;
pub mod html;

pub use boxplot::{build_figures, render_svg};
pub use html::render_html_report;

use crate::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct FigureView {
    pub title: String,
    pub algorithms: Vec<String>,
    /// Sample count per algorithm, parallel to `algorithms`.
    pub samples: Vec<usize>,
    pub show_outliers: bool,
    pub svg: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub rows: usize,
    pub algorithms: usize,
    pub samples: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub title: String,
    pub totals: TotalsView,
    pub figures: Vec<FigureView>,
}

/// Render all figures and assemble the report payload.
pub fn build_report(
    title: &str,
    rows: usize,
    series: &BTreeMap<String, Vec<f64>>,
) -> Result<ReportData> {
    let mut figures = Vec::new();
    for figure in build_figures(series) {
        figures.push(FigureView {
            svg: render_svg(&figure)?,
            algorithms: figure.algorithms(),
            samples: figure.boxes.iter().map(|b| b.samples).collect(),
            show_outliers: figure.show_outliers,
            title: figure.title,
        });
    }

    Ok(ReportData {
        title: title.to_string(),
        totals: TotalsView {
            rows,
            algorithms: series.len(),
            samples: series.values().map(Vec::len).sum(),
        },
        figures,
    })
}
