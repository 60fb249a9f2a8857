//! Boxplot figures of execution time per algorithm, drawn as SVG.

use crate::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::collections::BTreeMap;
use std::ops::Range;

/// Algorithms whose display name contains this are recursive variants.
pub const RECURSIVE_MARKER: &str = "Recursive";
pub const Y_AXIS_LABEL: &str = "Execution Time (ms)";

const ALL_TITLE: &str = "Boxplot of execution time for each algorithm";
const NON_RECURSIVE_TITLE: &str = "Boxplot of execution time for each non-recursive algorithm";

const FIGURE_SIZE: (u32, u32) = (1200, 600);
const BOX_COLOR: RGBColor = RGBColor(76, 114, 176);
/// Half the box width, in category units.
const BOX_HALF_WIDTH: f64 = 0.3;
const CAP_HALF_WIDTH: f64 = 0.15;
const FENCE_IQR: f64 = 1.5;

/// One box: an algorithm's quartiles, Tukey whiskers and the samples beyond
/// the whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSeries {
    pub name: String,
    pub samples: usize,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    /// Smallest sample not below `lower_quartile - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Largest sample not above `upper_quartile + 1.5 * IQR`.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxSeries {
    /// None when there are no finite values to summarize.
    pub fn new(name: &str, values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let lower_quartile = percentile(&sorted, 0.25);
        let median = percentile(&sorted, 0.5);
        let upper_quartile = percentile(&sorted, 0.75);
        let iqr = upper_quartile - lower_quartile;
        let lower_fence = lower_quartile - FENCE_IQR * iqr;
        let upper_fence = upper_quartile + FENCE_IQR * iqr;

        let inside = || sorted.iter().copied().filter(|v| (lower_fence..=upper_fence).contains(v));
        // The quartiles lie within the fences, so at least one sample does too.
        let lower_whisker = inside().next().unwrap_or(lower_quartile);
        let upper_whisker = inside().last().unwrap_or(upper_quartile);

        let outliers = values
            .iter()
            .copied()
            .filter(|v| v.is_finite() && (*v < lower_fence || *v > upper_fence))
            .collect();

        Some(Self {
            name: name.to_string(),
            samples: sorted.len(),
            lower_quartile,
            median,
            upper_quartile,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

/// Linear interpolation between closest ranks; `sorted` must be non-empty.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub show_outliers: bool,
    /// Sorted by algorithm name.
    pub boxes: Vec<BoxSeries>,
}

impl Figure {
    pub fn algorithms(&self) -> Vec<String> {
        self.boxes.iter().map(|b| b.name.clone()).collect()
    }
}

/// The three comparison figures:
/// all algorithms, non-recursive only, and non-recursive without outliers.
pub fn build_figures(series: &BTreeMap<String, Vec<f64>>) -> Vec<Figure> {
    let all: Vec<BoxSeries> = series
        .iter()
        .filter_map(|(name, values)| BoxSeries::new(name, values))
        .collect();
    let non_recursive: Vec<BoxSeries> = all
        .iter()
        .filter(|b| !b.name.contains(RECURSIVE_MARKER))
        .cloned()
        .collect();

    vec![
        Figure {
            title: ALL_TITLE.to_string(),
            show_outliers: true,
            boxes: all,
        },
        Figure {
            title: NON_RECURSIVE_TITLE.to_string(),
            show_outliers: true,
            boxes: non_recursive.clone(),
        },
        Figure {
            title: NON_RECURSIVE_TITLE.to_string(),
            show_outliers: false,
            boxes: non_recursive,
        },
    ]
}

/// Vertical range covering every drawn element, padded by 5%.
fn y_range(figure: &Figure) -> Range<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;

    for b in &figure.boxes {
        lo = lo.min(b.lower_whisker);
        hi = hi.max(b.upper_whisker);
        if figure.show_outliers {
            for v in &b.outliers {
                lo = lo.min(*v);
                hi = hi.max(*v);
            }
        }
    }

    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    if hi - lo <= f64::EPSILON {
        return lo - 1.0..hi + 1.0;
    }
    let pad = (hi - lo) * 0.05;
    lo - pad..hi + pad
}

/// Render one figure to an SVG document.
pub fn render_svg(figure: &Figure) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        if figure.boxes.is_empty() {
            let root = root.titled(&figure.title, ("sans-serif", 22))?;
            root.draw(&Text::new(
                "no samples",
                (20, 20),
                ("sans-serif", 16).into_font().color(&BLACK),
            ))?;
            root.present()?;
        } else {
            draw_boxes(&root, figure)?;
            root.present()?;
        }
    }
    Ok(svg)
}

/// `WithKeyPoints` opts out of default formatting, which `configure_mesh`
/// requires; this wrapper delegates to it unchanged while using the default
/// formatter (overridden by `x_label_formatter` below).
struct KeyPointAxis(plotters::coord::combinators::WithKeyPoints<plotters::coord::types::RangedCoordf64>);

impl Ranged for KeyPointAxis {
    type FormatOption = plotters::coord::ranged1d::DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.0.map(value, limit)
    }

    fn key_points<Hint: plotters::coord::ranged1d::KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        self.0.key_points(hint)
    }

    fn range(&self) -> Range<f64> {
        self.0.range()
    }

    fn axis_pixel_range(&self, limit: (i32, i32)) -> Range<i32> {
        self.0.axis_pixel_range(limit)
    }
}

fn draw_boxes(root: &DrawingArea<SVGBackend<'_>, Shift>, figure: &Figure) -> Result<()> {
    let names = figure.algorithms();
    // Box i is centered on x = i; ticks sit only on the box centers.
    let centers: Vec<f64> = (0..names.len()).map(|i| i as f64).collect();
    let x_range = KeyPointAxis((-0.5..names.len() as f64 - 0.5).with_key_points(centers));

    let mut chart = ChartBuilder::on(root)
        .caption(&figure.title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(220)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range(figure))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(names.len())
        .x_label_formatter(&|x| {
            names
                .get(x.round() as usize)
                .cloned()
                .unwrap_or_default()
        })
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc(Y_AXIS_LABEL)
        .draw()?;

    for (i, b) in figure.boxes.iter().enumerate() {
        let x = i as f64;
        let (left, right) = (x - BOX_HALF_WIDTH, x + BOX_HALF_WIDTH);
        let (cap_left, cap_right) = (x - CAP_HALF_WIDTH, x + CAP_HALF_WIDTH);
        let line = BLACK.stroke_width(1);

        chart.draw_series([Rectangle::new(
            [(left, b.lower_quartile), (right, b.upper_quartile)],
            BOX_COLOR.mix(0.6).filled(),
        )])?;
        chart.draw_series([
            Rectangle::new([(left, b.lower_quartile), (right, b.upper_quartile)], line),
        ])?;
        chart.draw_series([
            PathElement::new(vec![(left, b.median), (right, b.median)], BLACK.stroke_width(2)),
            PathElement::new(vec![(x, b.upper_quartile), (x, b.upper_whisker)], line),
            PathElement::new(vec![(x, b.lower_quartile), (x, b.lower_whisker)], line),
            PathElement::new(vec![(cap_left, b.upper_whisker), (cap_right, b.upper_whisker)], line),
            PathElement::new(vec![(cap_left, b.lower_whisker), (cap_right, b.lower_whisker)], line),
        ])?;

        if figure.show_outliers {
            chart.draw_series(
                b.outliers
                    .iter()
                    .map(|v| Circle::new((x, *v), 3, BLACK.filled())),
            )?;
        }
    }

    Ok(())
}
