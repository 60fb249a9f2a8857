use crate::Result;
use crate::config::PlotConfig;
use crate::model::{columns, series_by_algorithm};
use crate::render;
use crate::store;
use anyhow::{Context, bail};
use std::fs;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotSummary {
    /// Rows left after filtering.
    pub rows: usize,
    pub algorithms: usize,
    pub figures: usize,
}

/// Load the aggregate dataset, group it by algorithm and write the boxplot
/// report.
pub fn run(config: &PlotConfig) -> Result<PlotSummary> {
    let Some(mut data) = store::load(&config.data_path)? else {
        bail!(
            "no dataset at {}; run `bfs-bench ingest` first",
            config.data_path.display()
        );
    };

    let mut title = String::from("BFS execution time");
    if let Some(problem_type) = &config.problem_type {
        data.retain_eq(columns::PROBLEM_TYPE, problem_type)?;
        title.push_str(&format!(" | problem type {}", problem_type));
    }
    if let Some(delay) = config.goal_check_delay {
        data.retain_eq(columns::GOAL_CHECK_DELAY, &delay.to_string())?;
        title.push_str(&format!(" | goal check delay {}", delay));
    }
    if data.is_empty() {
        warn!("no rows left to plot");
    } else {
        debug!(rows = data.len(), "rows after filtering");
    }

    let series = series_by_algorithm(&data)
        .with_context(|| format!("group dataset {}", config.data_path.display()))?;
    let report = render::build_report(&title, data.len(), &series)?;

    let html = render::render_html_report(&report)?;
    fs::write(&config.out_path, html)
        .with_context(|| format!("write report {}", config.out_path.display()))?;
    info!(path = %config.out_path.display(), "wrote report");

    if let Some(dir) = &config.svg_dir {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        for (i, figure) in report.figures.iter().enumerate() {
            let path = dir.join(format!("figure_{}.svg", i + 1));
            fs::write(&path, &figure.svg)
                .with_context(|| format!("write figure {}", path.display()))?;
            debug!(path = %path.display(), "wrote figure");
        }
    }

    Ok(PlotSummary {
        rows: data.len(),
        algorithms: series.len(),
        figures: report.figures.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IngestConfig;
    use crate::log::RunMetadata;
    use crate::pipeline::ingest;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn ingest_log(dir: &Path, name: &str, text: &str, problem_type: &str, delay: u64) {
        let log_path = dir.join(name);
        fs::write(&log_path, text).unwrap();
        ingest::run(&IngestConfig {
            log_path,
            data_path: dir.join("data.csv"),
            metadata: RunMetadata {
                problem_type: problem_type.to_string(),
                goal_check_delay: delay,
            },
        })
        .unwrap();
    }

    fn plot_config(dir: &Path) -> PlotConfig {
        PlotConfig {
            data_path: dir.join("data.csv"),
            out_path: dir.join("report.html"),
            svg_dir: None,
            problem_type: None,
            goal_check_delay: None,
        }
    }

    const RUN_A: &str = "problem_1\n\
                         SyncBFS: 10.0 ms\n\
                         AsyncBFS: 4.0 ms\n\
                         AnyOfBFS: 3.0 ms\n\
                         problem_2\n\
                         SyncBFS: 11.0 ms\n\
                         AsyncBFS: 5.0 ms No solution found!\n\
                         AnyOfBFS: 2.5 ms\n";

    const RUN_B: &str = "problem_1\n\
                         SyncBFS: 20.0 ms\n\
                         TasksBFS: 6.0 ms\n";

    #[test]
    fn writes_report_and_figures() {
        let dir = tempfile::tempdir().unwrap();
        ingest_log(dir.path(), "a.log", RUN_A, "unbalanced", 100);

        let mut cfg = plot_config(dir.path());
        cfg.svg_dir = Some(dir.path().join("svg"));
        let summary = run(&cfg).unwrap();

        assert_eq!(
            summary,
            PlotSummary {
                rows: 6,
                algorithms: 3,
                figures: 3,
            }
        );

        let html = fs::read_to_string(&cfg.out_path).unwrap();
        assert!(html.contains("Boxplot of execution time for each algorithm"));
        assert!(html.contains("Execution Time (ms)"));

        for i in 1..=3 {
            let svg = fs::read_to_string(dir.path().join(format!("svg/figure_{i}.svg"))).unwrap();
            assert!(svg.contains("Sequential"));
        }
        let all = fs::read_to_string(dir.path().join("svg/figure_1.svg")).unwrap();
        let filtered = fs::read_to_string(dir.path().join("svg/figure_2.svg")).unwrap();
        assert!(all.contains("Recursive async"));
        assert!(!filtered.contains("Recursive async"));
    }

    #[test]
    fn filters_rows_before_grouping() {
        let dir = tempfile::tempdir().unwrap();
        ingest_log(dir.path(), "a.log", RUN_A, "unbalanced", 100);
        ingest_log(dir.path(), "b.log", RUN_B, "balanced", 100);
        ingest_log(dir.path(), "c.log", RUN_B, "balanced", 0);

        let mut cfg = plot_config(dir.path());
        cfg.problem_type = Some("balanced".to_string());
        cfg.goal_check_delay = Some(100);
        let summary = run(&cfg).unwrap();

        assert_eq!(summary.rows, 2);
        assert_eq!(summary.algorithms, 2);
    }

    #[test]
    fn missing_dataset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&plot_config(dir.path())).unwrap_err();
        assert!(err.to_string().contains("no dataset"));
        assert!(!dir.path().join("report.html").exists());
    }
}
