use crate::log::labels;
use crate::log::record::{LogRecord, RunMetadata};
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{info, trace};

const PROBLEM_MARKER: &str = "problem_";
const TERMINAL_MARKER: &str = "[INFO]";
const NO_SOLUTION: &str = "No solution found!";

static PROBLEM_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("problem number regex"));

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("read log file {}", .path.display())]
    MissingInputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: unknown algorithm id {id:?}")]
    UnknownAlgorithm { line: usize, id: String },

    #[error("line {line}: cannot parse execution time from {text:?}")]
    MalformedTiming { line: usize, text: String },

    #[error("line {line}: problem marker carries no problem number")]
    MalformedProblemMarker { line: usize },
}

/// Parse one benchmark log file into records tagged with `meta`.
///
/// The whole file is read before parsing starts; any malformed line fails the
/// entire parse and no records are returned.
pub fn parse_log_file(path: &Path, meta: &RunMetadata) -> Result<Vec<LogRecord>, ParseError> {
    let text = fs::read_to_string(path).map_err(|source| ParseError::MissingInputFile {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_log_text(&text, meta)?;

    info!(
        records = records.len(),
        path = %path.display(),
        "processed benchmark log"
    );
    info!(
        problem_type = %meta.problem_type,
        goal_check_delay = meta.goal_check_delay,
        "run metadata"
    );
    Ok(records)
}

/// Parse log text. Lines are checked in priority order:
/// problem marker, terminal marker, then `<algorithm_id>: <ms> ...` timing line.
/// Anything else is skipped.
pub fn parse_log_text(text: &str, meta: &RunMetadata) -> Result<Vec<LogRecord>, ParseError> {
    let mut current_problem: Option<u64> = None;
    let mut out = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;

        if line.starts_with(PROBLEM_MARKER) {
            current_problem = Some(parse_problem_number(line, lno)?);
        } else if line.starts_with(TERMINAL_MARKER) {
            trace!(line = lno, "terminal marker, stopping");
            break;
        } else if line.contains(':') {
            out.push(parse_timing_line(line, lno, current_problem, meta)?);
        } else {
            trace!(line = lno, "skipping line");
        }
    }

    Ok(out)
}

fn parse_problem_number(line: &str, lno: usize) -> Result<u64, ParseError> {
    PROBLEM_NUMBER_RE
        .find(line)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or(ParseError::MalformedProblemMarker { line: lno })
}

fn parse_timing_line(
    line: &str,
    lno: usize,
    problem_number: Option<u64>,
    meta: &RunMetadata,
) -> Result<LogRecord, ParseError> {
    let mut parts = line.trim().split(':');
    let id = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or_default();

    let algorithm_name = labels::display_name(id).ok_or_else(|| ParseError::UnknownAlgorithm {
        line: lno,
        id: id.to_string(),
    })?;

    let token = rest.split_whitespace().next();
    let execution_time: f64 = token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| ParseError::MalformedTiming {
            line: lno,
            text: token.unwrap_or(rest).to_string(),
        })?;

    Ok(LogRecord {
        problem_type: meta.problem_type.clone(),
        goal_check_delay: meta.goal_check_delay,
        problem_number,
        execution_time,
        algorithm_name: algorithm_name.to_string(),
        solution_found: !line.contains(NO_SOLUTION),
    })
}
