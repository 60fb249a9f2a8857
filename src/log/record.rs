/// Per-run constants attached to every record parsed from one log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    pub problem_type: String,
    pub goal_check_delay: u64,
}

/// A single timing measurement: one algorithm on one problem instance.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub problem_type: String,
    pub goal_check_delay: u64,
    /// None when the timing line appeared before any problem marker.
    pub problem_number: Option<u64>,
    pub execution_time: f64,
    /// Display name, already translated through the label map.
    pub algorithm_name: String,
    pub solution_found: bool,
}
