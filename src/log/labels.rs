//! Fixed translation from the algorithm ids printed by the benchmark runner
//! to the names used in the dataset and on the charts.

const ALGORITHM_LABELS: &[(&str, &str)] = &[
    ("AnyOfBFS", "C++ any_of"),
    ("AsyncBFS", "Recursive async"),
    ("TasksBFS", "Using C++ tasks"),
    ("ForeachBFS", "Recursive C++ for_each"),
    ("SyncBFS", "Sequential"),
    ("AsyncStartBFS", "Using C++ async"),
    ("MultithreadBFS", "Synchronization with thread director"),
    ("ForeachStartBFS", "Using C++ for_each"),
];

/// Look up the display name for a log id. Ids are matched exactly.
pub fn display_name(id: &str) -> Option<&'static str> {
    ALGORITHM_LABELS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| *name)
}
