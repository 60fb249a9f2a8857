//! End-to-end runs wired from the parser, model, store and renderer.

pub mod ingest;
pub mod plot;
