//! Progress reporting during a workflow run

pub mod reporter;
