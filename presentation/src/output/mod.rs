//! Output formatting for workflow results

pub mod console;
pub mod formatter;
pub mod html;
