//! Download-artifact rendering for metrics snapshots.
//!
//! Pure string production: the functions here turn a snapshot into the text
//! the browser/download layer saves, and derive the date-keyed filename.
//! Triggering the actual file save is the display layer's responsibility.

pub mod artifact;

pub use artifact::{render_csv, render_json, report_filename, report_filename_today};
