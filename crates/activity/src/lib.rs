//! Activity-log domain module.
//!
//! This crate contains the audit-trail records shown by the activity view
//! and the pure query functions behind its filter widgets. The view's
//! mutable search/filter state lives in the UI; here it arrives as an
//! immutable [`ActivityFilter`] criteria value, so the queries stay
//! deterministic and trivially testable.

pub mod log;

pub use log::{
    ActivityAction, ActivityEntry, ActivityFilter, authorize_view, filter_entries,
    view_permission,
};
