//! Settings reconciliation and icon acquisition.
//!
//! Every operation here is a single read-modify-write of one JSON document.
//! Checks run before anything is written, so a failed call leaves the
//! document as it was.

pub mod app;
pub mod container;
pub mod error;
pub mod icon;

pub use app::AppSettingsReconciler;
pub use container::ContainerSettingsReconciler;
pub use error::{ErrorKind, SettingsError};
pub use icon::{IconWorkflow, StoredIcon};
