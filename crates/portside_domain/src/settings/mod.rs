//! On-disk settings documents and their merge rules.
//!
//! Both documents keep keys they do not know about in an `extra` map so that
//! a rewrite never drops data written by another version of the dashboard.

pub mod app;
pub mod container;

pub use app::{AppSettings, ServerEntry, ServerPort, DEFAULT_CONTAINER_SORT};
pub use container::{ContainerSettingsDocument, ContainerSettingsEntry, ContainerSettingsPatch};
