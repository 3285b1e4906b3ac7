pub mod naming;
pub mod repository;
pub mod source;

pub use naming::{asset_path, extension_from_filename, extension_from_url, icon_filename, sanitize_name};
pub use repository::{IconCandidate, IconFormat, IconRepository, IconVariant};
pub use source::{FetchError, IconSource};
