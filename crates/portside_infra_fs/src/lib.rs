pub mod store;

pub use store::asset::AssetStore;
pub use store::document::{load, save, JsonDocument};
pub use store::StoreError;
