pub mod container;
pub mod icon;
pub mod settings;
