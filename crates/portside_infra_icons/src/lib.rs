pub mod client;

pub use client::HttpIconSource;
