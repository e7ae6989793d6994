pub mod components;
pub mod generate;
pub mod history;
pub mod layout;
pub mod quiz;

// Re-export commonly used functions from layout
pub use layout::{page, render, titled};
