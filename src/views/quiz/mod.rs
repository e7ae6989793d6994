mod attempt;
mod display;
mod review;

pub use attempt::attempt_page;
pub use display::quiz_display;
pub use review::{review_cell, RevealState};
