pub mod attempt;
pub mod generate;
pub mod history;
