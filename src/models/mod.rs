pub mod attempt;
pub mod lesson;
