mod category;
mod dataset;
mod question;

pub use category::{CategoryError, CategoryFilter, CategoryName};
pub use dataset::Dataset;
pub use question::{Question, QuestionError};
