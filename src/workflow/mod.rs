pub mod exam;
pub mod grading;

pub use exam::Exam;
pub use grading::grade_for_rating;
