pub mod student;

pub use student::{Prioritized, Student, MAX_MARK, PASS_MARK};
