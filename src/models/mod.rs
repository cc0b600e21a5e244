pub mod exam;

pub use exam::{ExamRecord, Question, OPTION_LABELS, QUESTION_COUNT};
