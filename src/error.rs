use thiserror::Error;

/// Failures surfaced by [`StudentRecord`](crate::StudentRecord) and grade parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Average or summary requested while the grade mapping is empty.
    #[error("no grades recorded; cannot compute an average")]
    NoGradesRecorded,
    #[error("invalid grade '{input}': expected a finite number")]
    InvalidGrade { input: String },
    #[error("invalid grade entry '{input}': expected MODULE=GRADE")]
    InvalidEntry { input: String },
}
