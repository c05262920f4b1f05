//! Core library for a single student's enrollment record and module grades.

mod error;
mod grade;
mod record;

pub use error::RecordError;
pub use grade::Grade;
pub use record::StudentRecord;

/// Build a record and apply grade entries in order, later entries overwriting earlier ones.
pub fn record_with_grades<I, M, G>(
    name: &str,
    student_num: &str,
    degree: &str,
    grades: I,
) -> StudentRecord
where
    I: IntoIterator<Item = (M, G)>,
    M: Into<String>,
    G: Into<Grade>,
{
    let mut record = StudentRecord::new(name, student_num, degree);
    for (module_code, grade) in grades {
        record.enter_grade(module_code, grade);
    }
    record
}
