//! Record reports (`student-record summary|average|grades`).

use anyhow::{Context, Result};
use student_record::{Grade, StudentRecord};

use crate::cli::common::RecordArgs;
use crate::cli::utils::load_record;

/// Print the rendered summary block.
pub fn summary(args: RecordArgs) -> Result<()> {
    let record = load_record(&args)?;
    println!("{}", summary_text(&record)?);
    Ok(())
}

/// Print the average grade on its own.
pub fn average(args: RecordArgs) -> Result<()> {
    let record = load_record(&args)?;
    println!("{}", average_text(&record)?);
    Ok(())
}

/// List each module and its grade.
pub fn grades(args: RecordArgs) -> Result<()> {
    let record = load_record(&args)?;
    print!("{}", grades_text(&record));
    Ok(())
}

pub fn summary_text(record: &StudentRecord) -> Result<String> {
    record
        .render_summary()
        .with_context(|| format!("cannot summarise record for {}", record.name()))
}

pub fn average_text(record: &StudentRecord) -> Result<String> {
    let average = record
        .calculate_grade_average()
        .with_context(|| format!("cannot average grades for {}", record.name()))?;
    Ok(Grade::from(average).to_string())
}

/// One `MODULE GRADE` line per entry, or a notice when nothing is recorded.
pub fn grades_text(record: &StudentRecord) -> String {
    if record.is_empty() {
        return format!("No grades recorded for {}\n", record.name());
    }
    record
        .grades()
        .map(|(module, grade)| format!("{:<12} {}\n", module, grade))
        .collect()
}
