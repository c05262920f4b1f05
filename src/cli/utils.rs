//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use student_record::{Grade, RecordError, StudentRecord};
use tracing::info;

use crate::cli::common::RecordArgs;

/// Clap-friendly parser for `MODULE=GRADE` pairs such as `CS101=85`.
pub fn parse_grade_entry(input: &str) -> Result<(String, Grade), RecordError> {
    let (module, grade) = input
        .split_once('=')
        .ok_or_else(|| RecordError::InvalidEntry {
            input: input.to_string(),
        })?;
    let module = module.trim();
    if module.is_empty() {
        return Err(RecordError::InvalidEntry {
            input: input.to_string(),
        });
    }
    let grade: Grade = grade.parse()?;
    Ok((module.to_string(), grade))
}

/// Parse one `MODULE=GRADE` entry per line, skipping blanks and `#` comments.
pub fn parse_grade_lines(text: &str) -> Result<Vec<(String, Grade)>> {
    let mut entries = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let entry =
            parse_grade_entry(line).with_context(|| format!("invalid grade at line {}", idx + 1))?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Read the entire stdin stream into memory.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Read a grade file, treating `-` as stdin.
pub fn read_grade_file(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return read_stdin();
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Assemble a record from identity fields, file entries, then flag entries.
pub fn build_record(args: &RecordArgs, file_entries: Vec<(String, Grade)>) -> StudentRecord {
    let mut record = StudentRecord::new(&args.name, &args.student_num, &args.degree);
    for (module, grade) in file_entries.into_iter().chain(args.grades.iter().cloned()) {
        if let Some(previous) = record.enter_grade(module.as_str(), grade) {
            info!(module = %module, %previous, %grade, "grade replaced by later entry");
        }
    }
    record
}

/// Resolve every grade source named by the arguments into a record.
pub fn load_record(args: &RecordArgs) -> Result<StudentRecord> {
    let file_entries = match &args.from {
        Some(path) => {
            let text = read_grade_file(path)?;
            parse_grade_lines(&text)
                .with_context(|| format!("failed to parse grades from {}", path.display()))?
        }
        None => Vec::new(),
    };
    Ok(build_record(args, file_entries))
}
