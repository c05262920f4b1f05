//! Shared clap argument types for record commands.

use std::path::PathBuf;

use clap::Args;
use student_record::Grade;

use crate::cli::utils::parse_grade_entry;

/// Identity fields and grade sources describing one record.
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Student's full name.
    #[arg(long)]
    pub name: String,
    /// Student number or other identifier.
    #[arg(long = "number")]
    pub student_num: String,
    /// Degree programme.
    #[arg(long)]
    pub degree: String,
    /// Grade entry as MODULE=GRADE; repeat for several modules.
    #[arg(long = "grade", value_name = "MODULE=GRADE", value_parser = parse_grade_entry)]
    pub grades: Vec<(String, Grade)>,
    /// Read MODULE=GRADE lines from a file (`-` for stdin), applied before --grade.
    #[arg(long = "from", value_name = "FILE")]
    pub from: Option<PathBuf>,
}
