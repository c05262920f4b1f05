use std::fmt::Write;

use tracing::{debug, trace};

use crate::error::RecordError;
use crate::grade::{DecimalDisplay, Grade};

const DELIMITER_WIDTH: usize = 30;

/// Single module code and the grade recorded against it.
#[derive(Debug, Clone, PartialEq)]
struct GradeEntry {
    module_code: String,
    grade: Grade,
}

/// One student's enrollment details and module grades.
///
/// Identity fields are fixed at construction. Grades keep the order in which
/// their module codes were first entered; re-entering a module replaces the
/// grade in place.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    name: String,
    student_num: String,
    degree: String,
    grades: Vec<GradeEntry>,
}

impl StudentRecord {
    /// Create a record with no grades. No field is validated.
    pub fn new(
        name: impl Into<String>,
        student_num: impl Into<String>,
        degree: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            student_num: student_num.into(),
            degree: degree.into(),
            grades: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn student_num(&self) -> &str {
        &self.student_num
    }

    pub fn degree(&self) -> &str {
        &self.degree
    }

    /// Insert or overwrite the grade for `module_code`, returning the previous grade.
    pub fn enter_grade(
        &mut self,
        module_code: impl Into<String>,
        grade: impl Into<Grade>,
    ) -> Option<Grade> {
        let module_code = module_code.into();
        let grade = grade.into();
        if let Some(entry) = self
            .grades
            .iter_mut()
            .find(|entry| entry.module_code == module_code)
        {
            debug!(module = %module_code, old = %entry.grade, new = %grade, "overwriting grade");
            return Some(std::mem::replace(&mut entry.grade, grade));
        }
        debug!(module = %module_code, %grade, "entering grade");
        self.grades.push(GradeEntry { module_code, grade });
        None
    }

    /// Look up the grade recorded for a module.
    pub fn grade(&self, module_code: &str) -> Option<Grade> {
        self.grades
            .iter()
            .find(|entry| entry.module_code == module_code)
            .map(|entry| entry.grade)
    }

    /// Iterate module codes and grades in insertion order.
    pub fn grades(&self) -> impl Iterator<Item = (&str, Grade)> + '_ {
        self.grades
            .iter()
            .map(|entry| (entry.module_code.as_str(), entry.grade))
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Arithmetic mean of every recorded grade.
    pub fn calculate_grade_average(&self) -> Result<f64, RecordError> {
        if self.grades.is_empty() {
            return Err(RecordError::NoGradesRecorded);
        }
        let total: f64 = self.grades.iter().map(|entry| entry.grade.value()).sum();
        let average = total / self.grades.len() as f64;
        trace!(total, count = self.grades.len(), average, "computed grade average");
        Ok(average)
    }

    /// Render the multi-line summary block.
    ///
    /// Fails with [`RecordError::NoGradesRecorded`] before producing any text
    /// when no grades have been entered.
    pub fn render_summary(&self) -> Result<String, RecordError> {
        let average = self.calculate_grade_average()?;
        let delimiter = "*".repeat(DELIMITER_WIDTH);

        let mut out = String::new();
        writeln!(&mut out, "{}", delimiter).ok();
        writeln!(&mut out, "{}", self.name).ok();
        writeln!(&mut out, "Student Number: {}", self.student_num).ok();
        writeln!(&mut out, "Degree: {}", self.degree).ok();
        writeln!(&mut out, "Modules & Grades:").ok();
        for entry in &self.grades {
            writeln!(&mut out, "  {}: {} ", entry.module_code, entry.grade).ok();
        }
        writeln!(&mut out, "Average Grade: {}", DecimalDisplay(average)).ok();
        write!(&mut out, "{}", delimiter).ok();
        Ok(out)
    }
}
