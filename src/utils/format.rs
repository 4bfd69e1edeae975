use crate::models::{GpaSummary, GradeRecord};

// Column widths of the rendered table.
const COURSE_WIDTH: usize = 30;
const GRADE_WIDTH: usize = 5;
const MARK_WIDTH: usize = 4;

// Renders grade records into a fixed-width text table.
pub fn format_grades(grades: &[GradeRecord]) -> String {
    if grades.is_empty() {
        return String::from("No grades found.");
    }

    let rule = "-".repeat(COURSE_WIDTH + GRADE_WIDTH + MARK_WIDTH + 10);

    let mut table = String::from("📖 Your Grades:\n");
    table.push_str(&rule);
    table.push('\n');
    table.push_str(&table_row("Course", "Grade", "Mark"));
    table.push_str(&rule);
    table.push('\n');

    for record in grades {
        table.push_str(&table_row(
            &truncate_course(&record.course),
            &record.grade,
            &record.mark,
        ));
    }

    table.push_str(&rule);
    table
}

// Renders the per-semester totals block.
pub fn format_gpa_summary(summary: &GpaSummary) -> String {
    format!(
        "📊 GPA Summary:\n   - Grade Point: {}\n   - Credit Hour: {}\n   - GPA: {}",
        summary.grade_point, summary.credit_hours, summary.gpa
    )
}

// Full report: grade table followed by the GPA summary.
pub fn format_report(grades: &[GradeRecord], summary: &GpaSummary) -> String {
    format!("{}\n\n{}", format_grades(grades), format_gpa_summary(summary))
}

fn table_row(course: &str, grade: &str, mark: &str) -> String {
    format!(
        "| {:<course_width$} | {:<grade_width$} | {:<mark_width$} |\n",
        course,
        grade,
        mark,
        course_width = COURSE_WIDTH,
        grade_width = GRADE_WIDTH,
        mark_width = MARK_WIDTH,
    )
}

// Long course names are cut so the columns stay aligned.
fn truncate_course(name: &str) -> String {
    if name.chars().count() > COURSE_WIDTH {
        let cut: String = name.chars().take(COURSE_WIDTH).collect();
        format!("{}...", cut)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(course: &str) -> GradeRecord {
        GradeRecord {
            course: course.to_string(),
            grade: "A".to_string(),
            mark: "91".to_string(),
            credit_hours: "3".to_string(),
            grade_point: "12".to_string(),
        }
    }

    #[test]
    fn empty_grades_render_a_plain_message() {
        assert_eq!(format_grades(&[]), "No grades found.");
    }

    #[test]
    fn long_course_names_are_truncated() {
        let name = "C".repeat(40);
        let formatted = format_grades(&[record(&name)]);

        let expected = format!("{}...", "C".repeat(30));
        assert!(formatted.contains(&expected));
        assert!(!formatted.contains(&"C".repeat(31)));
    }

    #[test]
    fn short_course_names_are_left_untouched() {
        let name = "D".repeat(20);
        let formatted = format_grades(&[record(&name)]);

        assert!(formatted.contains(&name));
        assert!(!formatted.contains("..."));
    }

    #[test]
    fn rows_are_padded_to_fixed_widths() {
        let formatted = format_grades(&[record("Operating Systems")]);

        let expected = format!("| {:<30} | {:<5} | {:<4} |", "Operating Systems", "A", "91");
        assert!(formatted.contains(&expected));
        // Every line of the table is equally wide.
        let widths: Vec<usize> = formatted.lines().skip(1).map(|line| line.len()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn report_combines_table_and_summary() {
        let summary = GpaSummary {
            grade_point: "30.5".to_string(),
            credit_hours: "17".to_string(),
            gpa: "3.59".to_string(),
        };
        let report = format_report(&[record("Operating Systems")], &summary);

        assert!(report.contains("Your Grades"));
        assert!(report.contains("- GPA: 3.59"));
    }

    #[test]
    fn missing_summary_values_render_as_sentinels() {
        let report = format_report(&[], &GpaSummary::default());

        assert!(report.starts_with("No grades found."));
        assert!(report.contains("- Grade Point: N/A"));
        assert!(report.contains("- Credit Hour: N/A"));
        assert!(report.contains("- GPA: N/A"));
    }
}
