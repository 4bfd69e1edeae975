use scraper::{ElementRef, Html, Selector};

use crate::models::{GpaSummary, GradeRecord, NOT_AVAILABLE};

// Structural extraction over the results page. The page labels nothing, so
// position and nesting are the contract: the course table is the
// .grade-table outside the summary box, and the summary values live in
// fixed rows of the table nested inside it. Layout changes land here and
// nowhere else.
pub struct GradeExtractor {
    document: Html,
}

impl GradeExtractor {
    // html5ever recovers from malformed markup, so parsing cannot fail.
    pub fn new(html_content: &str) -> Self {
        Self {
            document: Html::parse_document(html_content),
        }
    }

    // Extracts one record per course row, in document order. A missing
    // table yields an empty list, never an error.
    pub fn extract_grades(&self) -> Vec<GradeRecord> {
        let table_selector = Selector::parse(".grade-table").unwrap();
        let row_selector = Selector::parse("tbody tr").unwrap();
        let cell_selector = Selector::parse("td").unwrap();

        let mut grades = Vec::new();

        // The summary box nests its own .grade-table; the course table is
        // the one with no summary-box ancestor.
        let grade_table = self
            .document
            .select(&table_selector)
            .find(|table| !inside_summary_box(table));

        if let Some(table) = grade_table {
            for row in table.select(&row_selector) {
                let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
                // Cell 0 is a row indicator, not data. Shorter rows are
                // filler and carry no grade.
                if cells.len() >= 6 {
                    grades.push(GradeRecord {
                        course: cell_text(&cells[1]),
                        grade: cell_text(&cells[2]),
                        mark: cell_text(&cells[3]),
                        credit_hours: cell_text(&cells[4]),
                        grade_point: cell_text(&cells[5]),
                    });
                }
            }
        }

        grades
    }

    // Extracts the per-semester totals from the summary box. Rows are
    // positional: grade point, credit hours and GPA sit in rows 1 to 3,
    // each value inside a span. Anything missing becomes "N/A" rather
    // than failing the extraction.
    pub fn extract_gpa_summary(&self) -> GpaSummary {
        let box_selector = Selector::parse(".box.box-primary").unwrap();
        let row_selector = Selector::parse(".grade-table tr").unwrap();
        let value_selector = Selector::parse("td span").unwrap();

        let summary_box = match self.document.select(&box_selector).next() {
            Some(found) => found,
            None => return GpaSummary::default(),
        };

        let rows: Vec<ElementRef> = summary_box.select(&row_selector).collect();
        if rows.len() < 4 {
            return GpaSummary::default();
        }

        let value_of = |row: &ElementRef| {
            row.select(&value_selector)
                .next()
                .map(|span| cell_text(&span))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };

        GpaSummary {
            grade_point: value_of(&rows[1]),
            credit_hours: value_of(&rows[2]),
            gpa: value_of(&rows[3]),
        }
    }
}

// True when the element sits anywhere inside the primary summary box.
fn inside_summary_box(element: &ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| has_class(&ancestor, "box-primary"))
}

fn has_class(element: &ElementRef, class: &str) -> bool {
    element
        .value()
        .attr("class")
        .map(|classes| classes.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

// Whole-cell text with surrounding whitespace removed.
fn cell_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
