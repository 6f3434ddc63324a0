use std::iter;

/// Three-column table used by the comparison report.
///
/// Widths count characters, not bytes, so cells such as `O(V × E)` line up.
/// The widths given to [`ReportTable::new`] are minimums; cells are never
/// truncated.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReportTable {
    label_width: usize,
    column_width: usize,
}

impl ReportTable {
    pub(crate) const fn new(label_width: usize, column_width: usize) -> Self {
        ReportTable {
            label_width,
            column_width,
        }
    }

    /// Widens the value columns so every given cell fits
    pub(crate) fn fitting<'a>(self, cells: impl IntoIterator<Item = &'a str>) -> Self {
        let widest = cells
            .into_iter()
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or(0);

        ReportTable {
            column_width: self.column_width.max(widest),
            ..self
        }
    }

    pub(crate) fn border(&self) -> String {
        format!(
            "+{}+{}+{}+",
            "-".repeat(self.label_width),
            "-".repeat(self.column_width),
            "-".repeat(self.column_width)
        )
    }

    pub(crate) fn row(&self, label: &str, left: &str, right: &str) -> String {
        format!(
            "|{}|{}|{}|",
            fit(label, self.label_width),
            fit(left, self.column_width),
            fit(right, self.column_width)
        )
    }
}

/// Pads `text` with spaces to at least `width` characters
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut cell = text.to_string();
    cell.extend(iter::repeat(' ').take(width.saturating_sub(len)));
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_match_border_width() {
        let table = ReportTable::new(6, 10);
        let border = table.border();
        let row = table.row("Time", "O(9)", "ok");

        assert_eq!(border.chars().count(), row.chars().count());
        assert_eq!(row, "|Time  |O(9)      |ok        |");
    }

    #[test]
    fn long_cells_widen_the_columns() {
        let cell = "O(V × E) ≈ O(50000000)";
        let table = ReportTable::new(6, 10).fitting([cell, "ok"]);
        let row = table.row("Cost", cell, "ok");

        assert_eq!(table.border().chars().count(), row.chars().count());
        assert_eq!(row, format!("|Cost  |{}|ok{}|", cell, " ".repeat(20)));
    }
}
