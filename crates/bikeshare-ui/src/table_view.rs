//! Paginated raw-data viewer.
//!
//! Renders slices of a [`TripTable`] as an aligned plain-text grid: a header
//! line, a dashed rule under every column and one line per row. The first
//! column is the unnamed 0-based row index. Numeric columns are
//! right-aligned, text columns left-aligned.

use std::io::{BufRead, Write};

use bikeshare_core::calendar::weekday_name;
use bikeshare_core::error::Result;
use bikeshare_core::formatting::format_cell_number;
use bikeshare_core::models::{TripRecord, TripTable};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::prompt::{is_yes, Prompter};

/// Rows printed per page.
pub const PAGE_SIZE: usize = 5;

/// Shown for an empty cell.
const MISSING: &str = "nan";

const GUTTER: &str = "  ";

// ── Columns ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// A displayed column: header text, alignment and how to read a cell.
struct ColumnSpec {
    header: &'static str,
    align: Align,
    cell: fn(&TripRecord) -> String,
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| MISSING.to_string())
}

/// Columns shown for `table`, in display order, after the row index.
fn columns(table: &TripTable) -> Vec<ColumnSpec> {
    let mut cols = vec![ColumnSpec {
        header: "Start Time",
        align: Align::Left,
        cell: |r| r.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
    }];
    if table.has_end_time {
        cols.push(ColumnSpec {
            header: "End Time",
            align: Align::Left,
            cell: |r| text(&r.end_time),
        });
    }
    cols.push(ColumnSpec {
        header: "Trip Duration",
        align: Align::Right,
        cell: |r| format_cell_number(r.trip_duration),
    });
    cols.push(ColumnSpec {
        header: "Start Station",
        align: Align::Left,
        cell: |r| text(&r.start_station),
    });
    cols.push(ColumnSpec {
        header: "End Station",
        align: Align::Left,
        cell: |r| text(&r.end_station),
    });
    cols.push(ColumnSpec {
        header: "User Type",
        align: Align::Left,
        cell: |r| text(&r.user_type),
    });
    if table.has_gender {
        cols.push(ColumnSpec {
            header: "Gender",
            align: Align::Left,
            cell: |r| text(&r.gender),
        });
    }
    if table.has_birth_year {
        cols.push(ColumnSpec {
            header: "Birth Year",
            align: Align::Right,
            cell: |r| {
                r.birth_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| MISSING.to_string())
            },
        });
    }
    cols.push(ColumnSpec {
        header: "month",
        align: Align::Right,
        cell: |r| r.month.to_string(),
    });
    cols.push(ColumnSpec {
        header: "weekday",
        align: Align::Left,
        cell: |r| weekday_name(r.weekday).to_string(),
    });
    cols.push(ColumnSpec {
        header: "hour",
        align: Align::Right,
        cell: |r| r.hour.to_string(),
    });
    cols
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn pad(value: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(value.width()));
    match align {
        Align::Left => format!("{}{}", value, fill),
        Align::Right => format!("{}{}", fill, value),
    }
}

fn join_line(cells: &[String]) -> String {
    cells.join(GUTTER).trim_end().to_string()
}

/// Render rows `[start, end)` of `table`. Bounds past the end are clamped,
/// so an out-of-range slice renders as header and rule only.
pub fn render_rows(table: &TripTable, start: usize, end: usize) -> String {
    let end = end.min(table.len());
    let start = start.min(end);

    let specs = columns(table);

    let mut headers = vec![String::new()];
    headers.extend(specs.iter().map(|c| c.header.to_string()));
    let mut aligns = vec![Align::Right];
    aligns.extend(specs.iter().map(|c| c.align));

    let body: Vec<Vec<String>> = (start..end)
        .map(|idx| {
            let row = &table.rows[idx];
            let mut cells = vec![idx.to_string()];
            cells.extend(specs.iter().map(|c| (c.cell)(row)));
            cells
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            body.iter()
                .map(|cells| cells[col].width())
                .chain(std::iter::once(headers[col].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(join_line(
        &headers
            .iter()
            .zip(&widths)
            .zip(&aligns)
            .map(|((h, w), a)| pad(h, *w, *a))
            .collect::<Vec<_>>(),
    ));
    lines.push(join_line(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
    ));
    for cells in &body {
        lines.push(join_line(
            &cells
                .iter()
                .zip(&widths)
                .zip(&aligns)
                .map(|((c, w), a)| pad(c, *w, *a))
                .collect::<Vec<_>>(),
        ));
    }
    lines.join("\n")
}

// ── Pager ─────────────────────────────────────────────────────────────────────

/// Cursor over a table that hands out one page at a time.
#[derive(Debug, Clone)]
pub struct Pager {
    cursor: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            cursor: 0,
            page_size,
        }
    }

    /// Index of the first row the next page will show.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Render the page at the cursor and advance the cursor by one page.
    pub fn next_page(&mut self, table: &TripTable) -> String {
        let start = self.cursor;
        self.cursor += self.page_size;
        render_rows(table, start, start + self.page_size)
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

/// Offer pages of `table` until the user answers anything but yes.
///
/// Returns the number of pages printed.
pub fn run_viewer<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    table: &TripTable,
) -> Result<usize> {
    let mut pager = Pager::default();
    let mut pages = 0;

    let mut answer = prompter.ask(&format!(
        "Do you want to show {} rows of the data? Enter yes/no\n",
        PAGE_SIZE
    ))?;
    while is_yes(&answer) {
        let page = pager.next_page(table);
        writeln!(prompter.output(), "{}", page)?;
        pages += 1;
        answer = prompter.ask(&format!(
            "Do you want to show {} more rows? Enter yes/no\n",
            PAGE_SIZE
        ))?;
    }

    debug!("Viewer stopped after {} page(s)", pages);
    Ok(pages)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::calendar::parse_timestamp;
    use bikeshare_core::error::BikeshareError;
    use bikeshare_core::models::City;
    use std::io::Cursor;

    fn record(hour: u32) -> TripRecord {
        TripRecord::new(
            parse_timestamp(&format!("2017-01-02 {:02}:00:00", hour)).unwrap(),
            None,
            60.0 * (hour as f64 + 1.0),
            Some("Canal St".to_string()),
            Some("Clark St".to_string()),
            Some("Subscriber".to_string()),
            None,
            None,
        )
    }

    /// Washington-style table with `n` rows; row `i` starts at hour `i`.
    fn table(n: u32) -> TripTable {
        TripTable {
            city: City::Washington,
            has_end_time: false,
            has_gender: false,
            has_birth_year: false,
            rows: (0..n).map(record).collect(),
        }
    }

    fn column_headers(table: &TripTable) -> Vec<&'static str> {
        columns(table).iter().map(|c| c.header).collect()
    }

    /// Row-index values printed in a rendered page.
    fn indices(page: &str) -> Vec<usize> {
        page.lines()
            .skip(2)
            .map(|line| line.split_whitespace().next().unwrap().parse().unwrap())
            .collect()
    }

    #[test]
    fn test_column_headers_without_optional() {
        assert_eq!(
            column_headers(&table(1)),
            vec![
                "Start Time",
                "Trip Duration",
                "Start Station",
                "End Station",
                "User Type",
                "month",
                "weekday",
                "hour"
            ]
        );
    }

    #[test]
    fn test_column_headers_with_optional() {
        let mut t = table(1);
        t.has_end_time = true;
        t.has_gender = true;
        t.has_birth_year = true;
        let headers = column_headers(&t);
        assert_eq!(headers[1], "End Time");
        assert!(headers.contains(&"Gender"));
        assert!(headers.contains(&"Birth Year"));
        assert!(!headers.contains(&"trip"));
        assert_eq!(headers.len(), 11);
    }

    #[test]
    fn test_render_rows_layout() {
        let page = render_rows(&table(2), 0, 5);
        let lines: Vec<&str> = page.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].trim_start().starts_with("Start Time"));
        assert!(lines[1].starts_with("-  ---"));
        assert!(lines[2].starts_with("0  2017-01-02 00:00:00"));
        assert!(lines[3].contains("Canal St"));
        assert!(lines[3].ends_with("Monday      1"));
    }

    #[test]
    fn test_render_rows_aligns_columns() {
        let page = render_rows(&table(2), 0, 2);
        let lines: Vec<&str> = page.lines().collect();
        let header_pos = lines[0].find("Start Station").unwrap();
        assert_eq!(&lines[2][header_pos..header_pos + 8], "Canal St");
        assert_eq!(&lines[3][header_pos..header_pos + 8], "Canal St");
    }

    #[test]
    fn test_render_rows_right_aligns_numbers() {
        let page = render_rows(&table(2), 0, 2);
        let lines: Vec<&str> = page.lines().collect();
        let end = lines[0].find("Trip Duration").unwrap() + "Trip Duration".len();
        assert_eq!(&lines[2][end - 2..end], "60");
        assert_eq!(&lines[3][end - 3..end], "120");
    }

    #[test]
    fn test_render_rows_out_of_range_is_empty_page() {
        let page = render_rows(&table(3), 5, 10);
        assert_eq!(page.lines().count(), 2);
    }

    #[test]
    fn test_render_rows_missing_cells() {
        let mut t = table(1);
        t.has_gender = true;
        t.has_birth_year = true;
        let page = render_rows(&t, 0, 1);
        assert_eq!(page.lines().nth(2).unwrap().matches(MISSING).count(), 2);
    }

    #[test]
    fn test_pager_pages_seven_rows() {
        let t = table(7);
        let mut pager = Pager::default();

        assert_eq!(indices(&pager.next_page(&t)), vec![0, 1, 2, 3, 4]);
        assert_eq!(pager.cursor(), 5);
        assert_eq!(indices(&pager.next_page(&t)), vec![5, 6]);
        assert!(indices(&pager.next_page(&t)).is_empty());
        assert_eq!(pager.cursor(), 15);
    }

    #[test]
    fn test_run_viewer_stops_on_no() {
        let t = table(7);
        let mut p = Prompter::new(Cursor::new(b"yes\nY\nyes\nno\n".to_vec()), Vec::new());

        let pages = run_viewer(&mut p, &t).unwrap();
        assert_eq!(pages, 3);

        let out = String::from_utf8(p.into_parts().1).unwrap();
        assert_eq!(
            out.matches("Do you want to show 5 rows of the data? Enter yes/no\n")
                .count(),
            1
        );
        assert_eq!(
            out.matches("Do you want to show 5 more rows? Enter yes/no\n")
                .count(),
            3
        );
        assert!(out.contains("\n6  2017-01-02 06:00:00"));
    }

    #[test]
    fn test_run_viewer_declined_immediately() {
        let t = table(7);
        let mut p = Prompter::new(Cursor::new(b"nope\n".to_vec()), Vec::new());

        assert_eq!(run_viewer(&mut p, &t).unwrap(), 0);
        let out = String::from_utf8(p.into_parts().1).unwrap();
        assert!(!out.contains("Start Time"));
    }

    #[test]
    fn test_run_viewer_eof() {
        let t = table(2);
        let mut p = Prompter::new(Cursor::new(b"yes\n".to_vec()), Vec::new());
        assert!(matches!(
            run_viewer(&mut p, &t),
            Err(BikeshareError::InputClosed)
        ));
    }
}
