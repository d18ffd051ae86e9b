use rand::seq::SliceRandom;

use crate::table::Table;

/// How many rows the post-run printout shows.
pub const SAMPLE_ROWS: usize = 10;

/// Cap on displayed columns so wide tables stay readable in a terminal.
pub const MAX_DISPLAY_COLUMNS: usize = 4;

/// Pick up to `n` distinct rows uniformly at random, in no particular order.
/// A table with fewer than `n` rows yields everything it has.
pub fn sample_rows(table: &Table, n: usize) -> Vec<&Vec<String>> {
    let mut rng = rand::thread_rng();
    table.rows.choose_multiple(&mut rng, n).collect()
}

/// Print a random sample of `table` to stdout, showing at most `max_columns`
/// columns with a `…` marker when some are elided. Diagnostic only; the
/// written file is never touched.
pub fn print_sample(table: &Table, n: usize, max_columns: usize) {
    let sampled = sample_rows(table, n);
    let shown = table.headers.len().min(max_columns);
    let elided = table.headers.len() > shown;

    let mut widths: Vec<usize> = table.headers[..shown]
        .iter()
        .map(|h| h.chars().count())
        .collect();
    for row in &sampled {
        for (i, cell) in row[..shown].iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    print_row(&table.headers[..shown], &widths, elided);
    for row in &sampled {
        print_row(&row[..shown], &widths, elided);
    }
}

fn print_row(cells: &[String], widths: &[usize], elided: bool) {
    let mut line = String::new();
    for (cell, &width) in cells.iter().zip(widths) {
        if !line.is_empty() {
            line.push_str("  ");
        }
        line.push_str(&format!("{:<width$}", cell));
    }
    if elided {
        line.push_str("  …");
    }
    println!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_rows(n: usize) -> Table {
        Table {
            headers: vec!["Brand".into(), "Release_Date".into()],
            rows: (0..n)
                .map(|i| vec![format!("brand-{}", i), format!("{}", 2000 + i)])
                .collect(),
        }
    }

    #[test]
    fn sample_is_distinct_and_drawn_from_the_table() {
        let table = table_with_rows(25);
        let sampled = sample_rows(&table, 10);

        assert_eq!(sampled.len(), 10);
        for &row in &sampled {
            assert!(table.rows.contains(row));
        }
        let mut brands: Vec<&str> = sampled.iter().map(|r| r[0].as_str()).collect();
        brands.sort_unstable();
        brands.dedup();
        assert_eq!(brands.len(), 10);
    }

    #[test]
    fn sample_clamps_to_available_rows() {
        let table = table_with_rows(3);
        assert_eq!(sample_rows(&table, 10).len(), 3);
    }

    #[test]
    fn sample_of_empty_table_is_empty() {
        let table = table_with_rows(0);
        assert!(sample_rows(&table, 10).is_empty());
    }
}
