/// Parse published-spreadsheet CSV into rows of trimmed cells.
///
/// Quoting follows the usual spreadsheet export rules: a doubled quote inside
/// a quoted field is a literal quote, and an unterminated quote consumes the
/// rest of the input as one field. Parsing never fails; malformed input
/// degrades to whatever cells it produced.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut value = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' && chars.peek() == Some(&'"') {
                value.push('"');
                chars.next();
            } else if ch == '"' {
                in_quotes = false;
            } else {
                value.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => {
                    current.push(value.trim().to_string());
                    value.clear();
                }
                '\n' => {
                    // A fully blank line must not contribute a cell; the row
                    // it produces stays zero-length and is dropped below.
                    if !value.is_empty() || !current.is_empty() {
                        current.push(value.trim().to_string());
                        value.clear();
                    }
                    rows.push(std::mem::take(&mut current));
                }
                '\r' => {}
                _ => value.push(ch),
            }
        }
    }

    // Flush a trailing cell/row with no final newline.
    if !value.is_empty() || !current.is_empty() {
        current.push(value.trim().to_string());
        rows.push(current);
    }

    // A fully blank line yields a zero-cell row; those are dropped. A row of
    // empty cells (e.g. a line of just a comma) is kept.
    rows.retain(|row| !row.is_empty());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_rows_and_cells() {
        let rows = parse_csv("a,b,c\nd,e,f\n");
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn quoted_field_keeps_comma_and_doubled_quote() {
        let rows = parse_csv("\"Says \"\"hi\"\", ok\",5\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["Says \"hi\", ok", "5"]);
    }

    #[test]
    fn quoted_field_keeps_embedded_newline() {
        let rows = parse_csv("\"line one\nline two\",x\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "line one\nline two");
        assert_eq!(rows[0][1], "x");
    }

    #[test]
    fn blank_line_produces_no_row() {
        let rows = parse_csv("a,b\n\n");
        assert_eq!(rows, vec![vec!["a", "b"]]);
    }

    #[test]
    fn interior_and_trailing_blank_lines_are_skipped() {
        let rows = parse_csv("a,b\n\nc,d\n\n\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn lone_comma_line_is_a_two_cell_row() {
        let rows = parse_csv(",\n");
        assert_eq!(rows, vec![vec!["", ""]]);
    }

    #[test]
    fn cells_are_trimmed() {
        let rows = parse_csv("  a  , b \n");
        assert_eq!(rows, vec![vec!["a", "b"]]);
    }

    #[test]
    fn carriage_returns_are_dropped() {
        let rows = parse_csv("a,b\r\nc,d\r\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn last_row_without_newline_is_flushed() {
        let rows = parse_csv("a,b\nc,d");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn unterminated_quote_consumes_rest_of_input() {
        let rows = parse_csv("a,\"never closed\nstill here");
        assert_eq!(rows, vec![vec!["a", "never closed\nstill here"]]);
    }

    #[test]
    fn empty_input_produces_no_rows() {
        assert!(parse_csv("").is_empty());
    }
}
