//! Minimal, quote-aware CSV reader for spreadsheet exports.
//!
//! Rows are split on `\n` and fields on `,` outside double quotes. A `"`
//! only toggles quoting and is never kept. Quoted fields may not span lines
//! and doubled quotes (`""`) are not an escape: both are known limitations
//! of the feed format, kept as-is.

use crate::error::FeedError;
use crate::model::raw_row::RawRow;

/// Parses feed text into rows keyed by the header line.
///
/// Rows with fewer fields than the header are skipped; extra trailing
/// fields are ignored.
///
/// # Errors
///
/// Returns [`FeedError::InsufficientLines`] when the text has no data row.
pub fn parse_csv(text: &str) -> Result<Vec<RawRow>, FeedError> {
    let text = text.trim();
    let lines: Vec<&str> = if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    };

    if lines.len() < 2 {
        return Err(FeedError::InsufficientLines { found: lines.len() });
    }

    let headers = parse_header(lines[0]);
    let rows = lines[1..]
        .iter()
        .filter_map(|line| {
            let values = split_line(line);
            if values.len() < headers.len() {
                return None;
            }
            let mut row = RawRow::with_capacity(headers.len());
            for (header, value) in headers.iter().zip(values) {
                row.insert(header.clone(), value);
            }
            Some(row)
        })
        .collect();

    Ok(rows)
}

/// Header titles are split on every comma, trimmed, and stripped of quotes.
fn parse_header(line: &str) -> Vec<String> {
    line.split(',')
        .map(|title| title.trim().replace('"', ""))
        .collect()
}

fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_header_and_data_row() {
        assert_eq!(
            parse_csv(""),
            Err(FeedError::InsufficientLines { found: 0 })
        );
        assert_eq!(
            parse_csv("Product ID,Product Name\n\n"),
            Err(FeedError::InsufficientLines { found: 1 })
        );
    }

    #[test]
    fn commas_inside_quotes_stay_in_the_field() {
        let rows = parse_csv("id,description\n1,\"soft, breathable\"").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("description"), Some("soft, breathable"));
    }

    #[test]
    fn header_quotes_are_stripped_and_fields_trimmed() {
        let rows = parse_csv("\"Product ID\" , \"Product Name\"\r\n  7 ,  Kurti  \r\n").unwrap();
        assert_eq!(rows[0].columns().collect::<Vec<_>>(), vec!["Product ID", "Product Name"]);
        assert_eq!(rows[0].get("Product ID"), Some("7"));
        assert_eq!(rows[0].get("Product Name"), Some("Kurti"));
    }

    #[test]
    fn short_rows_are_skipped_and_long_rows_truncated() {
        let rows = parse_csv("a,b,c\n1,2\n\n1,2,3,4\n5,6,7").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[0].get("c"), Some("3"));
        assert_eq!(rows[1].get("a"), Some("5"));
    }

    #[test]
    fn doubled_quotes_are_not_an_escape() {
        let rows = parse_csv("a,b\n\"say \"\"hi\"\"\",x").unwrap();
        assert_eq!(rows[0].get("a"), Some("say hi"));
        assert_eq!(rows[0].get("b"), Some("x"));
    }
}
