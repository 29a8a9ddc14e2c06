//! Conversion from [`RawRow`] to [`ProductRecord`].
//!
//! Numeric fields are coerced rather than validated: anything that does not
//! start with a number reads as 0, so a single bad cell never drops a row.
//! Only rows without an id or a name are discarded.

use std::collections::HashSet;

use crate::config::StockPolicy;
use crate::model::product::{discount_percentage, ProductRecord, StockStatus};
use crate::model::raw_row::{columns, RawRow};

/// Builds a product from one row, or `None` when the row has no id or name.
pub fn normalize_row(row: &RawRow, policy: StockPolicy) -> Option<ProductRecord> {
    let id = row.value(columns::PRODUCT_ID).trim();
    let name = row.value(columns::PRODUCT_NAME).trim();
    if id.is_empty() || name.is_empty() {
        return None;
    }

    let original_price = parse_amount(row.value(columns::ORIGINAL_PRICE)).unwrap_or(0.0);
    let selling_price = parse_amount(row.value(columns::SELLING_PRICE))
        .filter(|amount| *amount != 0.0)
        .or_else(|| parse_amount(row.value(columns::BASE_PRICE)))
        .unwrap_or(0.0);
    let original_price = original_price.max(0.0);
    let selling_price = selling_price.max(0.0);
    let stock_quantity = parse_quantity(row.value(columns::STOCK_QUANTITY));

    Some(ProductRecord {
        id: id.to_string(),
        name: name.to_string(),
        category: row.value(columns::CATEGORY).to_string(),
        description: row.value(columns::DESCRIPTION).to_string(),
        colors: split_colors(row.value(columns::COLORS_AVAILABLE)),
        image_groups: split_image_groups(row.value(columns::IMAGE_URLS)),
        original_price,
        selling_price,
        stock_quantity,
        discount_percentage: discount_percentage(original_price, selling_price),
        stock_status: StockStatus::classify(stock_quantity, policy),
    })
}

/// Normalizes rows in order, dropping invalid rows and repeated ids.
pub fn normalize_rows<'a, I>(rows: I, policy: StockPolicy) -> Vec<ProductRecord>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter_map(|row| normalize_row(row, policy))
        .filter(|product| seen.insert(product.id.clone()))
        .collect()
}

/// `Red; Blue;;Green` → `["Red", "Blue", "Green"]`.
pub fn split_colors(field: &str) -> Vec<String> {
    field
        .split(';')
        .map(str::trim)
        .filter(|color| !color.is_empty())
        .map(str::to_string)
        .collect()
}

/// `a|b;c` → `[["a", "b"], ["c"]]`.
///
/// Empty groups are kept so that group `i` still lines up with color `i`.
pub fn split_image_groups(field: &str) -> Vec<Vec<String>> {
    if field.trim().is_empty() {
        return Vec::new();
    }
    field
        .split(';')
        .map(|group| {
            group
                .split('|')
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// Reads the leading decimal number of `text`, e.g. `"1299.50 INR"` → 1299.5.
pub fn parse_amount(text: &str) -> Option<f64> {
    leading_number(text, true)
        .and_then(|number| number.parse::<f64>().ok())
        .filter(|amount| amount.is_finite())
}

/// Reads the leading integer of `text`, clamped into `u32`; otherwise 0.
pub fn parse_quantity(text: &str) -> u32 {
    leading_number(text, false)
        .and_then(|number| number.parse::<i64>().ok())
        .map(|quantity| quantity.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

fn leading_number(text: &str, allow_fraction: bool) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_after = |mut pos: usize| {
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        pos
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_after(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if allow_fraction && bytes.get(end) == Some(&b'.') {
        let frac_end = digits_after(end + 1);
        if frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }
    if !has_digits {
        return None;
    }

    if allow_fraction && matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_after(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    Some(&text[..end])
}
