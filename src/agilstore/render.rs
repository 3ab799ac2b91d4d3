//! Plain-text table rendering for product listings.

use crate::model::Product;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 5] = ["ID", "Nome", "Categoria", "Quantidade", "Preço"];
const COLUMN_GAP: usize = 2;

/// Render products as an aligned table, one row per record. Column widths
/// are display widths, not byte lengths, so accented names line up.
pub fn product_table(products: &[Product]) -> String {
    let rows: Vec<[String; 5]> = products
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                p.category.clone(),
                p.quantity.to_string(),
                format!("{:.2}", p.price),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    push_separator(&mut out, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            out.push_str(&" ".repeat(COLUMN_GAP));
        }
        out.push_str(cell);
        if i < cells.len() - 1 {
            out.push_str(&" ".repeat(width.saturating_sub(cell.width())));
        }
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize; 5]) {
    let total: usize = widths.iter().sum::<usize>() + COLUMN_GAP * (widths.len() - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: "Periféricos".to_string(),
            quantity: 10,
            price,
        }
    }

    #[test]
    fn prices_render_with_two_decimals() {
        let table = product_table(&[product(1, "Mouse", 49.9)]);
        assert!(table.contains("49.90"));
    }

    #[test]
    fn columns_line_up_across_rows() {
        let table = product_table(&[
            product(1, "Mouse", 49.90),
            product(2, "Teclado Mecânico", 299.0),
        ]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4); // header, separator, two rows

        // the category column starts at the same display offset in each row
        let offset = lines[0].find("Categoria").unwrap();
        assert_eq!(&lines[2][offset..offset + 4], "Peri");
        assert!(lines[3].starts_with("2 "));
    }

    #[test]
    fn header_lists_all_columns() {
        let table = product_table(&[]);
        let header = table.lines().next().unwrap();
        for column in ["ID", "Nome", "Categoria", "Quantidade", "Preço"] {
            assert!(header.contains(column));
        }
    }
}
