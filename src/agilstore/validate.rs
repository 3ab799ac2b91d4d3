//! Validated parsing of raw prompt input.
//!
//! Each function takes the string exactly as typed by the operator and
//! returns either the typed value or the Portuguese message to display for
//! that field. The aggregate parsers collect one message per failing field,
//! in field order, so the session can print them line by line.

use crate::model::{NewProduct, ProductPatch};

pub fn parse_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        Err("Nome do produto é obrigatório.".to_string())
    } else {
        Ok(name.to_string())
    }
}

pub fn parse_category(raw: &str) -> Result<String, String> {
    let category = raw.trim();
    if category.is_empty() {
        Err("Categoria é obrigatória.".to_string())
    } else {
        Ok(category.to_string())
    }
}

/// Non-negative integer. Fractional input ("3.5") is rejected, not rounded.
pub fn parse_quantity(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| "Quantidade deve ser um número inteiro não negativo.".to_string())
}

/// Non-negative number, fractional allowed.
pub fn parse_price(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err("Preço deve ser um número não negativo.".to_string()),
    }
}

/// Strictly positive integer identifier.
pub fn parse_id(raw: &str) -> Result<u64, String> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("ID deve ser um número positivo.".to_string()),
    }
}

pub fn parse_new(
    name: &str,
    category: &str,
    quantity: &str,
    price: &str,
) -> Result<NewProduct, Vec<String>> {
    match (
        parse_name(name),
        parse_category(category),
        parse_quantity(quantity),
        parse_price(price),
    ) {
        (Ok(name), Ok(category), Ok(quantity), Ok(price)) => Ok(NewProduct {
            name,
            category,
            quantity,
            price,
        }),
        (name, category, quantity, price) => Err([
            name.err(),
            category.err(),
            quantity.err(),
            price.err(),
        ]
        .into_iter()
        .flatten()
        .collect()),
    }
}

/// Raw update answers as collected by the session, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
}

impl RawPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
    }
}

/// Every present field obeys the same constraint as in [`parse_new`].
pub fn parse_patch(raw: &RawPatch) -> Result<ProductPatch, Vec<String>> {
    let mut errors = Vec::new();
    let mut patch = ProductPatch::default();

    if let Some(value) = &raw.name {
        match parse_name(value) {
            Ok(name) => patch.name = Some(name),
            Err(message) => errors.push(message),
        }
    }
    if let Some(value) = &raw.category {
        match parse_category(value) {
            Ok(category) => patch.category = Some(category),
            Err(message) => errors.push(message),
        }
    }
    if let Some(value) = &raw.quantity {
        match parse_quantity(value) {
            Ok(quantity) => patch.quantity = Some(quantity),
            Err(message) => errors.push(message),
        }
    }
    if let Some(value) = &raw.price {
        match parse_price(value) {
            Ok(price) => patch.price = Some(price),
            Err(message) => errors.push(message),
        }
    }

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_not_be_empty() {
        assert!(parse_name("").is_err());
        assert!(parse_name("   ").is_err());
        assert_eq!(parse_name(" Teclado ").unwrap(), "Teclado");
    }

    #[test]
    fn category_must_not_be_empty() {
        assert!(parse_category("").is_err());
        assert_eq!(parse_category("Periféricos").unwrap(), "Periféricos");
    }

    #[test]
    fn quantity_rejects_negative_and_fractional() {
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("3.5").is_err());
        assert!(parse_quantity("abc").is_err());
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity("10").unwrap(), 10);
    }

    #[test]
    fn price_rejects_negative_allows_fractional() {
        assert!(parse_price("-0.01").is_err());
        assert!(parse_price("abc").is_err());
        assert_eq!(parse_price("10").unwrap(), 10.0);
        assert_eq!(parse_price("2999.99").unwrap(), 2999.99);
        assert_eq!(parse_price("0").unwrap(), 0.0);
    }

    #[test]
    fn id_must_be_positive() {
        assert!(parse_id("0").is_err());
        assert!(parse_id("-5").is_err());
        assert!(parse_id("1.5").is_err());
        assert_eq!(parse_id("7").unwrap(), 7);
    }

    #[test]
    fn parse_new_collects_messages_in_field_order() {
        let errors = parse_new("", "Periféricos", "-1", "-2").unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Nome do produto é obrigatório.".to_string(),
                "Quantidade deve ser um número inteiro não negativo.".to_string(),
                "Preço deve ser um número não negativo.".to_string(),
            ]
        );
    }

    #[test]
    fn parse_new_coerces_string_input() {
        let fields = parse_new("Mouse", "Periféricos", "10", "49.90").unwrap();
        assert_eq!(fields.quantity, 10);
        assert_eq!(fields.price, 49.90);
    }

    #[test]
    fn parse_patch_checks_only_present_fields() {
        let raw = RawPatch {
            quantity: Some("5".to_string()),
            ..Default::default()
        };
        let patch = parse_patch(&raw).unwrap();
        assert_eq!(patch.quantity, Some(5));
        assert!(patch.name.is_none());

        let raw = RawPatch {
            name: Some("".to_string()),
            price: Some("-1".to_string()),
            ..Default::default()
        };
        let errors = parse_patch(&raw).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
