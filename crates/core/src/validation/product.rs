use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use serde_json::Value;

use super::fields::{FieldReader, incomplete};
use super::{Schema, ValidationErrors};
use crate::types::{Price, Slug, slug};

const NON_NEGATIVE: &str = "Number must be greater than or equal to 0";

/// A validated catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub slug: Slug,
    pub description: String,
    /// Non-empty, not yet checked against the taxonomy.
    pub category: String,
    /// Non-empty, not yet checked against the taxonomy.
    #[serde(rename = "type")]
    pub product_type: String,
    pub material: String,
    pub price: Price,
    pub stock: u32,
    pub images: Vec<String>,
    pub is_published: bool,
}

/// Schema for the admin product form.
///
/// `price` and `stock` arrive as numbers or numeric text and are coerced
/// before their range checks. `category` and `type` are only checked for
/// presence; see [`crate::taxonomy::check_selection`] for membership.
pub struct ProductSchema;

impl ProductSchema {
    pub const NAME_MIN_LENGTH: usize = 2;
}

impl Schema for ProductSchema {
    type Output = Product;

    fn validate(raw: &Value) -> Result<Product, ValidationErrors> {
        let mut reader = FieldReader::new(raw);

        let name = reader.min_length("name", Self::NAME_MIN_LENGTH);

        let slug = reader
            .required_string("slug")
            .and_then(|value| check_slug(&mut reader, value));

        let description = reader.text("description");
        let category = non_empty(&mut reader, "category", "Category is required");
        let product_type = non_empty(&mut reader, "type", "Type is required");
        let material = reader.text("material");

        let price = reader.number("price").and_then(|amount| {
            if amount.is_sign_negative() && !amount.is_zero() {
                reader.push("price", NON_NEGATIVE);
                return None;
            }
            Some(Price::in_default_currency(amount))
        });

        let stock = reader
            .number("stock")
            .and_then(|count| check_stock(&mut reader, count));

        let images = reader.string_list("images");
        let is_published = reader.boolean("isPublished", false);

        reader.finish()?;

        match (name, slug, category, product_type, price, stock) {
            (
                Some(name),
                Some(slug),
                Some(category),
                Some(product_type),
                Some(price),
                Some(stock),
            ) => Ok(Product {
                name: name.to_owned(),
                slug,
                description,
                category: category.to_owned(),
                product_type: product_type.to_owned(),
                material,
                price,
                stock,
                images,
                is_published,
            }),
            _ => Err(incomplete()),
        }
    }
}

fn non_empty<'a>(reader: &mut FieldReader<'a>, field: &str, message: &str) -> Option<&'a str> {
    let value = reader.required_string(field)?;
    if value.is_empty() {
        reader.push(field, message);
        return None;
    }
    Some(value)
}

/// Length and pattern checks are independent, so `"A"` reports both.
fn check_slug(reader: &mut FieldReader<'_>, value: &str) -> Option<Slug> {
    let mut ok = true;
    if value.chars().count() < Slug::MIN_LENGTH {
        reader.push(
            "slug",
            format!(
                "String must contain at least {} character(s)",
                Slug::MIN_LENGTH
            ),
        );
        ok = false;
    }
    if !slug::is_valid_pattern(value) {
        reader.push(
            "slug",
            "Slug may only contain lowercase letters, digits and single hyphens",
        );
        ok = false;
    }
    if !ok {
        return None;
    }
    Slug::parse(value).ok()
}

/// Integer and range checks are independent, so `-1.5` reports both.
fn check_stock(reader: &mut FieldReader<'_>, count: Decimal) -> Option<u32> {
    let mut ok = true;
    if !count.fract().is_zero() {
        reader.push("stock", "Expected integer, received float");
        ok = false;
    }
    if count.is_sign_negative() && !count.is_zero() {
        reader.push("stock", NON_NEGATIVE);
        ok = false;
    }
    if !ok {
        return None;
    }
    count.to_u32().or_else(|| {
        reader.push(
            "stock",
            format!("Number must be less than or equal to {}", u32::MAX),
        );
        None
    })
}
