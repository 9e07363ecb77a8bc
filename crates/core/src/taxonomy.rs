//! Static catalog taxonomy: categories, the product types each permits, and
//! materials.
//!
//! The tables are fixed at compile time. Matching a [`Category`] is
//! exhaustive, so adding a category forces its type list to be written.

use serde::{Deserialize, Serialize};

use crate::validation::FieldError;

/// Top-level catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Topwear,
    Bottomwear,
    Outerwear,
    Ethnicwear,
    Innerwear,
    Footwear,
    Accessories,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 7] = [
        Self::Topwear,
        Self::Bottomwear,
        Self::Outerwear,
        Self::Ethnicwear,
        Self::Innerwear,
        Self::Footwear,
        Self::Accessories,
    ];

    /// Display name, which is also the value stored on products.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Topwear => "Topwear",
            Self::Bottomwear => "Bottomwear",
            Self::Outerwear => "Outerwear",
            Self::Ethnicwear => "Ethnicwear",
            Self::Innerwear => "Innerwear",
            Self::Footwear => "Footwear",
            Self::Accessories => "Accessories",
        }
    }

    /// Product types permitted under this category.
    #[must_use]
    pub const fn types(self) -> &'static [&'static str] {
        match self {
            Self::Topwear => &["T-Shirt", "Shirt", "Polo", "Kurta"],
            Self::Bottomwear => &["Jeans", "Trousers", "Shorts", "Joggers"],
            Self::Outerwear => &["Jacket", "Hoodie", "Sweatshirt", "Blazer"],
            Self::Ethnicwear => &["Saree", "Lehenga", "Sherwani", "Dhoti"],
            Self::Innerwear => &["Vest", "Briefs", "Boxers", "Camisole"],
            Self::Footwear => &["Sneakers", "Sandals", "Boots", "Loafers"],
            Self::Accessories => &["Cap", "Belt", "Scarf", "Socks"],
        }
    }

    /// Look up a category by its exact display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Whether `product_type` is one of this category's types.
    #[must_use]
    pub fn permits(self, product_type: &str) -> bool {
        self.types().contains(&product_type)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fabric or material a product is made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Cotton,
    Linen,
    Polyester,
    Wool,
    Silk,
    Denim,
    Rayon,
}

impl Material {
    /// All materials, in display order.
    pub const ALL: [Self; 7] = [
        Self::Cotton,
        Self::Linen,
        Self::Polyester,
        Self::Wool,
        Self::Silk,
        Self::Denim,
        Self::Rayon,
    ];

    /// Display name, which is also the value stored on products.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cotton => "Cotton",
            Self::Linen => "Linen",
            Self::Polyester => "Polyester",
            Self::Wool => "Wool",
            Self::Silk => "Silk",
            Self::Denim => "Denim",
            Self::Rayon => "Rayon",
        }
    }

    /// Look up a material by its exact display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Serializable view of the whole taxonomy, for clients building forms.
#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyView {
    pub categories: Vec<CategoryView>,
    pub materials: Vec<&'static str>,
}

/// One category with its permitted types.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub name: &'static str,
    pub types: &'static [&'static str],
}

/// Build the serializable taxonomy.
#[must_use]
pub fn view() -> TaxonomyView {
    TaxonomyView {
        categories: Category::ALL
            .into_iter()
            .map(|category| CategoryView {
                name: category.name(),
                types: category.types(),
            })
            .collect(),
        materials: Material::ALL.into_iter().map(Material::name).collect(),
    }
}

/// Cross-check a product's category, type and material against the tables.
///
/// The product schema only requires `category` and `type` to be non-empty;
/// form handlers call this afterwards to reject values outside the taxonomy.
/// An empty `material` is accepted.
#[must_use]
pub fn check_selection(category: &str, product_type: &str, material: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match Category::from_name(category) {
        Some(known) => {
            if !known.permits(product_type) {
                errors.push(FieldError::new(
                    "type",
                    format!(
                        "'{product_type}' is not a {known} type. Expected one of: {}",
                        known.types().join(", ")
                    ),
                ));
            }
        }
        None => errors.push(FieldError::new(
            "category",
            format!("Unknown category '{category}'"),
        )),
    }

    if !material.is_empty() && Material::from_name(material).is_none() {
        errors.push(FieldError::new(
            "material",
            format!("Unknown material '{material}'"),
        ));
    }

    errors
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_topwear_types() {
        assert_eq!(
            Category::Topwear.types(),
            &["T-Shirt", "Shirt", "Polo", "Kurta"]
        );
    }

    #[test]
    fn test_every_category_has_types() {
        assert_eq!(Category::ALL.len(), 7);
        assert_eq!(Material::ALL.len(), 7);
        for category in Category::ALL {
            assert!(!category.types().is_empty(), "{category} has no types");
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(Category::from_name("Footwear"), Some(Category::Footwear));
        assert_eq!(Category::from_name("footwear"), None);
        assert_eq!(Material::from_name("Silk"), Some(Material::Silk));
        assert_eq!(Material::from_name("Velvet"), None);
    }

    #[test]
    fn test_check_selection_accepts_consistent_choice() {
        assert!(check_selection("Topwear", "Kurta", "Cotton").is_empty());
        assert!(check_selection("Footwear", "Boots", "").is_empty());
    }

    #[test]
    fn test_check_selection_reports_type_outside_category() {
        let errors = check_selection("Topwear", "Jeans", "Denim");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().unwrap().field, "type");
    }

    #[test]
    fn test_check_selection_reports_unknown_category_and_material() {
        let errors = check_selection("Gadgets", "Phone", "Plastic");
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["category", "material"]);
    }

    #[test]
    fn test_view_serializes() {
        let json = serde_json::to_value(view()).unwrap();
        assert_eq!(json["categories"][0]["name"], "Topwear");
        assert_eq!(json["materials"].as_array().unwrap().len(), 7);
    }
}
