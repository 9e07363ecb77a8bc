//! Print the catalog taxonomy.

use std::fmt::Write;

use loomline_core::taxonomy::{Category, Material};

/// Render categories with their types, then materials, one per line.
pub fn render() -> String {
    let width = Category::ALL
        .iter()
        .map(|category| category.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for category in Category::ALL {
        let _ = writeln!(
            out,
            "{:<width$}  {}",
            category.name(),
            category.types().join(", ")
        );
    }

    let materials: Vec<&str> = Material::ALL.into_iter().map(Material::name).collect();
    let _ = writeln!(out, "\nMaterials: {}", materials.join(", "));
    out
}

/// Print the taxonomy to stdout.
pub fn print() {
    #[allow(clippy::print_stdout)]
    {
        print!("{}", render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_every_category() {
        let text = render();
        assert!(text.starts_with("Topwear      T-Shirt, Shirt, Polo, Kurta\n"));
        assert!(text.contains("Accessories  Cap, Belt, Scarf, Socks\n"));
        assert!(text.ends_with("Materials: Cotton, Linen, Polyester, Wool, Silk, Denim, Rayon\n"));
    }
}
