use catalog_core::{CatalogState, CatalogView};
use shared::domain::Product;

pub const NO_DATA_MESSAGE: &str = "No Data to show";

pub fn render_catalog(state: &CatalogState) -> Vec<String> {
    match state.view() {
        CatalogView::Loading => vec!["Loading products...".to_string()],
        CatalogView::Error => vec![NO_DATA_MESSAGE.to_string()],
        CatalogView::Grid(products) if products.is_empty() => {
            vec!["Catalog is empty".to_string()]
        }
        CatalogView::Grid(products) => products.iter().flat_map(render_card).collect(),
    }
}

pub fn render_card(product: &Product) -> Vec<String> {
    let mut lines = vec![format!(
        "#{:<4} {}  ${:.2}",
        product.id.0, product.title, product.price
    )];
    if !product.category.is_empty() {
        lines.push(format!("      category: {}", product.category));
    }
    if !product.description.is_empty() {
        lines.push(format!("      {}", truncate(&product.description, 96)));
    }
    if !product.image.is_empty() {
        lines.push(format!("      image: {}", product.image));
    }
    lines
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use catalog_core::CatalogAction;
    use shared::{domain::ProductId, error::CatalogFailure};

    use super::*;

    fn product(id: i64, title: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            price: 9.99,
            description: String::new(),
            category: "misc".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn renders_loading_before_completion() {
        let mut state = CatalogState::new();
        state.apply(CatalogAction::Mount);
        assert_eq!(render_catalog(&state), vec!["Loading products..."]);
    }

    #[test]
    fn renders_error_branch_after_failed_load() {
        let mut state = CatalogState::new();
        state.apply(CatalogAction::Mount);
        state.apply(CatalogAction::CatalogLoadFailed(CatalogFailure::load("down")));
        assert_eq!(render_catalog(&state), vec![NO_DATA_MESSAGE]);
    }

    #[test]
    fn renders_one_card_per_product() {
        let mut state = CatalogState::new();
        state.apply(CatalogAction::Mount);
        state.apply(CatalogAction::CatalogLoaded(vec![product(1, "A"), product(2, "B")]));
        let lines = render_catalog(&state);
        assert_eq!(lines.iter().filter(|line| line.starts_with('#')).count(), 2);
        assert_eq!(lines[0], "#1    A  $9.99");
    }

    #[test]
    fn truncates_long_descriptions_on_char_boundaries() {
        let text = "é".repeat(120);
        let cut = truncate(&text, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with("..."));
    }
}
