//! Products panel configuration

use dash_data::model::{Product, ProductSort, ProductStatus};

use crate::render::{BadgeVariant, PanelCopy};
use crate::table::{Column, TableModel};

pub const SORT_OPTIONS: &[(ProductSort, &str)] = &[
    (ProductSort::Newest, "Newest"),
    (ProductSort::Name, "Name"),
    (ProductSort::Price, "Price"),
    (ProductSort::Stock, "Stock"),
];

pub const COPY: PanelCopy = PanelCopy {
    loading: "Loading products...",
    load_error: "Failed to load products",
    empty_title: "No products found",
    empty_no_data: "No products have been added yet.",
    empty_no_results: "Try adjusting your search.",
};

pub fn table() -> TableModel<Product> {
    TableModel::new(
        vec![
            Column::new("Product Name", |p: &Product| p.name.clone()),
            Column::new("SKU", |p: &Product| p.sku.clone()),
            Column::new("Category", |p: &Product| p.category.clone()),
            Column::new("Price", |p: &Product| format!("${:.2}", p.price)),
            Column::new("Stock", |p: &Product| p.stock.to_string()),
            Column::new("Status", |p: &Product| p.status.as_str().to_string()),
        ],
        |p| p.id.clone(),
    )
}

pub fn status_badge(status: ProductStatus) -> BadgeVariant {
    match status {
        ProductStatus::Active => BadgeVariant::Success,
        ProductStatus::Draft => BadgeVariant::Warning,
        ProductStatus::Archived => BadgeVariant::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_price_renders_with_two_decimals() {
        let product = Product {
            id: "prod_000001".to_string(),
            name: "Wireless Headphones v2".to_string(),
            sku: "SKU-1001".to_string(),
            price: 129.5,
            stock: 42,
            category: "Electronics".to_string(),
            status: ProductStatus::Active,
            created_at: Utc::now(),
        };
        let cells = table().render_row(&product);
        assert_eq!(cells[3], "$129.50");
        assert_eq!(cells[4], "42");
    }

    #[test]
    fn test_badge_per_status() {
        assert_eq!(status_badge(ProductStatus::Active), BadgeVariant::Success);
        assert_eq!(status_badge(ProductStatus::Draft), BadgeVariant::Warning);
        assert_eq!(status_badge(ProductStatus::Archived), BadgeVariant::Neutral);
    }
}
