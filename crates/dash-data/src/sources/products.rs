//! Product catalog: a bounded collection of 500 rows

use std::cmp::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Duration as ChronoDuration;
use dash_core::{CoreError, PageEnvelope, PageFetcher, QueryParams};

use super::{simulate_latency, REFERENCE_TIME};
use crate::engine::{self, cmp_ci, cmp_f64_desc};
use crate::model::{Product, ProductSort, ProductStatus};
use crate::rng::IndexedRng;
use crate::DataError;

/// Size of the generated catalog
pub const PRODUCT_COUNT: usize = 500;

const PRODUCT_NAMES: [&str; 15] = [
    "Premium Widget",
    "Ultra Gadget",
    "Smart Device",
    "Pro Controller",
    "Elite Speaker",
    "Wireless Hub",
    "Digital Display",
    "Power Bank",
    "LED Strip",
    "Smart Watch",
    "Bluetooth Headset",
    "USB Adapter",
    "Portable Charger",
    "Gaming Mouse",
    "Mechanical Keyboard",
];

const CATEGORIES: [&str; 6] = [
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Sports",
    "Books",
    "Toys",
];

// Weighted: three in five products are live.
const STATUSES: [ProductStatus; 5] = [
    ProductStatus::Active,
    ProductStatus::Active,
    ProductStatus::Active,
    ProductStatus::Draft,
    ProductStatus::Archived,
];

/// Materialize catalog row `index`. Draw order is fixed: price, stock,
/// status, age.
pub fn generate_product(index: usize) -> Product {
    let mut rng = IndexedRng::for_index(index);

    let base = PRODUCT_NAMES[index % PRODUCT_NAMES.len()];
    let variant = index / PRODUCT_NAMES.len() + 1;
    let name = if variant > 1 {
        format!("{base} v{variant}")
    } else {
        base.to_string()
    };

    let price = (rng.below(500) + 10) as f64;
    let stock = rng.below(200) as u32;
    let status = *rng.pick(&STATUSES);
    let age = rng.in_range(0, 365 * 24 * 3600);

    Product {
        id: format!("prod_{index:06}"),
        name,
        sku: format!("SKU-{}", 1000 + index),
        price,
        stock,
        category: CATEGORIES[index % CATEGORIES.len()].to_string(),
        status,
        created_at: *REFERENCE_TIME - ChronoDuration::seconds(age),
    }
}

fn compare(sort: Option<ProductSort>, a: &Product, b: &Product) -> Ordering {
    match sort {
        Some(ProductSort::Name) => cmp_ci(&a.name, &b.name),
        Some(ProductSort::Price) => cmp_f64_desc(a.price, b.price),
        Some(ProductSort::Stock) => b.stock.cmp(&a.stock),
        Some(ProductSort::Newest) => b.created_at.cmp(&a.created_at),
        None => Ordering::Equal,
    }
}

/// Mock inventory service over the generated catalog
pub struct ProductCatalog {
    products: Vec<Product>,
    delay: Duration,
}

impl ProductCatalog {
    pub fn new(delay: Duration) -> Self {
        Self {
            products: (0..PRODUCT_COUNT).map(generate_product).collect(),
            delay,
        }
    }

    /// Resolve one page of products. Search matches name, SKU or category.
    pub async fn products(
        &self,
        params: &QueryParams<ProductSort>,
    ) -> Result<PageEnvelope<Product>, DataError> {
        simulate_latency(self.delay).await;
        let sort = params.sort_by;
        engine::resolve_page(
            &self.products,
            params,
            |product, needle| {
                product.name.to_lowercase().contains(needle)
                    || product.sku.to_lowercase().contains(needle)
                    || product.category.to_lowercase().contains(needle)
            },
            move |a, b| compare(sort, a, b),
        )
    }
}

#[async_trait]
impl PageFetcher<Product> for ProductCatalog {
    type Sort = ProductSort;

    async fn fetch_page(
        &self,
        params: QueryParams<ProductSort>,
    ) -> Result<PageEnvelope<Product>, CoreError> {
        self.products(&params).await.map_err(Into::into)
    }
}
