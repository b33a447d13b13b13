//! Application state container
//!
//! Everything is constructed once here and handed down explicitly; no
//! module-level singletons. Controllers share their service through the
//! same `Arc` the stats calls use.

use std::sync::Arc;

use dash_core::CollectionController;
use dash_data::model::{
    Campaign, CampaignSort, Customer, CustomerSort, Product, ProductSort, Transaction,
    TransactionSort,
};
use dash_data::{
    CampaignBook, CustomerDirectory, HelpDesk, Overview, ProductCatalog, ProfileStore,
    TransactionLedger,
};

use crate::config::AppConfig;

pub struct App {
    pub customer_directory: Arc<CustomerDirectory>,
    pub transaction_ledger: Arc<TransactionLedger>,
    pub help: HelpDesk,
    pub overview: Overview,
    pub profile: ProfileStore,

    pub customers: CollectionController<Customer, CustomerDirectory>,
    pub products: CollectionController<Product, ProductCatalog>,
    pub transactions: CollectionController<Transaction, TransactionLedger>,
    pub campaigns: CollectionController<Campaign, CampaignBook>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let delay = config.api_delay();
        let debounce = config.debounce();
        let page_size = config.page_size;

        let customer_directory = Arc::new(CustomerDirectory::new(delay));
        let product_catalog = Arc::new(ProductCatalog::new(delay));
        let transaction_ledger = Arc::new(TransactionLedger::new(delay));
        let campaign_book = Arc::new(CampaignBook::new(delay));

        Self {
            customers: CollectionController::with_page_size(
                customer_directory.clone(),
                CustomerSort::Newest,
                page_size,
            )
            .with_debounce(debounce),
            products: CollectionController::with_page_size(
                product_catalog,
                ProductSort::Newest,
                page_size,
            )
            .with_debounce(debounce),
            transactions: CollectionController::with_page_size(
                transaction_ledger.clone(),
                TransactionSort::Newest,
                page_size,
            )
            .with_debounce(debounce),
            campaigns: CollectionController::with_page_size(
                campaign_book,
                CampaignSort::Newest,
                page_size,
            )
            .with_debounce(debounce),
            customer_directory,
            transaction_ledger,
            help: HelpDesk::new(delay),
            overview: Overview::new(delay),
            profile: ProfileStore::new(delay),
        }
    }
}
