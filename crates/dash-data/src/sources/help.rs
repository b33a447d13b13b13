//! Help center: categories and FAQs
//!
//! The one panel that does not page; its lists are small and searched in
//! full. Category tiles carry icon identifiers that the view layer resolves
//! through its registry.

use std::time::Duration;

use super::simulate_latency;
use crate::model::{Faq, HelpCategory};
use crate::DataError;

/// Mock help service
pub struct HelpDesk {
    categories: Vec<HelpCategory>,
    faqs: Vec<Faq>,
    delay: Duration,
}

impl HelpDesk {
    pub fn new(delay: Duration) -> Self {
        Self {
            categories: build_categories(),
            faqs: build_faqs(),
            delay,
        }
    }

    pub async fn categories(&self) -> Result<Vec<HelpCategory>, DataError> {
        simulate_latency(self.delay).await;
        Ok(self.categories.clone())
    }

    /// FAQs, optionally narrowed to a single category (exact name match).
    pub async fn faqs(&self, category: Option<&str>) -> Result<Vec<Faq>, DataError> {
        simulate_latency(self.delay).await;
        Ok(match category {
            Some(name) => self
                .faqs
                .iter()
                .filter(|faq| faq.category == name)
                .cloned()
                .collect(),
            None => self.faqs.clone(),
        })
    }

    /// Case-insensitive substring search over questions and answers.
    pub async fn search_faqs(&self, query: &str) -> Result<Vec<Faq>, DataError> {
        simulate_latency(self.delay).await;
        let needle = query.to_lowercase();
        Ok(self
            .faqs
            .iter()
            .filter(|faq| {
                faq.question.to_lowercase().contains(&needle)
                    || faq.answer.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}

fn category(id: &str, name: &str, icon: &str, description: &str) -> HelpCategory {
    HelpCategory {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

fn build_categories() -> Vec<HelpCategory> {
    vec![
        category(
            "1",
            "Getting Started",
            "LayoutDashboard",
            "Learn the basics of using the platform",
        ),
        category(
            "2",
            "Account & Billing",
            "CreditCard",
            "Manage your account and payments",
        ),
        category(
            "3",
            "Products",
            "ShoppingBag",
            "Product management and inventory",
        ),
        category("4", "Customers", "Users", "Customer data and segments"),
        category(
            "5",
            "Reports",
            "BarChart",
            "Analytics and reporting features",
        ),
    ]
}

fn faq(id: &str, category: &str, question: &str, answer: &str) -> Faq {
    Faq {
        id: id.to_string(),
        category: category.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

fn build_faqs() -> Vec<Faq> {
    vec![
        faq(
            "1",
            "Getting Started",
            "How do I create my first product?",
            "Navigate to the Products tab, click \"Add Product\", fill in the product details \
             including name, SKU, price, and stock quantity, then click Save.",
        ),
        faq(
            "2",
            "Getting Started",
            "How do I import existing customers?",
            "Go to Customers > Import, download our CSV template, fill in your customer data, \
             and upload the file. The system will validate and import your customers.",
        ),
        faq(
            "3",
            "Account & Billing",
            "How do I upgrade my plan?",
            "Visit Settings > Billing, click \"Upgrade Plan\", select your desired plan tier, \
             and complete the payment process. Your new features will be available immediately.",
        ),
        faq(
            "4",
            "Account & Billing",
            "Can I get a refund?",
            "We offer a 30-day money-back guarantee for all paid plans. Contact our support \
             team through Help > Contact Support to request a refund.",
        ),
        faq(
            "5",
            "Products",
            "How do I manage inventory levels?",
            "Each product has a stock quantity field. You can set low stock alerts in \
             Settings > Notifications to be notified when inventory drops below your threshold.",
        ),
        faq(
            "6",
            "Products",
            "Can I bulk edit products?",
            "Yes! Select multiple products using the checkboxes, then click \"Bulk Actions\" \
             to edit price, status, or category for all selected products at once.",
        ),
        faq(
            "7",
            "Customers",
            "How do I create customer segments?",
            "Go to Customers > Segments, click \"New Segment\", define your criteria \
             (e.g., purchase history, location), and save. Segments update automatically.",
        ),
        faq(
            "8",
            "Customers",
            "How do I export customer data?",
            "From the Customers list, click the Export button in the top right. Choose your \
             format (CSV or Excel) and the data fields you want to include.",
        ),
        faq(
            "9",
            "Reports",
            "How often are reports updated?",
            "Dashboard stats update in real-time. Detailed reports are refreshed every hour. \
             You can manually refresh any report by clicking the refresh icon.",
        ),
        faq(
            "10",
            "Reports",
            "Can I schedule automated reports?",
            "Yes! Go to Reports > Scheduled, create a new schedule, select your report type, \
             frequency (daily, weekly, monthly), and recipient email addresses.",
        ),
    ]
}
