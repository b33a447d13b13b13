//! Scripted demo session
//!
//! Walks every panel once, then exercises search, sort and paging on the
//! product catalog. State changes that go through the debounced or
//! spawned-fetch paths are given time to settle before printing.

use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::info;

use dash_core::CollectionState;
use dash_data::model::{CustomerSort, ProductSort};
use dash_views::features::{customers, dashboard, income, products, promote};
use dash_views::{derive_render, entries_summary, PageSlot, PaginationControl, PanelCopy, PanelRender, StatCard, TableModel};

use crate::app::App;
use crate::config::AppConfig;

pub async fn run(app: &App, config: &AppConfig) -> Result<()> {
    let settle = config.debounce() + config.api_delay() + Duration::from_millis(50);

    show_overview(app).await?;

    info!("loading customers");
    app.customers.refresh().await;
    let stats = app.customer_directory.stats().await?;
    print_cards(&customers::stats_strip(Some(&stats)));
    print_panel("All Customers", &customers::table(), &app.customers.state(), &customers::COPY);

    info!("loading products");
    app.products.refresh().await;
    print_panel("All Products", &products::table(), &app.products.state(), &products::COPY);

    info!("searching products");
    app.products.set_search("widget");
    sleep(settle).await;
    print_panel("All Products (search: widget)", &products::table(), &app.products.state(), &products::COPY);

    info!("sorting products by price");
    app.products.set_search("");
    sleep(settle).await;
    app.products.set_sort_by(ProductSort::Price);
    sleep(settle).await;
    app.products.set_page(2);
    sleep(settle).await;
    print_panel("All Products (by price, page 2)", &products::table(), &app.products.state(), &products::COPY);

    info!("loading income");
    app.transactions.refresh().await;
    let stats = app.transaction_ledger.stats().await?;
    print_cards(&income::stats_strip(Some(&stats)));
    print_panel("All Transactions", &income::table(), &app.transactions.state(), &income::COPY);

    info!("loading campaigns");
    app.campaigns.refresh().await;
    print_panel("All Campaigns", &promote::table(), &app.campaigns.state(), &promote::COPY);

    // Sort customers by name to show the virtual directory paging
    app.customers.set_sort_by(CustomerSort::Name);
    sleep(settle).await;
    print_panel("All Customers (by name)", &customers::table(), &app.customers.state(), &customers::COPY);

    show_help(app).await?;
    show_profile(app).await?;

    Ok(())
}

async fn show_overview(app: &App) -> Result<()> {
    info!("loading dashboard overview");
    let stats = app.overview.stats().await?;
    print_cards(&dashboard::overview_cards(Some(&stats)));
    let now = *dash_data::sources::REFERENCE_TIME;
    println!("Recent activity:");
    for activity in app.overview.recent_activity().await? {
        println!("  {}", dashboard::feed_line(&activity, now));
    }
    println!();
    Ok(())
}

async fn show_help(app: &App) -> Result<()> {
    info!("loading help center");
    println!("Help categories:");
    for category in app.help.categories().await? {
        println!("  [{}] {}: {}", category.icon, category.name, category.description);
    }
    println!("FAQs matching \"refund\":");
    for faq in app.help.search_faqs("refund").await? {
        println!("  Q: {}", faq.question);
    }
    println!();
    Ok(())
}

async fn show_profile(app: &App) -> Result<()> {
    info!("loading profile");
    let profile = app.profile.profile().await?;
    println!("{} <{}> / {} / {}", profile.name, profile.email, profile.role, profile.location);
    let stats = app.profile.stats().await?;
    println!(
        "  {} projects, {} tasks, {} hours, team of {}",
        stats.projects_completed, stats.tasks_completed, stats.hours_logged, stats.team_size
    );
    println!();
    Ok(())
}

fn print_cards(cards: &[StatCard]) {
    for card in cards {
        match card.display_trend() {
            Some(trend) => println!("{}: {} ({})", card.label, card.display_value(), trend),
            None => println!("{}: {}", card.label, card.display_value()),
        }
    }
    println!();
}

fn print_panel<T, S>(
    title: &str,
    table: &TableModel<T>,
    state: &CollectionState<T, S>,
    copy: &PanelCopy,
) {
    println!("== {title} ==");
    match derive_render(state, copy) {
        PanelRender::Loading { label } => println!("{label}"),
        PanelRender::Failed { message, .. } => println!("error: {message}"),
        PanelRender::Empty { title, description } => println!("{title}. {description}"),
        PanelRender::Populated { rows } => {
            println!("{}", table.headers().join(" | "));
            for row in rows {
                println!("{}", table.render_row(row).join(" | "));
            }
            println!(
                "{}",
                entries_summary(state.current_page, state.page_size, state.total)
            );
            if let Some(control) = PaginationControl::build(state.current_page, state.total_pages) {
                println!("{}", render_strip(&control));
            }
        }
    }
    println!();
}

fn render_strip(control: &PaginationControl) -> String {
    let mut parts = Vec::with_capacity(control.slots.len() + 2);
    parts.push(if control.prev_enabled { "<" } else { " " }.to_string());
    for slot in &control.slots {
        parts.push(match slot {
            PageSlot::Page { number, active: true } => format!("[{number}]"),
            PageSlot::Page { number, active: false } => number.to_string(),
            PageSlot::Ellipsis => "...".to_string(),
        });
    }
    parts.push(if control.next_enabled { ">" } else { " " }.to_string());
    parts.join(" ")
}
