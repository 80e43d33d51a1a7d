//! End-to-end demo: seed an in-memory store through the ingestion boundary
//! and run a few dashboard queries.
//!
//! ```sh
//! cargo run --example dashboard_demo
//! ```

use salesdash::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn seed_rows() -> Vec<HashMap<String, String>> {
    vec![
        row(&[
            ("Date", "2023-01-12"),
            ("Customer Name", "Asha Rao"),
            ("Phone Number", "555-0101"),
            ("Customer Region", "North"),
            ("Gender", "Female"),
            ("Age", "34"),
            ("Product Category", "Electronics"),
            ("Product Name", "Headphones"),
            ("Quantity", "3"),
            ("Price per Unit", "49.99"),
            ("Discount Percentage", "10"),
            ("Total Amount", "149.97"),
            ("Final Amount", "134.97"),
            ("Payment Method", "Card"),
            ("Tags", "Clearance Sale, Popular"),
            ("Order Status", "Delivered"),
        ]),
        row(&[
            ("Date", "2023-02-01"),
            ("Customer Name", "Meera Iyer"),
            ("Phone Number", "555-0102"),
            ("Customer Region", "South"),
            ("Gender", "Female"),
            ("Age", "41"),
            ("Product Category", "Home"),
            ("Product Name", "Lamp"),
            ("Quantity", "5"),
            ("Price per Unit", "20.00"),
            ("Discount Percentage", "0"),
            ("Total Amount", "100.00"),
            ("Final Amount", "100.00"),
            ("Payment Method", "UPI"),
            ("Tags", "Premium"),
            ("Order Status", "Delivered"),
        ]),
        // Malformed on purpose: the lenient coercion policy zero-fills.
        row(&[
            ("Date", "sometime"),
            ("Customer Name", "Dev Kumar"),
            ("Customer Region", "North"),
            ("Age", "n/a"),
            ("Quantity", "2"),
            ("Total Amount", "60.00"),
            ("Final Amount", "54.00"),
            ("Payment Method", "Cash"),
            ("Tags", "Popular"),
        ]),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = DashboardConfig::from_yaml_str("query:\n  timeout_ms: 5000\n")?;

    let records: Vec<SalesRecord> = seed_rows().iter().map(record_from_row).collect();
    let store = InMemorySalesStore::new(records);

    let executor = QueryExecutor::new(Arc::new(store))
        .with_timeout(config.query_timeout().unwrap_or(Duration::from_secs(5)));

    tracing::info!("health: {:?}", executor.health().await?);

    // Everything, newest first.
    let envelope = executor.execute(&SalesQuery::default()).await?;
    println!("--- all records ---");
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    // Northern clearance-sale orders, largest quantities first.
    let query = SalesQuery::from_pairs([
        ("regions", "North"),
        ("tags", "sale"),
        ("sortBy", "quantity"),
        ("sortOrder", "desc"),
    ]);
    let envelope = executor.execute(&query).await?;
    println!("--- north + 'sale' tag ---");
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    // Filter widget catalogs.
    let options = executor.filter_options().await?;
    println!("--- filter options ---");
    println!("{}", serde_json::to_string_pretty(&options)?);

    Ok(())
}
