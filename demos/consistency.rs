use anyhow::Result;
use cql_adapter::{Adapter, CqlAdapter, HostConnection, HostCursor};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let uri = env::var("SCYLLA_URI").unwrap_or_else(|_| "127.0.0.1:9042".to_string());
    let (host, port) = uri.rsplit_once(':').unwrap_or((uri.as_str(), "9042"));

    println!("Connecting to {} ...", uri);

    let mut connection = CqlAdapter::from_values([
        ("host", host),
        ("port", port),
        ("consistency-level", "ONE"),
    ])?
    .connect()
    .await?;

    for _ in 0..4 {
        if let Some(mode) = connection.transaction_mode() {
            let mut cursor = connection.execute("SELECT key FROM system.local").await?;
            match cursor.fetch_all().await {
                Ok(rows) => println!(
                    "{:>10}: read {} row(s)",
                    mode.label(),
                    rows.map_or(0, |rows| rows.len())
                ),
                Err(err) => println!("{:>10}: {}", mode.label(), err),
            }
        }
        if let Some(next) = connection.toggle_transaction_mode() {
            info!(mode = next.label(), "Toggled transaction mode");
        }
    }

    Ok(())
}
