use anyhow::Result;
use cql_adapter::{Adapter, CqlAdapter, HostConnection, HostCursor};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let uri = env::var("SCYLLA_URI").unwrap_or_else(|_| "127.0.0.1:9042".to_string());
    let (host, port) = uri.rsplit_once(':').unwrap_or((uri.as_str(), "9042"));
    let query = env::args()
        .nth(1)
        .unwrap_or_else(|| "SELECT keyspace_name, durable_writes FROM system_schema.keyspaces".to_string());

    println!("Connecting to {} ...", uri);

    let connection = CqlAdapter::from_values([("host", host), ("port", port)])?
        .connect()
        .await?;

    if connection.validate(&query).await?.is_empty() {
        println!("Syntax error in: {}", query);
        return Ok(());
    }

    let mut cursor = match connection.execute(&query).await {
        Ok(cursor) => cursor.set_limit(20),
        Err(err) => {
            println!("{}\n{}", err.title(), err);
            return Ok(());
        }
    };

    let columns = cursor.columns();
    println!(
        "{}",
        columns
            .iter()
            .map(|(name, code)| format!("{name} ({code})"))
            .collect::<Vec<_>>()
            .join(" | ")
    );

    match cursor.fetch_all().await? {
        Some(rows) => {
            for row in rows {
                println!("{:?}", row.columns);
            }
        }
        None => println!("Statement returned no rows"),
    }

    Ok(())
}
