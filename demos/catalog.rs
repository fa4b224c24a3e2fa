use anyhow::Result;
use cql_adapter::{Adapter, CatalogItem, CqlAdapter, HostConnection, SystemSchemaSource};
use std::env;
use std::sync::Arc;

fn print_item(item: &CatalogItem, depth: usize) {
    println!(
        "{:indent$}{} [{}]  {}",
        "",
        item.label,
        item.type_label,
        item.qualified_identifier,
        indent = depth * 2
    );
    for child in &item.children {
        print_item(child, depth + 1);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let uri = env::var("SCYLLA_URI").unwrap_or_else(|_| "127.0.0.1:9042".to_string());
    let (host, port) = uri.rsplit_once(':').unwrap_or((uri.as_str(), "9042"));

    println!("Connecting to {} ...", uri);

    let mut adapter = CqlAdapter::from_values([("host", host), ("port", port)])?;
    // Pass any argument to read system_schema directly instead of driver metadata.
    if env::args().nth(1).is_some() {
        adapter = adapter.with_schema_source(Arc::new(SystemSchemaSource));
    }

    let connection = adapter.connect().await?;
    println!("{}", connection.init_message());

    let catalog = connection.get_catalog().await?;
    for keyspace in &catalog.items {
        print_item(keyspace, 0);
    }

    connection.close();
    Ok(())
}
