use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cql_adapter::{Adapter, CqlAdapter, CqlConnection, HostConnection, HostCursor};

pub(crate) fn setup_tracing() {
    let _ = tracing_subscriber::fmt::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(tracing_subscriber::fmt::TestWriter::new())
        .try_init();
}

static UNIQUE_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn unique_keyspace_name() -> String {
    let cnt = UNIQUE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let name = format!(
        "test_cql_adapter_{}_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs(),
        cnt
    );
    println!("Unique name: {}", name);
    name
}

/// Adapter pointed at `SCYLLA_URI` (`host:port`), 127.0.0.1:9042 by default.
pub(crate) fn test_adapter<'a>(extra: impl IntoIterator<Item = (&'a str, &'a str)>) -> CqlAdapter {
    let uri = env::var("SCYLLA_URI").unwrap_or_else(|_| "127.0.0.1:9042".to_string());
    let (host, port) = uri.rsplit_once(':').unwrap_or((uri.as_str(), "9042"));
    let mut values = vec![("host", host), ("port", port)];
    for (name, value) in extra {
        values.push((name, value));
    }
    CqlAdapter::from_values(values).unwrap()
}

pub(crate) async fn connect() -> CqlConnection {
    test_adapter([]).connect().await.unwrap()
}

/// Runs a statement through the adapter and drops its result.
pub(crate) async fn run(connection: &CqlConnection, query: &str) {
    connection
        .execute(query)
        .await
        .unwrap()
        .fetch_all()
        .await
        .unwrap();
}

pub(crate) async fn create_keyspace(connection: &CqlConnection) -> String {
    let ks = unique_keyspace_name();
    run(
        connection,
        &format!(
            "CREATE KEYSPACE IF NOT EXISTS {ks} WITH REPLICATION = \
             {{'class' : 'SimpleStrategy', 'replication_factor' : 1}}"
        ),
    )
    .await;
    ks
}
