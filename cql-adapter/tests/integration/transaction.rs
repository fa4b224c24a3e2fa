use cql_adapter::{Adapter, HostConnection, HostCursor};
use scylla::statement::Consistency;

use crate::utils::{setup_tracing, test_adapter};

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn toggle_cycles_from_configured_consistency() {
    setup_tracing();
    let mut connection = test_adapter([("consistency-level", "ONE")])
        .connect()
        .await
        .unwrap();

    let mode = connection.transaction_mode().unwrap();
    assert_eq!(mode.consistency(), Consistency::One);
    assert_eq!(mode.label(), "ONE");

    let next = connection.toggle_transaction_mode().unwrap();
    assert_eq!(next.consistency(), Consistency::Two);
    assert_eq!(connection.transaction_mode(), Some(next));

    let session_consistency = connection
        .session()
        .get_default_execution_profile_handle()
        .to_profile()
        .get_consistency();
    assert_eq!(session_consistency, Consistency::Two);
}

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn queries_run_after_toggling() {
    setup_tracing();
    let mut connection = test_adapter([("consistency-level", "LOCAL_ONE")])
        .connect()
        .await
        .unwrap();
    // LOCAL_ONE is last in the cycle.
    let next = connection.toggle_transaction_mode().unwrap();
    assert_eq!(next.consistency(), Consistency::Any);
    let next = connection.toggle_transaction_mode().unwrap();
    assert_eq!(next.consistency(), Consistency::One);

    let mut cursor = connection
        .execute("SELECT key FROM system.local")
        .await
        .unwrap();
    let rows = cursor.fetch_all().await.unwrap();
    assert_eq!(rows.map(|rows| rows.len()), Some(1));
}
