use assert_matches::assert_matches;
use cql_adapter::errors::PREPARE_ERROR_TITLE;
use cql_adapter::{HostConnection, HostCursor, QueryError};
use scylla::value::CqlValue;

use crate::utils::{connect, create_keyspace, run, setup_tracing};

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn connection_greets_the_host() {
    setup_tracing();
    let connection = connect().await;
    assert_eq!(connection.init_message(), "Connected to Cassandra.");
    connection.close();
}

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn select_reports_columns_and_rows() {
    setup_tracing();
    let connection = connect().await;
    let mut cursor = connection
        .execute("SELECT key, bootstrapped FROM system.local")
        .await
        .unwrap();
    assert_eq!(
        cursor.columns(),
        [
            ("key".to_owned(), "s".to_owned()),
            ("bootstrapped".to_owned(), "s".to_owned())
        ]
    );

    let rows = cursor.fetch_all().await.unwrap().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].columns[0],
        Some(CqlValue::Text("local".to_owned()))
    );
}

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn limit_caps_fetched_rows() {
    setup_tracing();
    let connection = connect().await;
    let ks = create_keyspace(&connection).await;
    run(&connection, &format!("CREATE TABLE {ks}.nums (k int PRIMARY KEY)")).await;
    for k in 0..10 {
        run(&connection, &format!("INSERT INTO {ks}.nums (k) VALUES ({k})")).await;
    }

    let mut cursor = connection
        .execute(&format!("SELECT k FROM {ks}.nums"))
        .await
        .unwrap()
        .set_limit(3);
    assert_eq!(cursor.fetch_all().await.unwrap().unwrap().len(), 3);

    let mut unlimited = connection
        .execute(&format!("SELECT k FROM {ks}.nums"))
        .await
        .unwrap();
    assert_eq!(unlimited.fetch_all().await.unwrap().unwrap().len(), 10);

    let mut zero = connection
        .execute(&format!("SELECT k FROM {ks}.nums"))
        .await
        .unwrap()
        .set_limit(0);
    assert_eq!(zero.fetch_all().await.unwrap().unwrap().len(), 10);

    run(&connection, &format!("DROP KEYSPACE {ks}")).await;
}

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn statements_without_rows_return_none() {
    setup_tracing();
    let connection = connect().await;
    let ks = create_keyspace(&connection).await;

    let mut cursor = connection
        .execute(&format!("CREATE TABLE {ks}.empty (k int PRIMARY KEY)"))
        .await
        .unwrap();
    assert!(cursor.columns().is_empty());
    assert!(cursor.fetch_all().await.unwrap().is_none());

    let mut insert = connection
        .execute(&format!("INSERT INTO {ks}.empty (k) VALUES (1)"))
        .await
        .unwrap();
    assert!(insert.fetch_all().await.unwrap().is_none());

    run(&connection, &format!("DROP KEYSPACE {ks}")).await;
}

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn conditional_writes_report_applied() {
    setup_tracing();
    let connection = connect().await;
    let ks = create_keyspace(&connection).await;
    run(&connection, &format!("CREATE TABLE {ks}.lwt (k int PRIMARY KEY)")).await;

    let mut cursor = connection
        .execute(&format!("INSERT INTO {ks}.lwt (k) VALUES (1) IF NOT EXISTS"))
        .await
        .unwrap();
    let rows = cursor.fetch_all().await.unwrap().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(cursor.columns()[0].0, "[applied]");
    assert_eq!(rows[0].columns[0], Some(CqlValue::Boolean(true)));

    run(&connection, &format!("DROP KEYSPACE {ks}")).await;
}

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn syntax_errors_fail_to_prepare() {
    setup_tracing();
    let connection = connect().await;
    let error = connection.execute("SELEC 1").await.unwrap_err();
    assert_matches!(error, QueryError::Prepare(_));
    assert_eq!(error.title(), PREPARE_ERROR_TITLE);
}

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn validate_blanks_out_syntax_errors_only() {
    setup_tracing();
    let connection = connect().await;

    let query = "SELECT key FROM system.local";
    assert_eq!(connection.validate(query).await.unwrap(), query);
    assert_eq!(connection.validate("SELEC key FROM system.local").await.unwrap(), "");
    assert_matches!(
        connection.validate("SELECT key FROM system.no_such_table").await,
        Err(QueryError::Prepare(_))
    );
}
