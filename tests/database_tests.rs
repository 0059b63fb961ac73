#[tokio::test]
#[serial_test::serial]
#[ignore = "requires a MySQL database"]
pub async fn test_database_connection() {
    let database = cardinal_server_lib::data::database::Database::new().await;

    let conn = database.get_connection().await;

    assert!(conn.is_ok(), "Failed to get a database connection");
}
