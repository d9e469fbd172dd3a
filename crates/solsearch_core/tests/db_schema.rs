use solsearch_core::db::schema::{applications_table_exists, ensure_schema};
use solsearch_core::db::open_connection;
use solsearch_core::{ApplicationStore, NewApplication, StoreConfig};
use rusqlite::Connection;

#[test]
fn open_creates_database_file_and_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solsearch.db");
    assert!(!path.exists());

    let _store = ApplicationStore::open(StoreConfig::file(&path)).unwrap();

    assert!(path.exists());
    let conn = Connection::open(&path).unwrap();
    assert!(applications_table_exists(&conn).unwrap());
}

#[test]
fn initialize_is_idempotent_and_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solsearch.db");

    let store = ApplicationStore::open(StoreConfig::file(&path)).unwrap();
    store
        .insert(&NewApplication::parse("Tesla", "Cloud Architect", "2024-01-02", "Applied", "2").unwrap())
        .unwrap();

    store.initialize().unwrap();
    drop(store);

    let reopened = ApplicationStore::open(StoreConfig::file(&path)).unwrap();
    assert_eq!(reopened.count().unwrap(), 1);
}

#[test]
fn schema_rejects_empty_required_text() {
    let config = StoreConfig::in_memory();
    let _store = ApplicationStore::open(config.clone()).unwrap();
    let conn = open_connection(&config).unwrap();
    ensure_schema(&conn).unwrap();

    let result = conn.execute(
        "INSERT INTO applications (company, role, date_applied, status, priority)
         VALUES ('', 'Dev', '2024-01-01', 'Applied', 3);",
        [],
    );
    assert!(result.is_err());

    let result = conn.execute(
        "INSERT INTO applications (company, role, date_applied, status, priority)
         VALUES ('Acme', NULL, '2024-01-01', 'Applied', 3);",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn memory_store_shares_data_across_operations_and_is_isolated() {
    let first = ApplicationStore::open(StoreConfig::in_memory()).unwrap();
    let second = ApplicationStore::open(StoreConfig::in_memory()).unwrap();

    first
        .insert(&NewApplication::parse("Netflix", "UX Designer", "2024-04-01", "Offer", "5").unwrap())
        .unwrap();

    assert_eq!(first.count().unwrap(), 1);
    assert_eq!(second.count().unwrap(), 0);
}
