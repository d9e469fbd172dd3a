use solsearch_core::{
    export_to_path, write_csv, ApplicationOrder, ApplicationStore, ExportError, NewApplication,
    Reporter, StoreConfig,
};

fn seeded_store() -> ApplicationStore {
    let store = ApplicationStore::open(StoreConfig::in_memory()).unwrap();
    let rows = [
        ("Google", "Software Engineer Intern", "2024-01-15", "Applied", "4"),
        ("Smith, Jones & Co", "Analyst \"Tier 1\"", "2024-02-01", "Offer", "5"),
    ];
    for (company, role, date, status, priority) in rows {
        store
            .insert(&NewApplication::parse(company, role, date, status, priority).unwrap())
            .unwrap();
    }
    store
}

#[test]
fn write_csv_emits_header_then_one_line_per_record() {
    let store = seeded_store();
    let table = Reporter::new(&store).export_rows(ApplicationOrder::IdAsc).unwrap();

    let mut buffer = Vec::new();
    write_csv(&table, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ID,Company,Role,Date Applied,Status,Priority");
    assert_eq!(lines[1], "1,Google,Software Engineer Intern,2024-01-15,Applied,4");
    assert_eq!(
        lines[2],
        "2,\"Smith, Jones & Co\",\"Analyst \"\"Tier 1\"\"\",2024-02-01,Offer,5"
    );
    assert!(!text.ends_with("\n\n"));
    assert!(!text.contains('\r'));
}

#[test]
fn empty_store_exports_header_only() {
    let store = ApplicationStore::open(StoreConfig::in_memory()).unwrap();
    let table = Reporter::new(&store).export_rows(ApplicationOrder::IdAsc).unwrap();

    let mut buffer = Vec::new();
    write_csv(&table, &mut buffer).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "ID,Company,Role,Date Applied,Status,Priority\n"
    );
}

#[test]
fn export_to_path_writes_file_and_reports_bad_paths() {
    let store = seeded_store();
    let table = Reporter::new(&store).export_rows(ApplicationOrder::IdAsc).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("solsearch_export.csv");
    export_to_path(&table, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 3);

    let bad = dir.path().join("missing").join("out.csv");
    let err = export_to_path(&table, &bad).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}
