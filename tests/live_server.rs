//! End-to-end scenarios against a live TypeDB server.
//!
//! These tests provision and mutate a real database, so they are ignored
//! by default. Start a TypeDB Core server on 127.0.0.1:1729 (or point
//! `IAM_SAMPLE_SERVER_ADDRESS` elsewhere) and run:
//!
//! ```text
//! cargo test --test live_server -- --ignored --test-threads=1
//! ```
//!
//! The schema and dataset files are read from the package root, which is
//! the working directory under `cargo test`.

use iam_sample_app::{
    connect, ops, provision, AppConfig, DeleteOutcome, FilesByUser, ResetPolicy,
};
use typedb_driver::Connection;

fn test_config() -> AppConfig {
    let mut config = AppConfig::load(None).unwrap();
    config.database_name = "iam_sample_app_test".to_string();
    config
}

fn fresh_database(config: &AppConfig) -> Connection {
    let connection = connect(config.edition, &config.server_address, None).unwrap();
    assert!(
        provision::setup(&connection, config, ResetPolicy::AlwaysReplace).unwrap(),
        "probe must pass on a freshly seeded database"
    );
    connection
}

#[test]
#[ignore = "requires a running TypeDB server"]
fn cold_start_then_reuse() {
    let config = test_config();
    let connection = fresh_database(&config);

    // NeverReplace keeps the seeded database and the probe still passes.
    assert!(provision::setup(&connection, &config, ResetPolicy::NeverReplace).unwrap());
}

#[test]
#[ignore = "requires a running TypeDB server"]
fn corrupted_reuse_fails_the_probe() {
    let mut config = test_config();
    let connection = fresh_database(&config);

    // Same server state, stricter expectation: the probe must fail.
    config.expected_user_count = 2;
    assert!(!provision::setup(&connection, &config, ResetPolicy::NeverReplace).unwrap());
}

#[test]
#[ignore = "requires a running TypeDB server"]
fn insert_then_fetch_includes_the_new_user_once() {
    let config = test_config();
    let connection = fresh_database(&config);
    let db = config.database_name.as_str();

    let before = ops::fetch::all_users(&connection, db).unwrap();
    assert_eq!(before.len(), 3);

    let inserted = ops::insert::new_user(&connection, db, "Jack Keeper", "jk@typedb.com").unwrap();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].name, "Jack Keeper");

    let after = ops::fetch::all_users(&connection, db).unwrap();
    assert_eq!(after.len(), 4);
    let rendered: Vec<String> = after
        .iter()
        .map(iam_sample_app::report::format_document)
        .collect();
    assert_eq!(
        rendered
            .iter()
            .filter(|doc| doc.contains("'Jack Keeper'") && doc.contains("'jk@typedb.com'"))
            .count(),
        1
    );
}

#[test]
#[ignore = "requires a running TypeDB server"]
fn insert_rejects_empty_input() {
    let config = test_config();
    let connection = fresh_database(&config);

    assert!(ops::insert::new_user(&connection, &config.database_name, "  ", "jk@typedb.com").is_err());
}

#[test]
#[ignore = "requires a running TypeDB server"]
fn inference_widens_the_visible_file_set() {
    let config = test_config();
    let connection = fresh_database(&config);
    let db = config.database_name.as_str();

    // Kevin Morrison holds modify permissions only, so the asserted-facts
    // phase finds nothing.
    let asserted = ops::access::files_by_user(&connection, db, "Kevin Morrison", false).unwrap();
    assert_eq!(asserted, FilesByUser::Files(vec![]));

    let derived = ops::access::files_by_user(&connection, db, "Kevin Morrison", true).unwrap();
    let FilesByUser::Files(files) = derived else {
        panic!("expected a unique user match");
    };
    assert_eq!(files.len(), 10);
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted, "paths must arrive sorted ascending");
    assert!(files.contains(&"lzfkn.java".to_string()));
}

#[test]
#[ignore = "requires a running TypeDB server"]
fn unknown_and_ambiguous_users_are_refused() {
    let config = test_config();
    let connection = fresh_database(&config);
    let db = config.database_name.as_str();

    let missing = ops::access::files_by_user(&connection, db, "Nobody Here", false).unwrap();
    assert_eq!(missing, FilesByUser::NoSuchUser);

    // Duplicate the name, then the lookup must refuse to pick one.
    ops::insert::new_user(&connection, db, "Kevin Morrison", "km2@typedb.com").unwrap();
    let duplicated = ops::access::files_by_user(&connection, db, "Kevin Morrison", false).unwrap();
    assert_eq!(duplicated, FilesByUser::Ambiguous);
}

#[test]
#[ignore = "requires a running TypeDB server"]
fn update_then_delete_round_trip() {
    let config = test_config();
    let connection = fresh_database(&config);
    let db = config.database_name.as_str();

    // First rename matches, the repeat finds nothing to update.
    assert_eq!(ops::update::file_path(&connection, db, "lzfkn.java", "lzfkn2.java").unwrap(), 1);
    assert_eq!(ops::update::file_path(&connection, db, "lzfkn.java", "lzfkn2.java").unwrap(), 0);

    // First delete succeeds, the repeat reports not-found.
    assert_eq!(ops::delete::file(&connection, db, "lzfkn2.java").unwrap(), DeleteOutcome::Deleted);
    assert_eq!(ops::delete::file(&connection, db, "lzfkn2.java").unwrap(), DeleteOutcome::NotFound);

    // Neither path remains visible afterwards.
    assert_eq!(ops::update::file_path(&connection, db, "lzfkn2.java", "lzfkn3.java").unwrap(), 0);
}
