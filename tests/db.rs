use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Integer;
use pushkind_portfolio::db::run_migrations;

mod common;

#[derive(QueryableByName)]
struct Pragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn pooled_connections_enforce_foreign_keys() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("connection");

    let pragma = sql_query("PRAGMA foreign_keys")
        .get_result::<Pragma>(&mut conn)
        .expect("pragma query");
    assert_eq!(pragma.foreign_keys, 1);
}

#[test]
fn migrations_are_applied_once() {
    let test_db = common::TestDb::new();
    let applied = run_migrations(&test_db.pool()).expect("migrations");
    assert_eq!(applied, 0);
}
