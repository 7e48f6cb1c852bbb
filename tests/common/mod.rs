#![allow(dead_code)]

use nullsort::prelude::*;
use rusqlite::Connection;

/// `(value, label)` rows used by the ordering tests
pub const ROWS: [(Option<i64>, &str); 3] = [(Some(1), "a"), (None, "b"), (Some(2), "c")];

pub fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    conn.execute(
        "CREATE TABLE samples (value INTEGER, label TEXT NOT NULL, weight INTEGER)",
        [],
    )
    .expect("Failed to create samples table");
    for (value, label) in ROWS {
        insert(&conn, value, label, None);
    }
    conn
}

pub fn insert(conn: &Connection, value: Option<i64>, label: &str, weight: Option<i64>) {
    conn.execute(
        "INSERT INTO samples (value, label, weight) VALUES (?1, ?2, ?3)",
        rusqlite::params![value, label, weight],
    )
    .expect("Failed to insert sample");
}

/// Labels in the order produced by `ORDER BY <fragment>`
pub fn labels(conn: &Connection, spec: &SortSpec, dialect: &DialectDescriptor) -> Vec<String> {
    labels_in(conn, "samples", spec, dialect)
}

/// Same as [`labels`] for any table with a `label` column
pub fn labels_in(
    conn: &Connection,
    table: &str,
    spec: &SortSpec,
    dialect: &DialectDescriptor,
) -> Vec<String> {
    let order_by = NullOrderingFormatter::order_by_clause(spec, dialect).expect("valid spec");
    let sql = format!("SELECT label FROM {table} {order_by}");
    let mut stmt = conn.prepare(&sql).expect("Failed to prepare query");
    stmt.query_map([], |row| row.get::<_, String>(0))
        .expect("Failed to run query")
        .collect::<Result<Vec<_>, _>>()
        .expect("Failed to read labels")
}
