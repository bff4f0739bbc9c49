//! Store round-trip tests against scratch session files
//!
//! Each test builds a real SQLite session in a temp directory, closes it,
//! then reopens it through the read-only store the way the CLI does.

use sqlx::SqlitePool;
use std::path::Path;
use tempfile::TempDir;

use patchbook_infra::store::{SessionStore, StoreError};

const SCHEMA: &[&str] = &[
    "CREATE TABLE cluster_type (id INTEGER PRIMARY KEY NOT NULL, name TEXT)",
    "CREATE TABLE object (id INTEGER PRIMARY KEY NOT NULL, obj_type INTEGER, obj_index INTEGER NOT NULL)",
    "CREATE TABLE snapshot_chainer (id INTEGER PRIMARY KEY NOT NULL, snapshot_id INTEGER NOT NULL, name TEXT, chainer_id INTEGER)",
    "CREATE TABLE device_name (mac BIGINT PRIMARY KEY NOT NULL, name TEXT)",
    "CREATE TABLE device (id INTEGER PRIMARY KEY NOT NULL, io_bank INTEGER NOT NULL, assign INTEGER, mac BIGINT)",
    "CREATE TABLE routes (id INTEGER PRIMARY KEY NOT NULL, \
        src_cluster_type INTEGER, src_cluster_type_index INTEGER, src_channel_index INTEGER NOT NULL, \
        dst_cluster_type INTEGER, dst_cluster_type_index INTEGER NOT NULL, dst_channel_index INTEGER NOT NULL, \
        dst_section_index INTEGER NOT NULL)",
];

// Cluster type ids used by the fixtures
const CT_INPUT: i64 = 1;
const CT_INPUTS: i64 = 2;
const CT_OUTPUTS: i64 = 3;
const CT_MAIN: i64 = 4;
const CT_AUX: i64 = 5;

async fn create_session(path: &Path, fixture_rows: &[String]) -> Result<(), sqlx::Error> {
    let url = format!("sqlite://{}?mode=rwc", path.display());
    let pool = SqlitePool::connect(&url).await?;

    for statement in SCHEMA {
        sqlx::query(statement).execute(&pool).await?;
    }

    let base = [
        format!("INSERT INTO cluster_type (id, name) VALUES ({CT_INPUT}, 'Input')"),
        format!("INSERT INTO cluster_type (id, name) VALUES ({CT_INPUTS}, 'Inputs')"),
        format!("INSERT INTO cluster_type (id, name) VALUES ({CT_OUTPUTS}, 'Outputs')"),
        format!("INSERT INTO cluster_type (id, name) VALUES ({CT_MAIN}, 'Main')"),
        format!("INSERT INTO cluster_type (id, name) VALUES ({CT_AUX}, 'Aux')"),
    ];
    for statement in base.iter().chain(fixture_rows) {
        sqlx::query(statement).execute(&pool).await?;
    }

    pool.close().await;
    Ok(())
}

fn route_row(
    src_type: i64,
    src_type_index: i64,
    src_ch: i64,
    dst_type: i64,
    dst_type_index: i64,
    dst_ch: i64,
    section: i64,
) -> String {
    format!(
        "INSERT INTO routes (src_cluster_type, src_cluster_type_index, src_channel_index, \
         dst_cluster_type, dst_cluster_type_index, dst_channel_index, dst_section_index) \
         VALUES ({src_type}, {src_type_index}, {src_ch}, {dst_type}, {dst_type_index}, {dst_ch}, {section})"
    )
}

#[tokio::test]
async fn test_missing_session_file() {
    let dir = TempDir::new().unwrap();
    let result = SessionStore::open(&dir.path().join("absent.emo")).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_full_session_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("show.emo");

    let fixture = vec![
        // Rack: PreampA in slot 0, StageboxA in slot 8
        "INSERT INTO device_name (mac, name) VALUES (100, 'PreampA')".to_string(),
        "INSERT INTO device (io_bank, assign, mac) VALUES (0, 0, 100)".to_string(),
        "INSERT INTO device_name (mac, name) VALUES (200, 'StageboxA')".to_string(),
        "INSERT INTO device (io_bank, assign, mac) VALUES (1, 0, 200)".to_string(),
        // Baseline labels: input channel 1 and Aux bus 1
        format!("INSERT INTO object (id, obj_type, obj_index) VALUES (10, {CT_INPUT}, 0)"),
        "INSERT INTO snapshot_chainer (snapshot_id, name, chainer_id) VALUES (-1, 'Vocal', 10)"
            .to_string(),
        format!("INSERT INTO object (id, obj_type, obj_index) VALUES (11, {CT_AUX}, 0)"),
        "INSERT INTO snapshot_chainer (snapshot_id, name, chainer_id) VALUES (-1, 'Wedge 1', 11)"
            .to_string(),
        // Input channel 1: primary and alternate wiring from PreampA
        route_row(CT_INPUTS, 0, 0, CT_INPUT, 0, 0, 0),
        route_row(CT_INPUTS, 0, 1, CT_INPUT, 0, 0, 1),
        // Main 1 and labeled Aux 1 into StageboxA
        route_row(CT_MAIN, 0, 0, CT_OUTPUTS, 8, 0, 0),
        route_row(CT_AUX, 0, 0, CT_OUTPUTS, 8, 1, 0),
        // PreampA channel 3 chained into StageboxA channel 4
        route_row(CT_INPUTS, 0, 2, CT_OUTPUTS, 8, 3, 0),
    ];
    create_session(&path, &fixture).await.unwrap();

    let store = SessionStore::open(&path).await.unwrap();
    let mut patches = store.load_session().await.unwrap();

    let inputs = patches.inputs();
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].dst_index().to_string(), "01");
    assert_eq!(inputs[0].dst_label(), Some("Vocal"));
    assert_eq!(inputs[0].primary().unwrap().index.to_string(), "1");
    assert_eq!(inputs[0].alternate().unwrap().index.to_string(), "2");

    let outputs = patches.outputs();
    assert_eq!(outputs.len(), 2);
    // Sorted by destination then source: Aux 1 before Main 1 on StageboxA
    assert_eq!(outputs[0].primary().unwrap().name, "Aux");
    assert_eq!(outputs[0].src_label(), Some("Wedge 1"));
    assert_eq!(outputs[1].primary().unwrap().name, "Main");
    assert_eq!(outputs[1].src_label(), None);
    assert!(outputs.iter().all(|p| p.dst_name() == "StageboxA"));

    let links = patches.device_links();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].primary().unwrap().name, "PreampA");
    assert_eq!(links[0].primary().unwrap().index.to_string(), "3");
    assert_eq!(links[0].dst_name(), "StageboxA");
    assert_eq!(links[0].dst_index().to_string(), "4");

    store.close().await;
}

#[tokio::test]
async fn test_routes_ordered_by_category_and_channel_only() {
    // The route query sorts by destination category and channel index; the
    // destination type-local index is deliberately not a sort key, so rows
    // tied on (category, channel) may come back in any order.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("order.emo");

    let fixture = vec![
        route_row(CT_MAIN, 0, 0, CT_OUTPUTS, 9, 0, 0),
        route_row(CT_MAIN, 1, 0, CT_OUTPUTS, 1, 0, 0),
        route_row(CT_INPUTS, 0, 0, CT_INPUT, 0, 1, 0),
        route_row(CT_INPUTS, 0, 0, CT_INPUT, 3, 0, 0),
    ];
    create_session(&path, &fixture).await.unwrap();

    let store = SessionStore::open(&path).await.unwrap();
    let routes = store.routes().await.unwrap();
    assert_eq!(routes.len(), 4);

    // Category groups follow cluster-type id order: Input before Outputs
    let categories: Vec<&str> = routes.iter().map(|r| r.dst_category.name()).collect();
    assert_eq!(categories, vec!["Input", "Input", "Outputs", "Outputs"]);

    // Channel index is nondecreasing within each group
    assert!(routes[0].dst_channel_index <= routes[1].dst_channel_index);
    assert!(routes[2].dst_channel_index <= routes[3].dst_channel_index);

    // The tied Outputs rows (both channel 0) are not ordered by their
    // type-local index; only the pair's membership is guaranteed.
    let mut tied: Vec<i64> = routes[2..].iter().map(|r| r.dst_type_index).collect();
    tied.sort();
    assert_eq!(tied, vec![1, 9]);

    store.close().await;
}

#[tokio::test]
async fn test_empty_session_yields_empty_patch_bay() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.emo");
    create_session(&path, &[]).await.unwrap();

    let store = SessionStore::open(&path).await.unwrap();
    let mut patches = store.load_session().await.unwrap();
    assert!(patches.inputs().is_empty());
    assert!(patches.outputs().is_empty());
    assert!(patches.device_links().is_empty());
}

#[tokio::test]
async fn test_schema_mismatch_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.emo");

    // A database missing the expected tables entirely
    let url = format!("sqlite://{}?mode=rwc", path.display());
    let pool = SqlitePool::connect(&url).await.unwrap();
    sqlx::query("CREATE TABLE unrelated (id INTEGER PRIMARY KEY)")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let store = SessionStore::open(&path).await.unwrap();
    let result = store.load_session().await;
    assert!(matches!(result, Err(StoreError::Database(_))));
}
