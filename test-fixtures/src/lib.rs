//! Shared test data for the Salescast crates: recorded service responses,
//! archive listings, and a small upload dataset.
//!
//! Payloads live in `test-fixtures/payloads/` at the workspace root.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

const PAYLOAD_DIR: &str = "payloads";

/// Locate `test-fixtures/payloads` by walking up from the calling crate.
fn payload_dir() -> PathBuf {
    let start = std::env::var("CARGO_MANIFEST_DIR")
        .map_or_else(|_| PathBuf::from("."), PathBuf::from);
    start
        .ancestors()
        .map(|dir| dir.join("test-fixtures").join(PAYLOAD_DIR))
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| panic!("no test-fixtures/{PAYLOAD_DIR} above {}", start.display()))
}

fn read_payload(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read payload {}: {e}", path.display()))
}

/// Deserialize the payload at `relative_path` (e.g. `"service/univariate_ok.json"`).
///
/// # Panics
/// When the file is missing or does not deserialize into `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = payload_dir().join(relative_path);
    let text = read_payload(&path);
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("payload {} is not valid: {e}", path.display()))
}

/// The payload at `relative_path` as untyped JSON, the way a service hands it over.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// File names of the JSON payloads in `group` (`"service"` or `"archive"`), sorted.
pub fn payload_names(group: &str) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(payload_dir().join(group)) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json"))
        .collect();
    names.sort();
    names
}

/// A four-week daily sales CSV, as a user would upload it.
pub fn sample_sales_csv() -> Vec<u8> {
    let rows = (1..=28).map(|day| format!("2024-02-{day:02},{}\n", 100 + day * 3));
    std::iter::once("date,sales\n".to_string())
        .chain(rows)
        .collect::<String>()
        .into_bytes()
}
