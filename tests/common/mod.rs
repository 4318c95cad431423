#![allow(dead_code)]

use std::path::Path;

use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lczcity=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Reads an exported file back as JSON.
#[allow(clippy::unwrap_used)]
pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// Collects every integer under `value`.
pub fn integers(value: &Value, out: &mut Vec<u64>) {
    match value {
        Value::Number(n) => out.extend(n.as_u64()),
        Value::Array(items) => items.iter().for_each(|v| integers(v, out)),
        Value::Object(map) => map.values().for_each(|v| integers(v, out)),
        _ => {}
    }
}
