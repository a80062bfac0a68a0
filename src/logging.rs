//! Structured JSONL session logging.
//!
//! The terminal owns stdout while the dashboard runs, so log records go to
//! a file instead: one JSON object per line with a timestamp, a process id
//! and a monotonically increasing sequence number. Logging is disabled
//! entirely unless `LOG_PATH` is configured.

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

static LOG_SEQ: AtomicU64 = AtomicU64::new(0);
static SINK: OnceLock<Option<Mutex<BufWriter<File>>>> = OnceLock::new();

fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst)
}

/// ISO-8601 timestamp with millisecond precision (UTC).
pub fn ts_now() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Open the log sink. A `None` path leaves logging disabled; an unopenable
/// path is reported once on stderr and logging stays off rather than
/// aborting the session.
pub fn init(path: Option<&str>) {
    SINK.get_or_init(|| {
        let path = path?;
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Mutex::new(BufWriter::new(file))),
            Err(err) => {
                eprintln!("[log] cannot open {}: {}", path, err);
                None
            }
        }
    });
}

/// One log line.
#[derive(Debug, Serialize)]
struct Record<'a> {
    ts: String,
    seq: u64,
    pid: u32,
    event: &'a str,
    data: Map<String, Value>,
}

/// Build one log record. Everything except the clock and the sequence
/// counter is deterministic, which keeps records testable.
pub fn record(event: &str, fields: Map<String, Value>) -> Value {
    serde_json::to_value(Record {
        ts: ts_now(),
        seq: next_seq(),
        pid: process::id(),
        event,
        data: fields,
    })
    .unwrap_or(Value::Null)
}

/// Emit a structured log entry. A no-op when logging is disabled.
pub fn json_log(event: &str, fields: Map<String, Value>) {
    let Some(Some(sink)) = SINK.get() else {
        return;
    };
    let line = record(event, fields).to_string();
    if let Ok(mut writer) = sink.lock() {
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }
}

pub fn obj(pairs: &[(&str, Value)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, value) in pairs {
        map.insert((*key).to_string(), value.clone());
    }
    map
}

pub fn v_str(s: &str) -> Value {
    Value::String(s.to_string())
}

pub fn v_num(n: f64) -> Value {
    json!(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_carry_event_fields_and_increasing_seq() {
        let a = record("first", obj(&[("section", v_str("certificate"))]));
        let b = record("second", obj(&[("n", v_num(2.0))]));

        assert_eq!(a["event"], "first");
        assert_eq!(a["data"]["section"], "certificate");
        assert_eq!(b["data"]["n"], 2.0);
        assert!(b["seq"].as_u64().unwrap() > a["seq"].as_u64().unwrap());
        assert!(a["ts"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn obj_preserves_pairs() {
        let map = obj(&[("a", v_num(1.0)), ("b", v_str("x"))]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["b"], "x");
    }
}
