use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::source::resolve_version_source;
use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("robench_input_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

const DOC: &str = r#"{
    "model-b": {
        "robench2024b_all_setmathSCP-s": {"acc": 0.8, "std": 0.1},
        "mmlu": {"acc": 0.5, "std": 0.0},
        "robench2024b_all_setcsSCP-c": {"acc": 0.6, "std": 0.05}
    },
    "model-a": {
        "robench2024b_all_setcsSCP-s": {"acc": 0.4, "std": 0.02}
    }
}"#;

#[test]
fn test_parse_document_keeps_order() {
    let doc = parse_document(DOC).unwrap();
    let models: Vec<&str> = doc.models.iter().map(|m| m.model.as_str()).collect();
    assert_eq!(models, vec!["model-b", "model-a"]);
    let keys: Vec<&str> = doc.models[0]
        .entries
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(
        keys,
        vec![
            "robench2024b_all_setmathSCP-s",
            "mmlu",
            "robench2024b_all_setcsSCP-c"
        ]
    );
}

#[test]
fn test_parse_document_skips_non_score_values() {
    let text = r#"{"m": {"config": "abc", "n": 3, "ok": {"acc": 0.3}}}"#;
    let doc = parse_document(text).unwrap();
    assert_eq!(doc.models[0].entries.len(), 1);
    assert_eq!(doc.models[0].entries[0].0, "ok");
}

#[test]
fn test_parse_document_non_numeric_std_keeps_accuracy() {
    let text = r#"{"m": {
        "robench2024b_all_setcsSCP-s": {"acc": 0.8, "std": null},
        "robench2024b_all_setcsSCP-c": {"acc": 0.6, "std": "N/A"},
        "robench2024b_all_setcsSCP-p": {"acc": "N/A", "std": 0.1}
    }}"#;
    let doc = parse_document(text).unwrap();
    let entries = &doc.models[0].entries;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].1, Score::new(0.8, 0.0));
    assert_eq!(entries[1].1, Score::new(0.6, 0.0));
}

#[test]
fn test_parse_document_non_object_model_is_empty() {
    let doc = parse_document(r#"{"m": [1, 2, 3]}"#).unwrap();
    assert_eq!(doc.models.len(), 1);
    assert!(doc.models[0].entries.is_empty());
}

#[test]
fn test_parse_document_rejects_non_object_root() {
    let err = parse_document("[]").unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
    assert!(matches!(parse_document("{").unwrap_err(), InputError::Parse(_)));
}

#[test]
fn test_load_document_plain_and_gz() {
    let dir = make_temp_dir();
    let plain = dir.join("2024b.json");
    let gz = dir.join("other.json.gz");
    write_file(&plain, DOC);
    write_gz(&gz, DOC);

    let a = load_document(&plain).unwrap();
    let b = load_document(&gz).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.model("model-a").unwrap().entries.len(), 1);
}

#[test]
fn test_load_document_missing_is_error() {
    let dir = make_temp_dir();
    let err = load_document(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_resolve_version_source_prefers_plain_json() {
    let dir = make_temp_dir();
    write_gz(&dir.join("2024b.json.gz"), DOC);
    let res = resolve_version_source(&dir, "2024b");
    assert!(res.exists);
    assert_eq!(res.name, "2024b.json.gz");

    write_file(&dir.join("2024b.json"), DOC);
    let res = resolve_version_source(&dir, "2024b");
    assert_eq!(res.name, "2024b.json");

    let missing = resolve_version_source(&dir, "2025a");
    assert!(!missing.exists);
    assert_eq!(missing.name, "2025a.json");
}

#[test]
fn test_load_version_missing_source_is_empty() {
    let dir = make_temp_dir();
    write_file(&dir.join("2024b.json"), DOC);
    let doc = load_version(&dir, &BenchmarkProfile::robench_2025a());
    assert!(doc.is_empty());
}

#[test]
fn test_load_version_unreadable_source_is_empty() {
    let dir = make_temp_dir();
    write_file(&dir.join("2024b.json"), "not json");
    let doc = load_version(&dir, &BenchmarkProfile::robench_2024b());
    assert!(doc.is_empty());
}

#[test]
fn test_load_version_reads_document() {
    let dir = make_temp_dir();
    write_file(&dir.join("2024b.json"), DOC);
    let doc = load_version(&dir, &BenchmarkProfile::robench_2024b());
    assert_eq!(doc.models.len(), 2);
}
