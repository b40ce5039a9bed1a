use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BLOCKS: &str = r#"[
    {"source_file": "plan.docx", "source_type": "docx", "section": "Paragraph 1", "content": "Alice manages the ledger."},
    {"source_file": "deck.pptx", "source_type": "pptx", "section": "Slide 1", "content": "Payments and Fraud Detection"},
    {"source_file": "svc.xlsx", "source_type": "xlsx", "section": "Row 2", "content": "Service: Auth | Region: US | Dependency: Database"},
    {"source_file": "notes.md", "source_type": "md", "section": "Line 1", "content": "Bob owns the gateway."}
]"#;

fn docgraph(dir: &Path) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("docgraph").into();
    cmd.current_dir(dir);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("DOCGRAPH_PARALLEL");
    cmd.env_remove("DOCGRAPH_TOPIC_COUNT");
    cmd.env_remove("DOCGRAPH_LEXICON");
    cmd
}

/// Writes the sample blocks into a fresh tempdir.
/// The tempdir guard must be kept alive.
fn blocks_file() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("blocks.json");
    fs::write(&path, BLOCKS).unwrap();
    (tmp, path)
}

// --- Binary startup ---

#[test]
fn binary_runs() {
    let mut cmd: Command = cargo_bin_cmd!("docgraph").into();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("docgraph"));
}

// --- Extract ---

#[test]
fn extract_prints_relationships() {
    let (tmp, blocks) = blocks_file();
    let output = docgraph(tmp.path())
        .arg("extract")
        .arg(&blocks)
        .output()
        .unwrap();
    assert!(output.status.success());

    let rels: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rels = rels.as_array().unwrap();
    assert_eq!(rels.len(), 3);
    assert_eq!(rels[0]["subject"], "Alice");
    assert_eq!(rels[0]["relation"], "manage");
    assert_eq!(rels[1]["relation"], "combined with");
    assert_eq!(rels[2]["object"], "Database");
}

#[test]
fn extract_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    docgraph(tmp.path())
        .args(["extract", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read blocks"));
}

#[test]
fn extract_rejects_invalid_json() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bad.json"), "{not json").unwrap();
    docgraph(tmp.path())
        .args(["extract", "bad.json"])
        .assert()
        .failure();
}

// --- Topics ---

#[test]
fn topics_prints_one_per_line() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("blocks.json"),
        r#"[
            {"source_file": "a.docx", "source_type": "docx", "section": "P1", "content": "Payments service handles payments."},
            {"source_file": "b.docx", "source_type": "docx", "section": "P2", "content": "The payments team owns the ledger service."}
        ]"#,
    )
    .unwrap();

    docgraph(tmp.path())
        .args(["topics", "blocks.json", "-n", "3"])
        .assert()
        .success()
        .stdout("payment\nservice\nteam\n");
}

#[test]
fn topics_zero_count_is_invalid() {
    let (tmp, blocks) = blocks_file();
    docgraph(tmp.path())
        .arg("topics")
        .arg(&blocks)
        .args(["-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("topic_count"));
}

// --- Graph ---

#[test]
fn graph_writes_export_to_stdout() {
    let (tmp, blocks) = blocks_file();
    let output = docgraph(tmp.path())
        .arg("graph")
        .arg(&blocks)
        .output()
        .unwrap();
    assert!(output.status.success());

    let export: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(export["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(export["edges"].as_array().unwrap().len(), 3);
    assert_eq!(export["nodes"][0]["id"], "Alice");
    assert_eq!(export["nodes"][0]["referenced_by"][0], "plan.docx");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("6 nodes, 3 edges"));
    assert!(stderr.contains("1 skipped"));
}

#[test]
fn graph_writes_export_to_file() {
    let (tmp, blocks) = blocks_file();
    let out = tmp.path().join("graph.json");

    docgraph(tmp.path())
        .arg("graph")
        .arg(&blocks)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let export: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(export["edges"][2]["label"], "depends on");
}

#[test]
fn graph_accumulate_labels() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("blocks.json"),
        r#"[
            {"source_file": "a.docx", "source_type": "docx", "section": "P1", "content": "Alice manages the ledger."},
            {"source_file": "b.docx", "source_type": "docx", "section": "P2", "content": "Alice owns the ledger."}
        ]"#,
    )
    .unwrap();

    let output = docgraph(tmp.path())
        .args(["graph", "blocks.json", "--accumulate-labels", "--parallel"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let export: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(export["edges"][0]["label"], "own");
    assert_eq!(export["edges"][0]["labels"], serde_json::json!(["manage", "own"]));
}

#[test]
fn graph_reads_config_file() {
    let (tmp, blocks) = blocks_file();
    fs::write(
        tmp.path().join("docgraph.toml"),
        "[filter]\nnoise_words = [\"alice\"]\n",
    )
    .unwrap();

    let output = docgraph(tmp.path())
        .args(["--config", "docgraph.toml", "graph"])
        .arg(&blocks)
        .output()
        .unwrap();
    assert!(output.status.success());

    let export: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<_> = export["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap().to_string())
        .collect();
    assert!(!ids.contains(&"Alice".to_string()));
}

#[test]
fn broken_lexicon_fails() {
    let (tmp, blocks) = blocks_file();
    docgraph(tmp.path())
        .env("DOCGRAPH_LEXICON", "/nonexistent/lexicon.toml")
        .arg("graph")
        .arg(&blocks)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Language model unavailable"));
}
