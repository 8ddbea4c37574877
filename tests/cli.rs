//! Command-line behavior of the `memsearch` binary.

use memsearch::SearchResult;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Temp directory holding a corpus and a default config
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(
            dir.path().join("corpus.json"),
            r#"{
    "user1": "Zephen Blakewood fictional software architect",
    "user2": "Zeph Blake fictional engineer",
    "doc3": "Hello World"
}"#,
        )
        .unwrap();
        fs::write(dir.path().join("config.json"), "{}").unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_memsearch"))
            .arg("--config")
            .arg(self.path("config.json"))
            .args(args)
            .env("RUST_LOG", "off")
            .output()
            .expect("Failed to run memsearch")
    }

    fn corpus_arg(&self) -> String {
        path_str(&self.path("corpus.json"))
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn search_json_output() {
    let ws = Workspace::new();
    for extra in [&[][..], &["--cached"][..]] {
        let corpus = ws.corpus_arg();
        let mut args = vec!["search", "-c", corpus.as_str(), "--json"];
        args.extend_from_slice(extra);
        args.push("Zeph");

        let output = ws.run(&args);
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

        let results: Vec<SearchResult> = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "user2");
        assert_eq!(results[0].score, 2.0);
        assert_eq!(results[1].id, "user1");
    }
}

#[test]
fn search_limit_and_multi_word_query() {
    let ws = Workspace::new();
    let corpus = ws.corpus_arg();
    let output = ws.run(&["search", "-c", &corpus, "-n", "1", "--json", "fictional", "engineer"]);
    assert!(output.status.success());

    let results: Vec<SearchResult> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "user2");
}

#[test]
fn search_plain_output() {
    let ws = Workspace::new();
    let corpus = ws.corpus_arg();
    let output = ws.run(&["search", "-c", &corpus, "--no-color", "hello"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "  2.00  doc3  Hello World\n");
}

#[test]
fn search_without_matches_prints_nothing() {
    let ws = Workspace::new();
    let corpus = ws.corpus_arg();
    let output = ws.run(&["search", "-c", &corpus, "--no-color", "qqqq"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn stats_reports_document_count() {
    let ws = Workspace::new();
    let corpus = ws.corpus_arg();
    let output = ws.run(&["stats", "-c", &corpus]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Index Statistics"));
    assert!(text.contains("Document count:   3"));
}

#[test]
fn config_prints_effective_settings() {
    let ws = Workspace::new();
    fs::write(ws.path("config.json"), r#"{"cache_threshold": 5, "staleness": "full"}"#).unwrap();
    let output = ws.run(&["config"]);
    assert!(output.status.success());

    let config: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(config["cache_threshold"], 5);
    assert_eq!(config["staleness"], "full");
    assert_eq!(config["pool_max_idle"], 0);
}

#[test]
fn invalid_corpus_fails() {
    let ws = Workspace::new();
    fs::write(ws.path("bad.json"), "[1, 2, 3]").unwrap();
    let bad = path_str(&ws.path("bad.json"));

    let output = ws.run(&["search", "-c", &bad, "anything"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a JSON object"));

    let missing = path_str(&ws.path("missing.json"));
    let output = ws.run(&["search", "-c", &missing, "anything"]);
    assert!(!output.status.success());
}
