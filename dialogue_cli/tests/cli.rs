use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const CONFESSION: &str = r#"{
  "root": 0,
  "default_locale": "en",
  "nodes": [
    {
      "id": 0,
      "speaker": {"en": "Father Elias", "pt": "Padre Elias"},
      "body": {"en": "What troubles you?", "pt": "O que te aflige?"},
      "choices": [
        {"text": {"en": "My past", "pt": "Meu passado"}, "next": 1},
        {"text": {"en": "The village"}, "next": 2},
        {"text": {"en": "Nothing"}, "next": 3}
      ]
    },
    {"id": 1, "speaker": {"en": "Father Elias"}, "body": {"en": "The past is heavy."}},
    {"id": 2, "speaker": {"en": "Father Elias"}, "body": {"en": "The village sleeps."}},
    {"id": 3, "speaker": {"en": "Father Elias"}, "body": {"en": "Go in peace."}}
  ]
}"#;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn dialogue(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dialogue").unwrap();
    cmd.current_dir(dir.path()).env_remove("DIALOGUE_CONFIG");
    cmd
}

#[test]
fn test_validate_clean_graph() {
    let dir = TempDir::new().unwrap();
    let graph = write_fixture(&dir, "confession.json", CONFESSION);

    dialogue(&dir)
        .arg("validate")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_validate_dangling_choice_fails() {
    let dir = TempDir::new().unwrap();
    let broken = CONFESSION.replace(r#""next": 3"#, r#""next": 99"#);
    let graph = write_fixture(&dir, "broken.json", &broken);

    dialogue(&dir)
        .arg("validate")
        .arg(&graph)
        .assert()
        .code(1)
        .stdout("node 0 choice 2: DanglingChoice (fatal)\n");
}

#[test]
fn test_validate_warnings_pass_unless_strict() {
    let dir = TempDir::new().unwrap();
    let missing = CONFESSION.replace(r#""body": {"en": "Go in peace."}"#, r#""body": {}"#);
    let graph = write_fixture(&dir, "draft.json", &missing);

    dialogue(&dir)
        .arg("validate")
        .arg(&graph)
        .assert()
        .success()
        .stdout("node 3: EmptyNodeText (warning)\n");

    dialogue(&dir)
        .args(["validate", "--strict"])
        .arg(&graph)
        .assert()
        .code(1);
}

#[test]
fn test_malformed_graph_is_an_error() {
    let dir = TempDir::new().unwrap();
    let graph = write_fixture(&dir, "bad.json", r#"{"root": -1}"#);

    dialogue(&dir)
        .arg("validate")
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("malformed graph document"));
}

#[test]
fn test_play_to_leaf() {
    let dir = TempDir::new().unwrap();
    let graph = write_fixture(&dir, "confession.json", CONFESSION);

    dialogue(&dir)
        .args(["play", "--locale", "pt"])
        .arg(&graph)
        .write_stdin("7\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Padre Elias: O que te aflige?"))
        .stdout(predicate::str::contains("1) Meu passado"))
        .stdout(predicate::str::contains("choice 6 is not available"))
        .stdout(predicate::str::contains("The past is heavy."))
        .stdout(predicate::str::contains("-- conversation ended (Leaf) --"));
}

#[test]
fn test_play_refuses_broken_graph() {
    let dir = TempDir::new().unwrap();
    let broken = CONFESSION.replace(r#""next": 3"#, r#""next": 99"#);
    let graph = write_fixture(&dir, "broken.json", &broken);

    dialogue(&dir)
        .arg("play")
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("graph rejected"));
}

#[test]
fn test_convert_round_trip() {
    let dir = TempDir::new().unwrap();
    let json = write_fixture(&dir, "confession.json", CONFESSION);
    let toml = dir.path().join("confession.toml");

    dialogue(&dir).arg("convert").arg(&json).arg(&toml).assert().success();
    dialogue(&dir).arg("validate").arg(&toml).assert().success();

    let back = dir.path().join("back.json");
    dialogue(&dir).arg("convert").arg(&toml).arg(&back).assert().success();

    let original: serde_json::Value = serde_json::from_str(CONFESSION).unwrap();
    let restored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(back).unwrap()).unwrap();
    assert_eq!(original["nodes"][0]["choices"], restored["nodes"][0]["choices"]);
}

#[test]
fn test_coverage_report() {
    let dir = TempDir::new().unwrap();
    let graph = write_fixture(&dir, "confession.json", CONFESSION);

    dialogue(&dir)
        .arg("coverage")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("en: 100%"))
        .stdout(predicate::str::contains("pt: 29% (3 node(s), 2 choice(s) missing)"))
        .stdout(predicate::str::contains("all nodes reachable from root"));
}

#[test]
fn test_config_file_sets_locale() {
    let dir = TempDir::new().unwrap();
    let graph = write_fixture(&dir, "confession.json", CONFESSION);
    write_fixture(&dir, "dialogue.toml", "[session]\nlocale = \"pt\"\n");

    dialogue(&dir)
        .arg("play")
        .arg(&graph)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("O que te aflige?"))
        .stdout(predicate::str::contains("(Cancelled)"));
}
