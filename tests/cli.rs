//! End-to-end tests for the promissoria binary
//!
//! Every invocation points PROMISSORIA_DATA_DIR at a temp directory so the
//! tests never touch the user's real configuration.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn promissoria(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("promissoria").unwrap();
    cmd.env("PROMISSORIA_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn words_spells_default_amount() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .args(["words", "2090,00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DOIS MIL E NOVENTA REAIS"));
}

#[test]
fn words_accepts_currency_prefix_and_thousands() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .args(["words", "R$ 1.500.000,00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UM MILHÃO E QUINHENTOS MIL REAIS"));
}

#[test]
fn words_handles_centavos_only() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .args(["words", "0,01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UM CENTAVO DE REAL"));
}

#[test]
fn words_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .args(["words", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn words_rejects_amount_at_one_billion() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .args(["words", "1000000000,00"])
        .assert()
        .failure();
}

#[test]
fn note_preview_rejects_amount_at_one_billion() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .args(["note", "preview", "--amount", "1000000000,00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("supported maximum"));
}

#[test]
fn note_preview_shows_document() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .args(["note", "preview", "--amount", "100,00", "--emitter", "Ana Souza"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NOTA PROMISSÓRIA"))
        .stdout(predicate::str::contains("CEM REAIS"))
        .stdout(predicate::str::contains("Ana Souza"));
}

#[test]
fn note_schedule_splits_installments() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .args([
            "note",
            "schedule",
            "--amount",
            "2090,00",
            "--due-date",
            "2026-09-30",
            "--installments",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("01/01 de 02"))
        .stdout(predicate::str::contains("01/02 de 02"))
        .stdout(predicate::str::contains("R$ 1.045,00"))
        .stdout(predicate::str::contains("30/10/2026"));
}

#[test]
fn note_schedule_rejects_thirteen_installments() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .args(["note", "schedule", "--installments", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 to 12"));
}

#[test]
fn export_html_writes_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("notas.html");
    promissoria(&dir)
        .args([
            "export",
            "html",
            "--amount",
            "2090,00",
            "--installments",
            "3",
            "--out",
        ])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 notes"));

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("NOTA PROMISSÓRIA"));
    assert!(html.contains("01/01 de 03"));
}

#[test]
fn export_json_batch_has_metadata() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("notas.json");
    promissoria(&dir)
        .args([
            "export",
            "json",
            "--amount",
            "300,00",
            "--installments",
            "2",
            "--out",
        ])
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["schema_version"], "1.0.0");
    assert_eq!(json["metadata"]["note_count"], 2);
    assert_eq!(json["metadata"]["total_amount_centavos"], 30_000);
    assert_eq!(json["notes"].as_array().unwrap().len(), 2);
}

#[test]
fn export_csv_has_header_and_rows() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("notas.csv");
    promissoria(&dir)
        .args([
            "export",
            "csv",
            "--amount",
            "100,00",
            "--out",
        ])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Número,Parcela,Vencimento,Valor,Valor por Extenso"));
    assert!(csv.contains("CEM REAIS"));
}

#[test]
fn export_defaults_into_exports_dir() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .args(["export", "csv", "--amount", "100,00"])
        .assert()
        .success();

    let exports = dir.path().join("exports");
    let entries: Vec<_> = std::fs::read_dir(&exports).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn init_creates_settings_file() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes per page"));
}

#[test]
fn no_command_prints_hint() {
    let dir = TempDir::new().unwrap();
    promissoria(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("promissoria --help"));
}
