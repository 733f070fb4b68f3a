//! End-to-end tests for the borme binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const SAMPLE: &str = "\
SECCIÓN PRIMERA
Empresarios
Actos inscritos
MADRID
112233 - EJEMPLO UNO SL.
Constitución. Comienzo de operaciones: 1.02.19. Objeto social: Venta de
maquinaria. Domicilio: C/ MAYOR 1. Capital: 3.000,00 Euros.
Datos registrales. T 1234, L 0, F 12, S 8, H M 123456, I/A 1 (5.02.19).
112234 - EJEMPLO DOS SA.
Nombramientos. Adm. Unico: GARCIA LOPEZ JUAN. Datos registrales. T 2, L 0,
F 3, S 8, H M 2222, I/A 4 (6.02.19).
";

fn write_sample(dir: &std::path::Path) -> std::path::PathBuf {
    let nested = dir.join("2019").join("03").join("07");
    fs::create_dir_all(&nested).unwrap();
    let path = nested.join("BORME-A-2019-46-28.txt");
    fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn process_emits_json() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_sample(tmp.path());

    Command::cargo_bin("borme")
        .unwrap()
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("EJEMPLO UNO SL"))
        .stdout(predicate::str::contains("\"appointment\""))
        .stdout(predicate::str::contains("Constitución"));
}

#[test]
fn process_rejects_unknown_filename() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("notes.txt");
    fs::write(&path, "whatever").unwrap();

    Command::cargo_bin("borme")
        .unwrap()
        .arg("process")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match bulletin grammar"));
}

#[test]
fn batch_writes_aggregated_csv() {
    let tmp = tempfile::tempdir().unwrap();
    write_sample(tmp.path());
    let out = tmp.path().join("out");

    Command::cargo_bin("borme")
        .unwrap()
        .arg("batch")
        .arg(format!("{}/**/BORME-A-*.txt", tmp.path().display()))
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 successful, 0 failed"));

    let companies = fs::read_to_string(out.join("companies.csv")).unwrap();
    assert!(companies.lines().count() >= 3);
    assert!(companies.contains("112233"));
    assert!(companies.contains("3000.00"));

    let officers = fs::read_to_string(out.join("officers.csv")).unwrap();
    assert!(officers.contains("GARCIA LOPEZ JUAN"));
}

#[test]
fn batch_isolates_failing_documents() {
    let tmp = tempfile::tempdir().unwrap();
    write_sample(tmp.path());
    // Valid bulletin name, undecodable content: contributes zero records and
    // an error marker, and the batch keeps going.
    let bad = tmp
        .path()
        .join("2019")
        .join("03")
        .join("07")
        .join("BORME-A-2019-46-08.txt");
    fs::write(&bad, [0xFF, 0xFE, 0x41]).unwrap();
    let out = tmp.path().join("out");

    Command::cargo_bin("borme")
        .unwrap()
        .arg("batch")
        .arg(format!("{}/**/BORME-A-*.txt", tmp.path().display()))
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 successful, 1 failed"));

    // Records from the good document still land in the aggregate.
    let companies = fs::read_to_string(out.join("companies.csv")).unwrap();
    assert!(companies.contains("112233"));
    assert!(!companies.contains("BORME-A-2019-46-08"));

    let errors = fs::read_to_string(out.join("errors.csv")).unwrap();
    assert!(errors.contains("BORME-A-2019-46-08.txt"));
}
