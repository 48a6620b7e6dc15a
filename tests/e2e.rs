use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::process::Command;
use tempfile::tempdir;

fn write_names(path: &std::path::Path, lines: &[&str]) {
    let mut f = fs::File::create(path).unwrap();
    for line in lines {
        writeln!(f, "{}", line).unwrap();
    }
}

#[test]
fn e2e_default_gophish_csv() {
    let tmp = tempdir().unwrap();
    let infile = tmp.path().join("names.txt");
    let outfile = tmp.path().join("import.csv");
    write_names(
        &infile,
        &["John Smith", "12345", "Jane Doe", "Bad [Name]"],
    );

    let mut cmd = Command::cargo_bin("corgon").unwrap();
    cmd.arg(&infile).arg(&outfile);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let out = fs::read_to_string(&outfile).unwrap();
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("First Name,Last Name,Position,Email"));
    assert_eq!(lines.next(), Some("John,Smith,,john.smith@example.com"));
    assert_eq!(lines.next(), Some("Jane,Doe,,jane.doe@example.com"));
    assert_eq!(lines.next(), None);
}

#[test]
fn e2e_emails_with_schema_and_domain() {
    let tmp = tempdir().unwrap();
    let infile = tmp.path().join("names.txt");
    let outfile = tmp.path().join("emails.txt");
    write_names(&infile, &["John Smith", "Jane Doe"]);

    let mut cmd = Command::cargo_bin("corgon").unwrap();
    cmd.arg(&infile)
        .arg(&outfile)
        .args(["-f", "emails", "-s", "f1l", "-m", "@corp.example"]);
    cmd.assert().success();

    let out = fs::read_to_string(&outfile).unwrap();
    assert_eq!(out, "jsmith@corp.example\njdoe@corp.example\n");
}

#[test]
fn e2e_usernames_with_ad_domain() {
    let tmp = tempdir().unwrap();
    let infile = tmp.path().join("names.txt");
    let outfile = tmp.path().join("users.txt");
    write_names(&infile, &["John Smith"]);

    let mut cmd = Command::cargo_bin("corgon").unwrap();
    cmd.arg(&infile)
        .arg(&outfile)
        .args(["-f", "usernames", "-s", "f1.l", "-a", "CORP"]);
    cmd.assert().success();

    let out = fs::read_to_string(&outfile).unwrap();
    assert_eq!(out, "CORP\\j.smith\n");
}

#[test]
fn e2e_umlauts_are_transliterated_in_email_column() {
    let tmp = tempdir().unwrap();
    let infile = tmp.path().join("names.txt");
    let outfile = tmp.path().join("import.csv");
    write_names(&infile, &["Jörg Müller"]);

    let mut cmd = Command::cargo_bin("corgon").unwrap();
    cmd.arg(&infile).arg(&outfile);
    cmd.assert().success();

    let out = fs::read_to_string(&outfile).unwrap();
    assert!(out.contains("Jörg,Müller,,joerg.mueller@example.com"));
}

#[test]
fn e2e_doctor_title_is_stripped() {
    let tmp = tempdir().unwrap();
    let infile = tmp.path().join("names.txt");
    let outfile = tmp.path().join("emails.txt");
    write_names(&infile, &["Dr. John Smith"]);

    let mut cmd = Command::cargo_bin("corgon").unwrap();
    cmd.arg(&infile).arg(&outfile).args(["-f", "emails"]);
    cmd.assert().success();

    let out = fs::read_to_string(&outfile).unwrap();
    assert_eq!(out, "john.smith@example.com\n");
}

#[test]
fn e2e_keepcase_and_custom_delimiter() {
    let tmp = tempdir().unwrap();
    let infile = tmp.path().join("names.csv");
    let outfile = tmp.path().join("emails.txt");
    write_names(&infile, &["John;Smith"]);

    let mut cmd = Command::cargo_bin("corgon").unwrap();
    cmd.arg(&infile)
        .arg(&outfile)
        .args(["-f", "emails", "-d", ";", "--keepcase"]);
    cmd.assert().success();

    let out = fs::read_to_string(&outfile).unwrap();
    assert_eq!(out, "John.Smith@example.com\n");
}

#[test]
fn e2e_invalid_schema_rejects_run_before_processing() {
    let tmp = tempdir().unwrap();
    let infile = tmp.path().join("names.txt");
    let outfile = tmp.path().join("out.txt");
    write_names(&infile, &["John Smith"]);

    let mut cmd = Command::cargo_bin("corgon").unwrap();
    cmd.arg(&infile).arg(&outfile).args(["-s", "x.y"]);
    cmd.assert().failure().code(2);
    assert!(!outfile.exists());
}

#[test]
fn e2e_missing_input_file_is_fatal() {
    let tmp = tempdir().unwrap();
    let outfile = tmp.path().join("out.txt");

    let mut cmd = Command::cargo_bin("corgon").unwrap();
    cmd.arg(tmp.path().join("nope.txt")).arg(&outfile);
    cmd.assert().failure().code(2);
}

#[test]
fn e2e_secret_schema_prints_corgi_and_touches_no_files() {
    let tmp = tempdir().unwrap();
    let infile = tmp.path().join("names.txt");
    let outfile = tmp.path().join("out.txt");
    write_names(&infile, &["John Smith"]);

    let mut cmd = Command::cargo_bin("corgon").unwrap();
    cmd.arg(&infile).arg(&outfile).args(["-s", "CORGI"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Having a ruff day?"));
    assert!(!outfile.exists());
}
