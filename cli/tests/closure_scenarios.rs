//! End-to-end scenarios driving the built `grdfs` binary against Turtle
//! fixtures, covering the concrete closure scenarios and boundary
//! behaviors the reasoner is specified against.

use assert_cmd::Command;
use predicates::str::contains;
use std::io::Write;

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".ttl").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(path: &std::path::Path, extra: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("grdfs").unwrap();
    cmd.arg("--input-file").arg(path).arg("--print-triples");
    for a in extra {
        cmd.arg(a);
    }
    cmd.assert()
}

#[test]
fn subclass_transitivity() {
    let fixture = write_fixture(
        "@prefix ex: <http://ex/> .\n\
         @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
         ex:A rdfs:subClassOf ex:B .\n\
         ex:B rdfs:subClassOf ex:C .\n",
    );
    let assert = run(fixture.path(), &[]);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("<http://ex/A> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <http://ex/C>"));
}

#[test]
fn subclass_inheritance() {
    let fixture = write_fixture(
        "@prefix ex: <http://ex/> .\n\
         @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n\
         @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
         ex:A rdfs:subClassOf ex:B .\n\
         ex:x rdf:type ex:A .\n",
    );
    let assert = run(fixture.path(), &[]);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("<http://ex/x> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://ex/B>"));
}

#[test]
fn subproperty_inheritance() {
    let fixture = write_fixture(
        "@prefix ex: <http://ex/> .\n\
         @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
         ex:p rdfs:subPropertyOf ex:q .\n\
         ex:a ex:p ex:b .\n",
    );
    let assert = run(fixture.path(), &[]);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("<http://ex/a> <http://ex/q> <http://ex/b>"));
}

#[test]
fn domain_expansion() {
    let fixture = write_fixture(
        "@prefix ex: <http://ex/> .\n\
         @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
         ex:p rdfs:domain ex:D .\n\
         ex:a ex:p ex:b .\n",
    );
    let assert = run(fixture.path(), &[]);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("<http://ex/a> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://ex/D>"));
}

#[test]
fn range_guard_skips_literal_subject() {
    let fixture = write_fixture(
        "@prefix ex: <http://ex/> .\n\
         @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
         ex:p rdfs:range ex:R .\n\
         ex:a ex:p \"lit\" .\n",
    );
    let assert = run(fixture.path(), &[]);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!output.contains("rdf-syntax-ns#type> <http://ex/R>"));
}

#[test]
fn empty_input_succeeds_with_no_triples() {
    let fixture = write_fixture("");
    let assert = run(fixture.path(), &[]);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.is_empty());
}

#[test]
fn self_loop_schema_triple_is_rejected() {
    let fixture = write_fixture(
        "@prefix ex: <http://ex/> .\n\
         @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
         ex:A rdfs:subClassOf ex:A .\n",
    );
    run(fixture.path(), &[])
        .failure()
        .stderr(contains("cycle"));
}

#[test]
fn axioms_without_rdfs_rules_is_rejected() {
    let fixture = write_fixture(
        "@prefix ex: <http://ex/> .\n\
         @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
         ex:A rdfs:subClassOf ex:B .\n",
    );
    run(fixture.path(), &["--axioms"]).failure();
}

#[test]
fn named_dict_file_is_accepted() {
    let fixture = write_fixture(
        "@prefix ex: <http://ex/> .\n\
         ex:a ex:knows ex:b .\n",
    );
    let dict_dir = tempfile::tempdir().unwrap();
    let dict_path = dict_dir.path().join("terms.dict");
    let mut cmd = Command::cargo_bin("grdfs").unwrap();
    cmd.arg("--input-file")
        .arg(fixture.path())
        .arg("--dict-file")
        .arg(&dict_path)
        .assert()
        .success();
}
