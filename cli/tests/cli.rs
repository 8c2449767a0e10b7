use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn dmsconv() -> Command {
    Command::cargo_bin("dmsconv").unwrap()
}

#[test]
fn to_dms_command() {
    dmsconv()
        .args(["to-dms", "37.44321867", "-127.775334"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Latitude = 37 26' 35.587\" N, Longitude = 127 46' 31.202\" W",
        ));
}

#[test]
fn to_dms_unicode_command() {
    dmsconv()
        .args(["to-dms", "--unicode", "--precision", "1", "-33.45", "70.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lat: 33°27′0″S, Long: 70°30′0″E"));
}

#[test]
fn to_dms_out_of_range() {
    dmsconv()
        .args(["to-dms", "91", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("latitude is out of range"));
}

#[test]
fn to_decimal_command() {
    dmsconv()
        .args([
            "to-decimal",
            "62°17′41.332″N",
            "124 38' 7.332\" E",
            "--precision",
            "6",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Latitude = 62.294814, Longitude = 124.635370",
        ));
}

#[test]
fn to_decimal_rejects_sixty_minutes() {
    dmsconv()
        .args(["to-decimal", "10°60′N", "10°E"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("arc minute"));
}

#[test]
fn check_decimal_command() {
    dmsconv()
        .args(["check-decimal", "-90", "180"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));

    dmsconv()
        .args(["check-decimal", "0", "-180.5"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("invalid"));
}

#[test]
fn check_dms_reference_longitude_limit() {
    dmsconv()
        .args(["check-dms", "10°N", "124°38′7.332″E"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("invalid"));

    dmsconv()
        .args([
            "check-dms",
            "10°N",
            "124°38′7.332″E",
            "--range-check",
            "geographic",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("valid\n"));
}

#[test]
fn check_dms_wrong_direction() {
    dmsconv()
        .args(["check-dms", "10°E", "10°E"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("N or S"));
}

#[test]
fn self_test_command() {
    dmsconv()
        .arg("self-test")
        .assert()
        .success()
        .stdout(predicate::str::contains("DecToDMS Test 1 PASSED"))
        .stdout(predicate::str::contains("DMSToDec Test 1 PASSED"))
        .stdout(predicate::str::contains("All tests passed."));
}
