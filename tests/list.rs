use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn rolodex(file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("CONTACTS_FILE", file);
    cmd
}

fn listing_format(i: i32, name: &str, phone: &str, email: &str) -> String {
    format!("{i:>3}. {name:<20} {phone:15} {email}")
}

#[test]
fn listing_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");

    rolodex(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts to display"));

    // One malformed line between two good ones
    fs::write(
        &file,
        "Wayne|08062866694|jackie73@lopez.com\n\
        Thomas\n\
        Alice|08031234567|\n",
    )?;

    let output = rolodex(&file)
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let listing = String::from_utf8_lossy(&output);
    let lines: Vec<_> = listing.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        listing_format(1, "Wayne", "08062866694", "jackie73@lopez.com")
    );
    assert_eq!(lines[1].trim_end(), listing_format(2, "Alice", "08031234567", "").trim_end());
    Ok(())
}

#[test]
fn listing_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");
    fs::write(&file, "Bob|555-000-0000|bob@x.com\n")?;

    let output = rolodex(&file)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(value[0]["name"], "Bob");
    assert_eq!(value[0]["phone"], "555-000-0000");
    assert_eq!(value[0]["email"], "bob@x.com");
    Ok(())
}
