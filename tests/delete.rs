use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn rolodex(file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("CONTACTS_FILE", file);
    cmd
}

#[test]
fn deleting_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");

    // Attempt to delete from an empty contact list
    rolodex(&file)
        .args(["delete", "--name", "Alice"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Contact list is empty"));

    fs::write(
        &file,
        "Patricia|08066809241|lmartinez@bender-patterson.net\n\
        Diane|08064879199|grahammatthew@gmail.com\n\
        John|08046516806|wendy59@turner.com\n",
    )?;

    // Attempt to delete non existing contact
    rolodex(&file)
        .args(["delete", "--name", "Alice"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Contact 'Alice' not found"));

    // Delete ignores case
    rolodex(&file)
        .args(["delete", "--name", "DIANE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"));

    assert_eq!(
        fs::read_to_string(&file)?,
        "Patricia|08066809241|lmartinez@bender-patterson.net\n\
        John|08046516806|wendy59@turner.com\n"
    );

    // Verify that deleted contact no longer exist
    rolodex(&file)
        .args(["search", "--name", "Diane"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact not found"));

    Ok(())
}
