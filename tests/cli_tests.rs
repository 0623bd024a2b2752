//! End-to-end tests for the kodegen_bundler_locale binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::{fs, io::Read, path::Path};
use tempfile::TempDir;

const CATALOG_HEADER: &str = r#"msgid ""
msgstr ""
"Project-Id-Version: wizard 1.0\n"
"POT-Creation-Date: 2024-01-01 00:00+0000\n"
"PO-Revision-Date: 2024-01-02 00:00+0000\n"
"Last-Translator: Camille <camille@example.org>\n"
"Language-Team: French\n"
"Language: fr\n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Plural-Forms: nplurals=2; plural=(n > 1);\n"
"#;

const DESCRIPTOR: &str = r#"{"organizationId":"acme","localeId":"fr","version":"2"}"#;

fn catalog(pairs: &[(&str, &str)]) -> String {
    let mut text = CATALOG_HEADER.to_string();
    for (id, value) in pairs {
        text.push_str(&format!("\nmsgid \"{id}\"\nmsgstr \"{value}\"\n"));
    }
    text
}

fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

/// `a.po`, `wizard.po`, `mail.po`, descriptor and README.
fn full_locale_folder() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_files(
        temp.path(),
        &[
            ("a.po", catalog(&[("Hello", "Bonjour"), ("Bye", "Au revoir")]).as_str()),
            ("wizard.po", catalog(&[("Next", "Suivant")]).as_str()),
            ("mail.po", catalog(&[("Welcome", "Bienvenue")]).as_str()),
            ("locale.json", DESCRIPTOR),
            ("README.md", "hello"),
        ],
    );
    temp
}

fn bundler() -> Command {
    let mut cmd = Command::cargo_bin("kodegen_bundler_locale").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("KODEGEN_LOCALE_OUT")
        .env_remove("KODEGEN_LOCALE_ZIP")
        .env_remove("KODEGEN_LOCALE_LAYOUT");
    cmd
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn zip_entry(archive: &Path, name: &str) -> String {
    let mut zip = zip::ZipArchive::new(fs::File::open(archive).unwrap()).unwrap();
    let mut text = String::new();
    zip.by_name(name).unwrap().read_to_string(&mut text).unwrap();
    text
}

#[test]
fn directory_bundle_contains_every_entry() {
    let src = full_locale_folder();
    let out = TempDir::new().unwrap();

    bundler()
        .arg(src.path())
        .args(["--out", "bundle"])
        .current_dir(out.path())
        .assert()
        .success();

    let root = out.path().join("bundle/locale");
    let a = read_json(&root.join("a.json"));
    assert_eq!(a["locale_data"]["messages"]["Hello"][0], "Bonjour");
    assert_eq!(a["locale_data"]["messages"]["Bye"][0], "Au revoir");
    assert!(root.join("wizard.json").is_file());
    assert_eq!(
        fs::read_to_string(root.join("mail.po")).unwrap(),
        fs::read_to_string(src.path().join("mail.po")).unwrap()
    );

    let descriptor = read_json(&root.join("locale.json"));
    assert_eq!(descriptor["id"], "acme:fr:2");
    assert_eq!(descriptor["readme"], "hello");
    assert_eq!(descriptor["organizationId"], "acme");
    assert!(descriptor["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn default_output_is_locale_under_cwd() {
    let src = full_locale_folder();
    let out = TempDir::new().unwrap();

    bundler()
        .arg(src.path())
        .current_dir(out.path())
        .assert()
        .success();

    assert!(out.path().join("locale/locale/locale.json").is_file());
}

#[test]
fn zip_flag_writes_single_archive() {
    let src = full_locale_folder();
    let out = TempDir::new().unwrap();
    let archive = out.path().join("dist/fr.zip");

    bundler()
        .arg(src.path())
        .arg("-z")
        .arg("-o")
        .arg(&archive)
        .assert()
        .success();

    let zip = zip::ZipArchive::new(fs::File::open(&archive).unwrap()).unwrap();
    let mut names: Vec<&str> = zip.file_names().collect();
    names.sort_unstable();
    assert_eq!(
        names,
        [
            "locale/a.json",
            "locale/locale.json",
            "locale/mail.po",
            "locale/wizard.json"
        ]
    );

    let descriptor: Value = serde_json::from_str(&zip_entry(&archive, "locale/locale.json")).unwrap();
    assert_eq!(descriptor["id"], "acme:fr:2");
    assert!(!out.path().join("dist/locale").exists());
}

#[test]
fn single_mode_writes_translation_json() {
    let src = TempDir::new().unwrap();
    write_files(
        src.path(),
        &[
            ("locale.po", catalog(&[("Save", "Enregistrer")]).as_str()),
            ("locale.json", DESCRIPTOR),
            ("README.md", "hello"),
        ],
    );
    let out = TempDir::new().unwrap();

    bundler()
        .arg(src.path())
        .arg("--single")
        .arg("-o")
        .arg(out.path())
        .assert()
        .success();

    let mut entries: Vec<String> = fs::read_dir(out.path().join("locale"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    entries.sort_unstable();
    assert_eq!(entries, ["locale.json", "translation.json"]);

    let translation = read_json(&out.path().join("locale/translation.json"));
    assert_eq!(
        translation["locale_data"]["messages"]["Save"][0],
        "Enregistrer"
    );
}

#[test]
fn missing_mail_catalog_warns_and_succeeds() {
    let src = TempDir::new().unwrap();
    write_files(
        src.path(),
        &[
            ("wizard.po", catalog(&[("Next", "Suivant")]).as_str()),
            ("locale.json", DESCRIPTOR),
            ("README.md", "hello"),
        ],
    );
    let out = TempDir::new().unwrap();

    bundler()
        .arg(src.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Mail PO file not found"));

    assert!(!out.path().join("locale/mail.po").exists());
    assert!(out.path().join("locale/locale.json").is_file());
}

#[test]
fn missing_wizard_catalog_warns() {
    let src = TempDir::new().unwrap();
    write_files(
        src.path(),
        &[
            ("a.po", catalog(&[("Hello", "Bonjour")]).as_str()),
            ("locale.json", DESCRIPTOR),
            ("README.md", "hello"),
        ],
    );
    let out = TempDir::new().unwrap();

    bundler()
        .arg(src.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("wizard.po file not found"));
}

#[test]
fn missing_descriptor_fails_without_locale_json() {
    let src = TempDir::new().unwrap();
    write_files(
        src.path(),
        &[
            ("wizard.po", catalog(&[("Next", "Suivant")]).as_str()),
            ("README.md", "hello"),
        ],
    );
    let out = TempDir::new().unwrap();

    bundler()
        .arg(src.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Locale JSON file not found"));

    assert!(!out.path().join("locale/locale.json").exists());
    // directory output has no rollback
    assert!(out.path().join("locale/wizard.json").is_file());
}

#[test]
fn missing_source_folder_is_rejected() {
    let out = TempDir::new().unwrap();

    bundler()
        .arg(out.path().join("nope"))
        .current_dir(out.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid arguments"));

    assert!(!out.path().join("locale").exists());
}

#[test]
fn out_can_come_from_environment() {
    let src = full_locale_folder();
    let out = TempDir::new().unwrap();

    bundler()
        .arg(src.path())
        .env("KODEGEN_LOCALE_OUT", out.path().join("from-env"))
        .assert()
        .success();

    assert!(out.path().join("from-env/locale/locale.json").is_file());
}

#[test]
fn failed_zip_run_leaves_no_archive() {
    let src = TempDir::new().unwrap();
    write_files(
        src.path(),
        &[
            ("wizard.po", catalog(&[("Next", "Suivant")]).as_str()),
            ("README.md", "hello"),
        ],
    );
    let out = TempDir::new().unwrap();
    let archive = out.path().join("fr.zip");

    bundler()
        .arg(src.path())
        .arg("--zip")
        .arg("-o")
        .arg(&archive)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Locale JSON file not found"));

    let readable = fs::File::open(&archive)
        .ok()
        .map(|file| zip::ZipArchive::new(file).is_ok());
    assert_ne!(readable, Some(true), "partial archive left behind");
}

#[test]
fn catalogs_with_partial_headers_are_converted() {
    let src = TempDir::new().unwrap();
    write_files(
        src.path(),
        &[
            (
                "wizard.po",
                "msgid \"\"\nmsgstr \"\"\n\"Language: fr\\n\"\n\nmsgid \"Next\"\nmsgstr \"Suivant\"\n",
            ),
            ("errors.po", "msgid \"Offline\"\nmsgstr \"Hors ligne\"\n"),
            ("locale.json", DESCRIPTOR),
            ("README.md", "hello"),
        ],
    );
    let out = TempDir::new().unwrap();

    bundler()
        .arg(src.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success();

    let wizard = read_json(&out.path().join("locale/wizard.json"));
    assert_eq!(wizard["locale_data"]["messages"]["Next"][0], "Suivant");
    assert_eq!(wizard["locale_data"]["messages"][""]["lang"], "fr");
    let errors = read_json(&out.path().join("locale/errors.json"));
    assert_eq!(errors["locale_data"]["messages"]["Offline"][0], "Hors ligne");
}

#[test]
fn layout_file_overrides_reserved_names() {
    let src = TempDir::new().unwrap();
    write_files(
        src.path(),
        &[
            ("wizard.po", catalog(&[("Next", "Suivant")]).as_str()),
            ("emails.po", catalog(&[("Welcome", "Bienvenue")]).as_str()),
            ("locale.json", DESCRIPTOR),
            ("README.md", "hello"),
        ],
    );
    let out = TempDir::new().unwrap();
    let layout = out.path().join("layout.json");
    fs::write(&layout, r#"{"supplementary-catalog":"emails.po"}"#).unwrap();

    bundler()
        .arg(src.path())
        .arg("--layout")
        .arg(&layout)
        .arg("-o")
        .arg(out.path().join("bundle"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Mail PO file not found").not());

    let root = out.path().join("bundle/locale");
    assert_eq!(
        fs::read_to_string(root.join("emails.po")).unwrap(),
        fs::read_to_string(src.path().join("emails.po")).unwrap()
    );
    assert!(!root.join("emails.json").exists());
}
