use pretty_assertions::assert_eq;
use proptest::prelude::*;
use versioning_types::{
    Build, Commit, CommitHash, Compiler, Date, DateTime, Git, Project, Time, Version,
    VersioningDocument, VersioningInformation,
};

fn sample() -> VersioningInformation<'static> {
    VersioningInformation::new(
        Version::new(1, 0, 0),
        Git::new(
            Commit::new(
                CommitHash::new("3f786850e387550fdab836ed7e6dc881de23001b"),
                DateTime::new(Date::new(5, 6, 2024), Time::new(9, 30, 0)),
            ),
            "main",
            "https://example.com/repo.git",
        ),
        Project::new("Demo", "CLI"),
        Build::new(
            DateTime::new(Date::new(5, 6, 2024), Time::new(10, 0, 0)),
            Compiler::new("gcc", Version::new(13, 2, 0), "Release", "-O2"),
        ),
    )
}

#[test]
fn information_serializes_nested_fields() {
    let value = serde_json::to_value(sample()).expect("serialize");

    assert_eq!(value["version"], serde_json::json!({"flags": 0, "major": 1, "minor": 0, "patch": 0}));
    assert_eq!(
        value["git"]["commit"]["hash"],
        serde_json::json!("3f786850e387550fdab836ed7e6dc881de23001b")
    );
    assert_eq!(
        value["git"]["commit"]["datetime"]["date"],
        serde_json::json!({"day": 5, "month": 6, "year": 2024})
    );
    assert_eq!(value["build"]["compiler"]["name"], serde_json::json!("gcc"));
    assert_eq!(value["project"]["variant"], serde_json::json!("CLI"));
}

#[test]
fn document_json_round_trip() {
    let doc = VersioningDocument::new(sample());
    let json = serde_json::to_string_pretty(&doc).expect("serialize");
    let back: VersioningDocument<'static> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, doc);
}

#[test]
fn version_accepts_string_form() {
    let json = r#"{"name": "rustc", "version": "v1.92", "configuration": "", "options": ""}"#;
    let compiler: Compiler<'static> = serde_json::from_str(json).expect("deserialize");
    assert_eq!(compiler.version, Version::new(1, 92, 0));
}

#[test]
fn version_struct_form_defaults_flags() {
    let version: Version =
        serde_json::from_str(r#"{"major": 2, "minor": 1, "patch": 9}"#).expect("deserialize");
    assert_eq!(version, Version::with_flags(0, 2, 1, 9));
}

#[test]
fn version_rejects_malformed_string() {
    let err = serde_json::from_str::<Version>(r#""1.two.3""#).expect_err("malformed");
    assert!(err.to_string().contains("invalid minor version component"));
}

#[test]
fn compiler_configuration_and_options_default_to_empty() {
    let compiler: Compiler<'static> =
        serde_json::from_str(r#"{"name": "clang", "version": "17.0.6"}"#).expect("deserialize");
    assert_eq!(compiler.configuration, "");
    assert_eq!(compiler.options, "");
}

#[test]
fn document_parses_from_toml() {
    let text = r#"
schema = "versioning.info.v1"

[versioning]
version = "2.3.4"

[versioning.project]
name = "Demo"
variant = "CLI"

[versioning.git]
reference = "v2.3.4"
repository = "https://example.com/repo.git"

[versioning.git.commit]
hash = "3f786850e387550fdab836ed7e6dc881de23001b"
datetime = { date = { day = 1, month = 12, year = 2023 }, time = { hour = 8, minute = 5, second = 0 } }

[versioning.build]
datetime = { date = { day = 2, month = 12, year = 2023 }, time = { hour = 9, minute = 0, second = 30 } }

[versioning.build.compiler]
name = "rustc"
version = "1.92.0"
configuration = "release"
"#;

    let doc: VersioningDocument<'static> = toml::from_str(text).expect("parse toml");
    assert!(doc.is_supported());
    assert_eq!(doc.versioning.version, Version::new(2, 3, 4));
    assert_eq!(doc.versioning.git.reference, "v2.3.4");
    assert_eq!(doc.versioning.build.datetime.time, Time::new(9, 0, 30));
    assert_eq!(doc.versioning.build.compiler.options, "");
    assert!(doc.versioning.git.commit.hash.is_well_formed());
}

proptest! {
    /// Display output parses back to the same version.
    #[test]
    fn version_display_parses_back(major in any::<u16>(), minor in any::<u16>(), patch in any::<u16>()) {
        let version = Version::new(major, minor, patch);
        let parsed: Version = version.to_string().parse().expect("parse displayed version");
        prop_assert_eq!(parsed, version);
    }
}
