//! Versioning information compiled into this program.
//!
//! The external generator rewrites the literal below before a release build.
//! As checked in, only the package identity and version are known; git and
//! build fields hold the generator's "unknown" values.

use versioning_types::{
    Build, Commit, CommitHash, Compiler, DETACHED_HEAD, Date, DateTime, Git, Project, Time,
    Version, VersioningInformation,
};

const UNKNOWN_DATETIME: DateTime = DateTime::new(Date::new(0, 0, 0), Time::new(0, 0, 0));

pub static VERSIONING_INFORMATION: VersioningInformation<'static> = VersioningInformation::new(
    Version::new(
        parse_component(env!("CARGO_PKG_VERSION_MAJOR")),
        parse_component(env!("CARGO_PKG_VERSION_MINOR")),
        parse_component(env!("CARGO_PKG_VERSION_PATCH")),
    ),
    Git::new(
        Commit::new(CommitHash::ZERO, UNKNOWN_DATETIME),
        DETACHED_HEAD,
        "",
    ),
    Project::new(env!("CARGO_PKG_NAME"), "example"),
    Build::new(
        UNKNOWN_DATETIME,
        Compiler::new("rustc", Version::new(0, 0, 0), "", ""),
    ),
);

/// Decimal digits of a Cargo version component, evaluated at compile time.
const fn parse_component(text: &str) -> u16 {
    let bytes = text.as_bytes();
    let mut value: u16 = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u16;
        i += 1;
    }
    value
}
