//! Versioning information data model.
//!
//! A [`VersioningInformation`] describes one build of a program: the project
//! identity, its semantic version, the git commit it was built from, when it was
//! built and with which compiler. Values are populated by an external generator
//! and never change afterwards.
//!
//! # Design constraints
//! - The model performs no validation. Whatever the generator supplied is kept verbatim.
//! - Every constructor used for the compiled-in value is a `const fn`, so a
//!   generated `static` needs no runtime initialisation.
//! - Text is `Cow<'a, str>`: borrowed for compiled-in values, owned for loaded documents.

pub mod datetime;
pub mod document;
pub mod git;
pub mod info;
pub mod version;

pub use datetime::{Date, DateTime, Time};
pub use document::VersioningDocument;
pub use git::{Commit, CommitHash, DETACHED_HEAD, Git};
pub use info::{Build, Compiler, Project, VersioningInformation};
pub use version::{ParseVersionError, Version};

/// Schema identifiers.
pub mod schema {
    pub const VERSIONING_INFO_V1: &str = "versioning.info.v1";
}
