//! Project, build and compiler descriptions and the aggregate root.

use crate::datetime::DateTime;
use crate::git::Git;
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

fn owned(text: Cow<'_, str>) -> Cow<'static, str> {
    Cow::Owned(text.into_owned())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project<'a> {
    pub name: Cow<'a, str>,
    pub variant: Cow<'a, str>,
}

impl<'a> Project<'a> {
    pub const fn new(name: &'a str, variant: &'a str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            variant: Cow::Borrowed(variant),
        }
    }

    pub fn into_owned(self) -> Project<'static> {
        Project {
            name: owned(self.name),
            variant: owned(self.variant),
        }
    }
}

/// The toolchain that produced the build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Compiler<'a> {
    pub name: Cow<'a, str>,
    pub version: Version,
    #[serde(default)]
    pub configuration: Cow<'a, str>,
    #[serde(default)]
    pub options: Cow<'a, str>,
}

impl<'a> Compiler<'a> {
    pub const fn new(
        name: &'a str,
        version: Version,
        configuration: &'a str,
        options: &'a str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            version,
            configuration: Cow::Borrowed(configuration),
            options: Cow::Borrowed(options),
        }
    }

    pub fn into_owned(self) -> Compiler<'static> {
        Compiler {
            name: owned(self.name),
            version: self.version,
            configuration: owned(self.configuration),
            options: owned(self.options),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Build<'a> {
    pub datetime: DateTime,
    pub compiler: Compiler<'a>,
}

impl<'a> Build<'a> {
    pub const fn new(datetime: DateTime, compiler: Compiler<'a>) -> Self {
        Self { datetime, compiler }
    }

    pub fn into_owned(self) -> Build<'static> {
        Build {
            datetime: self.datetime,
            compiler: self.compiler.into_owned(),
        }
    }
}

/// Everything known about one build of a program.
///
/// A generated program holds exactly one of these in a `static`; consumers
/// take it by reference so tests can pass synthetic values instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersioningInformation<'a> {
    /// Version of the project itself.
    pub version: Version,
    pub git: Git<'a>,
    pub project: Project<'a>,
    pub build: Build<'a>,
}

impl<'a> VersioningInformation<'a> {
    pub const fn new(version: Version, git: Git<'a>, project: Project<'a>, build: Build<'a>) -> Self {
        Self {
            version,
            git,
            project,
            build,
        }
    }

    /// Detach from borrowed storage.
    pub fn into_owned(self) -> VersioningInformation<'static> {
        VersioningInformation {
            version: self.version,
            git: self.git.into_owned(),
            project: self.project.into_owned(),
            build: self.build.into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::{Date, Time};
    use crate::git::{Commit, CommitHash};

    static COMPILED_IN: VersioningInformation<'static> = VersioningInformation::new(
        Version::new(0, 1, 0),
        Git::new(
            Commit::new(CommitHash::ZERO, DateTime::new(Date::new(1, 2, 2024), Time::new(3, 4, 5))),
            "main",
            "",
        ),
        Project::new("demo", "cli"),
        Build::new(
            DateTime::new(Date::new(1, 2, 2024), Time::new(6, 7, 8)),
            Compiler::new("rustc", Version::new(1, 92, 0), "release", "-O"),
        ),
    );

    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    #[test]
    fn static_value_is_readable_and_shareable() {
        assert_send_sync(&COMPILED_IN);
        assert_eq!(COMPILED_IN.project.name, "demo");
        assert_eq!(COMPILED_IN.build.compiler.options, "-O");
        assert_eq!(COMPILED_IN.build.datetime.time, Time::new(6, 7, 8));
    }

    #[test]
    fn into_owned_preserves_equality() {
        let owned = COMPILED_IN.clone().into_owned();
        assert_eq!(owned, COMPILED_IN);
    }
}
