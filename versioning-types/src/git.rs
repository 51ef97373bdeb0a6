use crate::datetime::DateTime;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Reference shown when HEAD is neither tagged nor on a branch.
pub const DETACHED_HEAD: &str = "[Detached HEAD]";

/// Hex-encoded 160-bit commit digest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitHash<'a>(Cow<'a, str>);

impl CommitHash<'static> {
    /// Stand-in used when no commit hash is available.
    pub const ZERO: CommitHash<'static> =
        CommitHash(Cow::Borrowed("0000000000000000000000000000000000000000"));
}

impl<'a> CommitHash<'a> {
    /// Number of hex digits in a well-formed hash.
    pub const LEN: usize = 40;

    pub const fn new(hash: &'a str) -> Self {
        Self(Cow::Borrowed(hash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the text is exactly [`Self::LEN`] ASCII hex digits.
    ///
    /// Informational only; nothing in the model rejects other values.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == Self::LEN && self.0.bytes().all(|b| b.is_ascii_hexdigit())
    }

    pub fn into_owned(self) -> CommitHash<'static> {
        CommitHash(Cow::Owned(self.0.into_owned()))
    }
}

impl From<String> for CommitHash<'static> {
    fn from(hash: String) -> Self {
        Self(Cow::Owned(hash))
    }
}

impl fmt::Display for CommitHash<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commit<'a> {
    pub hash: CommitHash<'a>,
    pub datetime: DateTime,
}

impl<'a> Commit<'a> {
    pub const fn new(hash: CommitHash<'a>, datetime: DateTime) -> Self {
        Self { hash, datetime }
    }

    pub fn into_owned(self) -> Commit<'static> {
        Commit {
            hash: self.hash.into_owned(),
            datetime: self.datetime,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Git<'a> {
    pub commit: Commit<'a>,
    /// Tag or branch name.
    pub reference: Cow<'a, str>,
    /// Remote URL or path.
    pub repository: Cow<'a, str>,
}

impl<'a> Git<'a> {
    pub const fn new(commit: Commit<'a>, reference: &'a str, repository: &'a str) -> Self {
        Self {
            commit,
            reference: Cow::Borrowed(reference),
            repository: Cow::Borrowed(repository),
        }
    }

    /// Build from raw ref names: a tag wins over a branch, and with neither the
    /// reference is [`DETACHED_HEAD`].
    pub fn from_refs(commit: Commit<'a>, tag: &'a str, branch: &'a str, repository: &'a str) -> Self {
        let reference = if !tag.is_empty() {
            tag
        } else if !branch.is_empty() {
            branch
        } else {
            DETACHED_HEAD
        };
        Self::new(commit, reference, repository)
    }

    pub fn into_owned(self) -> Git<'static> {
        Git {
            commit: self.commit.into_owned(),
            reference: Cow::Owned(self.reference.into_owned()),
            repository: Cow::Owned(self.repository.into_owned()),
        }
    }
}
