//! Channel kinds and their name patterns.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static QUESTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^question:(?P<question_id>\d+)$").expect("question channel pattern compiles")
});

/// The kinds of resource a broker channel can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// `question:<id>`: events about a single question (new answers).
    Question,
}

impl ChannelKind {
    /// Every known kind, in resolution order.
    pub const ALL: &'static [ChannelKind] = &[ChannelKind::Question];

    /// Broker namespace, the part before `:`.
    pub fn namespace(self) -> &'static str {
        match self {
            ChannelKind::Question => "question",
        }
    }

    /// Name of the capture group holding the owner id.
    pub fn id_group(self) -> &'static str {
        match self {
            ChannelKind::Question => "question_id",
        }
    }

    /// Compiled pattern a channel name of this kind must match.
    pub fn pattern(self) -> &'static Regex {
        match self {
            ChannelKind::Question => &QUESTION_PATTERN,
        }
    }

    /// Canonical channel name for the resource `id`.
    pub fn make_channel_name(self, id: u64) -> String {
        format!("{}:{id}", self.namespace())
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

impl FromStr for ChannelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChannelKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.namespace().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown channel kind '{s}'"))
    }
}
