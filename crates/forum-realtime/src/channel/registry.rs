//! Channel registry: resolves channel names back to the resource they name.

use std::collections::BTreeMap;

use super::types::ChannelKind;

/// A channel name that matched one registered kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChannel {
    /// The channel name as given.
    pub name: String,
    /// The kind whose pattern matched.
    pub kind: ChannelKind,
    /// Owner id parsed from the kind's id group.
    pub owner_id: u64,
    /// All named capture groups of the match.
    pub captures: BTreeMap<String, String>,
}

impl ResolvedChannel {
    /// Returns a named capture group, e.g. `"question_id"`.
    pub fn capture(&self, group: &str) -> Option<&str> {
        self.captures.get(group).map(String::as_str)
    }

    /// Question id when this is a question channel.
    pub fn question_id(&self) -> Option<u64> {
        match self.kind {
            ChannelKind::Question => Some(self.owner_id),
        }
    }
}

/// Ordered set of channel kinds the forum publishes to.
#[derive(Debug, Clone)]
pub struct ChannelRegistry {
    kinds: Vec<ChannelKind>,
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new(ChannelKind::ALL.to_vec())
    }
}

impl ChannelRegistry {
    /// Creates a registry over the given kinds, scanned in order.
    pub fn new(kinds: Vec<ChannelKind>) -> Self {
        Self { kinds }
    }

    /// Registered kinds in resolution order.
    pub fn kinds(&self) -> &[ChannelKind] {
        &self.kinds
    }

    /// Matches `name` against the pattern of `kind`.
    ///
    /// `None` means the name belongs to another kind or is not a valid
    /// channel name at all; it is not an error.
    pub fn match_channel(&self, kind: ChannelKind, name: &str) -> Option<ResolvedChannel> {
        if !self.kinds.contains(&kind) {
            return None;
        }
        match_kind(kind, name)
    }

    /// Resolves `name` against every registered kind.
    ///
    /// A name is valid only when exactly one kind matches it.
    pub fn resolve(&self, name: &str) -> Option<ResolvedChannel> {
        let mut matches = self.kinds.iter().filter_map(|kind| match_kind(*kind, name));
        let first = matches.next()?;
        if matches.next().is_some() {
            tracing::warn!(channel = %name, "Channel name matches more than one channel kind");
            return None;
        }
        Some(first)
    }
}

fn match_kind(kind: ChannelKind, name: &str) -> Option<ResolvedChannel> {
    let pattern = kind.pattern();
    let caps = pattern.captures(name)?;

    let captures: BTreeMap<String, String> = pattern
        .capture_names()
        .flatten()
        .filter_map(|group| {
            caps.name(group)
                .map(|m| (group.to_string(), m.as_str().to_string()))
        })
        .collect();

    // Ids too large for u64 cannot come from make_channel_name.
    let owner_id = captures.get(kind.id_group())?.parse::<u64>().ok()?;

    Some(ResolvedChannel {
        name: name.to_string(),
        kind,
        owner_id,
        captures,
    })
}
