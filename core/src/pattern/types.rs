use serde::Serialize;

/// Parsed shape of one declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Pattern {
    /// A single named dependency.
    Name(Name),
    /// A destructured object of nested patterns.
    Group(Group),
}

/// Named dependency, optionally bound to a local alias inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    /// Store key the value is fetched with. Also the property key inside a built group.
    pub key: String,
    /// Local binding written after `:`; informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Destructured group. Top-level groups have no key; a nested group carries the property
/// key it was declared under (`{ outer: { inner } }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub members: Vec<Pattern>,
}

impl Pattern {
    /// Bare name pattern.
    pub fn name(key: impl Into<String>) -> Self {
        Pattern::Name(Name {
            key: key.into(),
            alias: None,
        })
    }

    /// Name looked up by `key` and bound locally as `alias`.
    pub fn aliased(key: impl Into<String>, alias: impl Into<String>) -> Self {
        Pattern::Name(Name {
            key: key.into(),
            alias: Some(alias.into()),
        })
    }

    /// Top-level group.
    pub fn group(members: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Group(Group {
            key: None,
            members: members.into_iter().collect(),
        })
    }

    /// Group nested under the property `key`.
    pub fn nested(key: impl Into<String>, members: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Group(Group {
            key: Some(key.into()),
            members: members.into_iter().collect(),
        })
    }

    /// Key this pattern is written under when it is a group member.
    pub fn key(&self) -> Option<&str> {
        match self {
            Pattern::Name(name) => Some(&name.key),
            Pattern::Group(group) => group.key.as_deref(),
        }
    }

    /// Number of name leaves reachable from this pattern.
    pub fn leaf_count(&self) -> usize {
        match self {
            Pattern::Name(_) => 1,
            Pattern::Group(group) => group.members.iter().map(Pattern::leaf_count).sum(),
        }
    }
}
