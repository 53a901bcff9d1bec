use std::fmt;

use serde::{Deserialize, Serialize};

/// Filter selecting which variant of a collection is being managed.
///
/// `ResourceKind::unfiltered()` is the plain listing; a named kind maps to
/// the `type` query parameter of the remote endpoint. Serialized as the
/// kind name, with `""` for the unfiltered kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ResourceKind(Option<String>);

impl ResourceKind {
    pub fn unfiltered() -> Self {
        Self(None)
    }

    /// Named kind. An empty or blank name is the unfiltered kind.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.trim().is_empty() {
            Self(None)
        } else {
            Self(Some(name))
        }
    }

    pub fn from_option(name: Option<&str>) -> Self {
        name.map(Self::named).unwrap_or_default()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.0.is_none()
    }

    /// Value for the `type` query parameter, if any.
    pub fn as_query(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<String> for ResourceKind {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.0.unwrap_or_default()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(name) => f.write_str(name),
            None => f.write_str("unfiltered"),
        }
    }
}
