//! WLID encoding and decoding.
//!
//! Two wire layouts are accepted on decode:
//!
//! - current: `wlid://cluster-{cluster}/namespace-{namespace}/{abbrev}-{name}`
//! - legacy: `[wlid://]{cluster}/{namespace}/{kind}/{name}`
//!
//! Encoding always produces the current layout.

use std::fmt;
use std::str::FromStr;

use crate::error::WlidError;
use crate::kind::{abbreviate_kind, normalize_kind, KindTable};

/// Scheme prefix of every encoded WLID.
pub const WLID_PREFIX: &str = "wlid://";

/// Prefix of the cluster segment in the current layout.
pub const CLUSTER_PREFIX: &str = "cluster-";

/// Prefix of the namespace segment in the current layout.
pub const NAMESPACE_PREFIX: &str = "namespace-";

/// A decoded workload identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wlid {
    pub cluster: String,
    pub namespace: String,
    pub kind: String,
    pub name: String,
}

impl Wlid {
    /// Creates a WLID from its parts. No validation is performed.
    pub fn new(
        cluster: impl Into<String>,
        namespace: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            cluster: cluster.into(),
            namespace: namespace.into(),
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Parses a WLID in either the current or the legacy layout.
    pub fn parse(s: &str) -> Result<Self, WlidError> {
        decode(s)
    }

    /// Formats the WLID in the current layout.
    #[must_use]
    pub fn encode(&self) -> String {
        encode(&self.cluster, &self.namespace, &self.kind, &self.name)
    }

    /// The kind token as it appears on the wire.
    #[must_use]
    pub fn abbreviated_kind(&self) -> String {
        abbreviate_kind(&self.kind)
    }

    /// The kind with known names restored to their canonical spelling.
    #[must_use]
    pub fn canonical_kind(&self) -> String {
        normalize_kind(&self.kind)
    }
}

impl fmt::Display for Wlid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{WLID_PREFIX}{CLUSTER_PREFIX}{}/{NAMESPACE_PREFIX}{}/{}-{}",
            self.cluster,
            self.namespace,
            self.abbreviated_kind(),
            self.name
        )
    }
}

impl FromStr for Wlid {
    type Err = WlidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Wlid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Wlid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Encodes the parts into the current WLID layout.
///
/// The kind is abbreviated; nothing else is escaped or checked. Empty parts
/// are accepted, and parts containing `/` yield strings that do not decode.
#[must_use]
pub fn encode(cluster: &str, namespace: &str, kind: &str, name: &str) -> String {
    format!(
        "{WLID_PREFIX}{CLUSTER_PREFIX}{cluster}/{NAMESPACE_PREFIX}{namespace}/{}-{name}",
        abbreviate_kind(kind)
    )
}

/// Decodes a WLID into its four parts.
///
/// Three-segment input is decoded as the current layout when its segments
/// carry the cluster and namespace prefixes and a kind/name separator.
/// Anything else must split into exactly four legacy segments, which are
/// returned verbatim.
pub fn decode(input: &str) -> Result<Wlid, WlidError> {
    if input.chars().any(char::is_whitespace) {
        return Err(WlidError::WhitespaceFound {
            input: input.to_string(),
        });
    }

    let rest = input.strip_prefix(WLID_PREFIX).unwrap_or(input);
    let segments: Vec<&str> = rest.split('/').collect();

    if let [cluster, namespace, workload] = segments.as_slice() {
        if let Some(wlid) = decode_current(cluster, namespace, workload) {
            return Ok(wlid);
        }
    }

    match segments.as_slice() {
        [cluster, namespace, kind, name] => Ok(Wlid::new(*cluster, *namespace, *kind, *name)),
        _ => Err(WlidError::InvalidFormat {
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }),
    }
}

fn decode_current(cluster: &str, namespace: &str, workload: &str) -> Option<Wlid> {
    let cluster = cluster.strip_prefix(CLUSTER_PREFIX)?;
    let namespace = namespace.strip_prefix(NAMESPACE_PREFIX)?;
    // the name may contain dashes; only the first one separates the kind
    let (abbrev, name) = workload.split_once('-')?;
    let kind = KindTable::global().lookup_abbrev(abbrev).unwrap_or(abbrev);
    Some(Wlid::new(cluster, namespace, kind, name))
}

/// Checks that `input` decodes.
pub fn validate(input: &str) -> Result<(), WlidError> {
    decode(input).map(|_| ())
}

/// Cluster part of `input`, or an empty string if it does not decode.
#[must_use]
pub fn cluster_from_wlid(input: &str) -> String {
    decode(input).map(|w| w.cluster).unwrap_or_default()
}

/// Namespace part of `input`, or an empty string if it does not decode.
#[must_use]
pub fn namespace_from_wlid(input: &str) -> String {
    decode(input).map(|w| w.namespace).unwrap_or_default()
}

/// Canonical kind of `input`, or an empty string if it does not decode.
///
/// Unlike [`decode`], this also canonicalizes kinds from legacy input.
#[must_use]
pub fn kind_from_wlid(input: &str) -> String {
    decode(input).map(|w| w.canonical_kind()).unwrap_or_default()
}

/// Name part of `input`, or an empty string if it does not decode.
#[must_use]
pub fn name_from_wlid(input: &str) -> String {
    decode(input).map(|w| w.name).unwrap_or_default()
}

// =============================================================================
// Tests
// =============================================================================
