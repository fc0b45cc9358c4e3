//! Building WLIDs from workload objects.

use serde::{Deserialize, Serialize};

use crate::codec::Wlid;

/// Namespace assumed for workloads that do not carry one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// A workload object that may know its namespace.
pub trait HasNamespace {
    /// The namespace recorded on the object, if any.
    fn namespace(&self) -> Option<&str>;
}

/// Returns the workload's namespace, falling back to [`DEFAULT_NAMESPACE`].
///
/// An empty namespace also falls back, so a manifest with
/// `namespace: ""` yields `default` rather than an empty WLID segment.
pub fn namespace_or_default<W: HasNamespace + ?Sized>(workload: &W) -> &str {
    match workload.namespace() {
        Some(ns) if !ns.is_empty() => ns,
        _ => DEFAULT_NAMESPACE,
    }
}

/// Minimal view of a Kubernetes object: its kind, name, and namespace.
///
/// Serializes as a manifest document, writing and reading `kind`,
/// `metadata.name` and `metadata.namespace`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ManifestDocument", into = "ManifestDocument")]
pub struct WorkloadRef {
    pub kind: String,
    pub name: String,
    pub namespace: Option<String>,
}

impl WorkloadRef {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        namespace: Option<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            namespace,
        }
    }

    /// Builds the WLID for this workload in `cluster`.
    #[must_use]
    pub fn to_wlid(&self, cluster: &str) -> Wlid {
        Wlid::new(cluster, namespace_or_default(self), &self.kind, &self.name)
    }
}

impl HasNamespace for WorkloadRef {
    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

#[derive(Serialize, Deserialize)]
struct ManifestDocument {
    kind: String,
    metadata: ManifestMetadata,
}

#[derive(Serialize, Deserialize)]
struct ManifestMetadata {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
}

impl From<ManifestDocument> for WorkloadRef {
    fn from(doc: ManifestDocument) -> Self {
        Self {
            kind: doc.kind,
            name: doc.metadata.name,
            namespace: doc.metadata.namespace,
        }
    }
}

impl From<WorkloadRef> for ManifestDocument {
    fn from(workload: WorkloadRef) -> Self {
        Self {
            kind: workload.kind,
            metadata: ManifestMetadata {
                name: workload.name,
                namespace: workload.namespace,
            },
        }
    }
}
