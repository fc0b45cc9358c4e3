//! Known Kubernetes resource kinds and their wire-format abbreviations.
//!
//! The abbreviated form of a kind is its lowercase spelling with every `-`
//! removed (`ConfigMap` becomes `configmap`). Current-format WLIDs carry
//! only the abbreviation, so decoding uses the reverse mapping held by
//! [`KindTable`] to restore the canonical spelling.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical spellings of every recognized kind.
pub const KIND_NAMES: &[&str] = &[
    "ComponentStatus",
    "ConfigMap",
    "ControllerRevision",
    "CronJob",
    "CustomResourceDefinition",
    "DaemonSet",
    "Deployment",
    "Endpoints",
    "Event",
    "HorizontalPodAutoscaler",
    "Ingress",
    "Job",
    "Lease",
    "LimitRange",
    "LocalSubjectAccessReview",
    "MutatingWebhookConfiguration",
    "Namespace",
    "NetworkPolicy",
    "Node",
    "PersistentVolume",
    "PersistentVolumeClaim",
    "Pod",
    "PodDisruptionBudget",
    "PodSecurityPolicy",
    "PodTemplate",
    "PriorityClass",
    "ReplicaSet",
    "ReplicationController",
    "ResourceQuota",
    "Role",
    "RoleBinding",
    "Secret",
    "SelfSubjectAccessReview",
    "SelfSubjectRulesReview",
    "Service",
    "ServiceAccount",
    "StatefulSet",
    "StorageClass",
    "SubjectAccessReview",
    "TokenReview",
    "ValidatingWebhookConfiguration",
    "VolumeAttachment",
];

/// Returns the abbreviated wire token for a kind: lowercase, dashes removed.
#[must_use]
pub fn abbreviate_kind(kind: &str) -> String {
    kind.to_lowercase().replace('-', "")
}

/// Returns the canonical spelling of `kind` if it names a known kind
/// (compared case-insensitively), otherwise `kind` unchanged.
#[must_use]
pub fn normalize_kind(kind: &str) -> String {
    match KindTable::global().lookup(kind) {
        Some(canonical) => canonical.to_string(),
        None => kind.to_string(),
    }
}

/// Immutable lookup table over [`KIND_NAMES`].
#[derive(Debug)]
pub struct KindTable {
    by_abbrev: HashMap<String, &'static str>,
    by_lower: HashMap<String, &'static str>,
}

impl KindTable {
    fn build() -> Self {
        let mut by_abbrev = HashMap::with_capacity(KIND_NAMES.len());
        let mut by_lower = HashMap::with_capacity(KIND_NAMES.len());
        for &kind in KIND_NAMES {
            by_abbrev.insert(abbreviate_kind(kind), kind);
            by_lower.insert(kind.to_lowercase(), kind);
        }
        Self {
            by_abbrev,
            by_lower,
        }
    }

    /// Returns the process-wide table, building it on first use.
    pub fn global() -> &'static KindTable {
        static TABLE: OnceLock<KindTable> = OnceLock::new();
        TABLE.get_or_init(Self::build)
    }

    /// Looks up an abbreviated token exactly as it appears on the wire.
    pub fn lookup_abbrev(&self, abbrev: &str) -> Option<&'static str> {
        self.by_abbrev.get(abbrev).copied()
    }

    /// Case-insensitive exact match against the canonical spellings.
    pub fn lookup(&self, kind: &str) -> Option<&'static str> {
        self.by_lower.get(&kind.to_lowercase()).copied()
    }

    /// Iterates the canonical spellings in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        KIND_NAMES.iter().copied()
    }

    /// Number of known kinds.
    pub fn len(&self) -> usize {
        KIND_NAMES.len()
    }

    /// Returns true if the table has no kinds.
    pub fn is_empty(&self) -> bool {
        KIND_NAMES.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviate_kind() {
        assert_eq!(abbreviate_kind("ConfigMap"), "configmap");
        assert_eq!(abbreviate_kind("Config-Map"), "configmap");
        assert_eq!(abbreviate_kind("pod"), "pod");
    }

    #[test]
    fn test_normalize_kind_case_insensitive() {
        assert_eq!(normalize_kind("deployment"), "Deployment");
        assert_eq!(normalize_kind("STATEFULSET"), "StatefulSet");
        assert_eq!(normalize_kind("customresourcedefinition"), "CustomResourceDefinition");
    }

    #[test]
    fn test_normalize_kind_unknown_passthrough() {
        assert_eq!(normalize_kind("Widget"), "Widget");
        assert_eq!(normalize_kind("widget"), "widget");
        assert_eq!(normalize_kind(""), "");
    }

    #[test]
    fn test_normalize_kind_requires_exact_match() {
        // dashes are not stripped here; only case is ignored
        assert_eq!(normalize_kind("config-map"), "config-map");
    }

    #[test]
    fn test_lookup_abbrev() {
        let table = KindTable::global();
        assert_eq!(table.lookup_abbrev("daemonset"), Some("DaemonSet"));
        assert_eq!(table.lookup_abbrev("DaemonSet"), None);
        assert_eq!(table.lookup_abbrev("widget"), None);
    }

    #[test]
    fn test_table_covers_all_kinds() {
        let table = KindTable::global();
        assert_eq!(table.len(), 42);
        assert!(!table.is_empty());
        for kind in table.iter() {
            assert_eq!(table.lookup_abbrev(&abbreviate_kind(kind)), Some(kind));
        }
    }

    #[test]
    fn test_abbreviations_unique() {
        let unique: std::collections::HashSet<_> =
            KIND_NAMES.iter().map(|k| abbreviate_kind(k)).collect();
        assert_eq!(KIND_NAMES.len(), unique.len(), "Duplicate kind abbreviations found!");
    }

    #[test]
    fn test_global_is_shared_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| KindTable::global() as *const KindTable as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
