//! # wlid
//!
//! Encoding, decoding, and validation of workload identifiers (WLIDs).
//!
//! A WLID names a resource inside a cluster:
//!
//! - `wlid://cluster-prod/namespace-payments/deployment-api`
//!
//! The kind is carried in abbreviated form (lowercase, dashes removed) and
//! restored to its canonical spelling on decode when it is a known
//! Kubernetes kind. Unknown kinds pass through unchanged.
//!
//! The legacy layout `cluster/namespace/kind/name` is still accepted on
//! decode and returned verbatim.
//!
//! ```
//! let s = wlid::encode("c1", "ns1", "Deployment", "my-app");
//! assert_eq!(s, "wlid://cluster-c1/namespace-ns1/deployment-my-app");
//!
//! let id = wlid::decode(&s).unwrap();
//! assert_eq!(id.kind, "Deployment");
//! assert_eq!(id.name, "my-app");
//! ```

mod codec;
mod error;
mod kind;
mod workload;

pub use codec::{
    cluster_from_wlid, decode, encode, kind_from_wlid, name_from_wlid, namespace_from_wlid,
    validate, Wlid, CLUSTER_PREFIX, NAMESPACE_PREFIX, WLID_PREFIX,
};
pub use error::WlidError;
pub use kind::{abbreviate_kind, normalize_kind, KindTable, KIND_NAMES};
pub use workload::{namespace_or_default, HasNamespace, WorkloadRef, DEFAULT_NAMESPACE};
