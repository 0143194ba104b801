use serde::{Deserialize, Serialize};

/// Canonical, order-independent edge between two named nodes.
///
/// The key is the two endpoint names sorted lexicographically and joined
/// with `_`, so the link built from `(a, b)` is identical to the one
/// built from `(b, a)`. Which endpoint registers the link first does not
/// matter; a full bidirectional road is two registrations of the same
/// link, one per endpoint node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    key: String,
    endpoints: [String; 2],
}

impl Link {
    /// Build the canonical link for a pair of node names.
    pub fn between(a: &str, b: &str) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self {
            key: format!("{lo}_{hi}"),
            endpoints: [lo.to_string(), hi.to_string()],
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Endpoint names in sorted order.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.endpoints[0], &self.endpoints[1])
    }
}
