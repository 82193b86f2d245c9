//! Repository request types.

use serde::{Deserialize, Serialize};

/// Record address parameters for repository calls.
///
/// Produced by [`AtUri::soft_ref`](crate::AtUri::soft_ref) and embedded as-is
/// by request layers, which do not re-validate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoftRef {
    /// The repository (authority) holding the record.
    pub repo: String,

    /// The collection NSID, empty when absent.
    pub collection: String,

    /// The record key, empty when absent.
    pub rkey: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_call_parameters() {
        let soft = SoftRef {
            repo: "did:plc:abc".to_string(),
            collection: "app.bsky.feed.post".to_string(),
            rkey: "3jui7kd54zh2y".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&soft).unwrap(),
            json!({
                "repo": "did:plc:abc",
                "collection": "app.bsky.feed.post",
                "rkey": "3jui7kd54zh2y"
            })
        );
    }
}
