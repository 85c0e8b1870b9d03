//! # Node Flows
//!
//! The JSON-line host driving a file-backed ledger, including a restart.

#[cfg(test)]
mod tests {
    use am_02_marketplace::prelude::*;
    use market_node::{MarketNode, NodeConfig, NodeStore, StoreKind};
    use serde_json::{json, Value};

    fn request(creator: &str, function: &str, args: &[&str]) -> String {
        json!({ "creator": creator, "function": function, "args": args }).to_string()
    }

    #[test]
    fn test_session_over_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = NodeConfig {
            store: StoreKind::File,
            data_dir: dir.path().to_path_buf(),
            initial_balance: 1_000,
        };
        let lamp = compute_asset_id("Lamp").to_string();

        {
            let mut node = MarketNode::new(NodeStore::open(&config).unwrap(), config.market());
            for line in [
                request("alice", "enroll", &["Alice"]),
                request("bob", "enroll", &["Bob"]),
                request("alice", "create", &["Lamp"]),
                request("alice", "sell", &[lamp.as_str(), "250"]),
                request("bob", "buy", &[lamp.as_str()]),
            ] {
                let response = node.process_line(&line);
                assert_eq!(response.status, 200, "{line}: {}", response.message);
                assert_eq!(response.payload, Value::Null);
            }
        }

        let mut node = MarketNode::new(NodeStore::open(&config).unwrap(), config.market());
        let response = node.process_line(&request("bob", "list", &[]));
        assert_eq!(response.status, 200);
        assert_eq!(response.payload["trader"]["name"], "Bob");
        assert_eq!(response.payload["trader"]["balance"], 750);
        assert_eq!(
            response.payload["assets"][&lamp]["owner"],
            resolve_identity(b"bob").as_str()
        );

        let response = node.process_line(&request("alice", "list", &[]));
        assert_eq!(response.payload["trader"]["balance"], 1_250);
    }

    #[test]
    fn test_error_lines_keep_serving() {
        let config = NodeConfig::default();
        let mut node = MarketNode::new(NodeStore::open(&config).unwrap(), config.market());

        let bad = node.process_line(r#"{"function":"enroll"}"#);
        assert_eq!(bad.status, 500);

        let unknown = node.process_line(&request("alice", "mint", &[]));
        assert_eq!(unknown.message, "Unexpected method: mint");

        let ok = node.process_line(&request("alice", "enroll", &["Alice"]));
        assert_eq!(ok.status, 200);
    }
}
