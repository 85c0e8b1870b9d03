//! # Marketplace Flows
//!
//! End-to-end scenarios through `MarketplaceHandler`, the way a ledger
//! platform would drive the marketplace: operation names and string
//! arguments in, response envelopes out.

#[cfg(test)]
mod tests {
    use am_01_ledger_store::{InMemoryKVStore, KeyValueStore};
    use am_02_marketplace::prelude::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type Handler = MarketplaceHandler<MarketplaceService<InMemoryKVStore>>;

    fn handler() -> Handler {
        MarketplaceHandler::new(MarketplaceService::in_memory())
    }

    fn call(handler: &mut Handler, who: &FixedCredential, function: &str, args: &[&str]) -> Response {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        handler.invoke(who, function, &args)
    }

    fn snapshot(handler: &mut Handler, who: &FixedCredential) -> MarketSnapshot {
        let response = call(handler, who, "list", &[]);
        assert!(response.is_ok(), "list failed: {}", response.message);
        serde_json::from_slice(&response.payload).unwrap()
    }

    fn state(handler: &Handler) -> Vec<(Vec<u8>, Vec<u8>)> {
        handler.api().store().prefix_scan(b"").unwrap()
    }

    // =============================================================================
    // HAPPY PATH
    // =============================================================================

    #[test]
    fn test_bike_sale_end_to_end() {
        let mut h = handler();
        let alice = FixedCredential::new("alice-cert");
        let bob = FixedCredential::new("bob-cert");
        let bike = compute_asset_id("Bike");

        assert!(call(&mut h, &alice, "enroll", &["Alice"]).is_ok());
        assert!(call(&mut h, &alice, "create", &["Bike"]).is_ok());
        assert!(call(&mut h, &alice, "sell", &[bike.as_str(), "500"]).is_ok());
        assert!(call(&mut h, &bob, "enroll", &["Bob"]).is_ok());
        assert!(call(&mut h, &bob, "buy", &[bike.as_str()]).is_ok());

        let a = snapshot(&mut h, &alice);
        let b = snapshot(&mut h, &bob);
        assert_eq!(a.trader.balance, 10_500);
        assert_eq!(b.trader.balance, 9_500);

        let asset = &b.assets[&bike];
        assert_eq!(asset.owner, resolve_identity(b"bob-cert"));
        assert!(!asset.for_sale);
        assert_eq!(a.assets, b.assets);
    }

    #[test]
    fn test_asset_changes_hands_twice() {
        let mut h = handler();
        let traders: Vec<FixedCredential> = ["a", "b", "c"].iter().map(|n| FixedCredential::new(*n)).collect();
        for (t, name) in traders.iter().zip(["A", "B", "C"]) {
            assert!(call(&mut h, t, "enroll", &[name]).is_ok());
        }
        let vase = compute_asset_id("Vase");

        call(&mut h, &traders[0], "create", &["Vase"]);
        call(&mut h, &traders[0], "sell", &[vase.as_str(), "100"]);
        assert!(call(&mut h, &traders[1], "buy", &[vase.as_str()]).is_ok());
        assert!(call(&mut h, &traders[1], "sell", &[vase.as_str(), "300"]).is_ok());
        assert!(call(&mut h, &traders[2], "buy", &[vase.as_str()]).is_ok());

        let balances: Vec<u64> = traders
            .iter()
            .map(|t| snapshot(&mut h, t).trader.balance)
            .collect();
        assert_eq!(balances, vec![10_100, 10_200, 9_700]);
        assert_eq!(balances.iter().sum::<u64>(), 30_000);

        let owner = &snapshot(&mut h, &traders[0]).assets[&vase].owner;
        assert_eq!(*owner, resolve_identity(b"c"));
    }

    #[test]
    fn test_listing_reflects_last_written_state() {
        let mut h = handler();
        let alice = FixedCredential::new("alice");
        call(&mut h, &alice, "enroll", &["Alice"]);

        let names = ["Chair", "Table", "Lamp", "Rug", "Clock"];
        for name in names {
            assert!(call(&mut h, &alice, "create", &[name]).is_ok());
        }
        let lamp = compute_asset_id("Lamp");
        call(&mut h, &alice, "sell", &[lamp.as_str(), "42"]);

        let snap = snapshot(&mut h, &alice);
        assert_eq!(snap.assets.len(), names.len());
        assert_eq!(snap.assets[&lamp].price, 42);
        assert!(snap.assets[&lamp].for_sale);
        for name in names {
            assert_eq!(snap.assets[&compute_asset_id(name)].name, name);
        }
    }

    // =============================================================================
    // FAILURES LEAVE NO TRACE
    // =============================================================================

    #[test]
    fn test_rejected_operations_write_nothing() {
        let mut h = handler();
        let alice = FixedCredential::new("alice");
        let bob = FixedCredential::new("bob");
        call(&mut h, &alice, "enroll", &["Alice"]);
        call(&mut h, &bob, "enroll", &["Bob"]);
        call(&mut h, &alice, "create", &["Chair"]);
        call(&mut h, &alice, "create", &["Piano"]);
        let chair = compute_asset_id("Chair");
        let piano = compute_asset_id("Piano");
        call(&mut h, &alice, "sell", &[piano.as_str(), "20000"]);
        let before = state(&h);

        let cases: Vec<(&FixedCredential, &str, Vec<&str>, &str)> = vec![
            (&alice, "enroll", vec!["Again"], "already enrolled"),
            (&bob, "buy", vec![chair.as_str()], "not for sale"),
            (&alice, "buy", vec![piano.as_str()], "cannot buy your own asset"),
            (&bob, "buy", vec![piano.as_str()], "not enough balance"),
            (&bob, "sell", vec![chair.as_str(), "5"], "does not belong to you"),
            (&bob, "buy", vec!["ffffffffffffffff"], "asset does not exist"),
            (&bob, "sell", vec![chair.as_str(), "-5"], "non-negative integer"),
            (&bob, "list", vec!["extra"], "expect 0 parameters"),
            (&bob, "burn", vec![], "Unexpected method: burn"),
        ];

        for (who, function, args, expected) in cases {
            let response = call(&mut h, who, function, &args);
            assert_eq!(response.status, Status::Error, "{function} {args:?}");
            assert!(
                response.message.contains(expected),
                "{function}: {:?} should mention {expected:?}",
                response.message
            );
            assert_eq!(state(&h), before, "{function} wrote state");
        }
    }

    #[test]
    fn test_unenrolled_caller_cannot_list() {
        let mut h = handler();
        let response = call(&mut h, &FixedCredential::new("ghost"), "list", &[]);
        assert_eq!(response.status.code(), 500);
        assert!(response.message.starts_with("trader not exist"));
    }

    #[test]
    fn test_same_name_overwrites_previous_asset() {
        let mut h = handler();
        let alice = FixedCredential::new("alice");
        let bob = FixedCredential::new("bob");
        call(&mut h, &alice, "enroll", &["Alice"]);
        call(&mut h, &bob, "enroll", &["Bob"]);
        let boat = compute_asset_id("Boat");

        call(&mut h, &alice, "create", &["Boat"]);
        call(&mut h, &alice, "sell", &[boat.as_str(), "10"]);
        call(&mut h, &bob, "create", &["Boat"]);

        let snap = snapshot(&mut h, &alice);
        assert_eq!(snap.assets.len(), 1);
        assert_eq!(snap.assets[&boat].owner, resolve_identity(b"bob"));
        assert!(!snap.assets[&boat].for_sale);

        // Alice lost the asset: she can no longer list it.
        let response = call(&mut h, &alice, "sell", &[boat.as_str(), "10"]);
        assert!(response.message.contains("does not belong to you"));
    }
}
