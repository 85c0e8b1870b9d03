//! # Persistence
//!
//! Marketplace state written through the file-backed store must survive a
//! process restart, and a failed operation must not reach the disk.

#[cfg(test)]
mod tests {
    use am_01_ledger_store::{FileBackedKVStore, KeyValueStore};
    use am_02_marketplace::prelude::*;
    use std::path::Path;

    fn open(path: &Path) -> MarketplaceService<FileBackedKVStore> {
        MarketplaceService::new(FileBackedKVStore::open(path).unwrap(), MarketConfig::default())
    }

    #[test]
    fn test_trade_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market").join("ledger.state");
        let alice = FixedCredential::new("alice");
        let bob = FixedCredential::new("bob");

        let bike = {
            let mut service = open(&path);
            service.enroll(&alice, "Alice").unwrap();
            service.enroll(&bob, "Bob").unwrap();
            let bike = service.create_asset(&alice, "Bike").unwrap().id();
            service.list_for_sale(&alice, &bike, 500).unwrap();
            service.buy(&bob, &bike).unwrap();
            bike
        };

        let service = open(&path);
        let snapshot = service.list_snapshot(&alice).unwrap();
        assert_eq!(snapshot.trader.balance, 10_500);
        assert_eq!(snapshot.assets[&bike].owner, resolve_identity(b"bob"));
        assert_eq!(
            service
                .get_trader(&resolve_identity(b"bob"))
                .unwrap()
                .unwrap()
                .balance,
            9_500
        );
    }

    #[test]
    fn test_enrollment_is_remembered_after_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.state");
        let alice = FixedCredential::new("alice");

        open(&path).enroll(&alice, "Alice").unwrap();

        let mut service = open(&path);
        assert!(matches!(
            service.enroll(&alice, "Alice"),
            Err(MarketError::AlreadyEnrolled(_))
        ));
    }

    #[test]
    fn test_failed_purchase_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.state");
        let alice = FixedCredential::new("alice");
        let bob = FixedCredential::new("bob");

        {
            let mut service = open(&path);
            service.enroll(&alice, "Alice").unwrap();
            service.enroll(&bob, "Bob").unwrap();
            service.create_asset(&alice, "Chair").unwrap();
        }
        let before = std::fs::read(&path).unwrap();

        {
            let mut service = open(&path);
            let chair = compute_asset_id("Chair");
            assert!(matches!(
                service.buy(&bob, &chair),
                Err(MarketError::NotForSale(_))
            ));
        }

        assert_eq!(std::fs::read(&path).unwrap(), before);
        let store = FileBackedKVStore::open(&path).unwrap();
        assert_eq!(store.prefix_scan(b"").unwrap().len(), 3);
    }
}
