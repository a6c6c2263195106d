//! Building a manager from an on-disk configuration.

use std::io::Write;

use inventory_content::ConfigLoader;
use inventory_core::{Consumable, InventoryManager};

#[test]
fn manager_respects_configured_capacity() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# carry limit for the test hero").unwrap();
    writeln!(file, "base_capacity = 12").unwrap();

    let config = ConfigLoader::load(file.path()).unwrap();
    let mut inv = InventoryManager::from_config(&config);

    assert_eq!(inv.max_weight(), 12);
    inv.add(Consumable::new(1, "Waterskin", 12)).unwrap();
    assert!(inv.add(Consumable::new(2, "Apple", 1)).is_err());
}
