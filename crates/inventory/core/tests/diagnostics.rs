//! Rejections must leave a human-readable trace in the host's log sink.

use std::io;
use std::sync::{Arc, Mutex};

use inventory_core::{Consumable, FixedCapacity, InventoryManager, Weapon, WeaponType};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn rejected_add_is_reported() {
    let output = capture(|| {
        let mut inv = InventoryManager::new(FixedCapacity(5));
        let _ = inv.add(Consumable::new(1, "Anvil", 9));
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("cannot add item, too much weight"));
    assert!(output.contains("category=consumable"));
}

#[test]
fn rejected_replace_is_reported() {
    let output = capture(|| {
        let mut inv = InventoryManager::new(FixedCapacity(10));
        inv.add(Weapon::new(1, "Knife", 2, WeaponType::Secondary)).unwrap();
        let _ = inv.replace(0, Weapon::new(2, "Halberd", 12, WeaponType::Primary));
    });

    assert!(output.contains("cannot replace item, too much weight"));
}

#[test]
fn rejected_equip_is_reported() {
    let output = capture(|| {
        let mut inv = InventoryManager::new(FixedCapacity(10));
        let _ = inv.equip(&Consumable::new(1, "Potion", 1), 0);
    });

    assert!(output.contains("cannot equip this type of item"));
}

#[test]
fn successful_operations_stay_below_warn() {
    let output = capture(|| {
        let mut inv = InventoryManager::new(FixedCapacity(10));
        let knife = Weapon::new(1, "Knife", 2, WeaponType::Secondary);
        inv.add(knife.clone()).unwrap();
        inv.equip(&knife, 0).unwrap();
    });

    assert!(output.is_empty());
}
