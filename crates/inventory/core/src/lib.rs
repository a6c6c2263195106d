//! Weight-bounded, category-partitioned item storage for game actors.
//!
//! `inventory-core` keeps weapons, consumables and quest items in separate
//! ordered collections, enforces a weight budget supplied by an injected
//! [`CapacityOracle`], and tracks three equip slots. All mutation flows through
//! [`InventoryManager`]; rejected operations are returned as errors and logged
//! through `tracing`.
pub mod capacity;
pub mod collection;
pub mod config;
pub mod equipment;
pub mod error;
pub mod inventory;
pub mod item;
pub mod manager;

pub use capacity::{CapacityFn, CapacityOracle, FixedCapacity};
pub use collection::{CollectionError, ItemCollection, Lookup};
pub use config::InventoryConfig;
pub use equipment::{EquipSlot, EquipSlots, EquipSlotsBuilder};
pub use error::{ErrorSeverity, GameError};
pub use inventory::{Inventory, Stored};
pub use item::{
    Consumable, Item, ItemCategory, ItemId, ItemInfo, ItemRef, QuestItem, Weapon, WeaponType,
};
pub use manager::{InventoryError, InventoryManager};
