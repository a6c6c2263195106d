//! Capacity-enforcing, equip-aware inventory facade.
//!
//! [`InventoryManager`] is the only entry point game logic talks to. It checks
//! the weight budget before routing adds and replacements to the owned
//! [`Inventory`], and layers the three equip slots on top of it.
//!
//! Rejections are expected, frequent outcomes (a full backpack), so they are
//! reported as values plus a `tracing` warning rather than panics.

use crate::capacity::{CapacityOracle, FixedCapacity};
use crate::collection::{CollectionError, ItemCollection};
use crate::config::InventoryConfig;
use crate::equipment::{EquipSlot, EquipSlots};
use crate::error::{ErrorSeverity, GameError};
use crate::inventory::{Inventory, Stored};
use crate::item::{
    Consumable, Item, ItemCategory, ItemId, ItemRef, QuestItem, Weapon, WeaponType,
};

/// Errors returned by the weight-checked and equip operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// The carried weight after the operation would exceed the budget.
    #[error("{category} of weight {weight} would bring load to {projected}, over capacity {max}")]
    CapacityExceeded {
        category: ItemCategory,
        weight: u32,
        projected: u64,
        max: u32,
    },

    /// Only weapons and quest items can be equipped.
    #[error("cannot equip item of category {0}")]
    InvalidEquipType(ItemCategory),

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CapacityExceeded { .. } => ErrorSeverity::Recoverable,
            Self::InvalidEquipType(_) => ErrorSeverity::Validation,
            Self::Collection(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CapacityExceeded { .. } => "INVENTORY_CAPACITY_EXCEEDED",
            Self::InvalidEquipType(_) => "INVENTORY_INVALID_EQUIP_TYPE",
            Self::Collection(err) => err.error_code(),
        }
    }
}

/// Owns one [`Inventory`] and its equip slots, bounded by a capacity source.
#[derive(Clone, Debug)]
pub struct InventoryManager<C> {
    capacity: C,
    inventory: Inventory,
    slots: EquipSlots,
}

impl InventoryManager<FixedCapacity> {
    /// Manager with a constant budget taken from configuration.
    pub fn from_config(config: &InventoryConfig) -> Self {
        Self::new(FixedCapacity(config.base_capacity))
    }
}

impl<C: CapacityOracle> InventoryManager<C> {
    /// Creates an empty manager with nothing equipped.
    pub fn new(capacity: C) -> Self {
        Self::from_parts(capacity, Inventory::new(), EquipSlots::empty())
    }

    /// Reassembles a manager from previously captured state.
    ///
    /// Slot indices are taken as-is; out-of-range ones read as empty.
    pub fn from_parts(capacity: C, inventory: Inventory, slots: EquipSlots) -> Self {
        Self {
            capacity,
            inventory,
            slots,
        }
    }

    // ===== weight =====

    /// Current budget, read from the capacity source on every call.
    pub fn max_weight(&self) -> u32 {
        self.capacity.capacity()
    }

    /// Exact weight of everything stored.
    pub fn current_weight(&self) -> u64 {
        self.inventory.weight()
    }

    /// Remaining budget. Negative when the capacity source dropped below the
    /// weight already carried.
    pub fn available_weight(&self) -> i64 {
        let current = i64::try_from(self.current_weight()).unwrap_or(i64::MAX);
        i64::from(self.max_weight()).saturating_sub(current)
    }

    // ===== mutation =====

    /// Stores `item` if its weight fits in the available budget.
    ///
    /// On rejection the item is dropped and nothing changes.
    pub fn add<T: Stored>(&mut self, item: T) -> Result<(), InventoryError> {
        let category = T::CATEGORY;
        let max = self.max_weight();
        let current = self.current_weight();
        let weight = item.weight();
        let projected = current.saturating_add(u64::from(weight));

        if projected > u64::from(max) {
            tracing::warn!(
                %category,
                item = %item.id(),
                weight,
                current,
                max,
                "cannot add item, too much weight"
            );
            return Err(InventoryError::CapacityExceeded {
                category,
                weight,
                projected,
                max,
            });
        }

        tracing::debug!(%category, item = %item.id(), weight, "item added");
        self.inventory.objects_mut::<T>().add(item);
        Ok(())
    }

    /// Removes the first stored item equal to `item`.
    ///
    /// Equip slots are left untouched and may go stale.
    pub fn remove<T: Stored>(&mut self, item: &T) -> Option<T> {
        self.inventory.objects_mut::<T>().remove(item)
    }

    /// Removes the item at `index`. Equip slots are left untouched.
    pub fn remove_at<T: Stored>(&mut self, index: usize) -> Result<T, CollectionError> {
        self.inventory.objects_mut::<T>().remove_at(index)
    }

    /// Swaps the item at `index` for `item` if the resulting load fits the
    /// budget, returning the displaced item.
    pub fn replace<T: Stored>(&mut self, index: usize, item: T) -> Result<T, InventoryError> {
        let category = T::CATEGORY;
        let existing = self.inventory.objects::<T>().get_at(index)?.weight();
        let max = self.max_weight();
        let current = self.current_weight();
        let weight = item.weight();
        // `current` is an exact sum that includes `existing`.
        let projected = (current - u64::from(existing)).saturating_add(u64::from(weight));

        if projected > u64::from(max) {
            tracing::warn!(
                %category,
                index,
                existing,
                weight,
                max,
                "cannot replace item, too much weight"
            );
            return Err(InventoryError::CapacityExceeded {
                category,
                weight,
                projected,
                max,
            });
        }

        tracing::debug!(%category, index, item = %item.id(), weight, "item replaced");
        Ok(self.inventory.objects_mut::<T>().replace(index, item)?)
    }

    // ===== queries =====

    /// Returns true if an item equal to `item` is stored.
    pub fn contains<T: Stored>(&self, item: &T) -> bool {
        self.inventory.objects::<T>().contains(item)
    }

    /// Returns true if a `T` with identifier `id` is stored.
    pub fn contains_id<T: Stored>(&self, id: ItemId) -> bool {
        self.inventory.objects::<T>().contains_id(id)
    }

    /// Returns true if a `T` called `name` is stored.
    pub fn contains_name<T: Stored>(&self, name: &str) -> bool {
        self.inventory.objects::<T>().contains_name(name)
    }

    /// Returns the `T` at `index`.
    pub fn get_at<T: Stored>(&self, index: usize) -> Result<&T, CollectionError> {
        self.inventory.objects::<T>().get_at(index)
    }

    /// Returns the first `T` called `name`.
    pub fn get_by_name<T: Stored>(&self, name: &str) -> Result<&T, CollectionError> {
        self.inventory.objects::<T>().get_by_name(name)
    }

    /// Returns the first `T` with identifier `id`.
    pub fn get_by_id<T: Stored>(&self, id: ItemId) -> Result<&T, CollectionError> {
        self.inventory.objects::<T>().get_by_id(id)
    }

    /// Number of stored `T` items.
    pub fn count<T: Stored>(&self) -> usize {
        self.inventory.objects::<T>().count()
    }

    /// Read-only view of the owned inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn weapons(&self) -> &ItemCollection<Weapon> {
        self.inventory.weapons()
    }

    pub fn consumables(&self) -> &ItemCollection<Consumable> {
        self.inventory.consumables()
    }

    pub fn quest_items(&self) -> &ItemCollection<QuestItem> {
        self.inventory.quest_items()
    }

    // ===== equipment =====

    /// Points the slot matching `item` at `index`.
    ///
    /// Primary weapons go to [`EquipSlot::Primary`], secondary weapons to
    /// [`EquipSlot::Secondary`], quest items to [`EquipSlot::Tertiary`].
    /// The caller vouches that `item` is stored at `index`; this is not
    /// checked.
    pub fn equip<T: Item>(&mut self, item: &T, index: usize) -> Result<EquipSlot, InventoryError> {
        let slot = match item.as_variant() {
            ItemRef::Weapon(weapon) => match weapon.weapon_type {
                WeaponType::Primary => EquipSlot::Primary,
                WeaponType::Secondary => EquipSlot::Secondary,
            },
            ItemRef::QuestItem(_) => EquipSlot::Tertiary,
            ItemRef::Consumable(consumable) => {
                tracing::warn!(
                    item = %consumable.info.id,
                    index,
                    "cannot equip this type of item"
                );
                return Err(InventoryError::InvalidEquipType(ItemCategory::Consumable));
            }
        };

        let previous = self.slots.set(slot, index);
        tracing::debug!(%slot, index, ?previous, item = %item.id(), "item equipped");
        Ok(slot)
    }

    /// Empties `slot`, returning the index it held.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<usize> {
        let previous = self.slots.clear(slot);
        if let Some(index) = previous {
            tracing::debug!(%slot, index, "slot cleared");
        }
        previous
    }

    /// Current slot indices, stale ones included.
    pub fn slots(&self) -> &EquipSlots {
        &self.slots
    }

    pub fn primary_index(&self) -> Option<usize> {
        self.slots.primary
    }

    pub fn secondary_index(&self) -> Option<usize> {
        self.slots.secondary
    }

    pub fn tertiary_index(&self) -> Option<usize> {
        self.slots.tertiary
    }

    /// Equipped primary weapon; `None` if the slot is empty or stale.
    pub fn primary(&self) -> Option<&Weapon> {
        self.resolve(EquipSlot::Primary, self.inventory.weapons())
    }

    /// Equipped secondary weapon; `None` if the slot is empty or stale.
    pub fn secondary(&self) -> Option<&Weapon> {
        self.resolve(EquipSlot::Secondary, self.inventory.weapons())
    }

    /// Equipped quest item; `None` if the slot is empty or stale.
    pub fn tertiary(&self) -> Option<&QuestItem> {
        self.resolve(EquipSlot::Tertiary, self.inventory.quest_items())
    }

    /// Item held by `slot`, viewed as its variant.
    pub fn equipped(&self, slot: EquipSlot) -> Option<ItemRef<'_>> {
        match slot {
            EquipSlot::Primary => self.primary().map(ItemRef::Weapon),
            EquipSlot::Secondary => self.secondary().map(ItemRef::Weapon),
            EquipSlot::Tertiary => self.tertiary().map(ItemRef::QuestItem),
        }
    }

    fn resolve<'a, T: Item>(
        &self,
        slot: EquipSlot,
        collection: &'a ItemCollection<T>,
    ) -> Option<&'a T> {
        let index = self.slots.get(slot)?;
        let item = collection.get(index);
        if item.is_none() {
            tracing::debug!(
                %slot,
                index,
                len = collection.count(),
                "equip slot points past its collection"
            );
        }
        item
    }
}
