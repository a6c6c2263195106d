//! Category-partitioned item storage.
//!
//! [`Inventory`] owns one [`ItemCollection`] per item variant and derives the
//! carried weight from their contents. It accepts every mutation routed to it;
//! the weight budget is enforced by [`InventoryManager`](crate::InventoryManager).

use crate::collection::ItemCollection;
use crate::item::{Consumable, Item, ItemCategory, QuestItem, Weapon};

/// Routes an item variant to the collection that stores it.
///
/// Implemented for exactly the three variants an [`Inventory`] owns.
pub trait Stored: Item + PartialEq + Sized {
    const CATEGORY: ItemCategory;

    fn collection(inventory: &Inventory) -> &ItemCollection<Self>;

    fn collection_mut(inventory: &mut Inventory) -> &mut ItemCollection<Self>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    weapons: ItemCollection<Weapon>,
    consumables: ItemCollection<Consumable>,
    quest_items: ItemCollection<QuestItem>,
}

impl Inventory {
    /// Creates an inventory with three empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection storing variant `T`.
    pub fn objects<T: Stored>(&self) -> &ItemCollection<T> {
        T::collection(self)
    }

    /// Mutable collection storing variant `T`; no weight checks apply.
    pub fn objects_mut<T: Stored>(&mut self) -> &mut ItemCollection<T> {
        T::collection_mut(self)
    }

    /// Total weight of every stored item, recomputed on each call.
    pub fn weight(&self) -> u64 {
        self.weapons.total_weight()
            + self.consumables.total_weight()
            + self.quest_items.total_weight()
    }

    pub fn weapons(&self) -> &ItemCollection<Weapon> {
        &self.weapons
    }

    pub fn consumables(&self) -> &ItemCollection<Consumable> {
        &self.consumables
    }

    pub fn quest_items(&self) -> &ItemCollection<QuestItem> {
        &self.quest_items
    }

    /// Number of items across all categories.
    pub fn len(&self) -> usize {
        self.weapons.count() + self.consumables.count() + self.quest_items.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Stored for Weapon {
    const CATEGORY: ItemCategory = ItemCategory::Weapon;

    fn collection(inventory: &Inventory) -> &ItemCollection<Self> {
        &inventory.weapons
    }

    fn collection_mut(inventory: &mut Inventory) -> &mut ItemCollection<Self> {
        &mut inventory.weapons
    }
}

impl Stored for Consumable {
    const CATEGORY: ItemCategory = ItemCategory::Consumable;

    fn collection(inventory: &Inventory) -> &ItemCollection<Self> {
        &inventory.consumables
    }

    fn collection_mut(inventory: &mut Inventory) -> &mut ItemCollection<Self> {
        &mut inventory.consumables
    }
}

impl Stored for QuestItem {
    const CATEGORY: ItemCategory = ItemCategory::QuestItem;

    fn collection(inventory: &Inventory) -> &ItemCollection<Self> {
        &inventory.quest_items
    }

    fn collection_mut(inventory: &mut Inventory) -> &mut ItemCollection<Self> {
        &mut inventory.quest_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::WeaponType;

    #[test]
    fn routes_each_variant_to_its_own_collection() {
        let mut inventory = Inventory::new();
        inventory
            .objects_mut::<Weapon>()
            .add(Weapon::new(1, "Axe", 10, WeaponType::Primary));
        inventory
            .objects_mut::<Consumable>()
            .add(Consumable::new(2, "Bread", 1));
        inventory
            .objects_mut::<QuestItem>()
            .add(QuestItem::new(3, "Sealed Letter", 0));

        assert_eq!(inventory.weapons().count(), 1);
        assert_eq!(inventory.consumables().count(), 1);
        assert_eq!(inventory.quest_items().count(), 1);
        assert_eq!(inventory.objects::<Consumable>().get_at(0).unwrap().name(), "Bread");
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn weight_tracks_contents_after_every_mutation() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.weight(), 0);
        assert!(inventory.is_empty());

        inventory
            .objects_mut::<Weapon>()
            .add(Weapon::new(1, "Axe", 10, WeaponType::Primary));
        inventory
            .objects_mut::<Consumable>()
            .add(Consumable::new(2, "Bread", 4));
        assert_eq!(inventory.weight(), 14);

        inventory
            .objects_mut::<Weapon>()
            .replace(0, Weapon::new(5, "Dagger", 3, WeaponType::Secondary))
            .unwrap();
        assert_eq!(inventory.weight(), 7);

        inventory.objects_mut::<Consumable>().remove_at(0).unwrap();
        assert_eq!(inventory.weight(), 3);
    }

    #[test]
    fn weight_is_exact_beyond_u32_range() {
        let mut inventory = Inventory::new();
        inventory
            .objects_mut::<Weapon>()
            .add(Weapon::new(1, "Anchor", u32::MAX, WeaponType::Primary));
        inventory
            .objects_mut::<Consumable>()
            .add(Consumable::new(2, "Bread", 10));

        assert_eq!(inventory.weight(), u64::from(u32::MAX) + 10);
    }

    #[test]
    fn category_constants_match_variants() {
        assert_eq!(Weapon::CATEGORY, ItemCategory::Weapon);
        assert_eq!(Consumable::CATEGORY, ItemCategory::Consumable);
        assert_eq!(QuestItem::CATEGORY, ItemCategory::QuestItem);
    }
}
