//! Item value types.
//!
//! # Design: Base + Variant Pattern
//!
//! - [`ItemInfo`] holds the fields every item has (id, name, weight)
//! - [`Weapon`], [`Consumable`] and [`QuestItem`] wrap it with variant data
//! - [`ItemRef`] is the closed union the equip routine matches on
//!
//! Items are authored elsewhere; this crate only stores them.

use core::fmt;

/// Identifier assigned to an item by the host's item definitions.
///
/// Not unique inside an inventory: the same id may be stored more than once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fields shared by every item variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInfo {
    pub id: ItemId,
    pub name: String,
    pub weight: u32,
}

impl ItemInfo {
    /// Creates the shared item fields.
    pub fn new(id: ItemId, name: impl Into<String>, weight: u32) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
        }
    }
}

/// The three fixed item categories an inventory partitions by.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Weapon,
    Consumable,
    QuestItem,
}

/// Which weapon slot a weapon is meant for.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponType {
    #[default]
    Primary,
    Secondary,
}

/// Equippable weapon; `weapon_type` picks the primary or secondary slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub info: ItemInfo,
    pub weapon_type: WeaponType,
}

impl Weapon {
    /// Creates a weapon meant for the slot named by `weapon_type`.
    pub fn new(id: u32, name: impl Into<String>, weight: u32, weapon_type: WeaponType) -> Self {
        Self {
            info: ItemInfo::new(ItemId(id), name, weight),
            weapon_type,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Consumable {
    pub info: ItemInfo,
}

impl Consumable {
    /// Creates a consumable; it can be stored but never equipped.
    pub fn new(id: u32, name: impl Into<String>, weight: u32) -> Self {
        Self {
            info: ItemInfo::new(ItemId(id), name, weight),
        }
    }
}

/// Story item; equippable in the tertiary slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestItem {
    pub info: ItemInfo,
}

impl QuestItem {
    /// Creates a quest item, equippable in the tertiary slot.
    pub fn new(id: u32, name: impl Into<String>, weight: u32) -> Self {
        Self {
            info: ItemInfo::new(ItemId(id), name, weight),
        }
    }
}

/// Borrowed view of an item as one of the closed set of variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemRef<'a> {
    Weapon(&'a Weapon),
    Consumable(&'a Consumable),
    QuestItem(&'a QuestItem),
}

impl ItemRef<'_> {
    /// Category of the viewed variant.
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemRef::Weapon(_) => ItemCategory::Weapon,
            ItemRef::Consumable(_) => ItemCategory::Consumable,
            ItemRef::QuestItem(_) => ItemCategory::QuestItem,
        }
    }
}

/// Capability shared by every storable item: identity and weight.
pub trait Item {
    fn info(&self) -> &ItemInfo;

    /// Views this item as its concrete variant.
    fn as_variant(&self) -> ItemRef<'_>;

    fn id(&self) -> ItemId {
        self.info().id
    }

    fn name(&self) -> &str {
        &self.info().name
    }

    fn weight(&self) -> u32 {
        self.info().weight
    }

    fn category(&self) -> ItemCategory {
        self.as_variant().category()
    }
}

impl Item for Weapon {
    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn as_variant(&self) -> ItemRef<'_> {
        ItemRef::Weapon(self)
    }
}

impl Item for Consumable {
    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn as_variant(&self) -> ItemRef<'_> {
        ItemRef::Consumable(self)
    }
}

impl Item for QuestItem {
    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn as_variant(&self) -> ItemRef<'_> {
        ItemRef::QuestItem(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn accessors_read_through_info() {
        let sword = Weapon::new(7, "Short Sword", 12, WeaponType::Primary);
        assert_eq!(sword.id(), ItemId(7));
        assert_eq!(sword.name(), "Short Sword");
        assert_eq!(sword.weight(), 12);
        assert_eq!(sword.category(), ItemCategory::Weapon);
    }

    #[test]
    fn variant_view_matches_concrete_type() {
        let potion = Consumable::new(1, "Potion", 1);
        let key = QuestItem::new(2, "Crypt Key", 0);
        assert!(matches!(potion.as_variant(), ItemRef::Consumable(_)));
        assert_eq!(key.as_variant().category(), ItemCategory::QuestItem);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!(
            ItemCategory::from_str("Quest_Item").unwrap(),
            ItemCategory::QuestItem
        );
        assert_eq!(ItemCategory::Consumable.to_string(), "consumable");
        assert_eq!(WeaponType::from_str("secondary").unwrap(), WeaponType::Secondary);
    }

    #[test]
    fn item_id_displays_with_hash() {
        assert_eq!(ItemId(42).to_string(), "#42");
    }
}
