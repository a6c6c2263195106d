//! Equip slots.
//!
//! Slots hold positions into the owning inventory's collections rather than
//! the items themselves. Primary and secondary index into the weapons,
//! tertiary into the quest items.
//!
//! # Stale indices
//!
//! Removing or reordering items does not touch the slots, so a stored index
//! may point past the end of its collection. Readers resolve through
//! [`ItemCollection::get`](crate::ItemCollection::get) and treat such an index
//! as empty.

/// One of the three fixed equip positions.
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
pub enum EquipSlot {
    /// Primary weapon.
    Primary,
    /// Secondary weapon.
    Secondary,
    /// Quest item.
    Tertiary,
}

/// Slot indices; `None` means the slot is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipSlots {
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
    pub tertiary: Option<usize>,
}

impl EquipSlots {
    /// Creates slots with nothing equipped.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing pre-filled slots.
    pub fn builder() -> EquipSlotsBuilder {
        EquipSlotsBuilder::default()
    }

    /// Index held by `slot`, if any.
    pub fn get(&self, slot: EquipSlot) -> Option<usize> {
        match slot {
            EquipSlot::Primary => self.primary,
            EquipSlot::Secondary => self.secondary,
            EquipSlot::Tertiary => self.tertiary,
        }
    }

    /// Points `slot` at `index`, returning the previous index if any.
    pub fn set(&mut self, slot: EquipSlot, index: usize) -> Option<usize> {
        self.slot_mut(slot).replace(index)
    }

    /// Empties `slot`, returning the index it held if any.
    pub fn clear(&mut self, slot: EquipSlot) -> Option<usize> {
        self.slot_mut(slot).take()
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<usize> {
        match slot {
            EquipSlot::Primary => &mut self.primary,
            EquipSlot::Secondary => &mut self.secondary,
            EquipSlot::Tertiary => &mut self.tertiary,
        }
    }
}

/// Builder for constructing pre-filled slots.
#[derive(Default)]
pub struct EquipSlotsBuilder {
    slots: EquipSlots,
}

impl EquipSlotsBuilder {
    #[must_use]
    pub fn primary(mut self, index: usize) -> Self {
        self.slots.primary = Some(index);
        self
    }

    #[must_use]
    pub fn secondary(mut self, index: usize) -> Self {
        self.slots.secondary = Some(index);
        self
    }

    #[must_use]
    pub fn tertiary(mut self, index: usize) -> Self {
        self.slots.tertiary = Some(index);
        self
    }

    #[must_use]
    pub fn build(self) -> EquipSlots {
        self.slots
    }
}
