/// Inventory configuration and tunable defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventoryConfig {
    /// Weight budget used when the host has no stat source of its own.
    pub base_capacity: u32,
}

impl InventoryConfig {
    pub const DEFAULT_BASE_CAPACITY: u32 = 50;

    pub fn new() -> Self {
        Self {
            base_capacity: Self::DEFAULT_BASE_CAPACITY,
        }
    }

    pub fn with_base_capacity(base_capacity: u32) -> Self {
        Self { base_capacity }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new()
    }
}
