//! Common error infrastructure for inventory-core.
//!
//! Domain-specific errors ([`CollectionError`](crate::CollectionError),
//! [`InventoryError`](crate::InventoryError)) live beside the operations they
//! guard. This module only holds the shared classification.

/// Severity level of an error, used to pick a handling strategy.
///
/// - **Recoverable**: expected, frequent conditions (the carried load is too
///   heavy right now); the caller may retry after freeing capacity.
/// - **Validation**: the request itself is wrong (bad index, unknown name,
///   unequippable item) and must not be retried unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed once the inventory state changes.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    Validation,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all inventory-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Stable across releases; used for log correlation and in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
