//! Read-only source of the inventory's weight budget.
//!
//! The budget usually comes from the owning entity's stats and can change
//! between calls (buffs, debuffs), so managers query it on every access and
//! never cache the value.

use std::rc::Rc;

pub trait CapacityOracle {
    /// Maximum total weight the inventory may hold right now.
    fn capacity(&self) -> u32;
}

/// Constant budget, typically built from [`InventoryConfig`](crate::InventoryConfig).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedCapacity(pub u32);

impl CapacityOracle for FixedCapacity {
    fn capacity(&self) -> u32 {
        self.0
    }
}

/// Adapts a closure over the host's stat lookup.
#[derive(Clone, Copy)]
pub struct CapacityFn<F>(pub F);

impl<F> CapacityOracle for CapacityFn<F>
where
    F: Fn() -> u32,
{
    fn capacity(&self) -> u32 {
        (self.0)()
    }
}

impl<F> core::fmt::Debug for CapacityFn<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CapacityFn").finish_non_exhaustive()
    }
}

impl<C: CapacityOracle + ?Sized> CapacityOracle for &C {
    fn capacity(&self) -> u32 {
        (**self).capacity()
    }
}

impl<C: CapacityOracle + ?Sized> CapacityOracle for Box<C> {
    fn capacity(&self) -> u32 {
        (**self).capacity()
    }
}

impl<C: CapacityOracle + ?Sized> CapacityOracle for Rc<C> {
    fn capacity(&self) -> u32 {
        (**self).capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn fixed_capacity_is_constant() {
        assert_eq!(FixedCapacity(50).capacity(), 50);
    }

    #[test]
    fn closures_are_requeried_every_call() {
        let stat = Rc::new(Cell::new(40));
        let source = {
            let stat = Rc::clone(&stat);
            CapacityFn(move || stat.get())
        };

        assert_eq!(source.capacity(), 40);
        stat.set(25);
        assert_eq!(source.capacity(), 25);
    }

    #[test]
    fn boxed_and_shared_sources_delegate() {
        let boxed: Box<dyn CapacityOracle> = Box::new(FixedCapacity(12));
        assert_eq!(boxed.capacity(), 12);

        let shared = Rc::new(FixedCapacity(30));
        assert_eq!(Rc::clone(&shared).capacity(), 30);

        fn read<C: CapacityOracle>(source: C) -> u32 {
            source.capacity()
        }
        assert_eq!(read(&*shared), 30);
    }
}
