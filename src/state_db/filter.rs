//! Mutation-tolerant iteration over a bucket of states.
//!
//! The registry's secondary indexes are plain `HashSet<SoSerial>`s, so
//! iterating one directly while the caller deletes states out from under it
//! would be at best inconvenient (Rust's borrow checker won't allow a
//! mutable delete during an active iterator borrow) and at worst, in a
//! hand-rolled linked list, a dangling pointer. [`StateFilter`] instead
//! snapshots the bucket's serial numbers up front, in the requested order,
//! and resolves each one against the live registry lazily as it's
//! consumed. Deleting a serial that the filter hasn't yielded yet is simply
//! a miss (skipped) rather than undefined behaviour.

use super::{SoSerial, StateRegistry};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IterationOrder {
    OldestFirst,
    NewestFirst,
}

pub struct StateFilter<'r, T> {
    registry: &'r StateRegistry<T>,
    remaining: std::vec::IntoIter<SoSerial>,
}

impl<'r, T> StateFilter<'r, T> {
    fn new(registry: &'r StateRegistry<T>, mut serials: Vec<SoSerial>, order: IterationOrder) -> Self {
        serials.sort_unstable();
        if order == IterationOrder::NewestFirst {
            serials.reverse();
        }
        StateFilter { registry, remaining: serials.into_iter() }
    }

    /// Snapshot every state belonging to `connection`, in `order`.
    pub fn by_connection(registry: &'r StateRegistry<T>, connection: &str, order: IterationOrder) -> Self {
        let serials = registry.by_connection(connection).map(|(s, _)| s).collect();
        Self::new(registry, serials, order)
    }

    /// Snapshot every state in the registry, in `order`.
    pub fn all(registry: &'r StateRegistry<T>, order: IterationOrder) -> Self {
        let serials = registry.states.keys().copied().collect();
        Self::new(registry, serials, order)
    }
}

impl<'r, T> Iterator for StateFilter<'r, T> {
    type Item = (SoSerial, &'r T);

    fn next(&mut self) -> Option<Self::Item> {
        for serial in self.remaining.by_ref() {
            if let Some(data) = self.registry.get(serial) {
                return Some((serial, data));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_db::IkeSpi;

    #[test]
    fn survives_deletion_of_a_not_yet_yielded_entry() {
        let mut reg: StateRegistry<u32> = StateRegistry::new();
        let pending_a = reg.alloc("c", 1);
        let a = reg.insert(pending_a, IkeSpi([1; 8]));
        let pending_b = reg.alloc("c", 2);
        let b = reg.insert(pending_b, IkeSpi([2; 8]));
        let pending_c = reg.alloc("c", 3);
        let c = reg.insert(pending_c, IkeSpi([3; 8]));

        let mut filter = StateFilter::by_connection(&reg, "c", IterationOrder::OldestFirst);
        let (first, _) = filter.next().unwrap();
        assert_eq!(first, a);
        drop(filter);

        reg.delete(b);

        let remaining: Vec<_> = StateFilter::by_connection(&reg, "c", IterationOrder::OldestFirst)
            .map(|(s, _)| s)
            .collect();
        assert_eq!(remaining, vec![a, c]);
    }

    #[test]
    fn newest_first_reverses_serial_order() {
        let mut reg: StateRegistry<()> = StateRegistry::new();
        let pending_a = reg.alloc("c", ());
        let a = reg.insert(pending_a, IkeSpi([1; 8]));
        let pending_b = reg.alloc("c", ());
        let b = reg.insert(pending_b, IkeSpi([2; 8]));

        let order: Vec<_> = StateFilter::by_connection(&reg, "c", IterationOrder::NewestFirst)
            .map(|(s, _)| s)
            .collect();
        assert_eq!(order, vec![b, a]);
    }
}
