//! # Id Allocation
//!
//! The actor does not own a counter of its own: it asks an [`IdAllocator`] for every new id.
//! The default is [`SequentialIds`]; any `FnMut() -> Id` closure works too.
//!
//! An allocator that runs out returns `None`, and the actor rejects the create with
//! [`FrameworkError::IdsExhausted`](crate::FrameworkError::IdsExhausted). An allocator that
//! repeats an id is caught by the actor as well; the existing record is never replaced.

/// Hands out ids for newly created records.
///
/// An allocator is owned by exactly one actor and is only called from its task, so it needs
/// `Send` but no interior synchronization.
pub trait IdAllocator<Id>: Send {
    /// Returns the next id, or `None` once the id space is used up.
    /// Ids must never repeat for the lifetime of the actor.
    fn next_id(&mut self) -> Option<Id>;
}

impl<Id, F> IdAllocator<Id> for F
where
    F: FnMut() -> Id + Send,
{
    fn next_id(&mut self) -> Option<Id> {
        Some(self())
    }
}

/// Monotonic `u32` counter converted into the entity's id type.
///
/// Ids consumed by a failed create are not reused. `u32::MAX` is the last id handed out.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: Option<u32>,
}

impl SequentialIds {
    /// Starts counting at `first`.
    pub fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl<Id: From<u32>> IdAllocator<Id> for SequentialIds {
    fn next_id(&mut self) -> Option<Id> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(Id::from(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_start_at_one() {
        let mut ids = SequentialIds::default();
        let first: Option<u32> = ids.next_id();
        let second: Option<u32> = ids.next_id();
        assert_eq!((first, second), (Some(1), Some(2)));
    }

    #[test]
    fn test_sequential_ids_custom_start() {
        let mut ids = SequentialIds::starting_at(100);
        let id: Option<u64> = ids.next_id();
        assert_eq!(id, Some(100));
    }

    #[test]
    fn test_sequential_ids_run_out_instead_of_wrapping() {
        let mut ids = SequentialIds::starting_at(u32::MAX - 1);
        assert_eq!(IdAllocator::<u32>::next_id(&mut ids), Some(u32::MAX - 1));
        assert_eq!(IdAllocator::<u32>::next_id(&mut ids), Some(u32::MAX));
        assert_eq!(IdAllocator::<u32>::next_id(&mut ids), None);
        assert_eq!(IdAllocator::<u32>::next_id(&mut ids), None);
    }

    #[test]
    fn test_closure_allocator() {
        let mut n = 10u32;
        let mut alloc = move || {
            n += 10;
            n
        };
        assert_eq!(IdAllocator::<u32>::next_id(&mut alloc), Some(20));
        assert_eq!(IdAllocator::<u32>::next_id(&mut alloc), Some(30));
    }
}
