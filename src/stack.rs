use alloc::vec::Vec;

use crate::config::StackConfig;
use crate::error::UStackError;

/// A growable LIFO stack with load-factor driven resizing
///
/// The logical `capacity` is tracked separately from the allocation so that
/// resizes happen only at the documented thresholds: doubling on a push into
/// a full stack, halving on a pop that leaves a large stack less than half
/// occupied.
#[derive(Debug)]
pub struct UStack<T> {
    elements: Vec<T>,
    capacity: usize,
    config: StackConfig,
}

fn reserve_exact<T>(capacity: usize) -> Result<Vec<T>, UStackError> {
    let mut elements = Vec::new();
    elements.try_reserve_exact(capacity).map_err(|err| {
        log::error!("failed to reserve storage for {capacity} elements: {err}");
        UStackError::AllocationFailure {
            requested: capacity,
        }
    })?;
    Ok(elements)
}

fn capacity_overflow() -> UStackError {
    log::error!("stack capacity overflows usize");
    UStackError::AllocationFailure {
        requested: usize::MAX,
    }
}

fn empty_stack(operation: &str) -> UStackError {
    log::debug!("{operation} on empty stack");
    UStackError::EmptyStack
}

impl<T> UStack<T> {
    /// Creates a stack with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`UStack::with_config`].
    pub fn new(capacity_hint: usize) -> Result<Self, UStackError> {
        Self::with_config(capacity_hint, StackConfig::default())
    }

    /// Creates a stack with room for at least `capacity_hint` elements.
    ///
    /// The hint is raised to `config.min_capacity()` if it is smaller.
    ///
    /// # Errors
    ///
    /// Returns `UStackError::InvalidArgument` if `T` is zero-sized.
    /// Returns `UStackError::AllocationFailure` if the storage can not be reserved.
    pub fn with_config(capacity_hint: usize, config: StackConfig) -> Result<Self, UStackError> {
        if core::mem::size_of::<T>() == 0 {
            return Err(UStackError::InvalidArgument {
                parameter: "element_size",
                value: 0,
            });
        }

        let capacity = capacity_hint.max(config.min_capacity());
        let elements = reserve_exact(capacity)?;

        Ok(Self {
            elements,
            capacity,
            config,
        })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    /// Size in bytes of one element.
    #[must_use]
    pub fn element_size(&self) -> usize {
        core::mem::size_of::<T>()
    }

    #[must_use]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Changes made here apply from the next resize or dump on.
    pub fn config_mut(&mut self) -> &mut StackConfig {
        &mut self.config
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Pushes a value, doubling the capacity first if the stack is full.
    ///
    /// # Errors
    ///
    /// Returns `UStackError::AllocationFailure` if the grown storage can not
    /// be reserved. The stack is left unchanged in that case.
    pub fn push(&mut self, value: T) -> Result<(), UStackError> {
        if self.is_full() {
            let grown = self
                .capacity
                .checked_mul(2)
                .ok_or_else(capacity_overflow)?;
            self.relocate(grown)?;
        }

        // SAFETY: the stack has a free slot after the growth above
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Pushes a value without checking for a free slot and without growing.
    ///
    /// Meant for loops where the room was made beforehand with [`UStack::reserve`].
    ///
    /// # Safety
    ///
    /// The caller must ensure `self.len() < self.capacity()`.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        let len = self.elements.len();
        debug_assert!(len < self.capacity, "push_unchecked on a full stack");

        // SAFETY: the allocation holds at least `capacity` slots and `len < capacity`
        unsafe {
            self.elements.as_mut_ptr().add(len).write(value);
            self.elements.set_len(len + 1);
        }
    }

    /// Removes and returns the top element, shrinking the stack if it became sparse.
    ///
    /// A failed shrink is not an error: the larger storage is kept.
    ///
    /// # Errors
    ///
    /// Returns `UStackError::EmptyStack` if the stack is empty.
    pub fn pop(&mut self) -> Result<T, UStackError> {
        let value = self.elements.pop().ok_or_else(|| empty_stack("pop"))?;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Removes and returns the top element with no emptiness check and no shrinking.
    ///
    /// # Safety
    ///
    /// The caller must ensure the stack is not empty.
    pub unsafe fn pop_unchecked(&mut self) -> T {
        debug_assert!(!self.elements.is_empty(), "pop_unchecked on an empty stack");

        // SAFETY: the caller guarantees an element is present
        unsafe { self.elements.pop().unwrap_unchecked() }
    }

    /// Returns the top element.
    ///
    /// # Errors
    ///
    /// Returns `UStackError::EmptyStack` if the stack is empty.
    pub fn peek(&self) -> Result<&T, UStackError> {
        self.elements.last().ok_or_else(|| empty_stack("peek"))
    }

    /// Returns the top element without an emptiness check.
    ///
    /// # Safety
    ///
    /// The caller must ensure the stack is not empty.
    #[must_use]
    pub unsafe fn peek_unchecked(&self) -> &T {
        debug_assert!(!self.elements.is_empty(), "peek_unchecked on an empty stack");

        // SAFETY: the caller guarantees an element is present
        unsafe { self.elements.last().unwrap_unchecked() }
    }

    /// Drops the top element, shrinking the stack like [`UStack::pop`] does.
    ///
    /// # Errors
    ///
    /// Returns `UStackError::EmptyStack` if the stack is empty.
    pub fn discard_top(&mut self) -> Result<(), UStackError> {
        self.elements
            .pop()
            .ok_or_else(|| empty_stack("discard_top"))?;
        self.shrink_if_sparse();
        Ok(())
    }

    /// Drops the top element if there is one. Never reallocates.
    ///
    /// Returns whether an element was dropped.
    pub fn discard_top_no_shrink(&mut self) -> bool {
        self.elements.pop().is_some()
    }

    /// Drops all elements. The capacity is kept.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Makes room for `additional` more elements, so that as many
    /// [`UStack::push_unchecked`] calls are sound.
    ///
    /// The capacity is doubled until it fits, as repeated pushes would do.
    ///
    /// # Errors
    ///
    /// Returns `UStackError::AllocationFailure` if the required capacity
    /// overflows or can not be reserved. The stack is left unchanged in that case.
    pub fn reserve(&mut self, additional: usize) -> Result<(), UStackError> {
        let required = self
            .elements
            .len()
            .checked_add(additional)
            .ok_or_else(capacity_overflow)?;
        if required <= self.capacity {
            return Ok(());
        }

        let mut target = self.capacity;
        while target < required {
            target = target.checked_mul(2).ok_or_else(capacity_overflow)?;
        }
        self.relocate(target)
    }

    fn shrink_if_sparse(&mut self) {
        if self.capacity <= self.config.shrink_threshold()
            || self.elements.len() >= self.capacity / 2
        {
            return;
        }

        let target = (self.capacity / 2).max(self.config.min_capacity());
        if target >= self.capacity {
            return;
        }
        if let Err(err) = self.relocate(target) {
            log::warn!("keeping capacity {} after failed shrink: {err}", self.capacity);
        }
    }

    // The old storage is released only after the new one is reserved.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), UStackError> {
        let mut relocated = reserve_exact(new_capacity)?;
        relocated.append(&mut self.elements);

        log::trace!(
            "resized stack from {} to {new_capacity} slots",
            self.capacity
        );
        self.elements = relocated;
        self.capacity = new_capacity;
        Ok(())
    }
}
