use crate::error::UStackError;

pub(crate) const DEFAULT_MIN_CAPACITY: usize = 32;
pub(crate) const DEFAULT_SHRINK_THRESHOLD: usize = 256;
pub(crate) const DEFAULT_DUMP_WINDOW: usize = 8;

/// Resize and diagnostic tunables of a `UStack`.
///
/// Each stack owns its configuration. Changing a value affects the next
/// resize or dump of that stack only; capacity that is already allocated
/// stays as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    min_capacity: usize,
    shrink_threshold: usize,
    dump_window: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            min_capacity: DEFAULT_MIN_CAPACITY,
            shrink_threshold: DEFAULT_SHRINK_THRESHOLD,
            dump_window: DEFAULT_DUMP_WINDOW,
        }
    }
}

fn non_zero(parameter: &'static str, value: usize) -> Result<usize, UStackError> {
    if value == 0 {
        log::debug!("rejected zero value for {parameter}");
        return Err(UStackError::InvalidArgument { parameter, value });
    }
    Ok(value)
}

impl StackConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `UStackError::InvalidArgument` naming the first parameter that is zero.
    pub fn new(
        min_capacity: usize,
        shrink_threshold: usize,
        dump_window: usize,
    ) -> Result<Self, UStackError> {
        Ok(Self {
            min_capacity: non_zero("min_capacity", min_capacity)?,
            shrink_threshold: non_zero("shrink_threshold", shrink_threshold)?,
            dump_window: non_zero("dump_window", dump_window)?,
        })
    }

    /// Floor for the capacity at construction and after shrinking.
    #[must_use]
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// A pop may only shrink a stack whose capacity is above this value.
    #[must_use]
    pub fn shrink_threshold(&self) -> usize {
        self.shrink_threshold
    }

    /// Number of trailing elements rendered by a dump.
    #[must_use]
    pub fn dump_window(&self) -> usize {
        self.dump_window
    }

    /// Sets the capacity floor and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns `UStackError::InvalidArgument` if `new_value` is 0. The
    /// configuration is left unchanged.
    pub fn set_min_capacity(&mut self, new_value: usize) -> Result<usize, UStackError> {
        let value = non_zero("min_capacity", new_value)?;
        Ok(core::mem::replace(&mut self.min_capacity, value))
    }

    /// Sets the shrink threshold and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns `UStackError::InvalidArgument` if `new_value` is 0. The
    /// configuration is left unchanged.
    pub fn set_shrink_threshold(&mut self, new_value: usize) -> Result<usize, UStackError> {
        let value = non_zero("shrink_threshold", new_value)?;
        Ok(core::mem::replace(&mut self.shrink_threshold, value))
    }

    /// Sets the dump window and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns `UStackError::InvalidArgument` if `new_value` is 0. The
    /// configuration is left unchanged.
    pub fn set_dump_window(&mut self, new_value: usize) -> Result<usize, UStackError> {
        let value = non_zero("dump_window", new_value)?;
        Ok(core::mem::replace(&mut self.dump_window, value))
    }
}
