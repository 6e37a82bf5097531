//! Human-readable dump of the top of a stack

use core::fmt;

use crate::stack::UStack;

/// Exposes the in-memory bytes of a value for dumping.
///
/// Implementations return the native-endian representation, as the value
/// sits in the stack's storage.
pub trait RawBytes {
    /// Owned byte buffer holding the representation
    type Bytes: AsRef<[u8]>;

    /// Returns the bytes of `self` as stored in memory.
    fn raw_bytes(&self) -> Self::Bytes;
}

macro_rules! impl_raw_bytes_ne {
    ($($t:ty),* $(,)?) => {
        $(
            impl RawBytes for $t {
                type Bytes = [u8; core::mem::size_of::<$t>()];

                fn raw_bytes(&self) -> Self::Bytes {
                    self.to_ne_bytes()
                }
            }
        )*
    };
}

impl_raw_bytes_ne!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl RawBytes for bool {
    type Bytes = [u8; 1];

    fn raw_bytes(&self) -> Self::Bytes {
        [u8::from(*self)]
    }
}

impl RawBytes for char {
    type Bytes = [u8; 4];

    fn raw_bytes(&self) -> Self::Bytes {
        u32::from(*self).to_ne_bytes()
    }
}

impl<const N: usize> RawBytes for [u8; N] {
    type Bytes = [u8; N];

    fn raw_bytes(&self) -> Self::Bytes {
        *self
    }
}

/// `Display` adapter returned by [`UStack::dump`]
pub struct Dump<'a, T> {
    stack: &'a UStack<T>,
    label: &'a str,
}

impl<T: RawBytes> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.stack.write_dump(f, self.label)
    }
}

impl<T: RawBytes> UStack<T> {
    /// Writes the element size, length, capacity and the last
    /// `config().dump_window()` elements to `sink`:
    ///
    /// ```text
    /// ustack <numbers>:
    /// size_elem = 1, top = 3, capacity = 32
    /// {|a|, |14|, |1e|, END}
    /// ```
    ///
    /// Elements are listed oldest first, each byte in lowercase hex.
    ///
    /// # Errors
    ///
    /// Only errors returned by `sink` are propagated.
    pub fn write_dump<W: fmt::Write + ?Sized>(&self, sink: &mut W, label: &str) -> fmt::Result {
        writeln!(sink, "ustack <{label}>:")?;
        writeln!(
            sink,
            "size_elem = {}, top = {}, capacity = {}",
            self.element_size(),
            self.len(),
            self.capacity()
        )?;

        let elements = self.as_slice();
        let start = elements.len().saturating_sub(self.config().dump_window());

        sink.write_char('{')?;
        for element in &elements[start..] {
            for byte in element.raw_bytes().as_ref() {
                write!(sink, "|{byte:x}")?;
            }
            sink.write_str("|, ")?;
        }
        sink.write_str("END}\n")
    }

    /// Returns an adapter that renders [`UStack::write_dump`] through `Display`.
    #[must_use]
    pub fn dump<'a>(&'a self, label: &'a str) -> Dump<'a, T> {
        Dump { stack: self, label }
    }
}
