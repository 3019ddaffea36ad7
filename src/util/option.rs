use std::hint;

pub(crate) trait OptionExtension<T> {
    /// Unwraps an `Option` that the table's own bookkeeping guarantees to be [`Some`], such as the
    /// bucket found for a key right after growing. Debug builds check it with [`unreachable!`],
    /// release builds use [`unreachable_unchecked`](hint::unreachable_unchecked).
    ///
    /// # Safety
    /// The caller must guarantee that the value is [`Some`].
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!("expected a value to be present"),
            // SAFETY: The caller guarantees this branch is never taken.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
