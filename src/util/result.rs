use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps a sizing result, panicking with the error's own message (such as
    /// [`CapacityOverflow`](crate::CapacityOverflow)) instead of a generic unwrap message. Used by
    /// the table's infallible growth paths.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
