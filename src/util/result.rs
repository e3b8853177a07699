use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an [`Ok`], or panics with the [`Display`](std::fmt::Display) message of the error
    /// itself. Used where a trait signature can't return a [`Result`], such as the indexing
    /// operators and [`Extend`].
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`], reporting the caller's location.
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
