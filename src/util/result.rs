use std::error::Error;

/// Turns the `Result` of a `try_` method into the value returned by its panicking counterpart.
pub(crate) trait ResultExtension<T, E: Error> {
    /// Returns the contained value, or panics with the [`Display`](std::fmt::Display) message of
    /// the error, reported at the location of the caller (see [`track_caller`]).
    ///
    /// [`track_caller`]: https://doc.rust-lang.org/reference/attributes/codegen.html#the-track_caller-attribute
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
