/// Creates a [`Vector`](crate::collections::contiguous::Vector) from a list of elements or from a
/// single value repeated a number of times.
///
/// # Examples
/// ```
/// # use containers_lib::vector;
/// # use containers_lib::collections::contiguous::Vector;
/// let empty: Vector<u8> = vector![];
/// assert!(empty.is_empty());
///
/// let listed = vector![1, 2, 3];
/// assert_eq!(listed, [1, 2, 3]);
///
/// let repeated = vector!["a"; 3];
/// assert_eq!(repeated, ["a", "a", "a"]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::collections::contiguous::Vector::new()
    };
    ($value:expr; $count:expr) => {
        $crate::collections::contiguous::Vector::from_elem($value, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::collections::contiguous::Vector::from([$($value),+])
    };
}
