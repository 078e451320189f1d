/// Builds an [`AssociativeArray`](crate::AssociativeArray) from literal key-value pairs.
///
/// Later pairs overwrite earlier ones with an equal key, keeping the earlier position.
///
/// ```rust
/// use assoc_array::assoc;
///
/// let sut = assoc! { "a" => 1, "b" => 2, "a" => 3 };
/// assert_eq!(sut.to_string(), "{a:3, b:2}");
/// ```
#[macro_export]
macro_rules! assoc {
    () => {
        $crate::AssociativeArray::new()
    };
    ($($k:expr => $v:expr),+ $(,)?) => {
        <$crate::AssociativeArray<_, _> as ::core::iter::FromIterator<_>>::from_iter([$(($k, $v)),+])
    };
}
