use core::fmt;
use core::iter::FusedIterator;

/// Generates a thin iterator over the entry buffer that projects each entry through `$project`.
macro_rules! entry_iterator {
    (
        $(#[$meta:meta])*
        $name:ident<$($lt:lifetime,)? K, V>,
        delegate = $delegate:ty,
        item = $item:ty,
        project = |$entry:pat_param| $project:expr $(,)?
    ) => {
        $(#[$meta])*
        pub struct $name<$($lt,)? K, V> {
            delegate: $delegate,
        }

        impl<$($lt,)? K, V> $name<$($lt,)? K, V> {
            pub(super) fn from_delegate(delegate: $delegate) -> Self {
                Self { delegate }
            }
        }

        impl<$($lt,)? K, V> Iterator for $name<$($lt,)? K, V> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.delegate.next().map(|$entry| $project)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.delegate.size_hint()
            }

            fn count(self) -> usize {
                self.delegate.count()
            }

            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                self.delegate.nth(n).map(|$entry| $project)
            }
        }

        impl<$($lt,)? K, V> DoubleEndedIterator for $name<$($lt,)? K, V> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.delegate.next_back().map(|$entry| $project)
            }
        }

        impl<$($lt,)? K, V> ExactSizeIterator for $name<$($lt,)? K, V> {
            fn len(&self) -> usize {
                self.delegate.len()
            }
        }

        impl<$($lt,)? K, V> FusedIterator for $name<$($lt,)? K, V> {}

        impl<$($lt,)? K: fmt::Debug, V: fmt::Debug> fmt::Debug for $name<$($lt,)? K, V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.delegate.as_slice())
                    .finish()
            }
        }
    };
}

entry_iterator! {
    /// Borrowing iterator over the entries of an
    /// [`AssociativeArray`](crate::AssociativeArray), in storage order.
    Iter<'a, K, V>,
    delegate = core::slice::Iter<'a, (K, V)>,
    item = (&'a K, &'a V),
    project = |(k, v)| (k, v),
}

entry_iterator! {
    /// Iterator over the keys of an [`AssociativeArray`](crate::AssociativeArray).
    Keys<'a, K, V>,
    delegate = core::slice::Iter<'a, (K, V)>,
    item = &'a K,
    project = |(k, _)| k,
}

entry_iterator! {
    /// Iterator over the values of an [`AssociativeArray`](crate::AssociativeArray).
    Values<'a, K, V>,
    delegate = core::slice::Iter<'a, (K, V)>,
    item = &'a V,
    project = |(_, v)| v,
}

entry_iterator! {
    /// Owning iterator over the entries of an [`AssociativeArray`](crate::AssociativeArray).
    IntoIter<K, V>,
    delegate = std::vec::IntoIter<(K, V)>,
    item = (K, V),
    project = |entry| entry,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self::from_delegate(self.delegate.clone())
    }
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self::from_delegate(self.delegate.clone())
    }
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self::from_delegate(self.delegate.clone())
    }
}
