use core::borrow::Borrow;

use crate::error::{Error, Result};

/// Where a probe key landed when scanned against the stored entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Located {
    Null,
    Missing,
    At(usize),
}

impl Located {
    pub(crate) fn into_position(self) -> Result<usize> {
        match self {
            Self::At(position) => Ok(position),
            Self::Missing => Err(Error::KeyNotFound),
            Self::Null => Err(Error::NullKey),
        }
    }
}

/// A key argument accepted by the lookup operations of an
/// [`AssociativeArray`](crate::AssociativeArray).
///
/// Implemented for plain borrowed keys (`&Q`) and for `Option<&Q>`, where `None`
/// stands for the null key. The trait is sealed.
pub trait Lookup<K>: private::Sealed {
    #[doc(hidden)]
    fn locate<V>(self, pairs: &[(K, V)]) -> Located;
}

impl<Q, K> Lookup<K> for &Q
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    fn locate<V>(self, pairs: &[(K, V)]) -> Located {
        pairs
            .iter()
            .position(|(k, _)| k.borrow() == self)
            .map_or(Located::Missing, Located::At)
    }
}

impl<Q, K> Lookup<K> for Option<&Q>
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    fn locate<V>(self, pairs: &[(K, V)]) -> Located {
        match self {
            Some(key) => key.locate(pairs),
            None => Located::Null,
        }
    }
}

mod private {
    pub trait Sealed {}

    impl<Q: ?Sized> Sealed for &Q {}
    impl<Q: ?Sized> Sealed for Option<&Q> {}
}
