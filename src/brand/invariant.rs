use core::marker::PhantomData;

/// A zero-sized marker that is invariant in `T`.
///
/// Brands store their tag and field markers through this type. Invariance keeps
/// the compiler from unifying two brands through subtyping (relevant once a tag
/// carries a lifetime), and the `fn` pointer inside the `PhantomData` keeps the
/// markers out of auto traits and drop-check: a brand is `Send`/`Sync` exactly
/// when its base is.
pub struct Invariant<T: ?Sized>(PhantomData<fn(*const T) -> *const T>);

impl<T: ?Sized> Invariant<T> {
    /// Creates a new invariant marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

// Manual impls: derives would demand `T: Clone`, `T: Default`, ... from the tag.
impl<T: ?Sized> Clone for Invariant<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Invariant<T> {}

impl<T: ?Sized> Default for Invariant<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> PartialEq for Invariant<T> {
    #[inline(always)]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for Invariant<T> {}

impl<T: ?Sized> core::fmt::Debug for Invariant<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Invariant")
    }
}

/// A marker type that is invariant in its lifetime parameter `'id`.
///
/// Used as the tag of generative brands (see [`crate::fresh`]): each `'id`
/// is introduced by a higher-ranked closure, so it can never be shrunk or
/// unified with another scope's `'id`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates a new invariant lifetime marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
