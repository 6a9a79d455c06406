use core::convert::Infallible;
use core::fmt;

use super::{identity, identity_ref, identity_slice, Check};
use crate::brand::{AnyBrand, BaseOf, Invariant};

/// The brander that accepts every base value.
///
/// `Identity<B>` is zero-sized and carries nothing but `B`; every instance is
/// equal to every other, so "the identity brander for `B`" is a single value.
/// [`Identity::call`] is [`identity`].
#[repr(transparent)]
pub struct Identity<B>(Invariant<B>);

impl<B: AnyBrand> Identity<B> {
    /// Creates the identity brander for `B`.
    #[inline(always)]
    pub const fn new() -> Self {
        Self(Invariant::new())
    }

    /// Brands `base`. Cannot fail.
    #[inline(always)]
    pub fn call(&self, base: BaseOf<B>) -> B {
        identity::<B>(base)
    }

    /// Brands a borrowed base value in place.
    #[inline(always)]
    pub fn call_ref<'a>(&self, base: &'a BaseOf<B>) -> &'a B {
        identity_ref::<B>(base)
    }

    /// Brands a slice of base values in place.
    #[inline(always)]
    pub fn call_slice<'a>(&self, base: &'a [BaseOf<B>]) -> &'a [B] {
        identity_slice::<B>(base)
    }
}

impl<B: AnyBrand> Check<B> for Identity<B> {
    type Error = Infallible;

    #[inline(always)]
    fn check(&self, _base: &BaseOf<B>) -> Result<(), Infallible> {
        Ok(())
    }
}

impl<B> Clone for Identity<B> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for Identity<B> {}

impl<B: AnyBrand> Default for Identity<B> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<B> PartialEq for Identity<B> {
    #[inline(always)]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<B> Eq for Identity<B> {}

impl<B> fmt::Debug for Identity<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}
