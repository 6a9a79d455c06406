//! The `AnyBrand` upper bound and the `BaseOf` projection.

pub(crate) mod sealed {
    /// Restricts `AnyBrand` to this crate's `Brand`.
    pub trait Sealed {}

    /// Proof of crate-internal access.
    ///
    /// Only this crate can name or construct `Token`, so only this crate can
    /// call the raw constructors on [`super::AnyBrand`]. Everyone else goes
    /// through a brander.
    #[derive(Debug, Clone, Copy)]
    pub struct Token;
}

/// The maximally permissive brand: any base, any tag, any field.
///
/// `AnyBrand` is never used as a value. It is the upper bound for code that is
/// generic over brands in general (`identity`, `make`, [`crate::Brander`]), and
/// the carrier of the [`BaseOf`] projection.
///
/// The trait is sealed and implemented only by [`crate::Brand`]. Every
/// implementor is `#[repr(transparent)]` over its base, which is what lets the
/// runtime layer promise that branding never changes representation.
pub trait AnyBrand: sealed::Sealed + Sized {
    /// The type this brand was derived from.
    type Base;
    /// The caller-chosen branding marker.
    type Tag: ?Sized;
    /// The reserved field marker (defaults to [`crate::TypeField`]).
    type Field: ?Sized;

    #[doc(hidden)]
    fn from_base(base: Self::Base, token: sealed::Token) -> Self;

    #[doc(hidden)]
    fn from_base_ref(base: &Self::Base, token: sealed::Token) -> &Self;

    #[doc(hidden)]
    fn from_base_slice(base: &[Self::Base], token: sealed::Token) -> &[Self];

    /// Strips the brand, returning the base value unchanged.
    fn into_base(self) -> Self::Base;

    /// Borrows the base value.
    fn as_base(&self) -> &Self::Base;
}

/// Recovers the base type of a brand.
///
/// Total over every [`AnyBrand`]: `BaseOf<Brand<u64, User>>` is `u64`.
pub type BaseOf<B> = <B as AnyBrand>::Base;
