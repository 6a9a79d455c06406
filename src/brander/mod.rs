//! Branders - the runtime layer.
//!
//! A brander promotes a base value into its brand. The type layer already
//! decided what the result looks like in memory (nothing changes), so the
//! only runtime work a brander ever does is run an optional validator before
//! handing the same value back under the branded type.
//!
//! There are two ways to get one:
//!
//! - [`make`] returns [`Identity`], the zero-sized value form of [`identity`].
//!   It accepts every base value.
//! - [`make_with`] (and [`make_asserting`]) wraps a caller-supplied validator
//!   in [`Validated`]. The validator is stored as-is and its error, if any,
//!   reaches the caller untouched.
//!
//! ```rust
//! use branded::{make, make_with, Brand, Brander};
//!
//! enum Positive {}
//! type PositiveNumber = Brand<i64, Positive>;
//!
//! let unchecked = make::<PositiveNumber>();
//! assert_eq!(*unchecked.call(-5), -5);
//!
//! let checked = make_with::<PositiveNumber, _>(|v: &i64| {
//!     if *v <= 0 {
//!         return Err(format!("Non-positive: {v}"));
//!     }
//!     Ok(())
//! });
//! assert_eq!(*checked.brand(1).unwrap(), 1);
//! assert_eq!(checked.brand(-1).unwrap_err(), "Non-positive: -1");
//! ```

mod identity;
mod validated;

pub use identity::Identity;
pub use validated::{Assertion, Validated, Validator};

use crate::brand::{sealed, AnyBrand, BaseOf};

/// Decides whether a base value may carry the brand `B`.
///
/// This is the only part of a brander that can be customised. Implement it and
/// the blanket impl below makes the type a [`Brander<B>`].
pub trait Check<B: AnyBrand> {
    /// Error produced when a base value is rejected.
    type Error;

    /// Accepts or rejects `base`.
    fn check(&self, base: &BaseOf<B>) -> Result<(), Self::Error>;
}

impl<B: AnyBrand, T: Check<B> + ?Sized> Check<B> for &T {
    type Error = T::Error;

    #[inline]
    fn check(&self, base: &BaseOf<B>) -> Result<(), Self::Error> {
        (**self).check(base)
    }
}

/// The contract of anything that can promote `BaseOf<B>` into `B`.
///
/// Every [`Check<B>`] is a `Brander<B>` through a blanket impl, and that impl
/// is the only one there can be: a second impl would either lack the `Check`
/// supertrait or overlap the blanket one. The branding methods therefore
/// always hand back the very value that was checked, re-typed in place.
///
/// ```compile_fail
/// use branded::{identity, BaseOf, Brand, Brander, Check};
///
/// enum Port {}
/// type PortNumber = Brand<u16, Port>;
///
/// struct Swap;
///
/// impl Check<PortNumber> for Swap {
///     type Error = ();
///     fn check(&self, _base: &u16) -> Result<(), ()> {
///         Ok(())
///     }
/// }
///
/// impl Brander<PortNumber> for Swap {
///     fn brand(&self, _base: u16) -> Result<PortNumber, ()> {
///         Ok(identity::<PortNumber>(1))
///     }
/// }
/// ```
pub trait Brander<B: AnyBrand>: Check<B> {
    /// Brands `base`, or returns the rejection from [`Check::check`] as-is.
    fn brand(&self, base: BaseOf<B>) -> Result<B, Self::Error>;

    /// Brands a borrowed base value in place.
    ///
    /// On success the returned reference points at `base` itself.
    fn brand_ref<'a>(&self, base: &'a BaseOf<B>) -> Result<&'a B, Self::Error>;

    /// Brands every element of a slice in place.
    ///
    /// Elements are checked front to back; the first rejection is returned
    /// and nothing is branded.
    fn brand_slice<'a>(&self, base: &'a [BaseOf<B>]) -> Result<&'a [B], Self::Error>;
}

impl<B: AnyBrand, T: Check<B> + ?Sized> Brander<B> for T {
    #[inline]
    fn brand(&self, base: BaseOf<B>) -> Result<B, Self::Error> {
        self.check(&base)?;
        Ok(identity::<B>(base))
    }

    #[inline]
    fn brand_ref<'a>(&self, base: &'a BaseOf<B>) -> Result<&'a B, Self::Error> {
        self.check(base)?;
        Ok(identity_ref::<B>(base))
    }

    #[inline]
    fn brand_slice<'a>(&self, base: &'a [BaseOf<B>]) -> Result<&'a [B], Self::Error> {
        base.iter().try_for_each(|value| self.check(value))?;
        Ok(identity_slice::<B>(base))
    }
}

/// Re-types `base` as the brand `B`.
///
/// The value is moved through unchanged: no copy of owned data, no
/// transformation, no failure.
///
/// ```rust
/// use branded::{identity, Brand};
///
/// enum Email {}
/// type EmailAddress = Brand<String, Email>;
///
/// let raw = String::from("ops@example.com");
/// let heap = raw.as_ptr();
/// let email: EmailAddress = identity(raw);
/// assert_eq!(email.as_ptr(), heap);
/// ```
#[inline(always)]
pub fn identity<B: AnyBrand>(base: BaseOf<B>) -> B {
    B::from_base(base, sealed::Token)
}

/// Re-types a borrowed base value as `&B`, in place.
#[inline(always)]
pub fn identity_ref<B: AnyBrand>(base: &BaseOf<B>) -> &B {
    B::from_base_ref(base, sealed::Token)
}

/// Re-types a slice of base values as a slice of `B`, in place.
#[inline(always)]
pub fn identity_slice<B: AnyBrand>(base: &[BaseOf<B>]) -> &[B] {
    B::from_base_slice(base, sealed::Token)
}

/// Returns the brander that accepts every base value.
///
/// All `Identity<B>` values are interchangeable and zero-sized; calling one is
/// calling [`identity`].
#[inline(always)]
pub const fn make<B: AnyBrand>() -> Identity<B> {
    Identity::new()
}

/// Returns a brander that runs `validator` before branding.
///
/// `validator` is stored unchanged (see [`Validated::validator`]) and is not
/// invoked here; it runs on every [`Check::check`]. Any
/// `Fn(&Base) -> Result<R, E>` qualifies, with `R` discarded: the branded
/// value is always the input.
///
/// `B` comes from a turbofish, or from how the brander is used. Closures need
/// their argument type spelled out.
#[inline(always)]
pub const fn make_with<B, V>(validator: V) -> Validated<B, V>
where
    B: AnyBrand,
    V: Validator<BaseOf<B>>,
{
    Validated::new(validator)
}

/// Returns a brander that runs a panicking assertion before branding.
///
/// Rejection is the assertion's panic, which unwinds through the brander
/// unchanged. The brander itself never returns an error.
///
/// ```rust
/// use branded::{make_asserting, Brand, Brander};
///
/// enum Percent {}
/// type Percentage = Brand<u8, Percent>;
///
/// let percent = make_asserting::<Percentage, _>(|v| assert!(*v <= 100, "out of range: {v}"));
/// assert_eq!(*percent.call(42), 42);
/// ```
#[inline(always)]
pub const fn make_asserting<B, F>(assertion: F) -> Validated<B, Assertion<F>>
where
    B: AnyBrand,
    F: Fn(&BaseOf<B>),
{
    Validated::new(Assertion::new(assertion))
}
