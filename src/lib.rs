//! # `branded` - Zero-Cost Nominal Brands
//!
//! Values that share a representation often mean different things: a user id
//! and a post id are both `u64`, a price in cents and a quantity are both
//! integers. `branded` lets the compiler keep them apart without changing how
//! they are stored.
//!
//! ## Architecture
//!
//! Two layers, the first independent of the second:
//!
//! 1. **Type layer** ([`Brand`], [`AnyBrand`], [`BaseOf`]):
//!    - `Brand<Base, Tag, Field>` is `#[repr(transparent)]` over `Base`
//!    - `Tag` and `Field` are phantom markers; they never reach memory
//!    - `AnyBrand` is the upper bound for code generic over brands, and
//!      `BaseOf<B>` projects a brand back to its base
//!
//! 2. **Runtime layer** ([`Brander`], [`identity`], [`make`], [`make_with`]):
//!    - `identity` re-types a base value as a brand, moving it unchanged
//!    - `make` returns the zero-sized identity brander
//!    - `make_with` wraps a validator; its rejections reach the caller as-is
//!    - custom branders implement [`Check`]; `Brander` follows from it
//!
//! On top sit the collision mitigations: [`brand!`] declares nominal tags and
//! [`fresh`] mints a brand unique to one scope.
//!
//! ## Guarantees
//!
//! - **Representation**: a `Brand<Base, ..>` has the size, alignment and bits of
//!   `Base`. Branding moves or reinterprets; it never copies or transforms.
//! - **Explicit promotion**: nothing converts `Base` into a brand implicitly.
//!   A brander call is the only way in.
//! - **No own errors**: the only failure is a validator's rejection, returned
//!   (or unwound) exactly as the validator produced it.
//!
//! Uniqueness of a brand is the caller's job: `Brand<u64, X>` declared twice
//! is one type. Use a nominal tag per concept.
//!
//! ## Example
//!
//! ```rust
//! use branded::{make_with, Brand, Brander};
//!
//! enum Positive {}
//! type PositiveNumber = Brand<i32, Positive>;
//!
//! let brand = make_with::<PositiveNumber, _>(|v: &i32| {
//!     if *v <= 0 {
//!         return Err(format!("Non-positive: {v}"));
//!     }
//!     Ok(())
//! });
//!
//! assert_eq!(*brand.brand(1).unwrap(), 1);
//! assert_eq!(brand.brand(-1).unwrap_err(), "Non-positive: -1");
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `trace!` event for every validated branding attempt.
//! - `proptest`: implement `proptest::arbitrary::Arbitrary` for brands.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod brand;
pub mod brander;
pub mod fresh;
mod macros;

#[cfg(feature = "proptest")]
mod arbitrary;

pub use brand::{AnyBrand, BaseOf, Brand, Invariant, InvariantLifetime, TypeField};
pub use brander::{
    identity, identity_ref, identity_slice, make, make_asserting, make_with, Assertion, Brander,
    Check, Identity, Validated, Validator,
};
pub use fresh::{fresh, Fresh, Unique};

// Compile-time assertions for the zero-cost layout claims.
const _: () = {
    use core::mem;

    enum Probe {}

    // Markers are ZSTs.
    assert!(mem::size_of::<Invariant<str>>() == 0);
    assert!(mem::size_of::<Identity<Brand<u64, Probe>>>() == 0);
    assert!(mem::size_of::<Unique<'static>>() == 0);

    // A brand is its base.
    assert!(mem::size_of::<Brand<u64, Probe>>() == mem::size_of::<u64>());
    assert!(mem::align_of::<Brand<u64, Probe>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<Brand<u8, Probe>>() == mem::size_of::<u8>());
    assert!(mem::align_of::<Brand<u128, str>>() == mem::align_of::<u128>());
    assert!(
        mem::size_of::<Option<Brand<&'static str, Probe>>>() == mem::size_of::<Option<&'static str>>()
    );

    // A validated brander is its validator.
    assert!(
        mem::size_of::<Validated<Brand<u64, Probe>, fn(&u64) -> Result<(), ()>>>()
            == mem::size_of::<fn(&u64) -> Result<(), ()>>()
    );
};
