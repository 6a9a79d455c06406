//! Generative brands.
//!
//! [`fresh`] opens a scope with a brand nobody else can name. The tag is
//! [`Unique<'id>`], and `'id` is introduced by a higher-ranked closure, so two
//! scopes never share a brand even when they are opened from the same line of
//! code with the same base type.
//!
//! Values cannot be mixed across scopes:
//!
//! ```compile_fail
//! use branded::fresh;
//!
//! fresh::<u32, _, _>(|outer| {
//!     let a = outer.call(1);
//!     fresh::<u32, _, _>(|inner| {
//!         let mut same_scope = vec![inner.call(2)];
//!         same_scope.push(a);
//!     });
//! });
//! ```
//!
//! and cannot leave their scope while still branded:
//!
//! ```compile_fail
//! use branded::fresh;
//!
//! let escaped = fresh::<u32, _, _>(|scope| scope.call(1));
//! ```

use crate::brand::{Brand, InvariantLifetime};
use crate::brander::Identity;

/// The tag of a generative brand.
///
/// Zero-sized and invariant in `'id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unique<'id>(InvariantLifetime<'id>);

/// A `Base` branded for the scope `'id`.
pub type Fresh<'id, Base> = Brand<Base, Unique<'id>>;

/// Runs `f` with the identity brander of a brand unique to this call.
///
/// Everything branded inside the scope shares the brand; nothing outside it
/// can. Unbrand with [`Brand::into_base`] to return values.
///
/// # Example
///
/// ```rust
/// use branded::fresh;
///
/// let total = fresh::<u64, _, _>(|scope| {
///     let a = scope.call(20);
///     let b = scope.call(22);
///     let both = [a, b];
///     both.iter().map(|v| **v).sum::<u64>()
/// });
/// assert_eq!(total, 42);
/// ```
#[inline(always)]
pub fn fresh<Base, R, F>(f: F) -> R
where
    F: for<'id> FnOnce(Identity<Fresh<'id, Base>>) -> R,
{
    f(Identity::new())
}
