//! `Brand` - the type-level layer.
//!
//! A `Brand<Base, Tag, Field>` is a `Base` value that the compiler refuses to
//! confuse with a plain `Base` or with a brand carrying a different `Tag` or
//! `Field`. The markers exist only in the type: `Brand` is
//! `#[repr(transparent)]` over `Base`, so branding and unbranding are free.
//!
//! ## Distinctness
//!
//! Brands with different tags do not unify:
//!
//! ```compile_fail
//! use branded::{make, Brand};
//!
//! enum User {}
//! enum Post {}
//! type UserId = Brand<u32, User>;
//! type PostId = Brand<u32, Post>;
//!
//! fn load_post(_id: PostId) {}
//!
//! let user = make::<UserId>().call(7);
//! load_post(user);
//! ```
//!
//! A bare base value is never promoted implicitly:
//!
//! ```compile_fail
//! use branded::Brand;
//!
//! enum Post {}
//! type PostId = Brand<u32, Post>;
//!
//! fn load_post(_id: PostId) {}
//!
//! load_post(7_u32);
//! ```
//!
//! ## Collisions
//!
//! Identity is purely `(Base, Tag, Field)`. Two aliases built from the same
//! triple are the *same type*:
//!
//! ```rust
//! use branded::{make, Brand};
//!
//! type Meters = Brand<f64, str>;
//! type Seconds = Brand<f64, str>; // same triple: no protection
//!
//! fn wait(_s: Seconds) {}
//! wait(make::<Meters>().call(3.0));
//! ```
//!
//! Pick a nominal tag per concept (an empty `enum`, see [`crate::brand!`]), a
//! different [`Field`](AnyBrand::Field), or a generative brand from
//! [`crate::fresh`].

mod any;
mod invariant;

pub use any::{AnyBrand, BaseOf};
pub(crate) use any::sealed;
pub use invariant::{Invariant, InvariantLifetime};

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

/// The default reserved field of a brand.
///
/// Name a different field marker to split two brands that would otherwise
/// share `(Base, Tag)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeField {}

/// A `Base` value carrying the compile-time brand `Tag` under `Field`.
///
/// Obtain one through a brander ([`crate::identity`], [`crate::make`],
/// [`crate::make_with`]). Read it back with [`Brand::into_base`],
/// [`Brand::as_base`] or plain deref.
///
/// # Example
///
/// ```rust
/// use branded::{make, Brand};
///
/// enum Cents {}
/// type Price = Brand<u64, Cents>;
///
/// let price: Price = make::<Price>().call(1999);
/// assert_eq!(*price, 1999);
/// assert_eq!(price.into_base() + 1, 2000);
/// ```
#[repr(transparent)]
pub struct Brand<Base, Tag: ?Sized, Field: ?Sized = TypeField> {
    base: Base,
    _tag: Invariant<Tag>,
    _field: Invariant<Field>,
}

impl<Base, Tag: ?Sized, Field: ?Sized> Brand<Base, Tag, Field> {
    #[inline(always)]
    pub(crate) const fn from_raw(base: Base) -> Self {
        Self {
            base,
            _tag: Invariant::new(),
            _field: Invariant::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn from_raw_ref(base: &Base) -> &Self {
        // SAFETY: `Brand` is `repr(transparent)` over `Base`; every other field
        // is a 1-aligned ZST. `&Base` and `&Self` therefore share layout and
        // validity, and the returned borrow keeps the input's lifetime.
        unsafe { &*(base as *const Base).cast::<Self>() }
    }

    #[inline(always)]
    pub(crate) fn from_raw_slice(base: &[Base]) -> &[Self] {
        // SAFETY: same layout argument as `from_raw_ref`, applied element-wise;
        // length and lifetime carry over unchanged.
        unsafe { core::slice::from_raw_parts(base.as_ptr().cast::<Self>(), base.len()) }
    }

    /// Strips the brand, returning the base value unchanged.
    #[inline(always)]
    pub fn into_base(self) -> Base {
        self.base
    }

    /// Borrows the base value.
    #[inline(always)]
    pub const fn as_base(&self) -> &Base {
        &self.base
    }
}

impl<Base, Tag: ?Sized, Field: ?Sized> sealed::Sealed for Brand<Base, Tag, Field> {}

impl<Base, Tag: ?Sized, Field: ?Sized> AnyBrand for Brand<Base, Tag, Field> {
    type Base = Base;
    type Tag = Tag;
    type Field = Field;

    #[inline(always)]
    fn from_base(base: Base, _token: sealed::Token) -> Self {
        Self::from_raw(base)
    }

    #[inline(always)]
    fn from_base_ref(base: &Base, _token: sealed::Token) -> &Self {
        Self::from_raw_ref(base)
    }

    #[inline(always)]
    fn from_base_slice(base: &[Base], _token: sealed::Token) -> &[Self] {
        Self::from_raw_slice(base)
    }

    #[inline(always)]
    fn into_base(self) -> Base {
        self.base
    }

    #[inline(always)]
    fn as_base(&self) -> &Base {
        &self.base
    }
}

impl<Base, Tag: ?Sized, Field: ?Sized> Deref for Brand<Base, Tag, Field> {
    type Target = Base;

    #[inline(always)]
    fn deref(&self) -> &Base {
        &self.base
    }
}

impl<Base, Tag: ?Sized, Field: ?Sized> AsRef<Base> for Brand<Base, Tag, Field> {
    #[inline(always)]
    fn as_ref(&self) -> &Base {
        &self.base
    }
}

// `Eq`, `Ord` and `Hash` below all forward to `Base`, which is what `Borrow`
// requires for map lookups by base value.
impl<Base, Tag: ?Sized, Field: ?Sized> Borrow<Base> for Brand<Base, Tag, Field> {
    #[inline(always)]
    fn borrow(&self) -> &Base {
        &self.base
    }
}

// Manual impls below: derives would also bound `Tag` and `Field`, and tags are
// usually uninhabited enums or unsized types that implement nothing.

impl<Base: Clone, Tag: ?Sized, Field: ?Sized> Clone for Brand<Base, Tag, Field> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self::from_raw(self.base.clone())
    }
}

impl<Base: Copy, Tag: ?Sized, Field: ?Sized> Copy for Brand<Base, Tag, Field> {}

impl<Base: PartialEq, Tag: ?Sized, Field: ?Sized> PartialEq for Brand<Base, Tag, Field> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<Base: Eq, Tag: ?Sized, Field: ?Sized> Eq for Brand<Base, Tag, Field> {}

impl<Base: PartialOrd, Tag: ?Sized, Field: ?Sized> PartialOrd for Brand<Base, Tag, Field> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base.partial_cmp(&other.base)
    }
}

impl<Base: Ord, Tag: ?Sized, Field: ?Sized> Ord for Brand<Base, Tag, Field> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.base.cmp(&other.base)
    }
}

impl<Base: Hash, Tag: ?Sized, Field: ?Sized> Hash for Brand<Base, Tag, Field> {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
    }
}

impl<Base: fmt::Debug, Tag: ?Sized, Field: ?Sized> fmt::Debug for Brand<Base, Tag, Field> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt(f)
    }
}

impl<Base: fmt::Display, Tag: ?Sized, Field: ?Sized> fmt::Display for Brand<Base, Tag, Field> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt(f)
    }
}
