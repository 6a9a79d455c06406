use core::convert::Infallible;
use core::fmt;

use super::{Brander, Check};
use crate::brand::{AnyBrand, BaseOf, Invariant};

/// Decides whether a base value belongs to a brand's domain.
///
/// Implemented for every `Fn(&Base) -> Result<R, E>`. The `Ok` payload is
/// ignored: branding always re-types the input, never a value the validator
/// hands back.
pub trait Validator<Base: ?Sized> {
    /// Rejection reported to the brander's caller, unchanged.
    type Error;

    /// Accepts or rejects `base`.
    fn validate(&self, base: &Base) -> Result<(), Self::Error>;
}

impl<Base: ?Sized, F, R, E> Validator<Base> for F
where
    F: Fn(&Base) -> Result<R, E>,
{
    type Error = E;

    #[inline]
    fn validate(&self, base: &Base) -> Result<(), E> {
        self(base).map(drop)
    }
}

/// A validator that rejects by panicking.
///
/// Built by [`crate::make_asserting`]. The panic is the rejection and unwinds
/// through the brander as raised.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Assertion<F>(F);

impl<F> Assertion<F> {
    /// Wraps `assertion`.
    pub const fn new(assertion: F) -> Self {
        Self(assertion)
    }

    /// Returns the wrapped assertion.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<Base: ?Sized, F: Fn(&Base)> Validator<Base> for Assertion<F> {
    type Error = Infallible;

    #[inline]
    fn validate(&self, base: &Base) -> Result<(), Infallible> {
        (self.0)(base);
        Ok(())
    }
}

impl<F> fmt::Debug for Assertion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Assertion")
            .field(&core::any::type_name::<F>())
            .finish()
    }
}

/// A brander that runs a validator before branding.
///
/// `Validated<B, V>` is `#[repr(transparent)]` over `V`: it *is* the validator,
/// viewed as a [`Brander<B>`]. [`Validated::validator`] hands back the stored
/// value itself, so passing `&f` to [`crate::make_with`] keeps the address of
/// `f` observable.
#[repr(transparent)]
pub struct Validated<B, V> {
    validator: V,
    _brand: Invariant<B>,
}

impl<B, V> Validated<B, V> {
    /// Wraps `validator` as a brander for `B`.
    #[inline(always)]
    pub const fn new(validator: V) -> Self {
        Self {
            validator,
            _brand: Invariant::new(),
        }
    }

    /// Borrows the stored validator.
    #[inline(always)]
    pub const fn validator(&self) -> &V {
        &self.validator
    }

    /// Returns the stored validator.
    #[inline(always)]
    pub fn into_inner(self) -> V {
        self.validator
    }
}

impl<B, V> Validated<B, V>
where
    B: AnyBrand,
    V: Validator<BaseOf<B>, Error = Infallible>,
{
    /// Brands `base` through a validator that cannot return an error.
    ///
    /// Rejection, if any, is the validator's panic.
    #[inline]
    pub fn call(&self, base: BaseOf<B>) -> B {
        match self.brand(base) {
            Ok(branded) => branded,
            Err(never) => match never {},
        }
    }
}

impl<B, V> Check<B> for Validated<B, V>
where
    B: AnyBrand,
    V: Validator<BaseOf<B>>,
{
    type Error = V::Error;

    #[inline]
    fn check(&self, base: &BaseOf<B>) -> Result<(), V::Error> {
        let outcome = self.validator.validate(base);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            brand = core::any::type_name::<B>(),
            outcome = if outcome.is_ok() { "accepted" } else { "rejected" },
            "validated brand"
        );

        outcome
    }
}

impl<B, V: Clone> Clone for Validated<B, V> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self::new(self.validator.clone())
    }
}

impl<B, V: Copy> Copy for Validated<B, V> {}

impl<B, V> fmt::Debug for Validated<B, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validated").finish_non_exhaustive()
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use crate::{make_with, Brand};
    use std::fmt::Debug;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Metadata, Subscriber};

    enum Even {}
    type EvenNumber = Brand<u32, Even>;

    /// Panics if anything ever formats it.
    struct Untouchable;

    impl Debug for Untouchable {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            panic!("rejection was formatted");
        }
    }

    #[derive(Default)]
    struct Outcomes(Vec<String>);

    impl Visit for Outcomes {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "outcome" {
                self.0.push(value.to_owned());
            }
        }

        fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
            if field.name() == "outcome" {
                self.0.push(format!("{value:?}"));
            }
        }
    }

    #[derive(Clone, Default)]
    struct Capture {
        outcomes: Arc<Mutex<Vec<String>>>,
    }

    impl Subscriber for Capture {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _span: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _span: &Id, _values: &Record<'_>) {}

        fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

        fn event(&self, event: &Event<'_>) {
            let mut visitor = Outcomes::default();
            event.record(&mut visitor);
            self.outcomes.lock().unwrap().extend(visitor.0);
        }

        fn enter(&self, _span: &Id) {}

        fn exit(&self, _span: &Id) {}
    }

    #[test]
    fn test_each_check_emits_one_outcome() {
        let capture = Capture::default();
        let brander = make_with::<EvenNumber, _>(|v: &u32| {
            if v % 2 == 0 {
                Ok(())
            } else {
                Err(Untouchable)
            }
        });

        let (accepted, rejected) = tracing::subscriber::with_default(capture.clone(), || {
            (brander.brand(4), brander.brand(5))
        });

        assert!(matches!(accepted, Ok(n) if *n == 4));
        assert!(matches!(rejected, Err(Untouchable)));
        assert_eq!(*capture.outcomes.lock().unwrap(), ["accepted", "rejected"]);
    }
}
