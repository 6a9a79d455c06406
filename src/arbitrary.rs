//! `proptest` integration (feature `proptest`).
//!
//! Every brand whose base is `Arbitrary` is `Arbitrary` too, generated through
//! [`crate::identity`]. Shrinking follows the base strategy.

use proptest::arbitrary::Arbitrary;
use proptest::strategy::{Map, Strategy};

use crate::brand::Brand;
use crate::brander::identity;

impl<Base, Tag, Field> Arbitrary for Brand<Base, Tag, Field>
where
    Base: Arbitrary,
    Tag: ?Sized,
    Field: ?Sized,
{
    type Parameters = Base::Parameters;
    type Strategy = Map<Base::Strategy, fn(Base) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        Base::arbitrary_with(args).prop_map(identity::<Self> as fn(Base) -> Self)
    }
}
