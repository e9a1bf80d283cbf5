//! Property testing support via proptest.
//!
//! Provides [`Arbitrary`] implementations for [`FieldWidth`] and [`Special`].

use proptest::prelude::*;

use crate::{FieldWidth, Special};

impl Arbitrary for FieldWidth {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop::sample::select(Self::ALL.to_vec()).boxed()
    }
}

impl Arbitrary for Special {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Self::PositiveInfinity),
            Just(Self::NegativeInfinity),
            Just(Self::NaN),
        ]
        .boxed()
    }
}
