//! # Composition Combinators
//!
//! Two one-hole shapes nest into a new one-hole shape: an optional inside a
//! sequence is itself something with one hole. [`Compose`] is the brand for
//! that nesting, and the impls here derive its capability instances purely
//! from the instances of the two parts. The combinators never unwrap to a
//! bare content value and never branch on the inner shape's discriminant;
//! everything routes through the outer shape's own operations.
//!
//! Instances for a composed shape exist only through these combinators.
//! There is nothing to hand-write: given `F: Transform` and `G: Transform`,
//! `Compose<F, G>: Transform` holds automatically, and likewise for
//! [`Apply`]. Once the parts are resolved, composition cannot fail.
//!
//! Nesting is associative operationally (composing three shapes left-first
//! or right-first maps the same values to the same results). The engine
//! does not prove that; it is a tested law.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::descriptor::{lifted, Apply, Lifted, Transform};
use crate::shape::{Shape1, Value};

/// The nesting `F<G<_>>` of two one-hole shapes, as a one-hole brand.
pub struct Compose<F, G>(PhantomData<fn() -> (F, G)>);

impl<F: Shape1, G: Shape1> Shape1 for Compose<F, G> {
    type Plug<A: Value> = F::Plug<G::Plug<A>>;
}

impl<F: Transform, G: Transform> Transform for Compose<F, G> {
    /// Map on the nested shape: apply the inner transform through the
    /// outer one.
    fn map<A: Value, B: Value>(
        fga: Self::Plug<A>,
        f: impl Fn(A) -> B + 'static,
    ) -> Self::Plug<B> {
        let f = Rc::new(f);
        F::map(fga, move |ga: G::Plug<A>| {
            let f = Rc::clone(&f);
            G::map(ga, move |a: A| f(a))
        })
    }
}

impl<F: Apply, G: Apply> Apply for Compose<F, G> {
    /// Apply on the nested shape: lift the inner `ap` into the outer shape
    /// with `F::map`, then apply it with `F::ap`.
    fn ap<A: Value, B: Value>(
        fgf: Self::Plug<Lifted<A, B>>,
        fga: Self::Plug<A>,
    ) -> Self::Plug<B> {
        let inner_ap: F::Plug<Lifted<G::Plug<A>, G::Plug<B>>> =
            F::map(fgf, |gf: G::Plug<Lifted<A, B>>| {
                lifted(move |ga: G::Plug<A>| G::ap(gf.clone(), ga))
            });
        F::ap(inner_ap, fga)
    }
}
