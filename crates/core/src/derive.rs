//! # Derived Operations
//!
//! Everything in this module is generated mechanically from a capability's
//! minimal operation set; no shape-specific code appears anywhere below.
//! From [`Transform`] alone come [`lift`] and [`fproduct`]. From [`Apply`]
//! comes one binary primitive, [`product`], and every N-ary form
//! (`map2..map4`, `ap2..ap4`, `tupled2..tupled4`, and the [`ApBuilder`]
//! accumulator) is a left fold over it. That is the point of the design:
//! the binary case is written once, higher arities cost nothing to add, and
//! whatever law the binary primitive satisfies, the folds satisfy too. For
//! a shape with a notion of absence, an absent value in any argument
//! position makes the result absent, purely as a consequence of `ap`'s
//! contract.
//!
//! The family stops at arity 4. Rust has no variadic generics, so each
//! arity is a distinct signature; four covers practical call sites, and the
//! builder reaches any arity beyond that by chaining
//! [`and`](ApBuilder::and).
//!
//! Callers name the shape explicitly, since a plugged type does not
//! determine its constructor:
//!
//! ```rust,ignore
//! let doubled = derive::lift::<VecShape, i32, i32, _>(|x| x * 2);
//! assert_eq!(doubled(vec![1, 2]), vec![2, 4]);
//! ```

use std::rc::Rc;

use crate::descriptor::{lifted, Apply, Lifted, Transform};
use crate::shape::Value;

/// Shareable binary function, the wrapped-function form taken by [`ap2`].
pub type Lifted2<A, B, Z> = Rc<dyn Fn(A, B) -> Z>;

/// Shareable ternary function, the wrapped-function form taken by [`ap3`].
pub type Lifted3<A, B, C, Z> = Rc<dyn Fn(A, B, C) -> Z>;

/// Shareable 4-ary function, the wrapped-function form taken by [`ap4`].
pub type Lifted4<A, B, C, D, Z> = Rc<dyn Fn(A, B, C, D) -> Z>;

// ============================================================================
// From Transform
// ============================================================================

/// Lift a plain function to a function between plugged shapes.
///
/// `map` partially applied to `f`: the returned closure may be called any
/// number of times.
pub fn lift<S: Transform, A: Value, B: Value, F>(f: F) -> impl Fn(S::Plug<A>) -> S::Plug<B>
where
    F: Fn(A) -> B + 'static,
{
    let f = Rc::new(f);
    move |fa: S::Plug<A>| {
        let f = Rc::clone(&f);
        S::map(fa, move |a: A| f(a))
    }
}

/// Pair each content value with a value derived from it.
pub fn fproduct<S: Transform, A: Value, B: Value, F>(fa: S::Plug<A>, f: F) -> S::Plug<(A, B)>
where
    F: Fn(&A) -> B + 'static,
{
    S::map(fa, move |a: A| {
        let b = f(&a);
        (a, b)
    })
}

// ============================================================================
// From Apply: the binary primitive
// ============================================================================

/// Pair the contents of two wrapped values. The one binary combinator every
/// N-ary form folds over.
pub fn product<S: Apply, A: Value, B: Value>(fa: S::Plug<A>, fb: S::Plug<B>) -> S::Plug<(A, B)> {
    let pairing: S::Plug<Lifted<B, (A, B)>> =
        S::map(fa, |a: A| lifted(move |b: B| (a.clone(), b)));
    S::ap(pairing, fb)
}

// ============================================================================
// From Apply: the mapN family
// ============================================================================

/// Combine two wrapped values with a binary function.
pub fn map2<S: Apply, A: Value, B: Value, Z: Value, F>(
    fa: S::Plug<A>,
    fb: S::Plug<B>,
    f: F,
) -> S::Plug<Z>
where
    F: Fn(A, B) -> Z + 'static,
{
    S::map(product::<S, A, B>(fa, fb), move |(a, b)| f(a, b))
}

/// Combine three wrapped values with a ternary function.
pub fn map3<S: Apply, A: Value, B: Value, C: Value, Z: Value, F>(
    fa: S::Plug<A>,
    fb: S::Plug<B>,
    fc: S::Plug<C>,
    f: F,
) -> S::Plug<Z>
where
    F: Fn(A, B, C) -> Z + 'static,
{
    let acc = product::<S, (A, B), C>(product::<S, A, B>(fa, fb), fc);
    S::map(acc, move |((a, b), c)| f(a, b, c))
}

/// Combine four wrapped values with a 4-ary function.
pub fn map4<S: Apply, A: Value, B: Value, C: Value, D: Value, Z: Value, F>(
    fa: S::Plug<A>,
    fb: S::Plug<B>,
    fc: S::Plug<C>,
    fd: S::Plug<D>,
    f: F,
) -> S::Plug<Z>
where
    F: Fn(A, B, C, D) -> Z + 'static,
{
    let acc = product::<S, ((A, B), C), D>(
        product::<S, (A, B), C>(product::<S, A, B>(fa, fb), fc),
        fd,
    );
    S::map(acc, move |(((a, b), c), d)| f(a, b, c, d))
}

// ============================================================================
// From Apply: the tupledN family
// ============================================================================

/// [`map2`] specialized to tupling; an alias for [`product`].
pub fn tupled2<S: Apply, A: Value, B: Value>(fa: S::Plug<A>, fb: S::Plug<B>) -> S::Plug<(A, B)> {
    product::<S, A, B>(fa, fb)
}

/// [`map3`] specialized to tupling.
pub fn tupled3<S: Apply, A: Value, B: Value, C: Value>(
    fa: S::Plug<A>,
    fb: S::Plug<B>,
    fc: S::Plug<C>,
) -> S::Plug<(A, B, C)> {
    map3::<S, A, B, C, (A, B, C), _>(fa, fb, fc, |a, b, c| (a, b, c))
}

/// [`map4`] specialized to tupling.
pub fn tupled4<S: Apply, A: Value, B: Value, C: Value, D: Value>(
    fa: S::Plug<A>,
    fb: S::Plug<B>,
    fc: S::Plug<C>,
    fd: S::Plug<D>,
) -> S::Plug<(A, B, C, D)> {
    map4::<S, A, B, C, D, (A, B, C, D), _>(fa, fb, fc, fd, |a, b, c, d| (a, b, c, d))
}

// ============================================================================
// From Apply: the apN family (wrapped functions)
// ============================================================================

/// Apply a wrapped binary function to two wrapped arguments.
///
/// The binary case spells out the fold underlying the whole family: curry
/// the wrapped function, then `ap` one argument at a time, left to right.
pub fn ap2<S: Apply, A: Value, B: Value, Z: Value>(
    ff: S::Plug<Lifted2<A, B, Z>>,
    fa: S::Plug<A>,
    fb: S::Plug<B>,
) -> S::Plug<Z> {
    let curried: S::Plug<Lifted<A, Lifted<B, Z>>> = S::map(ff, |f: Lifted2<A, B, Z>| {
        lifted(move |a: A| {
            let f = Rc::clone(&f);
            let partial: Lifted<B, Z> = Rc::new(move |b: B| f(a.clone(), b));
            partial
        })
    });
    S::ap(S::ap(curried, fa), fb)
}

/// Apply a wrapped ternary function to three wrapped arguments.
pub fn ap3<S: Apply, A: Value, B: Value, C: Value, Z: Value>(
    ff: S::Plug<Lifted3<A, B, C, Z>>,
    fa: S::Plug<A>,
    fb: S::Plug<B>,
    fc: S::Plug<C>,
) -> S::Plug<Z> {
    let acc = product::<S, ((Lifted3<A, B, C, Z>, A), B), C>(
        product::<S, (Lifted3<A, B, C, Z>, A), B>(
            product::<S, Lifted3<A, B, C, Z>, A>(ff, fa),
            fb,
        ),
        fc,
    );
    S::map(acc, |(((f, a), b), c)| f(a, b, c))
}

/// Apply a wrapped 4-ary function to four wrapped arguments.
pub fn ap4<S: Apply, A: Value, B: Value, C: Value, D: Value, Z: Value>(
    ff: S::Plug<Lifted4<A, B, C, D, Z>>,
    fa: S::Plug<A>,
    fb: S::Plug<B>,
    fc: S::Plug<C>,
    fd: S::Plug<D>,
) -> S::Plug<Z> {
    let acc = product::<S, (((Lifted4<A, B, C, D, Z>, A), B), C), D>(
        product::<S, ((Lifted4<A, B, C, D, Z>, A), B), C>(
            product::<S, (Lifted4<A, B, C, D, Z>, A), B>(
                product::<S, Lifted4<A, B, C, D, Z>, A>(ff, fa),
                fb,
            ),
            fc,
        ),
        fd,
    );
    S::map(acc, |((((f, a), b), c), d)| f(a, b, c, d))
}

// ============================================================================
// The fluent accumulator
// ============================================================================

/// Fluent accumulation of wrapped values, one at a time.
///
/// [`and`](Self::and) is the single binary combinator; arity grows by
/// repeated application, accumulating a left-nested tuple, and the
/// finishers expose `map`/`ap`/`tupled` of whatever arity was reached.
///
/// ```rust,ignore
/// let sum = ApBuilder::<OptionShape, _>::of(Some(1))
///     .and(Some(2))
///     .and(Some(3))
///     .map(|((a, b), c)| a + b + c);
/// assert_eq!(sum, Some(6));
/// ```
pub struct ApBuilder<S: Apply, T: Value> {
    acc: S::Plug<T>,
}

impl<S: Apply, T: Value> ApBuilder<S, T> {
    /// Start accumulating from one wrapped value.
    pub fn of(fa: S::Plug<T>) -> Self {
        Self { acc: fa }
    }

    /// Attach one more wrapped value.
    pub fn and<U: Value>(self, fu: S::Plug<U>) -> ApBuilder<S, (T, U)> {
        ApBuilder {
            acc: product::<S, T, U>(self.acc, fu),
        }
    }

    /// Finish by mapping the accumulated tuple.
    pub fn map<Z: Value>(self, f: impl Fn(T) -> Z + 'static) -> S::Plug<Z> {
        S::map(self.acc, f)
    }

    /// Finish by applying a wrapped function to the accumulated tuple.
    pub fn ap<Z: Value>(self, ff: S::Plug<Lifted<T, Z>>) -> S::Plug<Z> {
        S::ap(ff, self.acc)
    }

    /// Finish with the accumulated tuple itself.
    pub fn tupled(self) -> S::Plug<T> {
        self.acc
    }
}
