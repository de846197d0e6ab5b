//! # The Sequence Shape
//!
//! `Vec<_>` as a one-hole shape. Mapping is element-wise; application
//! pairs every wrapped function with every argument, functions first, so
//! the result length is the product of the input lengths and an empty
//! side empties the result.

use std::sync::Arc;

use kindred_core::caps::{Show, ShowInstance};
use kindred_core::{Apply, CombineK, LiftDict, Lifted, Shape1, Transform, Value};

/// Brand for the one-hole constructor `Vec<_>`.
pub struct VecShape;

impl Shape1 for VecShape {
    type Plug<A: Value> = Vec<A>;
}

impl Transform for VecShape {
    fn map<A: Value, B: Value>(fa: Vec<A>, f: impl Fn(A) -> B + 'static) -> Vec<B> {
        fa.into_iter().map(f).collect()
    }
}

impl Apply for VecShape {
    fn ap<A: Value, B: Value>(ff: Vec<Lifted<A, B>>, fa: Vec<A>) -> Vec<B> {
        ff.into_iter()
            .flat_map(|f| fa.iter().cloned().map(move |a| f(a)))
            .collect()
    }
}

/// Concatenation, independent of the contents.
impl CombineK for VecShape {
    fn combine_k<A: Value>(mut a: Vec<A>, b: Vec<A>) -> Vec<A> {
        a.extend(b);
        a
    }
}

impl LiftDict<Show> for VecShape {
    fn lift_dict<A: Value>(inner: Arc<ShowInstance<A>>) -> ShowInstance<Vec<A>> {
        ShowInstance::new(move |items: &Vec<A>| {
            let rendered: Vec<String> = items.iter().map(|a| inner.show(a)).collect();
            format!("[{}]", rendered.join(", "))
        })
    }
}
