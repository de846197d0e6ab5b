//! # The Optional Shape
//!
//! `Option<_>` as a one-hole shape. Mapping touches a present content,
//! application requires both sides present, and absence on either side
//! propagates without any special-casing downstream.
//!
//! Two different combinations live on this family and stay separate:
//! [`CombineK`] on the *shape* is a left-biased first-present choice that
//! never looks at contents, while the content-merging `Combine` on the
//! concrete `Option<T>` lives with the descriptor in the core crate.

use std::sync::Arc;

use kindred_core::caps::{self, CombineInstance, Show, ShowInstance};
use kindred_core::{Apply, CombineK, LiftDict, Lifted, Shape1, Transform, Value};

/// Brand for the one-hole constructor `Option<_>`.
pub struct OptionShape;

impl Shape1 for OptionShape {
    type Plug<A: Value> = Option<A>;
}

impl Transform for OptionShape {
    fn map<A: Value, B: Value>(fa: Option<A>, f: impl Fn(A) -> B + 'static) -> Option<B> {
        fa.map(f)
    }
}

impl Apply for OptionShape {
    fn ap<A: Value, B: Value>(ff: Option<Lifted<A, B>>, fa: Option<A>) -> Option<B> {
        match (ff, fa) {
            (Some(f), Some(a)) => Some(f(a)),
            _ => None,
        }
    }
}

/// First-present choice, independent of the contents.
impl CombineK for OptionShape {
    fn combine_k<A: Value>(a: Option<A>, b: Option<A>) -> Option<A> {
        a.or(b)
    }
}

impl LiftDict<Show> for OptionShape {
    fn lift_dict<A: Value>(inner: Arc<ShowInstance<A>>) -> ShowInstance<Option<A>> {
        ShowInstance::new(move |opt: &Option<A>| match opt {
            Some(a) => format!("Some({})", inner.show(a)),
            None => String::from("None"),
        })
    }
}

/// Content-merging combination, dependent on the content's instance.
impl LiftDict<caps::Combine> for OptionShape {
    fn lift_dict<A: Value>(inner: Arc<CombineInstance<A>>) -> CombineInstance<Option<A>> {
        CombineInstance::new(move |a: Option<A>, b: Option<A>| match (a, b) {
            (Some(x), Some(y)) => Some(inner.combine(x, y)),
            (x, None) => x,
            (None, y) => y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_core::lifted;

    #[test]
    fn test_map_preserves_shape() {
        assert_eq!(OptionShape::map(Some(2), |x: i32| x * 2), Some(4));
        assert_eq!(OptionShape::map(None::<i32>, |x: i32| x * 2), None);
    }

    #[test]
    fn test_ap_requires_both_sides() {
        let f: Lifted<i32, i32> = lifted(|x| x + 1);

        assert_eq!(OptionShape::ap(Some(f.clone()), Some(1)), Some(2));
        assert_eq!(OptionShape::ap(Some(f), None), None);
        assert_eq!(OptionShape::ap(None::<Lifted<i32, i32>>, Some(1)), None);
    }

    #[test]
    fn test_combine_k_is_first_present() {
        assert_eq!(OptionShape::combine_k(Some(1), Some(2)), Some(1));
        assert_eq!(OptionShape::combine_k(None, Some(2)), Some(2));
        assert_eq!(OptionShape::combine_k(Some(1), None), Some(1));
        assert_eq!(OptionShape::combine_k(None::<i32>, None), None);
    }

    #[test]
    fn test_combine_k_and_content_merge_differ() {
        use kindred_core::Combine as _;

        // Same inputs, two capabilities, two answers.
        assert_eq!(OptionShape::combine_k(Some(1), Some(2)), Some(1));
        assert_eq!(Some(1).combine(Some(2)), Some(3));
    }

    #[test]
    fn test_lifted_show_renders_both_cases() {
        let inner = Arc::new(ShowInstance::<i32>::from_display());
        let show = <OptionShape as LiftDict<Show>>::lift_dict(inner);

        assert_eq!(show.show(&Some(7)), "Some(7)");
        assert_eq!(show.show(&None), "None");
    }

    #[test]
    fn test_lifted_combine_merges_contents() {
        let inner = Arc::new(CombineInstance::<i32>::from_impl());
        let combine = <OptionShape as LiftDict<caps::Combine>>::lift_dict(inner);

        assert_eq!(combine.combine(Some(1), Some(2)), Some(3));
        assert_eq!(combine.combine(Some(1), None), Some(1));
        assert_eq!(combine.combine(None, Some(2)), Some(2));
        assert_eq!(combine.combine(None, None), None);
    }
}
