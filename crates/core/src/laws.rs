//! # Law Suite
//!
//! Each capability descriptor carries algebraic laws: universally
//! quantified equalities every instance must satisfy. Nothing enforces them
//! at the type level, and registration cannot detect a violation (the laws
//! are semantic, not structural), so the checkers here run over
//! caller-supplied sample values and report [`CoreError::LawViolation`] with
//! the counterexample. Consumers run them in their test suites against
//! every instance they register, built-in or hand-written.
//!
//! The checks are quantified over whatever samples the caller provides; a
//! pass is evidence, not proof.

use std::fmt;
use std::rc::Rc;

use crate::caps::CombineInstance;
use crate::descriptor::{lifted, Apply, Combine, CombineK, Lifted, Transform};
use crate::error::CoreError;
use crate::shape::Value;

fn violation(capability: &'static str, law: &'static str, details: String) -> CoreError {
    CoreError::LawViolation {
        capability,
        law,
        details,
    }
}

// ============================================================================
// Combine
// ============================================================================

/// Associativity of [`Combine`]: grouping does not matter.
pub fn check_combine_associative<T>(samples: &[(T, T, T)]) -> Result<(), CoreError>
where
    T: Combine + Value + PartialEq + fmt::Debug,
{
    for (a, b, c) in samples {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.clone().combine(b.clone().combine(c.clone()));
        if left != right {
            return Err(violation(
                "Combine",
                "associativity",
                format!(
                    "({:?} . {:?}) . {:?} = {:?}, but {:?} . ({:?} . {:?}) = {:?}",
                    a, b, c, left, a, b, c, right
                ),
            ));
        }
    }
    Ok(())
}

/// Associativity of a [`CombineInstance`] dictionary.
///
/// The dictionary form of [`check_combine_associative`], for instances that
/// were registered rather than implemented as a trait.
pub fn check_combine_dict_associative<T>(
    dict: &CombineInstance<T>,
    samples: &[(T, T, T)],
) -> Result<(), CoreError>
where
    T: Value + PartialEq + fmt::Debug,
{
    for (a, b, c) in samples {
        let left = dict.combine(dict.combine(a.clone(), b.clone()), c.clone());
        let right = dict.combine(a.clone(), dict.combine(b.clone(), c.clone()));
        if left != right {
            return Err(violation(
                "Combine",
                "associativity",
                format!(
                    "({:?} . {:?}) . {:?} = {:?}, but {:?} . ({:?} . {:?}) = {:?}",
                    a, b, c, left, a, b, c, right
                ),
            ));
        }
    }
    Ok(())
}

// ============================================================================
// CombineK
// ============================================================================

/// Associativity of [`CombineK`] on a one-hole shape.
pub fn check_combine_k_associative<S, A>(
    samples: &[(S::Plug<A>, S::Plug<A>, S::Plug<A>)],
) -> Result<(), CoreError>
where
    S: CombineK,
    A: Value,
    S::Plug<A>: PartialEq + fmt::Debug,
{
    for (a, b, c) in samples {
        let left = S::combine_k(S::combine_k(a.clone(), b.clone()), c.clone());
        let right = S::combine_k(a.clone(), S::combine_k(b.clone(), c.clone()));
        if left != right {
            return Err(violation(
                "CombineK",
                "associativity",
                format!("grouping {:?}, {:?}, {:?} gave {:?} versus {:?}", a, b, c, left, right),
            ));
        }
    }
    Ok(())
}

// ============================================================================
// Transform
// ============================================================================

/// Identity law of [`Transform`]: mapping the identity changes nothing.
pub fn check_transform_identity<S, A>(samples: &[S::Plug<A>]) -> Result<(), CoreError>
where
    S: Transform,
    A: Value,
    S::Plug<A>: PartialEq + fmt::Debug,
{
    for fa in samples {
        let mapped = S::map(fa.clone(), |a: A| a);
        if mapped != *fa {
            return Err(violation(
                "Transform",
                "identity",
                format!("map(id) turned {:?} into {:?}", fa, mapped),
            ));
        }
    }
    Ok(())
}

/// Composition law of [`Transform`]: mapping `f` then `g` equals mapping
/// `g` after `f`.
pub fn check_transform_composition<S, A, B, C, F, G>(
    samples: &[S::Plug<A>],
    f: F,
    g: G,
) -> Result<(), CoreError>
where
    S: Transform,
    A: Value,
    B: Value,
    C: Value,
    F: Fn(A) -> B + Clone + 'static,
    G: Fn(B) -> C + Clone + 'static,
    S::Plug<C>: PartialEq + fmt::Debug,
{
    for fa in samples {
        let stepwise = S::map(S::map(fa.clone(), f.clone()), g.clone());
        let fused = {
            let f = f.clone();
            let g = g.clone();
            S::map(fa.clone(), move |a: A| g(f(a)))
        };
        if stepwise != fused {
            return Err(violation(
                "Transform",
                "composition",
                format!("map(f) then map(g) gave {:?}, map(g after f) gave {:?}", stepwise, fused),
            ));
        }
    }
    Ok(())
}

// ============================================================================
// Apply
// ============================================================================

/// Composition law of [`Apply`]: chaining two wrapped applications equals
/// one application of the wrapped composed function.
pub fn check_apply_composition<S, A, B, C>(
    fa: S::Plug<A>,
    fab: S::Plug<Lifted<A, B>>,
    fbc: S::Plug<Lifted<B, C>>,
) -> Result<(), CoreError>
where
    S: Apply,
    A: Value,
    B: Value,
    C: Value,
    S::Plug<C>: PartialEq + fmt::Debug,
{
    let chained = S::ap(fbc.clone(), S::ap(fab.clone(), fa.clone()));

    let composed: S::Plug<Lifted<Lifted<A, B>, Lifted<A, C>>> = S::map(fbc, |g: Lifted<B, C>| {
        lifted(move |f: Lifted<A, B>| {
            let g = Rc::clone(&g);
            let gf: Lifted<A, C> = Rc::new(move |a: A| g(f(a)));
            gf
        })
    });
    let fused = S::ap(S::ap(composed, fab), fa);

    if chained != fused {
        return Err(violation(
            "Apply",
            "composition",
            format!("chained ap gave {:?}, composed ap gave {:?}", chained, fused),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape1;

    #[test]
    fn test_combine_laws_hold_for_builtins() {
        check_combine_associative::<i32>(&[(1, 2, 3), (-5, 5, 0)]).unwrap();
        check_combine_associative::<String>(&[(
            String::from("a"),
            String::from("b"),
            String::from("c"),
        )])
        .unwrap();
        check_combine_associative::<Option<i32>>(&[
            (Some(1), Some(2), Some(3)),
            (Some(1), None, Some(3)),
            (None, None, None),
        ])
        .unwrap();
    }

    #[test]
    fn test_subtraction_dictionary_fails_associativity() {
        let broken = CombineInstance::new(|a: i32, b: i32| a - b);
        let err = check_combine_dict_associative(&broken, &[(1, 2, 3)]).unwrap_err();

        assert!(matches!(
            err,
            CoreError::LawViolation {
                capability: "Combine",
                law: "associativity",
                ..
            }
        ));
    }

    #[test]
    fn test_addition_dictionary_passes() {
        let dict = CombineInstance::<i32>::from_impl();
        check_combine_dict_associative(&dict, &[(1, 2, 3), (0, 0, 0), (-1, 1, -1)]).unwrap();
    }

    // Identity shape for the one-hole laws.
    struct IdShape;

    impl Shape1 for IdShape {
        type Plug<A: Value> = A;
    }

    impl Transform for IdShape {
        fn map<A: Value, B: Value>(fa: A, f: impl Fn(A) -> B + 'static) -> B {
            f(fa)
        }
    }

    impl Apply for IdShape {
        fn ap<A: Value, B: Value>(ff: Lifted<A, B>, fa: A) -> B {
            ff(fa)
        }
    }

    #[test]
    fn test_transform_laws_hold_for_identity_shape() {
        check_transform_identity::<IdShape, i32>(&[1, 2, 3]).unwrap();
        check_transform_composition::<IdShape, i32, i32, String, _, _>(
            &[1, 2, 3],
            |x| x + 1,
            |x| x.to_string(),
        )
        .unwrap();
    }

    #[test]
    fn test_apply_composition_holds_for_identity_shape() {
        check_apply_composition::<IdShape, i32, i32, String>(
            5,
            lifted(|x: i32| x * 2),
            lifted(|x: i32| x.to_string()),
        )
        .unwrap();
    }

    struct RevShape;

    impl Shape1 for RevShape {
        type Plug<A: Value> = Vec<A>;
    }

    impl Transform for RevShape {
        // Reverses while mapping: shape not preserved, identity law broken.
        fn map<A: Value, B: Value>(fa: Vec<A>, f: impl Fn(A) -> B + 'static) -> Vec<B> {
            fa.into_iter().rev().map(f).collect()
        }
    }

    #[test]
    fn test_reversing_map_fails_identity() {
        let err = check_transform_identity::<RevShape, i32>(&[vec![1, 2, 3]]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::LawViolation {
                capability: "Transform",
                law: "identity",
                ..
            }
        ));
    }

    #[test]
    fn test_law_violation_reports_counterexample() {
        let broken = CombineInstance::new(|a: i32, b: i32| a - b);
        let err = check_combine_dict_associative(&broken, &[(10, 4, 2)]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("associativity"));
        assert!(msg.contains("10"));
    }
}
