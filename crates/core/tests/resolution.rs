//! Dependent resolution tests.
//!
//! A locally defined optional-like brand exercises the full dependent
//! path: lifting a dictionary over a hole, primitive-over-lift preference,
//! failure chaining, and trace rendering.

use std::sync::Arc;

use kindred_core::caps::{Show, ShowInstance};
use kindred_core::{
    CoreError, InstanceRegistry, LiftDict, ResolutionTrace, Shape1, Value,
};

struct OptShape;

impl Shape1 for OptShape {
    type Plug<A: Value> = Option<A>;
}

impl LiftDict<Show> for OptShape {
    fn lift_dict<A: Value>(inner: Arc<ShowInstance<A>>) -> ShowInstance<Option<A>> {
        ShowInstance::new(move |opt: &Option<A>| match opt {
            Some(a) => format!("Some({})", inner.show(a)),
            None => String::from("None"),
        })
    }
}

fn registry_with_i32_show() -> InstanceRegistry {
    let mut registry = InstanceRegistry::new();
    registry
        .register::<Show, i32>(ShowInstance::from_display())
        .unwrap();
    registry
}

// ============================================================================
// Lifting
// ============================================================================

#[test]
fn resolves_a_lifted_instance_from_the_holes_instance() {
    let registry = registry_with_i32_show();

    let show = registry
        .resolve_nested::<Show, OptShape, i32>()
        .unwrap();

    assert_eq!(show.show(&Some(42)), "Some(42)");
    assert_eq!(show.show(&None), "None");
}

#[test]
fn a_registered_primitive_wins_over_lifting() {
    let mut registry = registry_with_i32_show();
    registry
        .register::<Show, Option<i32>>(ShowInstance::new(|opt: &Option<i32>| match opt {
            Some(v) => format!("just {}", v),
            None => String::from("nothing"),
        }))
        .unwrap();

    let show = registry
        .resolve_nested::<Show, OptShape, i32>()
        .unwrap();
    assert_eq!(show.show(&Some(1)), "just 1");
}

#[test]
fn chains_compose_at_the_call_site() {
    struct SeqShape;

    impl Shape1 for SeqShape {
        type Plug<A: Value> = Vec<A>;
    }

    impl LiftDict<Show> for SeqShape {
        fn lift_dict<A: Value>(inner: Arc<ShowInstance<A>>) -> ShowInstance<Vec<A>> {
            ShowInstance::new(move |items: &Vec<A>| {
                let rendered: Vec<String> = items.iter().map(|a| inner.show(a)).collect();
                format!("[{}]", rendered.join(", "))
            })
        }
    }

    let registry = registry_with_i32_show();

    // Show for Vec<Option<i32>>: the inner level is itself a lift.
    let show = registry
        .resolve_with::<Show, SeqShape, Option<i32>, _>(|r| {
            r.resolve_nested::<Show, OptShape, i32>()
        })
        .unwrap();

    assert_eq!(
        show.show(&vec![Some(1), None, Some(3)]),
        "[Some(1), None, Some(3)]"
    );
}

// ============================================================================
// Failure chaining
// ============================================================================

#[test]
fn inner_failure_is_attached_as_the_cause() {
    #[derive(Clone)]
    struct Opaque;

    let registry = InstanceRegistry::new();
    let err = registry
        .resolve_nested::<Show, OptShape, Opaque>()
        .unwrap_err();

    match &err {
        CoreError::ResolutionFailure {
            capability,
            shape,
            cause,
        } => {
            assert_eq!(*capability, "Show");
            assert!(shape.name().contains("Option"));
            let cause = cause.as_deref().expect("inner failure attached");
            match cause {
                CoreError::ResolutionFailure { shape, cause, .. } => {
                    assert!(shape.name().contains("Opaque"));
                    assert!(cause.is_none());
                }
                other => panic!("unexpected cause: {other}"),
            }
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(err.root_cause().to_string().contains("Opaque"));
}

#[test]
fn failure_chain_renders_as_a_trace() {
    #[derive(Clone)]
    struct Opaque;

    let registry = InstanceRegistry::new();
    let err = registry
        .resolve_nested::<Show, OptShape, Opaque>()
        .unwrap_err();

    let trace = ResolutionTrace::from_error(&err).expect("resolution failures have traces");
    assert_eq!(trace.depth(), 2);

    let rendered = trace.display();
    assert!(rendered.lines().count() == 2);
    assert!(rendered.contains("Option"));
    assert!(rendered.contains("Opaque"));
}
