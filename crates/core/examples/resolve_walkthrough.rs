//! Resolution walkthrough.
//!
//! Run with: cargo run --example resolve_walkthrough
//!
//! This example demonstrates:
//! - Registering capability dictionaries for concrete types
//! - Resolving them back, including dependent lifting over a hole
//! - What a resolution failure looks like, and its rendered trace

use std::sync::Arc;

use kindred_core::caps::{self, CombineInstance, Show, ShowInstance};
use kindred_core::{InstanceRegistry, LiftDict, ResolutionTrace, Shape1, Value};

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

fn main() {
    println!("=== Capability Resolution ===\n");

    // -------------------------------------------------------------------------
    // Setup: populate once, then read-only
    // -------------------------------------------------------------------------
    println!("1. Registering primitive instances");
    println!("----------------------------------");

    let mut registry = InstanceRegistry::new();
    registry
        .register::<Show, i32>(ShowInstance::from_display())
        .expect("fresh registry");
    registry
        .register::<caps::Combine, i32>(CombineInstance::from_impl())
        .expect("fresh registry");

    for (capability, shape) in registry.registered() {
        println!("registered: {} for {}", capability, shape);
    }
    println!();

    // -------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------
    println!("2. Resolving instances");
    println!("----------------------");

    let show = registry.resolve::<Show, i32>().expect("registered above");
    let combine = registry
        .resolve::<caps::Combine, i32>()
        .expect("registered above");

    println!("show(40)          = {}", show.show(&40));
    println!("combine(40, 2)    = {}", combine.combine(40, 2));
    println!();

    // -------------------------------------------------------------------------
    // Dependent resolution: the optional shape borrows the content's instance
    // -------------------------------------------------------------------------
    println!("3. Dependent resolution");
    println!("-----------------------");

    let show_opt = registry
        .resolve_nested::<Show, OptShape, i32>()
        .expect("lifted from the i32 instance");

    println!("show(Some(7))     = {}", show_opt.show(&Some(7)));
    println!("show(None)        = {}", show_opt.show(&None));
    println!();

    // -------------------------------------------------------------------------
    // Failure: nothing registered for the hole
    // -------------------------------------------------------------------------
    println!("4. Resolution failure");
    println!("---------------------");

    #[derive(Clone)]
    struct Unregistered;

    let err = registry
        .resolve_nested::<Show, OptShape, Unregistered>()
        .expect_err("no instance for the hole");

    println!("error: {}", err);
    if let Some(trace) = ResolutionTrace::from_error(&err) {
        println!("trace:\n{}", trace);
    }

    println!("=== Walkthrough Complete ===");
}
