//! Composed containers walkthrough.
//!
//! Run with: cargo run --example composed_containers
//!
//! This example demonstrates:
//! - Treating a sequence of optionals as one shape
//! - The derived N-ary family propagating absence
//! - Two distinct combinations over the optional family

use kindred_core::derive::{self, ApBuilder};
use kindred_core::{Combine, CombineK, Compose, Transform};
use kindred_instances::{OptionShape, VecShape};

fn main() {
    println!("=== Composed Containers ===\n");

    // -------------------------------------------------------------------------
    // One shape out of two
    // -------------------------------------------------------------------------
    println!("1. A sequence of optionals is one shape");
    println!("---------------------------------------");

    type VecOfOption = Compose<VecShape, OptionShape>;

    let readings = vec![Some(1), None, Some(3)];
    println!("input:  {:?}", readings);

    let bumped = VecOfOption::map(readings, |x: i32| x + 1);
    println!("mapped: {:?}", bumped);
    println!();

    // -------------------------------------------------------------------------
    // Derived N-ary operations
    // -------------------------------------------------------------------------
    println!("2. N-ary mapping over optionals");
    println!("-------------------------------");

    let all_present =
        derive::map3::<OptionShape, _, _, _, i32, _>(Some(1), Some(2), Some(3), |a, b, c| a + b + c);
    println!("sum of (Some(1), Some(2), Some(3)) = {:?}", all_present);

    let one_absent =
        derive::map3::<OptionShape, _, _, _, i32, _>(Some(1), None::<i32>, Some(3), |a, b, c| a + b + c);
    println!("sum of (Some(1), None,    Some(3)) = {:?}", one_absent);
    println!();

    // -------------------------------------------------------------------------
    // The builder grows one value at a time
    // -------------------------------------------------------------------------
    println!("3. Fluent accumulation");
    println!("----------------------");

    let tupled = ApBuilder::<OptionShape, _>::of(Some(1))
        .and(Some("two"))
        .and(Some(3.0))
        .tupled();
    println!("accumulated tuple: {:?}", tupled);
    println!();

    // -------------------------------------------------------------------------
    // Two combinations, one family
    // -------------------------------------------------------------------------
    println!("4. Choice versus content merge");
    println!("------------------------------");

    let first = OptionShape::combine_k(Some(1), Some(2));
    let merged = Some(1).combine(Some(2));
    println!("first-present of (Some(1), Some(2)) = {:?}", first);
    println!("content-merge of (Some(1), Some(2)) = {:?}", merged);

    println!("\n=== Walkthrough Complete ===");
}
