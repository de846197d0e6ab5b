//! # The Function Shape
//!
//! Functions of one argument, `Arg -> _`, as a one-hole shape. The
//! underlying constructor has two holes; the brand fixes the argument hole
//! as a type parameter, which is how any multi-hole constructor joins the
//! one-hole machinery.
//!
//! Values of this shape are shared closures ([`Rc`]), so a plugged value
//! can sit inside other closures and still be called many times. Mapping is
//! post-composition; application feeds the same argument to both sides.

use std::marker::PhantomData;
use std::rc::Rc;

use kindred_core::{Apply, Lifted, Shape1, Transform, Value};

/// Brand for the one-hole constructor `Arg -> _`, argument hole fixed.
pub struct FuncShape<Arg: Value>(PhantomData<fn() -> Arg>);

impl<Arg: Value> FuncShape<Arg> {
    /// Wrap a closure as a value of this shape.
    pub fn of<A: Value>(f: impl Fn(Arg) -> A + 'static) -> Rc<dyn Fn(Arg) -> A> {
        Rc::new(f)
    }
}

impl<Arg: Value> Shape1 for FuncShape<Arg> {
    type Plug<A: Value> = Rc<dyn Fn(Arg) -> A>;
}

impl<Arg: Value> Transform for FuncShape<Arg> {
    /// Post-composition: run the wrapped function, then `f`.
    fn map<A: Value, B: Value>(
        fa: Rc<dyn Fn(Arg) -> A>,
        f: impl Fn(A) -> B + 'static,
    ) -> Rc<dyn Fn(Arg) -> B> {
        Rc::new(move |arg: Arg| f(fa(arg)))
    }
}

impl<Arg: Value> Apply for FuncShape<Arg> {
    /// Feed the same argument to the wrapped function and the wrapped
    /// value, then apply.
    fn ap<A: Value, B: Value>(
        ff: Rc<dyn Fn(Arg) -> Lifted<A, B>>,
        fa: Rc<dyn Fn(Arg) -> A>,
    ) -> Rc<dyn Fn(Arg) -> B> {
        Rc::new(move |arg: Arg| {
            let f = ff(arg.clone());
            f(fa(arg))
        })
    }
}
