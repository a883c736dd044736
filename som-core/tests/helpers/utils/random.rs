use crate::utils::{Float, Random};
use std::cell::RefCell;

/// A random which returns predefined values in given order.
pub struct FakeRandom {
    ints: RefCell<Vec<i32>>,
    reals: RefCell<Vec<Float>>,
}

impl FakeRandom {
    pub fn new(mut ints: Vec<i32>, mut reals: Vec<Float>) -> Self {
        ints.reverse();
        reals.reverse();

        Self { ints: RefCell::new(ints), reals: RefCell::new(reals) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        self.ints.borrow_mut().pop().expect("no more ints")
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        assert!(min < max);
        self.reals.borrow_mut().pop().expect("no more reals")
    }
}

/// A random which always returns one of the range bounds.
pub struct EchoRandom {
    use_min: bool,
}

impl EchoRandom {
    pub fn new(use_min: bool) -> Self {
        Self { use_min }
    }
}

impl Random for EchoRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if self.use_min { min } else { max }
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if self.use_min { min } else { max }
    }
}
