#![cfg(feature = "unstable")]
#![feature(test)]

extern crate test;

use std::collections::VecDeque;

use rand::{rngs::SmallRng, RngCore, SeedableRng};
use ringdeque::CircularDeque;
use test::Bencher;

trait Queue<T> {
    fn new() -> Self;
    fn push_front(&mut self, value: T);
    fn push_back(&mut self, value: T);
    fn pop_front(&mut self) -> Option<T>;
    fn pop_back(&mut self) -> Option<T>;
}

impl<T> Queue<T> for CircularDeque<T> {
    fn new() -> Self {
        CircularDeque::new()
    }
    fn push_front(&mut self, value: T) {
        CircularDeque::push_front(self, value)
    }
    fn push_back(&mut self, value: T) {
        CircularDeque::push_back(self, value)
    }
    fn pop_front(&mut self) -> Option<T> {
        CircularDeque::pop_front(self).ok()
    }
    fn pop_back(&mut self) -> Option<T> {
        CircularDeque::pop_back(self).ok()
    }
}

impl<T> Queue<T> for VecDeque<T> {
    fn new() -> Self {
        VecDeque::new()
    }
    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value)
    }
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value)
    }
    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }
    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }
}

macro_rules! fifo {
    ($fnn:ident, $ty:ty, $n:expr) => {
        #[bench]
        fn $fnn(b: &mut Bencher) {
            b.iter(|| {
                let mut queue = <$ty as Queue<u32>>::new();
                for x in 0..$n {
                    Queue::push_back(&mut queue, x);
                }
                while let Some(x) = Queue::pop_front(&mut queue) {
                    test::black_box(x);
                }
            })
        }
    };
}

macro_rules! random_ends {
    ($fnn:ident, $ty:ty, $n:expr) => {
        #[bench]
        fn $fnn(b: &mut Bencher) {
            let mut rng = SmallRng::seed_from_u64(0x5432_1012_3454_3210);
            b.iter(|| {
                let mut queue = <$ty as Queue<u32>>::new();
                for _ in 0..$n {
                    let x = rng.next_u32();
                    match x % 4 {
                        0 => Queue::push_front(&mut queue, x),
                        1 => Queue::push_back(&mut queue, x),
                        2 => {
                            test::black_box(Queue::pop_front(&mut queue));
                        }
                        _ => {
                            test::black_box(Queue::pop_back(&mut queue));
                        }
                    }
                }
            })
        }
    };
}

fifo!(fifo_circular_deque_1000, CircularDeque<u32>, 1000);
fifo!(fifo_vec_deque_1000, VecDeque<u32>, 1000);
random_ends!(random_ends_circular_deque_1000, CircularDeque<u32>, 1000);
random_ends!(random_ends_vec_deque_1000, VecDeque<u32>, 1000);

#[bench]
fn sliding_window_max(b: &mut Bencher) {
    const WINDOW: usize = 16;
    let mut rng = SmallRng::seed_from_u64(0x5432_1012_3454_3210);
    let input: Vec<u32> = (0..1000).map(|_| rng.next_u32()).collect();

    b.iter(|| {
        let mut window = CircularDeque::<usize>::new();
        for (i, &x) in input.iter().enumerate() {
            while matches!(window.back(), Ok(&j) if input[j] <= x) {
                let _ = window.pop_back();
            }
            window.push_back(i);
            if matches!(window.front(), Ok(&j) if j + WINDOW <= i) {
                let _ = window.pop_front();
            }
            test::black_box(window.front().ok());
        }
    })
}

#[bench]
fn concat_back_batches(b: &mut Bencher) {
    let batch: CircularDeque<u32> = (0..64).collect();
    b.iter(|| {
        let mut deque = CircularDeque::new();
        for _ in 0..64 {
            deque.concat_back(&batch);
        }
        test::black_box(deque.len())
    })
}
