//! FIFO containers and the functions working on them. The functions only ever take
//! an element from the front of a queue and put one at its back, so they work on any
//! container implementing [`Fifo`].

use std::collections::VecDeque;

use crate::error::{Error, Result};

/// First-in first-out container
pub trait Fifo<T> {
    /// Remove the element at the front of the queue
    fn poll(&mut self) -> Option<T>;

    /// Add an element at the back of the queue
    fn add(&mut self, elt: T);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Fifo<T> for VecDeque<T> {
    fn poll(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn add(&mut self, elt: T) {
        self.push_back(elt)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    data: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            data: VecDeque::new(),
        }
    }

    pub fn push(&mut self, elt: T) {
        self.data.push_back(elt)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.data.pop_front()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Queue<T> {
        Queue::new()
    }
}

impl<T> Fifo<T> for Queue<T> {
    fn poll(&mut self) -> Option<T> {
        self.pop()
    }

    fn add(&mut self, elt: T) {
        self.push(elt)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Queue<T> {
        Queue {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Multiply every element of the queue by three, keeping their order. Overflowing
/// values wrap around
pub fn triple_values<Q: Fifo<i32>>(queue: Option<&mut Q>) -> Result<()> {
    let queue = queue.ok_or_else(|| Error::invalid_argument("queue cannot be null"))?;

    let size = queue.len();
    for _ in 0..size {
        if let Some(value) = queue.poll() {
            queue.add(value.wrapping_mul(3));
        }
    }

    log!(queue, "tripled {} values", size);

    Ok(())
}

/// Move the first `k` elements of the queue to its back, keeping the order of all
/// elements. `k` is taken modulo the size of the queue
pub fn rotate_queue_left<T, Q: Fifo<T>>(queue: Option<&mut Q>, k: i32) -> Result<()> {
    let queue = match queue {
        Some(queue) if k >= 0 => queue,
        _ => return Err(Error::invalid_argument("invalid arguments")),
    };

    if queue.is_empty() {
        return Ok(());
    }

    let shift = k as usize % queue.len();
    for _ in 0..shift {
        if let Some(elt) = queue.poll() {
            queue.add(elt);
        }
    }

    log!(queue, "rotated left by {} (asked for {})", shift, k);

    Ok(())
}
