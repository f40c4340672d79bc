//! A FIFO of post-processing callbacks.

use std::collections::{VecDeque, vec_deque};

pub type Callback<T> = Box<dyn FnOnce(&T)>;

/// Callbacks run once, in registration order, with one shared argument.
pub struct Queue<T> {
    callbacks: VecDeque<Callback<T>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self {
            callbacks: VecDeque::new(),
        }
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnOnce(&T) + 'static,
    {
        self.callbacks.push_back(Box::new(callback));
        self
    }

    /// Runs every queued callback with `value`, leaving the queue empty.
    pub fn invoke(&mut self, value: &T) {
        for callback in self.drain() {
            callback(value);
        }
    }

    /// Removes callbacks front to back as the iterator is consumed.
    pub fn drain(&mut self) -> vec_deque::Drain<'_, Callback<T>> {
        self.callbacks.drain(..)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = Callback<T>;
    type IntoIter = vec_deque::IntoIter<Callback<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.callbacks.into_iter()
    }
}

impl<T> std::fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Queue")
            .field("len", &self.callbacks.len())
            .finish()
    }
}
