use std::fmt;

/// Fixed-capacity ring buffer. The backing storage is allocated once, later
/// pushes overwrite the oldest slot in place. Iteration runs oldest to newest.
pub struct CircularQueue<T> {
    buf: Vec<T>,
    head: usize,
    capacity: usize,
}

impl<T: Clone> Clone for CircularQueue<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend(self.iter().cloned());

        Self {
            buf,
            head: 0,
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> CircularQueue<T> {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cap),
            head: 0,
            capacity: cap,
        }
    }

    /// Appends `item` as the newest element, returning the evicted oldest one
    /// when the queue was already full.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }

        if !self.is_full() {
            self.buf.push(item);
            return None;
        }

        let evicted = std::mem::replace(&mut self.buf[self.head], item);
        self.head = (self.head + 1) % self.capacity;

        Some(evicted)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }

    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
        self.head = 0;
    }

    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &'_ T> {
        let (tail, front) = self.buf.split_at(self.head);
        front.iter().chain(tail.iter())
    }

    /// The newest `n` elements (or all of them if fewer), oldest first.
    #[inline]
    pub fn last_n(&self, n: usize) -> impl Iterator<Item = &'_ T> {
        self.iter().skip(self.len().saturating_sub(n))
    }
}
