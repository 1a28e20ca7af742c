/// A dynamic circular FIFO. The buffer holds up to `capacity` items and
/// doubles its backing store when full, copying the items into the larger
/// store without disturbing their order.
pub struct Ring<T> {
    /// The number of items that may be queued at once.
    capacity: usize,
    /// The index of the oldest item.
    start: usize,
    /// How many items are queued right now.
    size: usize,
    /// Backing store. Grows lazily up to `capacity` slots; once the ring has
    /// been full, every slot is initialised.
    elements: Vec<T>,
}

impl<T: Clone> Ring<T> {
    /// Creates an empty ring. `capacity` must be strictly positive.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "ring capacity must be strictly positive");
        Ring {
            capacity,
            start: 0,
            size: 0,
            elements: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Enqueues an item at the tail, growing the ring first if it is full.
    /// Amortised O(1).
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity {
            self.grow();
        }
        let index = (self.start + self.size) % self.capacity;
        if index == self.elements.len() {
            self.elements.push(value);
        } else {
            self.elements[index] = value;
        }
        self.size += 1;
    }

    /// Dequeues the oldest item.
    ///
    /// Calling this on an empty ring is a caller bug and panics; it is never
    /// surfaced as a recoverable error.
    pub fn pop_front(&mut self) -> T {
        assert!(self.size > 0, "dequeue from an empty ring");
        let item = self.elements[self.start].clone();
        self.size -= 1;
        self.start = (self.start + 1) % self.capacity;
        item
    }

    /// Doubles the backing store by laying the old slots down twice: the two
    /// copies cover every circular reading of the old buffer, so `start`
    /// remains valid against the doubled capacity.
    fn grow(&mut self) {
        // Only reached when full, so `elements` is fully initialised.
        let mut grown = Vec::with_capacity(self.capacity * 2);
        grown.extend_from_slice(&self.elements);
        grown.extend_from_slice(&self.elements);
        self.elements = grown;
        self.capacity *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order_is_kept_across_growth() {
        let mut ring = Ring::with_capacity(128);
        for i in 0..200 {
            ring.push_back(i);
        }
        assert_eq!(ring.len(), 200);
        assert!(ring.capacity() >= 200);
        for i in 0..200 {
            assert_eq!(ring.pop_front(), i);
        }
        assert!(ring.is_empty());
    }

    #[test]
    fn growth_from_a_wrapped_state_keeps_order() {
        let mut ring = Ring::with_capacity(4);
        for i in 0..4 {
            ring.push_back(i);
        }
        // Advance the start index past zero, then force a grow mid-wrap.
        assert_eq!(ring.pop_front(), 0);
        assert_eq!(ring.pop_front(), 1);
        for i in 4..10 {
            ring.push_back(i);
        }
        for i in 2..10 {
            assert_eq!(ring.pop_front(), i);
        }
    }

    #[test]
    fn interleaved_pushes_and_pops_wrap_cleanly() {
        let mut ring = Ring::with_capacity(3);
        let mut expected = 0;
        for i in 0..30 {
            ring.push_back(i);
            if i % 2 == 1 {
                assert_eq!(ring.pop_front(), expected);
                expected += 1;
            }
        }
        while !ring.is_empty() {
            assert_eq!(ring.pop_front(), expected);
            expected += 1;
        }
        assert_eq!(expected, 30);
    }

    #[test]
    #[should_panic(expected = "empty ring")]
    fn popping_an_empty_ring_panics() {
        let mut ring: Ring<i32> = Ring::with_capacity(2);
        ring.pop_front();
    }

    #[test]
    #[should_panic(expected = "strictly positive")]
    fn zero_capacity_is_rejected() {
        let _ = Ring::<i32>::with_capacity(0);
    }
}
