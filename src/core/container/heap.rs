/// Ordering key provider for items stored in a [`PriorityHeap`].
pub trait Prioritized {
    type Priority: Ord + Copy;

    fn priority(&self) -> Self::Priority;
}

/// Array-backed binary max-heap.
///
/// This struct provides:
///  - insert and extract-max in O(log n).
///  - an O(n) structural merge that drains another heap into this one.
///
/// Comparisons are strictly "greater than", so items with equal priority
/// never swap places during sifting.
#[derive(Debug, Clone)]
pub struct PriorityHeap<T>
where
    T: Prioritized,
{
    items: Vec<T>,
}

impl<T> Default for PriorityHeap<T>
where
    T: Prioritized,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityHeap<T>
where
    T: Prioritized,
{
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item to the heap.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the highest-priority item, or `None` if the heap
    /// is empty.
    pub fn extract_max(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        // swap_remove moves the last item into the root slot.
        let max = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(max)
    }

    /// Get the highest-priority item without removing it.
    ///
    /// The reference is invalidated by the next mutation.
    pub fn peek_max(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drain every item of `other` into this heap, then restore the heap
    /// property with a bottom-up rebuild.
    ///
    /// The rebuild walks from the last non-leaf index down to the root,
    /// which costs O(n) over the combined size instead of the O(n log n)
    /// of repeated insertion. `other` is left empty.
    pub fn merge(&mut self, other: &mut Self) {
        if other.items.is_empty() {
            return;
        }
        self.items.append(&mut other.items);
        if self.items.len() > 1 {
            for index in (0..=self.items.len() / 2 - 1).rev() {
                self.sift_down(index);
            }
        }
    }

    fn sift_up(&mut self, index: usize) {
        let mut index = index;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index].priority() > self.items[parent].priority() {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, index: usize) {
        let mut index = index;
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < self.items.len()
                && self.items[left].priority() > self.items[largest].priority()
            {
                largest = left;
            }
            if right < self.items.len()
                && self.items[right].priority() > self.items[largest].priority()
            {
                largest = right;
            }

            if largest == index {
                break;
            }
            self.items.swap(index, largest);
            index = largest;
        }
    }

    /// This function is only for testing.
    #[cfg(test)]
    fn check_heap_property(&self) -> bool {
        (1..self.items.len()).all(|index| {
            self.items[index].priority() <= self.items[(index - 1) / 2].priority()
        })
    }
}
