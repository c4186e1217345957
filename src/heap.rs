#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Build,
    Extract,
    Sorted,
}

// Right child only when strictly greater than the left one.
fn larger_child(seq: &[i32], count: usize, root: usize) -> Option<usize> {
    let left = root * 2 + 1;
    if left >= count {
        return None;
    }
    let right = left + 1;
    if right < count && seq[right] > seq[left] {
        Some(right)
    } else {
        Some(left)
    }
}

/// Restores the heap property for the subtree rooted at `root`, assuming
/// both child subtrees are already max-heaps. Only `seq[..count]` is touched.
pub fn sift_down(seq: &mut [i32], count: usize, mut root: usize) {
    debug_assert!(count <= seq.len());

    while let Some(child) = larger_child(seq, count, root).filter(|&c| seq[c] > seq[root]) {
        seq.swap(root, child);
        root = child;
    }
}

/// Turns `seq[..count]` into a max-heap, sifting from the last internal node
/// back to the root.
pub fn build_heap(seq: &mut [i32], count: usize) {
    for root in (0..count / 2).rev() {
        sift_down(seq, count, root);
    }
}

pub fn is_max_heap(seq: &[i32], count: usize) -> bool {
    (1..count.min(seq.len())).all(|child| seq[(child - 1) / 2] >= seq[child])
}

pub fn heap_sort(seq: &mut [i32]) {
    HeapEngine::new(seq).run();
}

/// Heapsort over a borrowed buffer. The active heap is `data[..count]`; the
/// rest holds maxima already in their final positions.
#[derive(Debug)]
pub struct HeapEngine<'a> {
    data: &'a mut [i32],
    count: usize,
    phase: Phase,
}

impl<'a> HeapEngine<'a> {
    pub fn new(data: &'a mut [i32]) -> Self {
        let count = data.len();
        Self {
            data,
            count,
            phase: Phase::Build,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn heap(&self) -> &[i32] {
        &self.data[..self.count]
    }

    pub fn sorted_tail(&self) -> &[i32] {
        &self.data[self.count..]
    }

    /// No-op once past the build phase.
    pub fn build(&mut self) {
        if self.phase != Phase::Build {
            return;
        }
        build_heap(self.data, self.count);
        debug_assert!(is_max_heap(self.heap(), self.count));

        self.phase = if self.count > 1 {
            Phase::Extract
        } else {
            Phase::Sorted
        };
    }

    /// Moves the current maximum to the end of the active region and repairs
    /// the heap. Returns the moved value, or `None` once the buffer is sorted.
    pub fn extract_max(&mut self) -> Option<i32> {
        self.build();
        if self.phase == Phase::Sorted {
            return None;
        }

        let last = self.count - 1;
        self.data.swap(0, last);
        self.count = last;
        sift_down(self.data, self.count, 0);

        if self.count <= 1 {
            self.phase = Phase::Sorted;
        }
        Some(self.data[last])
    }

    pub fn run(mut self) {
        while self.extract_max().is_some() {}
    }
}
