use crate::offsets::ChunkOffset;

/// Half-open range `[start, end)` of one shell in the flattened offset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShellRange {
    pub start: u32,
    pub end: u32,
}

impl ShellRange {
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// Fold state for splitting distance-sorted offsets into shells.
///
/// The origin always gets a shell of its own. Every other offset lands in the current
/// shell once `threshold` is large enough to cover it; the threshold grows by one at a
/// time and bands that contain no offsets never produce a shell.
struct ShellBuilder {
    threshold: i32,
    threshold_sq: i32,
    current: Vec<ChunkOffset>,
    completed: Vec<Vec<ChunkOffset>>,
}

impl ShellBuilder {
    fn new(start_radius: i32) -> Self {
        ShellBuilder {
            threshold: start_radius,
            threshold_sq: start_radius * start_radius,
            current: Vec::new(),
            completed: Vec::new(),
        }
    }

    fn close_current(&mut self) {
        if !self.current.is_empty() {
            self.completed.push(std::mem::take(&mut self.current));
        }
    }

    fn push(mut self, offset: ChunkOffset) -> Self {
        let dist_sq = offset.dist_sq();

        if offset.is_origin() {
            self.close_current();
            self.completed.push(vec![offset]);
            return self;
        }

        while dist_sq > self.threshold_sq {
            self.close_current();
            self.threshold += 1;
            self.threshold_sq = self.threshold * self.threshold;
        }

        self.current.push(offset);
        self
    }

    fn finish(mut self) -> Vec<Vec<ChunkOffset>> {
        self.close_current();
        self.completed
    }
}

/// Groups offsets into shells. `sorted` must already be in non-decreasing distance order.
pub fn partition_shells(sorted: &[ChunkOffset], start_radius: i32) -> Vec<Vec<ChunkOffset>> {
    sorted
        .iter()
        .copied()
        .fold(ShellBuilder::new(start_radius), ShellBuilder::push)
        .finish()
}

/// Concatenates shells into one table and records where each shell lives in it.
pub fn flatten_shells(shells: Vec<Vec<ChunkOffset>>) -> (Vec<ChunkOffset>, Vec<ShellRange>) {
    let total = shells.iter().map(Vec::len).sum();
    let mut offsets = Vec::with_capacity(total);
    let mut ranges = Vec::with_capacity(shells.len());

    for shell in shells {
        let start = offsets.len() as u32;
        offsets.extend(shell);
        ranges.push(ShellRange {
            start,
            end: offsets.len() as u32,
        });
    }

    (offsets, ranges)
}
