//! Contiguous chunking of a series across scan workers.

use std::ops::Range;

/// A contiguous, non-overlapping range of series positions owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Position of this chunk in the partition; results merge in rank order.
    pub rank: usize,
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `len` positions into exactly `workers` chunks.
///
/// Every chunk but the last spans `len / workers` positions; the last one
/// absorbs the remainder. When `len < workers` the leading chunks are empty.
pub fn partition(len: usize, workers: usize) -> Vec<Chunk> {
    assert!(workers >= 1, "workers must be >= 1");
    let chunk_size = len / workers;
    (0..workers)
        .map(|rank| {
            let start = rank * chunk_size;
            let end = if rank == workers - 1 {
                len
            } else {
                start + chunk_size
            };
            Chunk { rank, start, end }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split() {
        let chunks = partition(20, 4);
        let ranges: Vec<_> = chunks.iter().map(Chunk::range).collect();
        assert_eq!(ranges, vec![0..5, 5..10, 10..15, 15..20]);
    }

    #[test]
    fn last_chunk_absorbs_remainder() {
        let chunks = partition(23, 4);
        let ranges: Vec<_> = chunks.iter().map(Chunk::range).collect();
        assert_eq!(ranges, vec![0..5, 5..10, 10..15, 15..23]);
        assert_eq!(chunks[3].len(), 23 - 3 * (23 / 4));
    }

    #[test]
    fn fewer_positions_than_workers() {
        let chunks = partition(3, 4);
        assert_eq!(chunks.len(), 4);
        assert!(chunks[..3].iter().all(Chunk::is_empty));
        assert_eq!(chunks[3].range(), 0..3);
    }

    #[test]
    fn empty_series() {
        let chunks = partition(0, 4);
        assert_eq!(chunks.len(), 4);
        assert!(chunks.iter().all(Chunk::is_empty));
    }

    #[test]
    fn single_worker_covers_everything() {
        assert_eq!(partition(17, 1), vec![Chunk { rank: 0, start: 0, end: 17 }]);
    }

    #[test]
    fn ranks_are_sequential() {
        let ranks: Vec<_> = partition(100, 6).iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "workers must be >= 1")]
    fn rejects_zero_workers() {
        partition(10, 0);
    }
}
