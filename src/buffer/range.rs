//! Sample index resolution
//!
//! Range-taking operations accept `start`/`end` indices that may be omitted
//! or negative. Negative values count back from the end of the buffer, the
//! same way list slicing works in most scripting languages.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// Resolve one possibly-negative index against `len`
///
/// Negative values become `len + value` (floored at 0); everything is then
/// clamped to `len`.
#[inline]
pub fn resolve_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(len)
    }
}

/// A half-open sample window with optional, possibly negative, bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleRange {
    /// First index; `None` means 0
    pub start: Option<isize>,
    /// One past the last index; `None` means the buffer length
    pub end: Option<isize>,
}

impl SampleRange {
    /// The whole buffer
    pub const FULL: SampleRange = SampleRange {
        start: None,
        end: None,
    };

    /// Window between two indices
    pub fn new(start: isize, end: isize) -> Self {
        SampleRange {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Window from `start` to the end of the buffer
    pub fn from_start(start: isize) -> Self {
        SampleRange {
            start: Some(start),
            end: None,
        }
    }

    /// Window from the beginning of the buffer up to `end`
    pub fn to_end(end: isize) -> Self {
        SampleRange {
            start: None,
            end: Some(end),
        }
    }

    /// Resolve against a buffer of `len` samples
    ///
    /// The result always satisfies `start <= end <= len`. An inverted window
    /// collapses to an empty range at `start`.
    pub fn resolve(&self, len: usize) -> Range<usize> {
        let start = self.start.map_or(0, |s| resolve_index(s, len));
        let end = self.end.map_or(len, |e| resolve_index(e, len));
        start..end.max(start)
    }
}

impl From<RangeFull> for SampleRange {
    fn from(_: RangeFull) -> Self {
        SampleRange::FULL
    }
}

impl From<Range<isize>> for SampleRange {
    fn from(range: Range<isize>) -> Self {
        SampleRange::new(range.start, range.end)
    }
}

impl From<RangeFrom<isize>> for SampleRange {
    fn from(range: RangeFrom<isize>) -> Self {
        SampleRange::from_start(range.start)
    }
}

impl From<RangeTo<isize>> for SampleRange {
    fn from(range: RangeTo<isize>) -> Self {
        SampleRange::to_end(range.end)
    }
}

impl From<(Option<isize>, Option<isize>)> for SampleRange {
    fn from((start, end): (Option<isize>, Option<isize>)) -> Self {
        SampleRange { start, end }
    }
}
