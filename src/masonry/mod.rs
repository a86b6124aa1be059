//! Masonry layout: responsive column counts and round-robin column buckets
//!
//! Items are assigned by position, not by rendered height: item `i` goes to
//! column `i mod K`. Columns can therefore end up visibly uneven when
//! thumbnails have very different aspect ratios.

mod grid;
mod viewport;

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use thiserror::Error;

pub use grid::{GridView, MasonryGrid, Phase};
pub use viewport::{ResizeSubscription, Viewport};

const ONE: NonZeroUsize = match NonZeroUsize::new(1) {
    Some(n) => n,
    None => unreachable!(),
};
const TWO: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(n) => n,
    None => unreachable!(),
};
const THREE: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Breakpoints must satisfy 0 < small < large, got small={small} large={large}")]
pub struct InvalidBreakpoints {
    pub small: u32,
    pub large: u32,
}

/// Viewport widths (in CSS pixels) at which the column count steps up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Two columns from this width
    pub small: u32,
    /// Three columns from this width
    pub large: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small: 640,
            large: 1024,
        }
    }
}

/// One step of the breakpoint function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub min_width: u32,
    /// Exclusive upper bound, `None` for the widest tier
    pub max_width: Option<u32>,
    pub columns: NonZeroUsize,
}

impl Breakpoints {
    pub fn new(small: u32, large: u32) -> Result<Self, InvalidBreakpoints> {
        let bp = Self { small, large };
        bp.check()?;
        Ok(bp)
    }

    pub fn check(&self) -> Result<(), InvalidBreakpoints> {
        if self.small == 0 || self.small >= self.large {
            return Err(InvalidBreakpoints {
                small: self.small,
                large: self.large,
            });
        }
        Ok(())
    }

    pub fn column_count_for(&self, viewport_width: u32) -> NonZeroUsize {
        if viewport_width < self.small {
            ONE
        } else if viewport_width < self.large {
            TWO
        } else {
            THREE
        }
    }

    /// All tiers, narrowest first
    pub fn tiers(&self) -> [Tier; 3] {
        [
            Tier {
                min_width: 0,
                max_width: Some(self.small),
                columns: ONE,
            },
            Tier {
                min_width: self.small,
                max_width: Some(self.large),
                columns: TWO,
            },
            Tier {
                min_width: self.large,
                max_width: None,
                columns: THREE,
            },
        ]
    }
}

/// Column count for a viewport width with the default breakpoints
pub fn column_count_for(viewport_width: u32) -> NonZeroUsize {
    Breakpoints::default().column_count_for(viewport_width)
}

/// Partition `items` into exactly `columns` buckets, round-robin by position
pub fn distribute<T: Clone>(items: &[T], columns: NonZeroUsize) -> Vec<Vec<T>> {
    let k = columns.get();
    let mut buckets: Vec<Vec<T>> = (0..k)
        .map(|c| Vec::with_capacity(items.len() / k + usize::from(c < items.len() % k)))
        .collect();

    for (i, item) in items.iter().enumerate() {
        buckets[i % k].push(item.clone());
    }

    buckets
}
