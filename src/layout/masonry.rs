//! Masonry placement for variable-height grid cards.
//!
//! Items are placed in order, each into the column whose bottom is
//! currently highest (shortest column), ties going to the leftmost column.

/// Where a single item lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Column index, left to right.
    pub column: usize,
    /// First row of the item.
    pub top: u32,
    /// Height in rows.
    pub height: u32,
}

impl Placement {
    /// Row just past the item.
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// Result of a masonry pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasonryLayout {
    /// Column count actually used (at least one).
    pub columns: usize,
    /// One placement per input height, in input order.
    pub placements: Vec<Placement>,
    /// Bottom of the tallest column, without a trailing gap.
    pub content_height: u32,
}

impl MasonryLayout {
    /// Indices of items intersecting the vertical window `[top, top + height)`.
    pub fn visible(&self, top: u32, height: u32) -> impl Iterator<Item = usize> + '_ {
        let end = top.saturating_add(height);
        self.placements
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.top < end && p.bottom() > top)
            .map(|(i, _)| i)
    }
}

/// Place `heights` into `columns` columns separated vertically by `gap`.
///
/// A column count of zero is treated as one.
pub fn masonry(heights: &[u32], columns: usize, gap: u32) -> MasonryLayout {
    let columns = columns.max(1);
    let mut next_top = vec![0u32; columns];
    let mut placements = Vec::with_capacity(heights.len());

    for &height in heights {
        let column = shortest_column(&next_top);
        let top = next_top[column];
        placements.push(Placement {
            column,
            top,
            height,
        });
        next_top[column] = top + height + gap;
    }

    let content_height = placements.iter().map(Placement::bottom).max().unwrap_or(0);

    MasonryLayout {
        columns,
        placements,
        content_height,
    }
}

fn shortest_column(next_top: &[u32]) -> usize {
    let mut best = 0;
    for (i, &top) in next_top.iter().enumerate() {
        if top < next_top[best] {
            best = i;
        }
    }
    best
}
