//! Where ratings land on the head/heart grid
//!
//! - Hot zone: the most populated (head, heart) cell
//! - Void zone: quadrants nobody has rated into
//! - Taste grid: 5x5 cell counts for the heatmap

use hnh_common::{MediaEntry, Rating};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Ratings at or above this value are "high"; at or below 2 are "low".
///
/// Literal on the 1-5 scale regardless of the configured rating ceiling.
const HIGH_FROM: Rating = 3;

/// Side length of the taste grid (ratings 1..=5)
pub const GRID_SIZE: usize = 5;

/// A single (head, heart) rating pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RatingCell {
    pub head: Rating,
    pub heart: Rating,
}

impl RatingCell {
    /// Cell an entry falls into (integer ratings are their own bucket)
    pub fn of(entry: &MediaEntry) -> Self {
        Self {
            head: entry.head_rating,
            heart: entry.heart_rating,
        }
    }
}

impl fmt::Display for RatingCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Head {} / Heart {}", self.head, self.heart)
    }
}

/// Most populated cell and its entry count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HotZone {
    pub cell: RatingCell,
    pub count: usize,
}

impl fmt::Display for HotZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cell.fmt(f)
    }
}

/// Find the cell with the most entries
///
/// Ties go to the cell first encountered in input order, so the result is
/// stable for a given entry ordering. Returns `None` for empty input.
pub fn hot_zone(entries: &[MediaEntry]) -> Option<HotZone> {
    let mut order: Vec<RatingCell> = Vec::new();
    let mut counts: HashMap<RatingCell, usize> = HashMap::new();

    for entry in entries {
        let cell = RatingCell::of(entry);
        let count = counts.entry(cell).or_insert(0);
        if *count == 0 {
            order.push(cell);
        }
        *count += 1;
    }

    let mut best: Option<HotZone> = None;
    for cell in order {
        let count = counts[&cell];
        if best.map_or(true, |b| count > b.count) {
            best = Some(HotZone { cell, count });
        }
    }
    best
}

/// Named corner of the head/heart plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quadrant {
    /// High head, low heart
    Academic,
    /// High head, high heart
    Masterpiece,
    /// Low head, low heart
    Trash,
    /// Low head, high heart
    #[serde(rename = "Guilty Pleasure")]
    GuiltyPleasure,
}

impl Quadrant {
    /// All quadrants in report order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Academic,
        Quadrant::Masterpiece,
        Quadrant::Trash,
        Quadrant::GuiltyPleasure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::Academic => "Academic",
            Quadrant::Masterpiece => "Masterpiece",
            Quadrant::Trash => "Trash",
            Quadrant::GuiltyPleasure => "Guilty Pleasure",
        }
    }

    /// Quadrant a rating pair belongs to
    ///
    /// Every integer pair lands in exactly one quadrant: 3 counts as high on
    /// both axes, so the split is asymmetric (3..=5 high, 1..=2 low).
    pub fn classify(head: Rating, heart: Rating) -> Quadrant {
        match (head >= HIGH_FROM, heart >= HIGH_FROM) {
            (true, false) => Quadrant::Academic,
            (true, true) => Quadrant::Masterpiece,
            (false, false) => Quadrant::Trash,
            (false, true) => Quadrant::GuiltyPleasure,
        }
    }

    fn index(&self) -> usize {
        match self {
            Quadrant::Academic => 0,
            Quadrant::Masterpiece => 1,
            Quadrant::Trash => 2,
            Quadrant::GuiltyPleasure => 3,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quadrants with no entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VoidZone {
    /// One or more quadrants are empty (report order)
    Void(Vec<Quadrant>),
    /// Every quadrant has at least one entry
    WellTraveled,
}

impl VoidZone {
    /// Every quadrant void (the state of an empty entry list)
    pub fn all() -> Self {
        VoidZone::Void(Quadrant::ALL.to_vec())
    }

    pub fn quadrants(&self) -> &[Quadrant] {
        match self {
            VoidZone::Void(quadrants) => quadrants,
            VoidZone::WellTraveled => &[],
        }
    }

    pub fn label(&self) -> String {
        match self {
            VoidZone::Void(quadrants) => quadrants
                .iter()
                .map(Quadrant::label)
                .collect::<Vec<_>>()
                .join(", "),
            VoidZone::WellTraveled => "None (Well Traveled)".to_string(),
        }
    }
}

impl fmt::Display for VoidZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Report which quadrants nobody has rated into
pub fn void_zone(entries: &[MediaEntry]) -> VoidZone {
    let mut counts = [0usize; 4];
    for entry in entries {
        counts[Quadrant::classify(entry.head_rating, entry.heart_rating).index()] += 1;
    }

    let void: Vec<Quadrant> = Quadrant::ALL
        .iter()
        .copied()
        .filter(|q| counts[q.index()] == 0)
        .collect();

    if void.is_empty() {
        VoidZone::WellTraveled
    } else {
        VoidZone::Void(void)
    }
}

/// 5x5 heatmap of entry counts, indexed `[head - 1][heart - 1]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TasteGrid {
    pub cells: [[usize; GRID_SIZE]; GRID_SIZE],
    /// Largest single cell count (0 when the grid is empty)
    pub max_count: usize,
}

impl TasteGrid {
    /// Count entries per cell; pairs outside 1..=5 are not plotted
    pub fn from_entries(entries: &[MediaEntry]) -> Self {
        let mut grid = TasteGrid::default();
        for entry in entries {
            if let Some((row, col)) = grid_index(entry.head_rating, entry.heart_rating) {
                grid.cells[row][col] += 1;
                grid.max_count = grid.max_count.max(grid.cells[row][col]);
            }
        }
        grid
    }

    pub fn count(&self, head: Rating, heart: Rating) -> usize {
        grid_index(head, heart)
            .map(|(row, col)| self.cells[row][col])
            .unwrap_or(0)
    }

    /// Cell count relative to the busiest cell (0.0 to 1.0)
    pub fn intensity(&self, head: Rating, heart: Rating) -> f64 {
        if self.max_count == 0 {
            return 0.0;
        }
        self.count(head, heart) as f64 / self.max_count as f64
    }

    /// Number of entries that made it onto the grid
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

fn grid_index(head: Rating, heart: Rating) -> Option<(usize, usize)> {
    let in_range = |r: Rating| (1..=GRID_SIZE as Rating).contains(&r);
    if in_range(head) && in_range(heart) {
        Some((head as usize - 1, heart as usize - 1))
    } else {
        None
    }
}
