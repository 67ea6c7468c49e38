use crate::core::data::colour::Colour;

/// Accumulated palette colour and hit count of one raster cell.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct HistogramCell {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub count: u64,
}

impl HistogramCell {
    pub fn add(&mut self, colour: Colour) {
        self.red += colour.r as f64;
        self.green += colour.g as f64;
        self.blue += colour.b as f64;
        self.count += 1;
    }

    pub fn merge(&mut self, other: &Self) {
        self.red += other.red;
        self.green += other.green;
        self.blue += other.blue;
        self.count += other.count;
    }
}

/// Per-thread sample raster of the chaos walk.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    width: usize,
    height: usize,
    cells: Vec<HistogramCell>,
}

impl Histogram {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![HistogramCell::default(); width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn cells(&self) -> &[HistogramCell] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<&HistogramCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    /// Plots one sample; coordinates outside the raster are ignored.
    pub fn add_sample(&mut self, x: usize, y: usize, colour: Colour) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y * self.width + x].add(colour);
    }

    /// Folds `other` into this histogram. Both must share dimensions.
    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        for (cell, other_cell) in self.cells.iter_mut().zip(other.cells.iter()) {
            cell.merge(other_cell);
        }
        self
    }

    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.cells.iter().map(|cell| cell.count).sum()
    }
}
