//! Row-major passability map and its builder.
//!
//! # Data layout
//!
//! `GridMap` stores one `bool` per cell in a flat `Vec`, row-major:
//!
//! ```text
//! passable[ row * cols + col ]
//! ```
//!
//! The map is immutable once built.  Anything that changes between planner
//! runs (agents, reservations) lives in `mapf-constraint`, not here.
//!
//! # ASCII format
//!
//! [`GridMap::from_ascii`] reads the usual MAPF benchmark glyphs, one line
//! per row:
//!
//! | Glyph           | Meaning   |
//! |-----------------|-----------|
//! | `.` `G` `S`     | free      |
//! | `@` `#` `T` `O` | blocked   |
//!
//! Blank lines and surrounding whitespace are ignored.

use mapf_core::Cell;

use crate::{Grid, GridError, GridResult};

// ── GridMap ───────────────────────────────────────────────────────────────────

/// A static obstacle map.
///
/// Do not construct directly; use [`GridMapBuilder`], [`GridMap::open`], or
/// [`GridMap::from_ascii`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    rows:     u32,
    cols:     u32,
    passable: Vec<bool>,
}

impl GridMap {
    /// An obstacle-free `rows × cols` map.
    pub fn open(rows: u32, cols: u32) -> Self {
        GridMapBuilder::new(rows, cols).build()
    }

    /// Parse an ASCII map (see the module docs for the glyph table).
    ///
    /// # Errors
    ///
    /// [`GridError::Parse`] on an unknown glyph or rows of unequal width,
    /// [`GridError::Empty`] if the text holds no rows.
    pub fn from_ascii(text: &str) -> GridResult<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let Some(first) = lines.first() else {
            return Err(GridError::Empty { rows: 0, cols: 0 });
        };
        let cols = first.chars().count();
        let mut b = GridMapBuilder::new(lines.len() as u32, cols as u32);

        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(GridError::Parse {
                    line:   row + 1,
                    reason: format!("row has {width} cells, expected {cols}"),
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                match glyph {
                    '.' | 'G' | 'S' => {}
                    '@' | '#' | 'T' | 'O' => {
                        b.block(Cell::new(row as u32, col as u32));
                    }
                    other => {
                        return Err(GridError::Parse {
                            line:   row + 1,
                            reason: format!("unknown glyph {other:?} in column {col}"),
                        });
                    }
                }
            }
        }
        Ok(b.build())
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `true` if the map has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.passable.is_empty()
    }

    /// Number of free cells.
    pub fn passable_count(&self) -> usize {
        self.passable.iter().filter(|&&p| p).count()
    }

    /// Render back to ASCII using `.` and `@`.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.passable.len() + self.rows as usize);
        for row in self.passable.chunks(self.cols.max(1) as usize) {
            out.extend(row.iter().map(|&p| if p { '.' } else { '@' }));
            out.push('\n');
        }
        out
    }

    #[inline]
    fn offset(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols as usize + cell.col as usize
    }
}

impl Grid for GridMap {
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    #[inline]
    fn passable(&self, cell: Cell) -> bool {
        self.contains(cell) && self.passable[self.offset(cell)]
    }
}

// ── GridMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`GridMap`] incrementally, then call [`build`](Self::build).
///
/// Every cell starts free.  Blocking a cell outside the bounds is ignored so
/// callers can stamp shapes without clipping them first.
///
/// # Example
///
/// ```
/// use mapf_core::Cell;
/// use mapf_grid::{Grid, GridMapBuilder};
///
/// let mut b = GridMapBuilder::new(3, 4);
/// b.block(Cell::new(1, 1)).block(Cell::new(1, 2));
/// let map = b.build();
/// assert!(!map.passable(Cell::new(1, 2)));
/// assert_eq!(map.passable_count(), 10);
/// ```
pub struct GridMapBuilder {
    rows:     u32,
    cols:     u32,
    passable: Vec<bool>,
}

impl GridMapBuilder {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            passable: vec![true; rows as usize * cols as usize],
        }
    }

    /// Mark `cell` as an obstacle.
    pub fn block(&mut self, cell: Cell) -> &mut Self {
        if cell.row < self.rows && cell.col < self.cols {
            let i = cell.row as usize * self.cols as usize + cell.col as usize;
            self.passable[i] = false;
        }
        self
    }

    /// Block every cell of `row` in the half-open column range `cols`.
    pub fn block_row(&mut self, row: u32, cols: std::ops::Range<u32>) -> &mut Self {
        for col in cols {
            self.block(Cell::new(row, col));
        }
        self
    }

    /// Block the inclusive rectangle spanned by two corner cells.
    pub fn block_rect(&mut self, a: Cell, b: Cell) -> &mut Self {
        for row in a.row.min(b.row)..=a.row.max(b.row) {
            for col in a.col.min(b.col)..=a.col.max(b.col) {
                self.block(Cell::new(row, col));
            }
        }
        self
    }

    /// Consume the builder and produce a [`GridMap`].
    pub fn build(self) -> GridMap {
        GridMap {
            rows:     self.rows,
            cols:     self.cols,
            passable: self.passable,
        }
    }
}
