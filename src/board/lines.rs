use std::ops::Deref;

use crate::error::BoardError;

/// Step vectors as (x, y): horizontal, vertical, diagonal down-right, diagonal up-right.
pub const STEPS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Ordered run of `run_length` flat board indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WinningLine(Box<[usize]>);

impl WinningLine {
    pub fn indices(&self) -> &[usize] { &self.0 }
}

impl Deref for WinningLine {
    type Target = [usize];
    fn deref(&self) -> &[usize] { &self.0 }
}

/// Every winning line for one `(size, run_length)` configuration.
///
/// Lines are enumerated by start index, then by [`STEPS`] order. Runs longer than
/// `run_length` yield several overlapping lines; they are kept on purpose so each
/// window is checked on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSet {
    size: usize,
    run_length: usize,
    lines: Vec<WinningLine>,
}

impl LineSet {
    /// Fails when either value is zero or `run_length > size`.
    pub fn generate(size: usize, run_length: usize) -> Result<Self, BoardError> {
        if size == 0 || run_length == 0 || run_length > size {
            return Err(BoardError::InvalidConfiguration { size, run_length });
        }
        let cells = size * size;
        let mut lines = Vec::new();
        for start in 0..cells {
            for &step in &STEPS {
                if let Some(line) = step_indices(size, run_length, start, step) { lines.push(line); }
            }
        }
        Ok(Self { size, run_length, lines })
    }

    pub fn size(&self) -> usize { self.size }
    pub fn run_length(&self) -> usize { self.run_length }
    pub fn lines(&self) -> &[WinningLine] { &self.lines }
    pub fn len(&self) -> usize { self.lines.len() }
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, WinningLine> { self.lines.iter() }

    /// Lines passing through `cell`, in enumeration order.
    pub fn through(&self, cell: usize) -> impl Iterator<Item = &WinningLine> + '_ {
        self.lines.iter().filter(move |l| l.contains(&cell))
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a WinningLine;
    type IntoIter = std::slice::Iter<'a, WinningLine>;
    fn into_iter(self) -> Self::IntoIter { self.lines.iter() }
}

/// Cells visited from `start` stepping by `(step_x, step_y)`, or `None` when the run
/// leaves the grid or would wrap across a row edge.
pub fn step_indices(size: usize, run_length: usize, start: usize, (step_x, step_y): (isize, isize)) -> Option<WinningLine> {
    if run_length == 0 || size == 0 { return None; }
    let cells = (size * size) as isize;
    let (size_i, len_i) = (size as isize, run_length as isize);
    let col = start as isize % size_i;
    // Flat index arithmetic wraps rows silently; reject by column reach instead.
    if col + step_x * (len_i - 1) > size_i - 1 { return None; }
    let mut out = Vec::with_capacity(run_length);
    for i in 0..len_i {
        let idx = start as isize + step_x * i + step_y * i * size_i;
        if idx < 0 || idx >= cells { return None; }
        out.push(idx as usize);
    }
    Some(WinningLine(out.into_boxed_slice()))
}
