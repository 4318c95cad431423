use crate::error::OperationError;
use crate::operations::pattern::ClassCode;

/// One classified cell and the world position of its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub code: ClassCode,
    pub x: f64,
    pub y: f64,
}

/// Classified cells handed over by a raster source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LczGrid {
    cells: Vec<GridCell>,
}

impl LczGrid {
    /// Creates a grid from cells that already carry their coordinates.
    #[must_use]
    pub fn from_cells(cells: Vec<GridCell>) -> Self {
        Self { cells }
    }

    /// Creates a grid from rows of codes on a regular lattice.
    ///
    /// `origin` is the centre of the cell in row 0, column 0. Columns
    /// advance along x and rows along y, both by `cell_size`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the rows differ in length
    /// or `cell_size` is not a positive finite number.
    pub fn regular(
        rows: &[Vec<u16>],
        origin: [f64; 2],
        cell_size: f64,
    ) -> Result<Self, OperationError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "cell size must be positive, got {cell_size}"
            )));
        }
        let width = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(OperationError::InvalidInput(format!(
                "row {row} has {} cells, expected {width}",
                rows[row].len()
            )));
        }

        #[allow(clippy::cast_precision_loss)]
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter().enumerate().map(move |(c, &code)| GridCell {
                    code: ClassCode(code),
                    x: origin[0] + c as f64 * cell_size,
                    y: origin[1] + r as f64 * cell_size,
                })
            })
            .collect();
        Ok(Self { cells })
    }

    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
