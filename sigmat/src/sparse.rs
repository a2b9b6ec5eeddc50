//! Hash-based sparse storage matrices
//!
//! Three map layouts for low-occupancy data: one global map keyed by
//! coordinate pairs, and two nested layouts bucketed per row or per
//! column. Absence always means 0 and writing 0 removes the entry, so
//! occupancy tracks the non-zero count exactly. Reductions iterate stored
//! entries instead of the full logical extent - the reason these types
//! exist.
//!
//! None of these matrices has a backing buffer; their storage is
//! intrinsically map-based, and linear access keeps the `Unsupported`
//! refusal of the base contract.

use hashbrown::HashMap;
use sigmat_core::validation::{check_bounds, check_length, padded_or_check};
use sigmat_core::{matrices_equal, Matrix, MatrixError, MutableMatrix, Result};

/// Sparse matrix over one coordinate-keyed map
///
/// The key is a plain `(row, column)` value pair with structural equality.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMatrix {
    rows: usize,
    columns: usize,
    entries: HashMap<(usize, usize), f32>,
    zero_padded: bool,
}

impl SparseMatrix {
    /// Create an empty sparse matrix
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            entries: HashMap::new(),
            zero_padded: false,
        }
    }

    /// Create an empty, zero-padded sparse matrix
    pub fn zero_padded(rows: usize, columns: usize) -> Self {
        Self {
            zero_padded: true,
            ..Self::new(rows, columns)
        }
    }

    /// Number of non-zero entries actually stored
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl Matrix for SparseMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn is_zero_padded(&self) -> bool {
        self.zero_padded
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        if padded_or_check(row, column, self.rows, self.columns, self.zero_padded)? {
            return Ok(0.0);
        }
        Ok(self.entries.get(&(row, column)).copied().unwrap_or(0.0))
    }

    fn sum(&self) -> f32 {
        self.entries.values().sum()
    }

    fn row_sums(&self) -> Vec<f32> {
        let mut sums = vec![0.0; self.rows];
        for (&(row, _), &value) in &self.entries {
            sums[row] += value;
        }
        sums
    }

    fn column_sums(&self) -> Vec<f32> {
        let mut sums = vec![0.0; self.columns];
        for (&(_, column), &value) in &self.entries {
            sums[column] += value;
        }
        sums
    }
}

impl MutableMatrix for SparseMatrix {
    fn set(&mut self, row: usize, column: usize, value: f32) -> Result<()> {
        check_bounds(row, column, self.rows, self.columns)?;
        if value == 0.0 {
            self.entries.remove(&(row, column));
        } else {
            self.entries.insert((row, column), value);
        }
        Ok(())
    }
}

impl PartialEq for SparseMatrix {
    fn eq(&self, other: &Self) -> bool {
        matrices_equal(self, other)
    }
}

/// Sparse matrix bucketed per row
///
/// A secondary map per row makes [`get_row`](Matrix::get_row) and
/// [`set_row`](MutableMatrix::set_row) proportional to that row's
/// occupancy instead of the full column count. Rows whose last entry is
/// removed are pruned.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseRowMatrix {
    rows: usize,
    columns: usize,
    row_entries: HashMap<usize, HashMap<usize, f32>>,
    zero_padded: bool,
}

impl SparseRowMatrix {
    /// Create an empty row-bucketed sparse matrix
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            row_entries: HashMap::new(),
            zero_padded: false,
        }
    }

    /// Create an empty, zero-padded row-bucketed sparse matrix
    pub fn zero_padded(rows: usize, columns: usize) -> Self {
        Self {
            zero_padded: true,
            ..Self::new(rows, columns)
        }
    }

    /// Number of non-zero entries actually stored
    pub fn nnz(&self) -> usize {
        self.row_entries.values().map(HashMap::len).sum()
    }

    /// Number of rows holding at least one non-zero entry
    pub fn occupied_rows(&self) -> usize {
        self.row_entries.len()
    }
}

impl Matrix for SparseRowMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn is_zero_padded(&self) -> bool {
        self.zero_padded
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        if padded_or_check(row, column, self.rows, self.columns, self.zero_padded)? {
            return Ok(0.0);
        }
        Ok(self
            .row_entries
            .get(&row)
            .and_then(|entries| entries.get(&column))
            .copied()
            .unwrap_or(0.0))
    }

    fn sum(&self) -> f32 {
        self.row_entries
            .values()
            .flat_map(HashMap::values)
            .sum()
    }

    fn row_sums(&self) -> Vec<f32> {
        let mut sums = vec![0.0; self.rows];
        for (&row, entries) in &self.row_entries {
            sums[row] = entries.values().sum();
        }
        sums
    }

    fn column_sums(&self) -> Vec<f32> {
        let mut sums = vec![0.0; self.columns];
        for entries in self.row_entries.values() {
            for (&column, &value) in entries {
                sums[column] += value;
            }
        }
        sums
    }

    fn get_row(&self, row: usize) -> Result<Vec<f32>> {
        let mut values = vec![0.0; self.columns];
        if row >= self.rows {
            if self.zero_padded {
                return Ok(values);
            }
            return Err(MatrixError::OutOfBounds {
                row,
                column: 0,
                rows: self.rows,
                columns: self.columns,
            });
        }
        if let Some(entries) = self.row_entries.get(&row) {
            for (&column, &value) in entries {
                values[column] = value;
            }
        }
        Ok(values)
    }
}

impl MutableMatrix for SparseRowMatrix {
    fn set(&mut self, row: usize, column: usize, value: f32) -> Result<()> {
        check_bounds(row, column, self.rows, self.columns)?;
        if value == 0.0 {
            if let Some(entries) = self.row_entries.get_mut(&row) {
                entries.remove(&column);
                if entries.is_empty() {
                    self.row_entries.remove(&row);
                }
            }
        } else {
            self.row_entries
                .entry(row)
                .or_default()
                .insert(column, value);
        }
        Ok(())
    }

    fn set_row(&mut self, row: usize, values: &[f32]) -> Result<()> {
        check_length(self.columns, values.len())?;
        if row >= self.rows {
            return Err(MatrixError::OutOfBounds {
                row,
                column: 0,
                rows: self.rows,
                columns: self.columns,
            });
        }
        let entries: HashMap<usize, f32> = values
            .iter()
            .enumerate()
            .filter(|(_, &value)| value != 0.0)
            .map(|(column, &value)| (column, value))
            .collect();
        if entries.is_empty() {
            self.row_entries.remove(&row);
        } else {
            self.row_entries.insert(row, entries);
        }
        Ok(())
    }
}

impl PartialEq for SparseRowMatrix {
    fn eq(&self, other: &Self) -> bool {
        matrices_equal(self, other)
    }
}

/// Sparse matrix bucketed per column
///
/// The column-major twin of [`SparseRowMatrix`]:
/// [`get_column`](Matrix::get_column) and
/// [`set_column`](MutableMatrix::set_column) are proportional to that
/// column's occupancy.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseColumnMatrix {
    rows: usize,
    columns: usize,
    column_entries: HashMap<usize, HashMap<usize, f32>>,
    zero_padded: bool,
}

impl SparseColumnMatrix {
    /// Create an empty column-bucketed sparse matrix
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            column_entries: HashMap::new(),
            zero_padded: false,
        }
    }

    /// Create an empty, zero-padded column-bucketed sparse matrix
    pub fn zero_padded(rows: usize, columns: usize) -> Self {
        Self {
            zero_padded: true,
            ..Self::new(rows, columns)
        }
    }

    /// Number of non-zero entries actually stored
    pub fn nnz(&self) -> usize {
        self.column_entries.values().map(HashMap::len).sum()
    }

    /// Number of columns holding at least one non-zero entry
    pub fn occupied_columns(&self) -> usize {
        self.column_entries.len()
    }
}

impl Matrix for SparseColumnMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn is_zero_padded(&self) -> bool {
        self.zero_padded
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        if padded_or_check(row, column, self.rows, self.columns, self.zero_padded)? {
            return Ok(0.0);
        }
        Ok(self
            .column_entries
            .get(&column)
            .and_then(|entries| entries.get(&row))
            .copied()
            .unwrap_or(0.0))
    }

    fn sum(&self) -> f32 {
        self.column_entries
            .values()
            .flat_map(HashMap::values)
            .sum()
    }

    fn row_sums(&self) -> Vec<f32> {
        let mut sums = vec![0.0; self.rows];
        for entries in self.column_entries.values() {
            for (&row, &value) in entries {
                sums[row] += value;
            }
        }
        sums
    }

    fn column_sums(&self) -> Vec<f32> {
        let mut sums = vec![0.0; self.columns];
        for (&column, entries) in &self.column_entries {
            sums[column] = entries.values().sum();
        }
        sums
    }

    fn get_column(&self, column: usize) -> Result<Vec<f32>> {
        let mut values = vec![0.0; self.rows];
        if column >= self.columns {
            if self.zero_padded {
                return Ok(values);
            }
            return Err(MatrixError::OutOfBounds {
                row: 0,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        if let Some(entries) = self.column_entries.get(&column) {
            for (&row, &value) in entries {
                values[row] = value;
            }
        }
        Ok(values)
    }
}

impl MutableMatrix for SparseColumnMatrix {
    fn set(&mut self, row: usize, column: usize, value: f32) -> Result<()> {
        check_bounds(row, column, self.rows, self.columns)?;
        if value == 0.0 {
            if let Some(entries) = self.column_entries.get_mut(&column) {
                entries.remove(&row);
                if entries.is_empty() {
                    self.column_entries.remove(&column);
                }
            }
        } else {
            self.column_entries
                .entry(column)
                .or_default()
                .insert(row, value);
        }
        Ok(())
    }

    fn set_column(&mut self, column: usize, values: &[f32]) -> Result<()> {
        check_length(self.rows, values.len())?;
        if column >= self.columns {
            return Err(MatrixError::OutOfBounds {
                row: 0,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        let entries: HashMap<usize, f32> = values
            .iter()
            .enumerate()
            .filter(|(_, &value)| value != 0.0)
            .map(|(row, &value)| (row, value))
            .collect();
        if entries.is_empty() {
            self.column_entries.remove(&column);
        } else {
            self.column_entries.insert(column, entries);
        }
        Ok(())
    }
}

impl PartialEq for SparseColumnMatrix {
    fn eq(&self, other: &Self) -> bool {
        matrices_equal(self, other)
    }
}
