use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::{MlErr, Result};

/// An immutable, non-empty set of labeled examples.
///
/// Every example has the same amount of features and a label that is either `0.` or `1.`, both
/// invariants are checked once on construction so the numerical code never has to.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Array2<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Creates a new `Dataset` from a flat, row-major buffer.
    ///
    /// # Arguments
    /// * `data` - The examples, each one being `x_size` features followed by its label.
    /// * `x_size` - The amount of features per example.
    ///
    /// # Returns
    /// The dataset or an error if the buffer is empty, ragged or holds a non binary label.
    pub fn new(data: Vec<f64>, x_size: usize) -> Result<Self> {
        let row_size = x_size.checked_add(1).ok_or(MlErr::SizeMismatch {
            what: "features per example",
            got: x_size,
            expected: usize::MAX - 1,
        })?;

        if data.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        if data.len() % row_size != 0 {
            return Err(MlErr::SizeMismatch {
                what: "dataset buffer",
                got: data.len(),
                expected: data.len().next_multiple_of(row_size),
            });
        }

        let len = data.len() / row_size;
        let mut xs = Vec::with_capacity(len * x_size);
        let mut ys = Vec::with_capacity(len);

        for row in data.chunks_exact(row_size) {
            let (x, y) = row.split_at(x_size);
            xs.extend_from_slice(x);
            ys.push(y[0]);
        }

        Self::from_parts(xs, ys, x_size)
    }

    /// Creates a new `Dataset` from a list of `(features, label)` pairs.
    ///
    /// # Returns
    /// The dataset or an error if there are no examples, the feature vectors have different
    /// lengths or a label is not binary.
    pub fn from_examples<I>(examples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vec<f64>, f64)>,
    {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        let mut x_size = None;

        for (x, y) in examples {
            let expected = *x_size.get_or_insert(x.len());
            if x.len() != expected {
                return Err(MlErr::SizeMismatch {
                    what: "example features",
                    got: x.len(),
                    expected,
                });
            }

            xs.extend(x);
            ys.push(y);
        }

        let x_size = x_size.ok_or(MlErr::EmptyDataset)?;
        Self::from_parts(xs, ys, x_size)
    }

    fn from_parts(xs: Vec<f64>, ys: Vec<f64>, x_size: usize) -> Result<Self> {
        if ys.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        if x_size == 0 {
            return Err(MlErr::SizeMismatch {
                what: "features per example",
                got: 0,
                expected: 1,
            });
        }

        if let Some((row, &label)) = ys
            .iter()
            .enumerate()
            .find(|&(_, &y)| y != 0. && y != 1.)
        {
            return Err(MlErr::InvalidLabel { row, label });
        }

        let len = ys.len();
        let x = Array2::from_shape_vec((len, x_size), xs).map_err(|_| MlErr::SizeMismatch {
            what: "dataset features",
            got: len,
            expected: len * x_size,
        })?;

        Ok(Self {
            x,
            y: Array1::from(ys),
        })
    }

    /// Returns the amount of examples, always at least one.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Always `false`, empty datasets are rejected on construction.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Returns the amount of features per example.
    pub fn x_size(&self) -> usize {
        self.x.ncols()
    }

    /// A view over the feature matrix, one example per row.
    pub fn x(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    /// A view over the labels.
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    /// Iterates over the `(features, label)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (ArrayView1<'_, f64>, f64)> {
        self.x.rows().into_iter().zip(self.y.iter().copied())
    }
}
