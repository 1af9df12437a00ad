use enum_as_inner::EnumAsInner;
use ndarray::prelude::*;
use std::sync::Arc;

/// A `Property` is a piece of data that can be attached to the result of an excited state
/// calculation. The idea of this enum is taken from Guillaume Fraux's (@Luthaf) Chemfiles
/// library.
/// The `EnumAsInner` macro gives direct access to the inner values without case matching,
/// e.g. `as_array2()` or `into_densities()`
/// (see [Documentation of enum-as-inner](https://docs.rs/enum-as-inner/0.5.1/enum_as_inner/)
/// for details).
///
/// Density matrices are stored behind an `Arc`. Cloning a `Property` that holds densities
/// therefore shares the matrices instead of copying them.
#[derive(Debug, Clone, EnumAsInner)]
pub enum Property {
    /// Arraybase<f64, Ix1> property
    Array1(Array1<f64>),
    /// Arraybase<f64, Ix2> property
    Array2(Array2<f64>),
    /// Shared list of one-particle density matrices, one per state or transition
    Densities(Arc<Vec<Array2<f64>>>),
}

impl From<Array1<f64>> for Property {
    fn from(value: Array1<f64>) -> Self {
        Property::Array1(value)
    }
}

impl From<ArrayView1<'_, f64>> for Property {
    fn from(value: ArrayView1<'_, f64>) -> Self {
        Property::Array1(value.to_owned())
    }
}

impl From<Array2<f64>> for Property {
    fn from(value: Array2<f64>) -> Self {
        Property::Array2(value)
    }
}

impl From<ArrayView2<'_, f64>> for Property {
    fn from(value: ArrayView2<'_, f64>) -> Self {
        Property::Array2(value.to_owned())
    }
}

impl From<Vec<Array2<f64>>> for Property {
    fn from(value: Vec<Array2<f64>>) -> Self {
        Property::Densities(Arc::new(value))
    }
}

impl From<Arc<Vec<Array2<f64>>>> for Property {
    fn from(value: Arc<Vec<Array2<f64>>>) -> Self {
        Property::Densities(value)
    }
}
