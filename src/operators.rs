use crate::error::PropertyError;
use ndarray::prelude::*;
use ndarray::Zip;
use std::sync::Arc;

/// Matrix representation of the electric dipole operator in the one-particle basis.
/// The three components are stored in the order x, y, z.
pub type DipoleIntegrals = [Array2<f64>; 3];

/// One-particle operator integrals that a reference state may be able to provide.
/// A missing entry means that the backend of the reference cannot supply the operator.
#[derive(Debug, Clone, Default)]
pub struct OperatorIntegrals {
    pub electric_dipole: Option<Arc<DipoleIntegrals>>,
}

impl OperatorIntegrals {
    pub fn new(electric_dipole: Option<DipoleIntegrals>) -> Self {
        Self {
            electric_dipole: electric_dipole.map(Arc::new),
        }
    }

    /// Returns the dipole integrals, or an error if they are not available.
    pub fn electric_dipole(&self) -> Result<&DipoleIntegrals, PropertyError> {
        self.electric_dipole
            .as_deref()
            .ok_or(PropertyError::MissingDipoleIntegrals)
    }
}

/// Computes the trace of the product of an operator and a density matrix
/// tr(O D^T) = ∑_pq O_pq D_pq
pub fn product_trace(
    operator: ArrayView2<f64>,
    density: ArrayView2<f64>,
) -> Result<f64, PropertyError> {
    if operator.dim() != density.dim() {
        return Err(PropertyError::ShapeMismatch {
            operator: operator.dim(),
            density: density.dim(),
        });
    }
    Ok(Zip::from(&operator)
        .and(&density)
        .fold(0.0, |acc, &o, &d| acc + o * d))
}

/// Contracts every density with every operator component. The returned array has
/// one row per density and one column per operator component.
pub fn contract_densities(
    operators: &[Array2<f64>],
    densities: &[Array2<f64>],
) -> Result<Array2<f64>, PropertyError> {
    let mut result: Array2<f64> = Array2::zeros([densities.len(), operators.len()]);
    for (mut row, density) in result.outer_iter_mut().zip(densities.iter()) {
        for (value, operator) in row.iter_mut().zip(operators.iter()) {
            *value = product_trace(operator.view(), density.view())?;
        }
    }
    Ok(result)
}
