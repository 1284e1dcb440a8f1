use serde::{Deserialize, Serialize};

use crate::pde::operator::TridiagOperator1D;

/// Continuous boundary behaviour folded into the first or last operator row through a
/// ghost node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCondition1D {
    /// `d²V/dx² = 0`: linear extrapolation, `V[-1] = 2 V[0] - V[1]`.
    NoConvexity,
    /// `d²V/dx² = dV/dx`: exponential growth or decay toward the boundary.
    Exponential,
}

impl BoundaryCondition1D {
    /// Folds the condition into row 0 of `op` for a grid step `dx`.
    pub fn set_inf(self, op: &mut TridiagOperator1D, dx: f64) {
        match self {
            Self::NoConvexity => op.set_inf_boundary_condition(2.0, -1.0, 0.0),
            Self::Exponential => {
                op.set_inf_boundary_condition((2.0 + dx) / (1.0 + dx), -1.0 / (1.0 + dx), 0.0)
            }
        }
    }

    /// Folds the condition into the last row of `op` for a grid step `dx`.
    pub fn set_sup(self, op: &mut TridiagOperator1D, dx: f64) {
        match self {
            Self::NoConvexity => op.set_sup_boundary_condition(2.0, -1.0, 0.0),
            Self::Exponential => {
                op.set_sup_boundary_condition((dx - 2.0) / (dx - 1.0), 1.0 / (dx - 1.0), 0.0)
            }
        }
    }
}
