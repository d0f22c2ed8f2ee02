//! Reference integrators over a finite interval.
//!
//! The composite trapezoid and Simpson rules evaluate the integrand at
//! `npts` evenly spaced points including both endpoints. Gauss-Legendre
//! integration draws its rule from a [`QuadratureTable`], so the accuracy
//! of a call is bounded by the orders the table holds.

use thiserror::Error;

use crate::table::QuadratureTable;

/// Errors from the integration routines.
#[derive(Error, Debug)]
pub enum IntegrateError {
    #[error("{rule} needs at least {min} points, but {npts} were requested.")]
    TooFewPoints {
        rule: &'static str,
        npts: usize,
        min: usize,
    },

    #[error("Simpson's rule needs an odd number of points, but {npts} were requested.")]
    EvenPointCount { npts: usize },

    #[error("No order-{order} rule in the table; it holds orders 1..={max_order}.")]
    OrderNotTabulated { order: usize, max_order: usize },
}

/// Composite trapezoid rule over `npts` evenly spaced points.
///
/// Endpoints carry weight `dx / 2`, interior points `dx`. Requires
/// `npts >= 2`.
pub fn trapezoid<F>(f: F, npts: usize, x_min: f64, x_max: f64) -> Result<f64, IntegrateError>
where
    F: Fn(f64) -> f64,
{
    if npts < 2 {
        return Err(IntegrateError::TooFewPoints {
            rule: "The trapezoid rule",
            npts,
            min: 2,
        });
    }

    let dx = (x_max - x_min) / (npts as f64 - 1.0);
    let mut sum = 0.0;
    for i in 0..npts {
        let weight = if i == 0 || i == npts - 1 { dx / 2.0 } else { dx };
        sum += weight * f(x_min + i as f64 * dx);
    }
    Ok(sum)
}

/// Composite Simpson rule over `npts` evenly spaced points.
///
/// A parabola is fitted through each run of three points, so `npts` must be
/// odd and at least 3. Endpoints carry weight `dx / 3`; interior points
/// alternate `4 dx / 3` and `2 dx / 3`.
pub fn simpson<F>(f: F, npts: usize, x_min: f64, x_max: f64) -> Result<f64, IntegrateError>
where
    F: Fn(f64) -> f64,
{
    if npts < 3 {
        return Err(IntegrateError::TooFewPoints {
            rule: "Simpson's rule",
            npts,
            min: 3,
        });
    }
    if npts % 2 == 0 {
        return Err(IntegrateError::EvenPointCount { npts });
    }

    let dx = (x_max - x_min) / (npts as f64 - 1.0);
    let mut sum = 0.0;
    for i in 0..npts {
        let weight = if i == 0 || i == npts - 1 {
            dx / 3.0
        } else if i % 2 == 1 {
            4.0 * dx / 3.0
        } else {
            2.0 * dx / 3.0
        };
        sum += weight * f(x_min + i as f64 * dx);
    }
    Ok(sum)
}

impl QuadratureTable {
    /// Integrates `f` over `[x_min, x_max]` with the order-`npts` rule held
    /// by this table.
    pub fn integral<F>(
        &self,
        f: F,
        npts: usize,
        x_min: f64,
        x_max: f64,
    ) -> Result<f64, IntegrateError>
    where
        F: Fn(f64) -> f64,
    {
        let rule = self
            .rule(npts)
            .ok_or(IntegrateError::OrderNotTabulated {
                order: npts,
                max_order: self.max_order(),
            })?;
        Ok(rule.integrate(f, x_min, x_max))
    }
}
