//! Fit timing data against each [`GrowthForm`] and pick the one which matches best.
//!
//! Each form is scaled by a single coefficient, found by least squares.
//! The form whose scaled curve leaves the smallest residual wins.
use indexmap::IndexMap;

use crate::{FitError, GrowthForm, Matrix, ls_solve};

/// One timing measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Size of the task given to the measured function.
    pub size: usize,
    /// Time taken, in seconds.
    pub seconds: f64,
}

impl Sample {
    /// A measurement of `seconds` for a task of size `size`.
    pub fn new(size: usize, seconds: f64) -> Self {
        Self { size, seconds }
    }
}

/// One growth form, scaled to best match the samples.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedCurve {
    /// Multiplier applied to the form's curve.
    pub coefficient: f64,
    /// The scaled curve evaluated at each sample's size, as a column.
    pub values: Matrix,
}

/// Every growth form fitted against the same samples.
#[derive(Debug, Clone)]
pub struct Fits {
    /// The samples these curves were fitted to.
    samples: Vec<Sample>,
    /// Observed times, as a column.
    observed: Matrix,
    /// In the same order as [`GrowthForm::ALL`].
    curves: IndexMap<GrowthForm, FittedCurve>,
}

/// Which growth form matched best, and how well every form matched.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The form with the smallest residual.
    pub best: GrowthForm,
    /// One norm of (observed − fitted), for each form.
    pub residuals: IndexMap<GrowthForm, f64>,
}

/// Find the best coefficient for each growth form.
pub fn fit_curves(samples: &[Sample]) -> Result<Fits, FitError> {
    if samples.is_empty() {
        return Err(FitError::NoSamples);
    }
    let observed = Matrix::column_vector(samples.iter().map(|s| s.seconds).collect())?;
    let mut curves = IndexMap::with_capacity(GrowthForm::ALL.len());
    for form in GrowthForm::ALL {
        let design = Matrix::column_vector(
            samples
                .iter()
                .map(|s| form.eval(s.size as f64))
                .collect(),
        )?;
        let x = ls_solve(&design, &observed)?;
        let values = design.multiply(&x)?;
        curves.insert(
            form,
            FittedCurve {
                coefficient: x.get(0, 0),
                values,
            },
        );
    }
    Ok(Fits {
        samples: samples.to_vec(),
        observed,
        curves,
    })
}

/// Fit every growth form, then pick the best.
pub fn classify(samples: &[Sample]) -> Result<Classification, FitError> {
    fit_curves(samples)?.classify()
}

impl Fits {
    /// The fitted curve for this form.
    pub fn get(&self, form: GrowthForm) -> Option<&FittedCurve> {
        self.curves.get(&form)
    }

    /// Every fitted curve, in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (GrowthForm, &FittedCurve)> {
        self.curves.iter().map(|(form, curve)| (*form, curve))
    }

    /// The samples these curves were fitted to, in order.
    /// Row `i` of every curve's values belongs to sample `i`.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The observed times these curves were fitted to.
    pub fn observed(&self) -> &Matrix {
        &self.observed
    }

    /// How far the fitted curve is from the observations: the one norm of their difference.
    pub fn residual(&self, form: GrowthForm) -> Result<Option<f64>, FitError> {
        self.curves
            .get(&form)
            .map(|curve| self.residual_of(curve))
            .transpose()
    }

    fn residual_of(&self, curve: &FittedCurve) -> Result<f64, FitError> {
        Ok(self.observed.subtract(&curve.values)?.one_norm())
    }

    /// Pick the form with the smallest residual.
    /// Ties go to whichever comes first in [`GrowthForm::ALL`].
    pub fn classify(&self) -> Result<Classification, FitError> {
        let mut residuals = IndexMap::with_capacity(self.curves.len());
        let mut best: Option<(GrowthForm, f64)> = None;
        for (form, curve) in self.iter() {
            let residual = self.residual_of(curve)?;
            residuals.insert(form, residual);
            match best {
                Some((_, smallest)) if residual >= smallest || residual.is_nan() => {}
                _ => best = Some((form, residual)),
            }
        }
        let (best, _) = best.ok_or(FitError::NoSamples)?;
        Ok(Classification { best, residuals })
    }
}
