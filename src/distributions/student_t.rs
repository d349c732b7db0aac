//! Student's t distribution
use super::{stat, Continuous, Moments};
use crate::error::{DistributionError, Result};
use crate::math::{bound, LN_PI};
use crate::params::{resolve_values, Param, Point};
use crate::utils::array::{map_n, try_fill_from};
use crate::Prng;
use ndarray::ArrayD;
use rand_distr::{ChiSquared, Distribution, Normal};
use statrs::function::gamma::ln_gamma;

/// Non-central Student's t distribution.
///
/// Describes a normal variable whose precision is gamma distributed.
///
/// ```text
/// f(x | nu, mu, lam) = Γ((nu + 1) / 2) / Γ(nu / 2) sqrt(lam / (π nu))
///                      (1 + lam (x - mu)^2 / nu)^(-(nu + 1) / 2)
/// ```
#[derive(Debug, Clone)]
pub struct StudentT {
    nu: Param,
    mu: Param,
    lam: Param,
    shape: Vec<usize>,
    moments: Moments,
}

impl StudentT {
    /// Create a Student's t distribution.
    ///
    /// # Args
    /// * `nu` - Degrees of freedom (`nu > 0`).
    /// * `mu` - Location.
    /// * `lam` - Scale precision (`lam > 0`).
    pub fn new(nu: impl Into<Param>, mu: impl Into<Param>, lam: impl Into<Param>) -> Self {
        let nu = nu.into();
        let mu = mu.into();
        let lam = lam.into();
        let mean = stat([&mu], |[mu]| mu);
        Self {
            moments: Moments {
                median: mean.clone(),
                mode: mean.clone(),
                mean,
                variance: stat([&nu, &lam], |[nu, lam]| {
                    if nu > 2.0 {
                        nu / (nu - 2.0) / lam
                    } else {
                        f64::INFINITY
                    }
                }),
            },
            nu,
            mu,
            lam,
            shape: Vec::new(),
        }
    }

    /// Central Student's t with `mu = 0` and `lam = 1`.
    pub fn standard(nu: impl Into<Param>) -> Self {
        Self::new(nu, 0.0, 1.0)
    }

    #[must_use]
    pub fn with_shape(mut self, shape: &[usize]) -> Self {
        self.shape = shape.to_vec();
        self
    }

    pub const fn nu(&self) -> &Param {
        &self.nu
    }

    pub const fn mu(&self) -> &Param {
        &self.mu
    }

    pub const fn lam(&self) -> &Param {
        &self.lam
    }
}

impl Continuous for StudentT {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn moments(&self) -> &Moments {
        &self.moments
    }

    fn params(&self) -> Vec<&Param> {
        vec![&self.nu, &self.mu, &self.lam]
    }

    fn logp_at(&self, value: &ArrayD<f64>, point: &Point) -> Result<ArrayD<f64>> {
        let nu = self.nu.current(point)?;
        let mu = self.mu.current(point)?;
        let lam = self.lam.current(point)?;
        let (nu, lam) = (&*nu, &*lam);
        Ok(bound(
            map_n([value, nu, &*mu, lam], |[x, nu, mu, lam]| {
                ln_gamma((nu + 1.0) / 2.0) + 0.5 * (lam.ln() - nu.ln() - LN_PI)
                    - ln_gamma(nu / 2.0)
                    - (nu + 1.0) / 2.0 * (lam * (x - mu).powi(2) / nu).ln_1p()
            }),
            &[
                map_n([lam], |[lam]| lam > 0.0),
                map_n([nu], |[nu]| nu > 0.0),
            ],
        ))
    }

    fn random(&self, point: Option<&Point>, rng: &mut Prng) -> Result<ArrayD<f64>> {
        let [nu, mu, lam] = resolve_values([&self.nu, &self.mu, &self.lam], point, rng)?;
        try_fill_from([&nu, &mu, &lam], &self.shape, |[nu, mu, lam]| {
            let z = Normal::new(0.0, lam.sqrt().recip())
                .map_err(|e| DistributionError::invalid("StudentT", e))?;
            let chi2 =
                ChiSquared::new(nu).map_err(|e| DistributionError::invalid("StudentT", e))?;
            Ok(mu + z.sample(rng) / (chi2.sample(rng) / nu).sqrt())
        })
    }
}
