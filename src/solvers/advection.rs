//! First-order schemes for the scalar advection equation u_t + a u_x = 0 on a
//! periodic unit interval. These are kept for comparison with the Euler
//! solver: they share its flux-difference update, but have no Riemann solver.

use serde::{Deserialize, Serialize};




/**
 * Flux-difference schemes for the advection equation.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    /// Forward in time, centered in space. Unstable for any step size.
    Centered,
    /// Differences taken on the side the wave comes from.
    Upwind,
    /// The centered scheme with the old value replaced by the average of its
    /// neighbors, which adds dissipation.
    LaxFriedrichs,
}




/**
 * A linear advection problem with a constant wave speed.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Advection {
    pub wavespeed: f64,
}

impl Default for Advection {
    fn default() -> Self {
        Self { wavespeed: 1.0 }
    }
}




// ============================================================================
impl Advection {

    pub fn flux(&self, u: f64) -> f64 {
        self.wavespeed * u
    }

    /**
     * Advance the periodic profile `u` by one step of size `dt`.
     */
    pub fn step(&self, scheme: Scheme, u: &[f64], dt: f64, dx: f64) -> Vec<f64> {
        let n = u.len();
        let r = dt / dx;

        (0..n).map(|j| {
            let um = u[(j + n - 1) % n];
            let up = u[(j + 1) % n];

            match scheme {
                Scheme::Centered => {
                    u[j] - 0.5 * r * (self.flux(up) - self.flux(um))
                }
                Scheme::LaxFriedrichs => {
                    0.5 * (up + um) - 0.5 * r * (self.flux(up) - self.flux(um))
                }
                Scheme::Upwind => {
                    if self.wavespeed >= 0.0 {
                        u[j] - r * (self.flux(u[j]) - self.flux(um))
                    } else {
                        u[j] - r * (self.flux(up) - self.flux(u[j]))
                    }
                }
            }
        }).collect()
    }

    /**
     * Integrate the profile given by `initial` on `num_cells` zones of the
     * unit interval, with `num_steps` equal steps up to `final_time`. Zone
     * positions are the left edges. Returns the positions and final values.
     */
    pub fn solve<F>(&self, scheme: Scheme, initial: F, num_cells: usize, num_steps: usize, final_time: f64) -> (Vec<f64>, Vec<f64>)
    where
        F: Fn(f64) -> f64
    {
        let dx = 1.0 / num_cells as f64;
        let dt = final_time / num_steps as f64;
        let x: Vec<f64> = (0..num_cells).map(|i| i as f64 * dx).collect();
        let mut u: Vec<f64> = x.iter().map(|&x| initial(x)).collect();

        for _ in 0..num_steps {
            u = self.step(scheme, &u, dt, dx);
        }
        (x, u)
    }
}




/// The sine wave used for the comparison runs.
pub fn sine_wave(x: f64) -> f64 {
    f64::sin(2.0 * std::f64::consts::PI * x)
}
