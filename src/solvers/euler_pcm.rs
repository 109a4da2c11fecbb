use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;
use crate::boundary::apply_boundaries;
use crate::config::{Config, Splitting};
use crate::hydro::error::Error;
use crate::hydro::euler::{self, Conserved, Primitive, NUM_FIELDS};
use crate::hydro::geometry::Direction;
use crate::index_space::{Axis, IndexSpace};
use crate::mesh::Mesh;
use crate::output::Solution;
use crate::patch::Patch;
use crate::setup::InitialCondition;




/// Lifecycle of a solver run. A `Solver` value only exists once it has been
/// initialized, so there is no uninitialized state.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Status {
    /// The initial data is loaded and the guard zones are filled.
    Initialized,
    /// At least one step has been taken, and the final time is not reached.
    Stepping,
    /// The clock has reached the final time. Further steps do nothing.
    Converged,
}




/// A first-order (piecewise constant) Godunov scheme for the Euler equations
/// on a structured mesh, using the HLL Riemann solver. Each step sweeps the
/// faces normal to each axis, in the way selected by `Splitting`.
///
/// The guard zones are refilled once per step, after every sweep. Under
/// `Splitting::Sequential` the y-sweep therefore reads guard values left over
/// from before the x-sweep; this is a first-order approximation, and differs
/// from textbook dimensional splitting.
///
pub struct Solver {
    config: Config,
    mesh: Mesh,
    conserved: Patch,
    time: f64,
    iteration: u64,
    status: Status,
}




// ============================================================================
impl Solver {

    /// Allocate the conserved data on the mesh, sample the initial condition
    /// at each zone center, and fill the guard zones.
    ///
    pub fn new<I: InitialCondition>(config: Config, mesh: Mesh, initial: &I) -> Result<Self, Error> {
        config.validate()?;
        mesh.validate()?;

        let gamma_law_index = config.gamma_law_index;
        let interior = mesh.index_space();
        let mut conserved = Patch::from_slice_function(mesh.extended_index_space(), NUM_FIELDS, |index, u| {
            if interior.contains(index) {
                initial
                    .primitive_at(mesh.cell_center(index))
                    .to_conserved(gamma_law_index)
                    .write_to_slice(u)
            }
        });
        apply_boundaries(&mut conserved, &mesh, &config.boundaries);

        info!(
            "initialized {:?} mesh with {}x{} zones (gamma={}, courant={}, t_final={})",
            mesh.rank,
            mesh.size.0,
            mesh.size.1,
            config.gamma_law_index,
            config.courant_number,
            config.final_time);

        let solver = Self {
            config,
            mesh,
            conserved,
            time: 0.0,
            iteration: 0,
            status: Status::Initialized,
        };

        if solver.config.check_finite {
            solver.validate()?;
        }
        Ok(solver)
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn conserved_at(&self, index: (i64, i64)) -> Conserved {
        Conserved::from_slice(self.conserved.get_slice(index))
    }

    pub fn primitive_at(&self, index: (i64, i64)) -> Primitive {
        self.conserved_at(index).to_primitive(self.config.gamma_law_index)
    }

    /// Return the volume integral of each conserved quantity over the
    /// interior zones.
    ///
    pub fn total_conserved(&self) -> Conserved {
        let dv = self.mesh.cell_volume();
        self.mesh
            .index_space()
            .iter()
            .map(|index| self.conserved_at(index))
            .fold(Conserved::new(0.0, 0.0, 0.0, 0.0), |a, b| a + b) * dv
    }

    /// Return a snapshot of the primitive variables on the interior zones.
    ///
    pub fn solution(&self) -> Solution {
        let interior = self.mesh.index_space();
        let mut solution = Solution::new(self.time, self.iteration, self.mesh.clone(), self.config.clone());

        for index in interior.iter() {
            solution.push(self.mesh.cell_center(index), self.primitive_at(index));
        }
        solution
    }

    /// Return the largest stable time step, from the CFL condition
    /// dt = C min(dx, dy) / max(|vx| + |vy| + cs). The step is clipped so
    /// the clock does not pass the final time.
    ///
    pub fn time_step(&self) -> f64 {
        let gamma_law_index = self.config.gamma_law_index;
        let max_signal_speed = self
            .mesh
            .index_space()
            .par_iter()
            .map(|index| self.primitive_at(index).max_signal_speed(gamma_law_index))
            .reduce(|| 0.0, f64::max);

        let dt = self.config.courant_number * self.mesh.min_spacing() / max_signal_speed;
        let remaining = self.config.final_time - self.time;

        if self.time + dt > self.config.final_time {
            remaining
        } else {
            dt
        }
    }

    /// Take one step: compute the time step, sweep each axis, refill the
    /// guard zones, and advance the clock. A time step that is zero or not a
    /// number, which an infinite signal speed produces, ends the run with an
    /// error whether or not `check_finite` is set.
    ///
    pub fn step(&mut self) -> Result<Status, Error> {
        if self.status == Status::Converged {
            return Ok(Status::Converged)
        }

        let dt = self.time_step();

        if !(dt > 0.0 && dt.is_finite()) {
            warn!("[{}] t={} time step {} cannot advance the clock", self.iteration, self.time, dt);
            return Err(Error::InvalidTimeStep {
                iteration: self.iteration,
                time: self.time,
                dt,
            })
        }
        let is_final = dt >= self.config.final_time - self.time;

        match self.config.splitting {
            Splitting::Unsplit => {
                self.sweep(self.mesh.axes(), dt);
            }
            Splitting::Sequential => {
                for &axis in self.mesh.axes() {
                    self.sweep(&[axis], dt);
                }
            }
        }
        apply_boundaries(&mut self.conserved, &self.mesh, &self.config.boundaries);

        self.iteration += 1;

        if is_final {
            self.time = self.config.final_time;
            self.status = Status::Converged;
        } else {
            self.time += dt;
            self.status = Status::Stepping;
        }
        debug!("[{}] t={:.6} dt={:.6e}", self.iteration, self.time, dt);

        if self.config.check_finite {
            self.validate()?;
        }
        Ok(self.status)
    }

    /// Step until the final time is reached.
    ///
    pub fn run(&mut self) -> Result<Status, Error> {
        let start = std::time::Instant::now();

        while self.step()? != Status::Converged {}

        info!(
            "reached t={} after {} iterations in {:.3}s",
            self.time,
            self.iteration,
            start.elapsed().as_secs_f64());

        Ok(self.status)
    }

    /// Update the interior zones with the fluxes through the faces normal to
    /// the given axes. All the face fluxes are computed from the current
    /// state before any zone is written.
    ///
    fn sweep(&mut self, axes: &[Axis], dt: f64) {
        let gamma_law_index = self.config.gamma_law_index;
        let interior = self.mesh.index_space();
        let (dx, dy) = self.mesh.cell_spacing();

        let u = &self.conserved;
        let fluxes: Vec<_> = axes
            .iter()
            .map(|&axis| {
                let dt_dx = dt / match axis {
                    Axis::I => dx,
                    Axis::J => dy,
                };
                (axis, dt_dx, Self::compute_flux(u, &interior, axis, gamma_law_index))
            })
            .collect();

        let updated = Patch::par_from_slice_function(interior.clone(), NUM_FIELDS, |index, v| {
            fluxes
                .iter()
                .fold(Conserved::from_slice(u.get_slice(index)), |u0, (axis, dt_dx, flux)| {
                    let fm = Conserved::from_slice(flux.get_slice(index));
                    let fp = Conserved::from_slice(flux.get_slice(neighbor(index, *axis, 1)));
                    u0 - (fp - fm) * *dt_dx
                })
                .write_to_slice(v)
        });

        self.conserved.copy_region_from(&updated, &interior);
    }

    /// Compute the HLL fluxes on every face normal to `axis` bounding the
    /// interior zones. Face `(i, j)` lies on the lower side of zone `(i, j)`.
    ///
    fn compute_flux(u: &Patch, interior: &IndexSpace, axis: Axis, gamma_law_index: f64) -> Patch {
        let direction = Direction::from(axis);

        Patch::par_from_slice_function(interior.extend_upper(1, axis), NUM_FIELDS, |index, f| {
            let ul = Conserved::from_slice(u.get_slice(neighbor(index, axis, -1)));
            let ur = Conserved::from_slice(u.get_slice(index));
            euler::riemann_hll(ul, ur, direction, gamma_law_index).write_to_slice(f)
        })
    }

    fn validate(&self) -> Result<(), Error> {
        let gamma_law_index = self.config.gamma_law_index;
        let invalid = self
            .mesh
            .index_space()
            .par_iter()
            .find_map_first(|index| {
                self.conserved_at(index)
                    .try_to_primitive(gamma_law_index)
                    .err()
                    .map(|e| (index, e))
            });

        match invalid {
            None => Ok(()),
            Some((index, source)) => {
                warn!("invalid state in zone {:?} at t={}: {}", index, self.time, source);
                Err(Error::InvalidState {
                    iteration: self.iteration,
                    time: self.time,
                    index,
                    source: Box::new(source),
                })
            }
        }
    }
}




fn neighbor(index: (i64, i64), axis: Axis, delta: i64) -> (i64, i64) {
    match axis {
        Axis::I => (index.0 + delta, index.1),
        Axis::J => (index.0, index.1 + delta),
    }
}
