//! Hllgrid solves the compressible Euler equations of gas dynamics on
//! structured, rectilinear meshes in one and two dimensions. It uses a
//! first-order finite-volume (Godunov) scheme with the HLL approximate
//! Riemann solver, which captures shocks and contact discontinuities without
//! spurious oscillations. The time step is set adaptively by the CFL
//! condition, and solid walls are modeled with reflecting guard zones.
//!
//! The flux computation on each face, and the update of each zone, are
//! independent of one another within a sweep, and are carried out in
//! parallel on the Rayon thread pool.

pub mod boundary;
pub mod config;
pub mod hydro;
pub mod index_space;
pub mod mesh;
pub mod output;
pub mod patch;
pub mod setup;
pub mod solvers;
