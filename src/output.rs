use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::config::Config;
use crate::hydro::error::Error;
use crate::hydro::euler::Primitive;
use crate::mesh::Mesh;




/**
 * A snapshot of the primitive variables on the interior zones of a mesh,
 * with the zone centers. Zones are stored in row-major order: the second
 * (y) index increases fastest.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub time: f64,
    pub iteration: u64,
    pub mesh: Mesh,
    pub config: Config,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub density: Vec<f64>,
    pub velocity_x: Vec<f64>,
    pub velocity_y: Vec<f64>,
    pub pressure: Vec<f64>,
}




// ============================================================================
impl Solution {

    pub fn new(time: f64, iteration: u64, mesh: Mesh, config: Config) -> Self {
        let n = mesh.total_zones();
        Self {
            time,
            iteration,
            mesh,
            config,
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            density: Vec::with_capacity(n),
            velocity_x: Vec::with_capacity(n),
            velocity_y: Vec::with_capacity(n),
            pressure: Vec::with_capacity(n),
        }
    }

    /**
     * Append one zone. Zones must be pushed in row-major order.
     */
    pub fn push(&mut self, center: (f64, f64), primitive: Primitive) {
        self.x.push(center.0);
        self.y.push(center.1);
        self.density.push(primitive.mass_density());
        self.velocity_x.push(primitive.velocity_1());
        self.velocity_y.push(primitive.velocity_2());
        self.pressure.push(primitive.gas_pressure());
    }

    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }

    /**
     * Return the primitive state of the zone with the given (i, j) index.
     */
    pub fn zone(&self, index: (usize, usize)) -> Primitive {
        let n = index.0 * self.mesh.size.1 + index.1;
        Primitive::new(self.density[n], self.velocity_x[n], self.velocity_y[n], self.pressure[n])
    }

    /**
     * Return the zones along the x-axis at the given y index.
     */
    pub fn row(&self, j: usize) -> Vec<Primitive> {
        (0..self.mesh.size.0).map(|i| self.zone((i, j))).collect()
    }

    pub fn write_cbor<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut buffer = BufWriter::new(file);
        ciborium::ser::into_writer(self, &mut buffer).map_err(|e| Error::Serialize(format!("{:?}", e)))?;
        buffer.flush()?;
        Ok(())
    }

    pub fn read_cbor<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        ciborium::de::from_reader(BufReader::new(file)).map_err(|e| Error::Serialize(format!("{:?}", e)))
    }

    /**
     * Write whitespace-separated columns `x y rho vx vy p`, one zone per
     * line, for plotting.
     */
    pub fn write_dat<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut file = BufWriter::new(File::create(path)?);

        writeln!(file, "# t={:.8e} iteration={}", self.time, self.iteration)?;

        for n in 0..self.len() {
            writeln!(
                file,
                "{:+.8e} {:+.8e} {:+.8e} {:+.8e} {:+.8e} {:+.8e}",
                self.x[n],
                self.y[n],
                self.density[n],
                self.velocity_x[n],
                self.velocity_y[n],
                self.pressure[n])?;
        }
        file.flush()?;
        Ok(())
    }
}
