use std::error;
use std::fmt;




/**
 * Error to represent invalid hydrodynamics data, primitive variable recovery
 * failures, or an unusable run setup.
 */
#[derive(Debug)]
pub enum Error {
    NegativeGasPressure(f64),
    NegativeMassDensity(f64),
    NonFiniteState,
    InvalidConfig(String),
    InvalidMesh(String),
    InvalidState {
        iteration: u64,
        time: f64,
        index: (i64, i64),
        source: Box<Error>,
    },
    InvalidTimeStep {
        iteration: u64,
        time: f64,
        dt: f64,
    },
    Io(std::io::Error),
    Serialize(String),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            NegativeGasPressure(p) => write!(fmt, "negative gas pressure: {}", p),
            NegativeMassDensity(d) => write!(fmt, "negative mass density: {}", d),
            NonFiniteState => write!(fmt, "non-finite conserved state"),
            InvalidConfig(what) => write!(fmt, "invalid configuration: {}", what),
            InvalidMesh(what) => write!(fmt, "invalid mesh: {}", what),
            InvalidState { iteration, time, index, source } => write!(
                fmt,
                "invalid state in zone ({} {}) at iteration {} (t={:.6}): {}",
                index.0, index.1, iteration, time, source
            ),
            InvalidTimeStep { iteration, time, dt } => write!(
                fmt,
                "time step {} at iteration {} (t={:.6}) cannot advance the clock",
                dt, iteration, time
            ),
            Io(e) => write!(fmt, "i/o error: {}", e),
            Serialize(what) => write!(fmt, "serialization error: {}", what),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidState { source, .. } => Some(source.as_ref()),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
