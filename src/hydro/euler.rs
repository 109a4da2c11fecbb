use std::ops::{Add, Div, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use super::error::Error;
use super::geometry::Direction;




/// Number of conserved (and primitive) fields per zone.
pub const NUM_FIELDS: usize = 4;




// ============================================================================
/**
 * Conserved variables of the planar Euler equations: mass density, the two
 * momentum density components, and total energy density. One-dimensional
 * runs carry a transverse momentum which is identically zero.
 */
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conserved(pub f64, pub f64, pub f64, pub f64);

/**
 * Primitive variables: mass density, velocity components, gas pressure.
 * Always derived from `Conserved` on demand; never the source of truth.
 */
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Primitive(pub f64, pub f64, pub f64, pub f64);




// ============================================================================
impl Conserved {

    pub fn new(mass_density: f64, momentum_1: f64, momentum_2: f64, energy_density: f64) -> Self {
        Self(mass_density, momentum_1, momentum_2, energy_density)
    }

    pub fn from_slice(cons: &[f64]) -> Self {
        Self(cons[0], cons[1], cons[2], cons[3])
    }

    pub fn write_to_slice(&self, cons: &mut [f64]) {
        cons[0] = self.0;
        cons[1] = self.1;
        cons[2] = self.2;
        cons[3] = self.3;
    }

    pub fn as_array(&self) -> [f64; NUM_FIELDS] {
        [self.0, self.1, self.2, self.3]
    }

    pub fn mass_density(&self) -> f64 {
        self.0
    }

    pub fn momentum_1(&self) -> f64 {
        self.1
    }

    pub fn momentum_2(&self) -> f64 {
        self.2
    }

    pub fn energy_density(&self) -> f64 {
        self.3
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite() && self.3.is_finite()
    }

    /**
     * Recover the primitive state with the ideal-gas equation of state,
     * p = (gamma - 1) (E - rho |v|^2 / 2). The mass density must be positive;
     * this is checked only in debug builds, and otherwise produces non-finite
     * values.
     */
    pub fn to_primitive(&self, gamma_law_index: f64) -> Primitive {
        debug_assert!(
            self.mass_density() > 0.0,
            "non-positive mass density {}",
            self.mass_density());

        let d = self.mass_density();
        let v1 = self.momentum_1() / d;
        let v2 = self.momentum_2() / d;
        let ek = 0.5 * d * (v1 * v1 + v2 * v2);
        let pg = (gamma_law_index - 1.0) * (self.energy_density() - ek);
        Primitive(d, v1, v2, pg)
    }

    /**
     * Recover the primitive state, failing if the result is not physically
     * admissible: non-finite fields, non-positive density, or negative
     * pressure.
     */
    pub fn try_to_primitive(&self, gamma_law_index: f64) -> Result<Primitive, Error> {
        if !self.is_finite() {
            return Err(Error::NonFiniteState)
        }
        if self.mass_density() <= 0.0 {
            return Err(Error::NegativeMassDensity(self.mass_density()))
        }
        let prim = self.to_primitive(gamma_law_index);

        if !prim.gas_pressure().is_finite() {
            Err(Error::NonFiniteState)
        } else if prim.gas_pressure() < 0.0 {
            Err(Error::NegativeGasPressure(prim.gas_pressure()))
        } else {
            Ok(prim)
        }
    }

    /**
     * The exact Euler flux of this state through a surface normal to the
     * given direction.
     */
    pub fn flux_vector(&self, direction: Direction, gamma_law_index: f64) -> Conserved {
        let prim = self.to_primitive(gamma_law_index);
        let pg = prim.gas_pressure();
        let vn = prim.velocity(direction);

        Conserved(
            self.0 * vn,
            self.1 * vn + pg * direction.along(Direction::X),
            self.2 * vn + pg * direction.along(Direction::Y),
            (self.3 + pg) * vn)
    }

    /**
     * Return the mirror image of this state across a wall normal to the
     * given direction: the normal momentum changes sign.
     */
    pub fn reflect(&self, direction: Direction) -> Conserved {
        match direction {
            Direction::X => Conserved(self.0, -self.1, self.2, self.3),
            Direction::Y => Conserved(self.0, self.1, -self.2, self.3),
        }
    }
}




// ============================================================================
impl Primitive {

    pub fn new(mass_density: f64, velocity_1: f64, velocity_2: f64, gas_pressure: f64) -> Self {
        Self(mass_density, velocity_1, velocity_2, gas_pressure)
    }

    pub fn mass_density(&self) -> f64 {
        self.0
    }

    pub fn velocity_1(&self) -> f64 {
        self.1
    }

    pub fn velocity_2(&self) -> f64 {
        self.2
    }

    pub fn gas_pressure(&self) -> f64 {
        self.3
    }

    pub fn velocity(&self, direction: Direction) -> f64 {
        match direction {
            Direction::X => self.velocity_1(),
            Direction::Y => self.velocity_2(),
        }
    }

    pub fn velocity_squared(&self) -> f64 {
        self.1 * self.1 + self.2 * self.2
    }

    pub fn sound_speed_squared(&self, gamma_law_index: f64) -> f64 {
        gamma_law_index * self.gas_pressure() / self.mass_density()
    }

    pub fn sound_speed(&self, gamma_law_index: f64) -> f64 {
        self.sound_speed_squared(gamma_law_index).sqrt()
    }

    /**
     * Return the slowest and fastest acoustic signal speeds, v - c and
     * v + c, along the given direction.
     */
    pub fn outer_wavespeeds(&self, direction: Direction, gamma_law_index: f64) -> (f64, f64) {
        let cs = self.sound_speed(gamma_law_index);
        let vn = self.velocity(direction);
        (vn - cs, vn + cs)
    }

    /**
     * The signal speed bound used by the CFL condition: |v1| + |v2| + c.
     */
    pub fn max_signal_speed(&self, gamma_law_index: f64) -> f64 {
        self.velocity_1().abs() + self.velocity_2().abs() + self.sound_speed(gamma_law_index)
    }

    pub fn to_conserved(&self, gamma_law_index: f64) -> Conserved {
        let d = self.mass_density();
        let p = self.gas_pressure();
        let vsq = self.velocity_squared();

        Conserved(
            d,
            d * self.velocity_1(),
            d * self.velocity_2(),
            d * vsq * 0.5 + p / (gamma_law_index - 1.0))
    }
}




// ============================================================================
impl Add<Conserved> for Conserved {
    type Output = Conserved;
    fn add(self, u: Self) -> Conserved {
        Conserved(self.0 + u.0, self.1 + u.1, self.2 + u.2, self.3 + u.3)
    }
}

impl Sub<Conserved> for Conserved {
    type Output = Self;
    fn sub(self, u: Self) -> Self {
        Self(self.0 - u.0, self.1 - u.1, self.2 - u.2, self.3 - u.3)
    }
}

impl Mul<f64> for Conserved {
    type Output = Self;
    fn mul(self, a: f64) -> Self {
        Self(self.0 * a, self.1 * a, self.2 * a, self.3 * a)
    }
}

impl Div<f64> for Conserved {
    type Output = Self;
    fn div(self, a: f64) -> Self {
        Self(self.0 / a, self.1 / a, self.2 / a, self.3 / a)
    }
}

impl Neg for Conserved {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0, -self.1, -self.2, -self.3)
    }
}




// ============================================================================
/**
 * The HLL approximate Riemann solver. Returns the numerical flux through an
 * interface normal to `direction`, separating the conserved states `ul`
 * (behind) and `ur` (ahead). The outer signal speeds are the Davis estimates
 * sl = min(vl - cl, vr - cr) and sr = max(vl + cl, vr + cr).
 *
 * Identical states return their exact flux. If sl >= 0 the whole wave fan
 * moves downstream and the left flux is returned; if sr <= 0 the right flux is returned. Only when sl < 0 < sr is
 * the averaged state used, so the denominator sr - sl is never zero.
 */
pub fn riemann_hll(ul: Conserved, ur: Conserved, direction: Direction, gamma_law_index: f64) -> Conserved {
    if ul == ur {
        return ul.flux_vector(direction, gamma_law_index)
    }

    let pl = ul.to_primitive(gamma_law_index);
    let pr = ur.to_primitive(gamma_law_index);

    let (alm, alp) = pl.outer_wavespeeds(direction, gamma_law_index);
    let (arm, arp) = pr.outer_wavespeeds(direction, gamma_law_index);
    let sl = alm.min(arm);
    let sr = alp.max(arp);

    let fl = ul.flux_vector(direction, gamma_law_index);
    let fr = ur.flux_vector(direction, gamma_law_index);

    if sl >= 0.0 {
        fl
    } else if sr <= 0.0 {
        fr
    } else {
        (fl * sr - fr * sl + (ur - ul) * (sl * sr)) / (sr - sl)
    }
}
