#![allow(non_upper_case_globals)]

//! Physical constants and the natural unit system of the infinite well.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = 1.054571817e-34;
//                +/- 0 (exact, truncated)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg), CODATA 2014
pub const me: f64 = 9.10938356e-31;
//              +/- 0.00000011e-31

/// ångström (m)
pub const angstrom: f64 = 1e-10;
//                    +/- 0 (exact)

/// Natural scaling factors for a particle of mass `m` in a box of length `a`.
///
/// The energy unit is the ground-state energy of the box and the time unit is
/// the associated characteristic time, so that in natural units the `n`-th
/// eigenstate has energy `n²` and accumulates phase as `exp(-i n² t)`.
///
/// See [`docs/units`][crate::docs#units] for more information.
#[derive(Copy, Clone, Debug)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Box length.
    pub a: f64,
    /// Ground-state energy, π²ħ² / 2ma².
    pub e: f64,
    /// Characteristic time, ħ / e = 2ma² / π²ħ.
    pub t: f64,
}

impl Units {
    /// Construct from a mass, box length, and reduced Planck constant given in
    /// meters/kilograms/seconds (MKS) units.
    pub fn from_mks(mass: f64, a: f64, hbar_mks: f64) -> Self {
        let e_unit = (PI * hbar_mks).powi(2) / 2.0 / mass / a.powi(2);
        let t_unit = hbar_mks / e_unit;
        Self { m: mass, a, e: e_unit, t: t_unit }
    }

    /// Convert a quantity with dimensions of energy in the base unit system to
    /// multiples of the ground-state energy.
    pub fn to_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e.recip()
    }
}
