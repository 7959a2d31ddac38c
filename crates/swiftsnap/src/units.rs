//! The snapshot's internal unit system, resolved to cgs.

use std::fmt;

use log::info;

use crate::attrs::{self, AttrMap};
use crate::error::Error;
use crate::frontend::HostContext;
use crate::schema;

/// A cgs unit symbol used by the unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Physical centimetres.
    Centimetre,
    /// Comoving centimetres, for lengths stored in expansion-factor
    /// corrected coordinates.
    ComovingCentimetre,
    Gram,
    Second,
    Kelvin,
}

impl Unit {
    /// The symbol understood by downstream quantity machinery.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Centimetre => "cm",
            Unit::ComovingCentimetre => "cmcm",
            Unit::Gram => "g",
            Unit::Second => "s",
            Unit::Kelvin => "K",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A magnitude attached to a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }
}

/// The base quantities of the internal unit system: one code unit of each
/// dimension, expressed in cgs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeUnits {
    pub length: Quantity,
    pub mass: Quantity,
    pub time: Quantity,
    pub temperature: Quantity,
}

/// Resolve the `Units` group into cgs quantities.
///
/// SWIFT stores comoving coordinates without the h-factors other codes
/// fold in, so for a cosmological run the length magnitude is read as
/// comoving centimetres. Which interpretation was chosen is logged, from
/// the root process only.
pub(crate) fn resolve_code_units(
    units: &AttrMap,
    cosmological: bool,
    ctx: &HostContext,
) -> Result<CodeUnits, Error> {
    let length_cgs = attrs::require_f64(units, schema::UNITS, schema::UNIT_LENGTH)?;
    let length = if cosmological {
        if ctx.is_root {
            info!("assuming length units are in comoving centimetres");
        }
        Quantity::new(length_cgs, Unit::ComovingCentimetre)
    } else {
        if ctx.is_root {
            info!("assuming length units are in physical centimetres");
        }
        Quantity::new(length_cgs, Unit::Centimetre)
    };

    Ok(CodeUnits {
        length,
        mass: Quantity::new(
            attrs::require_f64(units, schema::UNITS, schema::UNIT_MASS)?,
            Unit::Gram,
        ),
        time: Quantity::new(
            attrs::require_f64(units, schema::UNITS, schema::UNIT_TIME)?,
            Unit::Second,
        ),
        temperature: Quantity::new(
            attrs::require_f64(units, schema::UNITS, schema::UNIT_TEMPERATURE)?,
            Unit::Kelvin,
        ),
    })
}
