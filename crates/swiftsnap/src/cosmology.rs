//! Cosmological parameters.

use log::{info, warn};

use crate::attrs::{self, AttrMap};
use crate::error::Error;
use crate::schema;

/// Cosmological parameters of a snapshot.
///
/// `Default` is the non-cosmological state: every field zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cosmology {
    /// Redshift of the snapshot.
    pub current_redshift: f64,
    /// Dark-energy density parameter.
    pub omega_lambda: f64,
    /// Total matter density parameter.
    pub omega_matter: f64,
    /// Reduced Hubble parameter h.
    pub hubble_constant: f64,
}

/// Derive the cosmology for a run whose policy flag marked it cosmological.
///
/// Returns `(true, cosmology)` when every expected key is present. When any
/// of them is missing the snapshot predates the cosmology keys, so the run
/// is demoted to non-cosmological as a whole: `(false, zeros)`, with a
/// warning. A key that is present but unreadable is a real error and
/// propagates.
pub(crate) fn derive_cosmology(
    header: &AttrMap,
    parameters: &AttrMap,
) -> Result<(bool, Cosmology), Error> {
    match read_cosmology(header, parameters) {
        Ok(cosmology) => Ok((true, cosmology)),
        Err(Error::AttributeNotFound(_)) => {
            warn!(
                "could not find cosmology information in Parameters, \
                 despite the cosmological integration policy flag"
            );
            info!("setting up as a non-cosmological run; check this");
            Ok((false, Cosmology::default()))
        }
        Err(e) => Err(e),
    }
}

fn read_cosmology(header: &AttrMap, parameters: &AttrMap) -> Result<Cosmology, Error> {
    let current_redshift = attrs::require_f64(header, schema::HEADER, schema::REDSHIFT)?;
    let omega_lambda = attrs::require_f64(parameters, schema::PARAMETERS, schema::OMEGA_LAMBDA)?;
    // The combined Omega_m key is deprecated; files carrying the
    // baryon/cold-dark-matter split are summed instead.
    let omega_matter = if parameters.contains_key(schema::OMEGA_CDM) {
        attrs::require_f64(parameters, schema::PARAMETERS, schema::OMEGA_B)?
            + attrs::require_f64(parameters, schema::PARAMETERS, schema::OMEGA_CDM)?
    } else {
        attrs::require_f64(parameters, schema::PARAMETERS, schema::OMEGA_M)?
    };
    let hubble_constant = attrs::require_f64(parameters, schema::PARAMETERS, schema::LITTLE_H)?;

    Ok(Cosmology {
        current_redshift,
        omega_lambda,
        omega_matter,
        hubble_constant,
    })
}
