//! Simulation domain geometry.

use crate::attrs::{self, AttrMap};
use crate::error::Error;
use crate::schema;

/// The spatial domain of a snapshot.
///
/// Edge vectors follow the shape of the stored `BoxSize`, so their length
/// can differ from `dimensionality` if the file writes a scalar box side
/// for a multidimensional run.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    /// Lower corner of the box, always the origin.
    pub left_edge: Vec<f64>,
    /// Upper corner of the box, in code length units.
    pub right_edge: Vec<f64>,
    /// Number of spatial dimensions of the run.
    pub dimensionality: usize,
    /// Per-axis periodicity. SWIFT boxes are periodic on every axis or on
    /// none, so all entries agree.
    pub periodicity: Vec<bool>,
}

/// Derive the domain from the `Header` attributes plus whichever group
/// carries the periodicity flag.
///
/// Snapshots written before SWIFT 0.9.0 keep the flag in `RuntimePars`;
/// later ones moved it into `Parameters`. Callers pass `runtime` as `Some`
/// exactly when the snapshot still has a `RuntimePars` group.
pub(crate) fn derive_domain(
    header: &AttrMap,
    runtime: Option<&AttrMap>,
    parameters: &AttrMap,
) -> Result<Domain, Error> {
    let right_edge = attrs::require_f64_vec(header, schema::HEADER, schema::BOX_SIZE)?;
    let left_edge = vec![0.0; right_edge.len()];

    let dim = attrs::require_i64(header, schema::HEADER, schema::DIMENSION)?;
    let dimensionality = usize::try_from(dim).map_err(|_| {
        Error::TypeError(format!(
            "{}/{}: dimensionality {dim} is not a valid dimension count",
            schema::HEADER,
            schema::DIMENSION
        ))
    })?;

    let periodic = match runtime {
        Some(rt) => attrs::require_i64(rt, schema::RUNTIME_PARS, schema::PERIODIC_RUNTIME)?,
        None => attrs::require_i64(parameters, schema::PARAMETERS, schema::PERIODIC_PARAM)?,
    } != 0;

    Ok(Domain {
        left_edge,
        right_edge,
        dimensionality,
        periodicity: vec![periodic; dimensionality],
    })
}
