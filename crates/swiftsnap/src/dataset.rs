//! The parsed snapshot descriptor.

use std::path::PathBuf;

use crate::attrs::AttrMap;
use crate::cosmology::Cosmology;
use crate::domain::Domain;
use crate::units::CodeUnits;

#[cfg(feature = "hdf5")]
use std::path::Path;

#[cfg(feature = "hdf5")]
use crate::error::Error;
#[cfg(feature = "hdf5")]
use crate::frontend::HostContext;

/// The raw attribute dictionaries retained from the snapshot, keyed by the
/// role of the group they came from.
///
/// These are carried verbatim for downstream inspection; nothing here is
/// interpreted beyond what the typed fields of [`SwiftDataset`] already
/// capture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawParameters {
    pub header: AttrMap,
    pub policy: AttrMap,
    pub parameters: AttrMap,
    /// Empty for snapshots written after the `RuntimePars` group was
    /// removed from the format.
    pub runtime_parameters: AttrMap,
    pub hydro: AttrMap,
    pub subgrid: AttrMap,
}

/// Parsed metadata of one SWIFT snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SwiftDataset {
    /// Path the snapshot was opened from.
    pub filename: PathBuf,
    /// Box geometry and periodicity.
    pub domain: Domain,
    /// Simulation time in code units; `units` carries the cgs scale.
    pub current_time: f64,
    /// Whether this is a cosmological run after the demotion rule in
    /// [`crate::cosmology`] has been applied.
    pub cosmological_simulation: bool,
    /// Cosmological parameters, all zero for non-cosmological runs.
    pub cosmology: Cosmology,
    /// The internal unit system. `None` only between the parse and
    /// set-units phases; always `Some` after [`SwiftDataset::open`].
    pub units: Option<CodeUnits>,
    /// Raw attribute dictionaries for downstream consumers.
    pub parameters: RawParameters,
    /// SWIFT never splits a snapshot across files.
    pub file_count: usize,
    /// Template for locating data files; with one file per snapshot this
    /// is the input path itself.
    pub filename_template: PathBuf,
}

impl SwiftDataset {
    /// Open and fully parse a snapshot.
    ///
    /// Convenience for single-process use: runs both load phases with the
    /// default [`HostContext`].
    #[cfg(feature = "hdf5")]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::open_with(path, &HostContext::default())
    }

    /// Open and fully parse a snapshot with an explicit host context.
    #[cfg(feature = "hdf5")]
    pub fn open_with<P: AsRef<Path>>(path: P, ctx: &HostContext) -> Result<Self, Error> {
        crate::frontend::load::<crate::frontend::SwiftFrontend>(path.as_ref(), ctx)
    }
}

/// Parse the metadata groups of a snapshot into a descriptor.
#[cfg(feature = "hdf5")]
pub(crate) fn parse_parameter_file(path: &Path) -> Result<SwiftDataset, Error> {
    use crate::{attrs, cosmology, domain, reader, schema};

    let header = reader::read_group_attrs(path, schema::HEADER)?;
    // RuntimePars disappeared from the format at SWIFT 0.9.0; its absence
    // switches the periodicity source over to Parameters.
    let runtime = if reader::has_group(path, schema::RUNTIME_PARS)? {
        Some(reader::read_group_attrs(path, schema::RUNTIME_PARS)?)
    } else {
        None
    };
    let policy = reader::read_group_attrs(path, schema::POLICY)?;
    let parameters = reader::read_group_attrs(path, schema::PARAMETERS)?;
    let hydro = reader::read_group_attrs(path, schema::HYDRO_SCHEME)?;
    let subgrid = reader::read_group_attrs(path, schema::SUBGRID_SCHEME)?;

    let domain = domain::derive_domain(&header, runtime.as_ref(), &parameters)?;
    let current_time = attrs::require_f64(&header, schema::HEADER, schema::TIME)?;

    let policy_flag =
        attrs::require_i64(&policy, schema::POLICY, schema::COSMOLOGICAL_INTEGRATION)? != 0;
    let (cosmological_simulation, cosmology) = if policy_flag {
        cosmology::derive_cosmology(&header, &parameters)?
    } else {
        (false, Cosmology::default())
    };

    Ok(SwiftDataset {
        filename: path.to_path_buf(),
        domain,
        current_time,
        cosmological_simulation,
        cosmology,
        units: None,
        parameters: RawParameters {
            header,
            policy,
            parameters,
            runtime_parameters: runtime.unwrap_or_default(),
            hydro,
            subgrid,
        },
        file_count: 1,
        filename_template: path.to_path_buf(),
    })
}

/// Resolve the `Units` group and attach it to the descriptor.
#[cfg(feature = "hdf5")]
pub(crate) fn set_code_units(dataset: &mut SwiftDataset, ctx: &HostContext) -> Result<(), Error> {
    use crate::{reader, schema, units};

    let unit_attrs = reader::read_group_attrs(&dataset.filename, schema::UNITS)?;
    dataset.units = Some(units::resolve_code_units(
        &unit_attrs,
        dataset.cosmological_simulation,
        ctx,
    )?);
    Ok(())
}
