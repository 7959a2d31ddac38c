//! The contract between a snapshot format and its host framework.
//!
//! Analysis frameworks construct a dataset in two phases: parse the file's
//! own metadata, then attach the unit system. Before either phase runs,
//! candidate files are screened with a validity check that must never fail
//! outright. [`SnapshotFrontend`] captures exactly those hooks and
//! [`load`] drives them in host order; [`SwiftFrontend`] is the one
//! implementation this crate ships.

use std::path::Path;

use crate::dataset::SwiftDataset;
use crate::error::Error;

/// Host-supplied context for a load.
///
/// In multi-process analysis runs every rank parses the full metadata, but
/// only the designated root rank emits informational log lines.
#[derive(Debug, Clone, Copy)]
pub struct HostContext {
    /// Whether this process is the coordinating rank.
    pub is_root: bool,
}

impl Default for HostContext {
    fn default() -> Self {
        HostContext { is_root: true }
    }
}

/// The hooks a snapshot format implements for its host framework.
pub trait SnapshotFrontend {
    /// The dataset descriptor this frontend produces.
    type Dataset;

    /// Cheap format sniff used for auto-detection. Any I/O or format
    /// problem means "not ours", never an error.
    fn is_valid(path: &Path) -> bool;

    /// Build the descriptor from the snapshot's own metadata.
    fn parse_parameter_file(path: &Path) -> Result<Self::Dataset, Error>;

    /// Attach the internal unit system to a parsed descriptor.
    fn set_code_units(dataset: &mut Self::Dataset, ctx: &HostContext) -> Result<(), Error>;
}

/// Construct a dataset the way a host framework does: parse the parameter
/// file, then set code units.
pub fn load<F: SnapshotFrontend>(path: &Path, ctx: &HostContext) -> Result<F::Dataset, Error> {
    let mut dataset = F::parse_parameter_file(path)?;
    F::set_code_units(&mut dataset, ctx)?;
    Ok(dataset)
}

/// The SWIFT snapshot frontend.
pub struct SwiftFrontend;

impl SnapshotFrontend for SwiftFrontend {
    type Dataset = SwiftDataset;

    fn is_valid(path: &Path) -> bool {
        crate::is_swift_snapshot(path)
    }

    fn parse_parameter_file(path: &Path) -> Result<SwiftDataset, Error> {
        #[cfg(feature = "hdf5")]
        {
            crate::dataset::parse_parameter_file(path)
        }
        #[cfg(not(feature = "hdf5"))]
        {
            let _ = path;
            Err(Error::BindingUnavailable)
        }
    }

    fn set_code_units(dataset: &mut SwiftDataset, ctx: &HostContext) -> Result<(), Error> {
        #[cfg(feature = "hdf5")]
        {
            crate::dataset::set_code_units(dataset, ctx)
        }
        #[cfg(not(feature = "hdf5"))]
        {
            let _ = (dataset, ctx);
            Err(Error::BindingUnavailable)
        }
    }
}
