//! Reader for the metadata of SWIFT simulation snapshots.
//!
//! [SWIFT](https://swift.dur.ac.uk) is a smoothed-particle-hydrodynamics
//! code for cosmological and astrophysical simulations. Each snapshot it
//! writes is a single HDF5 file carrying the full run configuration as
//! attributes in a handful of root-level groups, alongside the particle
//! data. This crate validates candidate files and parses those attribute
//! groups into a typed [`SwiftDataset`]: domain geometry, cosmology, the
//! internal unit system and the raw per-group dictionaries.
//!
//! File access goes through the `hdf5` binding behind the default `hdf5`
//! feature; with the feature disabled the parsing layers still compile and
//! validation reports every file as invalid.
//!
//! # Example
//!
//! ```no_run
//! use swiftsnap::SwiftDataset;
//!
//! # #[cfg(feature = "hdf5")] {
//! let ds = SwiftDataset::open("snapshot_0000.hdf5").unwrap();
//! println!(
//!     "box {:?}, z = {}",
//!     ds.domain.right_edge, ds.cosmology.current_redshift
//! );
//! for (name, value) in &ds.parameters.hydro {
//!     println!("{name}: {value:?}");
//! }
//! # }
//! ```

use std::path::Path;

pub mod attrs;
pub mod cosmology;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod frontend;
#[cfg(feature = "hdf5")]
pub mod reader;
pub mod schema;
pub mod units;

pub use attrs::{AttrMap, AttrValue};
pub use cosmology::Cosmology;
pub use dataset::{RawParameters, SwiftDataset};
pub use domain::Domain;
pub use error::Error;
pub use frontend::{load, HostContext, SnapshotFrontend, SwiftFrontend};
pub use schema::{SwiftSchema, SWIFT_SCHEMA};
pub use units::{CodeUnits, Quantity, Unit};

/// Whether the HDF5 binding was compiled in (the `hdf5` cargo feature).
pub fn hdf5_available() -> bool {
    cfg!(feature = "hdf5")
}

/// Check whether `path` is a SWIFT snapshot.
///
/// True exactly when the file opens as HDF5 and its `Header/Code`
/// attribute is the literal `"SWIFT"`. Every failure mode answers `false`:
/// a missing or unreadable file, a foreign HDF5 layout, a different
/// producing code, or a build without the `hdf5` feature.
pub fn is_swift_snapshot<P: AsRef<Path>>(path: P) -> bool {
    if schema::SWIFT_SCHEMA.missing_load_requirements() {
        return false;
    }
    #[cfg(feature = "hdf5")]
    {
        matches!(reader::read_code_tag(path.as_ref()), Ok(tag) if tag == schema::CODE_TAG)
    }
    #[cfg(not(feature = "hdf5"))]
    {
        let _ = path;
        false
    }
}
