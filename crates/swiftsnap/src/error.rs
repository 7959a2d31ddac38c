//! Error type for snapshot reading and parsing.

use std::fmt;

/// Errors that can occur while reading SWIFT snapshot metadata.
#[derive(Debug)]
pub enum Error {
    /// The crate was built without the `hdf5` feature, so snapshot files
    /// cannot be opened.
    BindingUnavailable,
    /// Error reported by the HDF5 binding itself.
    #[cfg(feature = "hdf5")]
    Hdf5(hdf5::Error),
    /// A group the parser needs is missing from the snapshot.
    GroupNotFound(String),
    /// An attribute the parser needs is missing from its group, reported as
    /// `Group/attribute`.
    AttributeNotFound(String),
    /// An attribute is present but its value cannot be converted to the
    /// type the parser needs.
    TypeError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BindingUnavailable => {
                write!(f, "snapshot access requires the `hdf5` feature")
            }
            #[cfg(feature = "hdf5")]
            Error::Hdf5(e) => write!(f, "HDF5 error: {e}"),
            Error::GroupNotFound(name) => write!(f, "group not found: {name}"),
            Error::AttributeNotFound(name) => write!(f, "attribute not found: {name}"),
            Error::TypeError(msg) => write!(f, "type error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "hdf5")]
            Error::Hdf5(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "hdf5")]
impl From<hdf5::Error> for Error {
    fn from(e: hdf5::Error) -> Self {
        Error::Hdf5(e)
    }
}
