//! Names and conventions of the SWIFT snapshot layout.
//!
//! SWIFT writes one HDF5 file per snapshot. The run configuration is
//! replicated into a handful of root-level attribute groups, named below,
//! and particle data lives in `PartType*` groups whose member datasets
//! follow the field names in [`SwiftSchema`].

/// Root-level attribute groups.
pub const HEADER: &str = "Header";
pub const POLICY: &str = "Policy";
pub const PARAMETERS: &str = "Parameters";
pub const RUNTIME_PARS: &str = "RuntimePars";
pub const HYDRO_SCHEME: &str = "HydroScheme";
pub const SUBGRID_SCHEME: &str = "SubgridScheme";
pub const UNITS: &str = "Units";

/// `Header` attributes the parser consumes.
pub const CODE: &str = "Code";
pub const BOX_SIZE: &str = "BoxSize";
pub const DIMENSION: &str = "Dimension";
pub const TIME: &str = "Time";
pub const REDSHIFT: &str = "Redshift";

/// Value of `Header/Code` in files produced by SWIFT.
pub const CODE_TAG: &str = "SWIFT";

/// Periodicity flag in `RuntimePars` (groups written before SWIFT 0.9.0).
pub const PERIODIC_RUNTIME: &str = "PeriodicBoundariesOn";
/// Periodicity flag in `Parameters` (the `RuntimePars` group was dropped
/// in SWIFT 0.9.0 and this key replaces it).
pub const PERIODIC_PARAM: &str = "InitialConditions:periodic";

/// `Policy` flag marking a cosmological run.
pub const COSMOLOGICAL_INTEGRATION: &str = "cosmological integration";

/// `Parameters` keys carrying the cosmology. `Cosmology:Omega_m` is the
/// deprecated combined matter density; newer files write the
/// baryon/cold-dark-matter split instead.
pub const OMEGA_LAMBDA: &str = "Cosmology:Omega_lambda";
pub const OMEGA_B: &str = "Cosmology:Omega_b";
pub const OMEGA_CDM: &str = "Cosmology:Omega_cdm";
pub const OMEGA_M: &str = "Cosmology:Omega_m";
pub const LITTLE_H: &str = "Cosmology:h";

/// `Units` attributes: cgs magnitudes of the internal unit system.
pub const UNIT_LENGTH: &str = "Unit length in cgs (U_L)";
pub const UNIT_MASS: &str = "Unit mass in cgs (U_M)";
pub const UNIT_TIME: &str = "Unit time in cgs (U_t)";
pub const UNIT_TEMPERATURE: &str = "Unit temperature in cgs (U_T)";

/// Naming and file conventions a host framework needs to locate and read
/// SWIFT data, beyond the metadata this crate parses itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwiftSchema {
    /// Dataset holding particle masses inside each `PartType*` group.
    pub particle_mass: &'static str,
    /// Dataset holding particle positions.
    pub particle_coordinates: &'static str,
    /// Dataset holding particle velocities.
    pub particle_velocities: &'static str,
    /// Particle groups containing gas (SPH) particles.
    pub sph_particle_types: &'static [&'static str],
    /// Filename suffix of snapshot files.
    pub suffix: &'static str,
    /// Optional capabilities this crate must be built with before
    /// snapshots can be opened.
    pub load_requirements: &'static [&'static str],
}

/// The SWIFT snapshot conventions.
pub const SWIFT_SCHEMA: SwiftSchema = SwiftSchema {
    particle_mass: "Masses",
    particle_coordinates: "Coordinates",
    particle_velocities: "Velocities",
    sph_particle_types: &["PartType0"],
    suffix: ".hdf5",
    load_requirements: &["hdf5"],
};

fn requirement_available(name: &str) -> bool {
    match name {
        "hdf5" => crate::hdf5_available(),
        _ => false,
    }
}

impl SwiftSchema {
    /// True when this build lacks a capability needed to load snapshots.
    /// Validation fails closed in that case.
    pub fn missing_load_requirements(&self) -> bool {
        self.load_requirements
            .iter()
            .any(|name| !requirement_available(name))
    }
}
