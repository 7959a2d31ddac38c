//! Print the parsed metadata of a SWIFT snapshot.
//!
//! Usage: `cargo run --example inspect -- <snapshot.hdf5>`

use swiftsnap::SwiftDataset;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: inspect <snapshot.hdf5>")?;

    if !swiftsnap::is_swift_snapshot(&path) {
        return Err(format!("{path}: not a SWIFT snapshot").into());
    }

    let ds = SwiftDataset::open(&path)?;
    println!("snapshot:      {}", ds.filename.display());
    println!("box:           {:?}", ds.domain.right_edge);
    println!("dimensions:    {}", ds.domain.dimensionality);
    println!("periodic:      {:?}", ds.domain.periodicity);
    println!("time:          {} (code units)", ds.current_time);

    if ds.cosmological_simulation {
        println!("cosmology:     z = {}", ds.cosmology.current_redshift);
        println!("  omega_m:     {}", ds.cosmology.omega_matter);
        println!("  omega_l:     {}", ds.cosmology.omega_lambda);
        println!("  h:           {}", ds.cosmology.hubble_constant);
    } else {
        println!("cosmology:     non-cosmological run");
    }

    if let Some(units) = &ds.units {
        println!("code units:");
        println!("  length:      {:e} {}", units.length.value, units.length.unit);
        println!("  mass:        {:e} {}", units.mass.value, units.mass.unit);
        println!("  time:        {:e} {}", units.time.value, units.time.unit);
        println!(
            "  temperature: {:e} {}",
            units.temperature.value, units.temperature.unit
        );
    }

    let mut hydro: Vec<_> = ds.parameters.hydro.iter().collect();
    hydro.sort_by(|a, b| a.0.cmp(b.0));
    println!("hydro scheme:");
    for (name, value) in hydro {
        println!("  {name}: {value:?}");
    }

    Ok(())
}
