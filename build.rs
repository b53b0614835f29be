#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_bignum_capacity(&outdir_path, "bignum_capacity.rs")?;
    Ok(())
}

/// Create bignum_capacity.rs, containg definition of constant BIGNUM_CAPACITY
fn write_bignum_capacity(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{

    let capacity = env::var("RUST_BIGNUM_CAPACITY")
        .map(|s| s.parse::<std::num::NonZeroUsize>().expect("$RUST_BIGNUM_CAPACITY must be an integer > 0"))
        .map(|nz_num| nz_num.into())
        .unwrap_or(64usize);

    let bignum_capacity_rs_path = outdir_path.join(filename);

    let bignum_capacity = format!("const BIGNUM_CAPACITY: usize = {capacity};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&bignum_capacity_rs_path) {
        Ok(existing_contents) if existing_contents == bignum_capacity => {},
        _ => {
            let mut bignum_capacity_rs = File::create(&bignum_capacity_rs_path)
                .expect("Could not create bignum_capacity.rs");
            write!(bignum_capacity_rs, "{bignum_capacity}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", bignum_capacity_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_BIGNUM_CAPACITY");

    Ok(())
}
