use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

/// Stamps the build time so requests can report which build sent them.
fn main() -> Result<(), Box<dyn Error>> {
    // Build timestamp in milliseconds since epoch
    let build_timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)?
        .as_millis()
        .to_string();
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp);
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
