use std::error::Error;

/// Stamps the binary with its build time so requests can be traced back to a build.
fn main() -> Result<(), Box<dyn Error>> {
    // Set build timestamp in milliseconds since epoch
    let build_timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_millis()
        .to_string();
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp);
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
