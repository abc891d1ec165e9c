//! Hands the linker script to the firmware binary on ARM targets.

use std::env;

fn main() {
    let target = env::var("TARGET").unwrap_or_default();
    if target.starts_with("armv7a") {
        let dir = env::var("CARGO_MANIFEST_DIR").unwrap();
        println!("cargo:rustc-link-search={}", dir);
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
    }
    println!("cargo:rerun-if-changed=link.x");
    println!("cargo:rerun-if-changed=build.rs");
}
