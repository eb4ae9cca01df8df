//! Build script for uvtimer-firmware
//!
//! Passes the cortex-m-rt and defmt linker scripts to the binary.
//! `memory.x` comes from embassy-stm32 (`memory-x` feature) for the
//! selected chip.

fn main() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=build.rs");
}
