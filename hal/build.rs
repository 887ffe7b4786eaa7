//! Build script: expose a `thumb` cfg so the semihosting trap can pick the
//! Thumb (`bkpt`) or ARM (`svc`) encoding at compile time.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(thumb)");

    let target = env::var("TARGET").unwrap_or_default();
    if target.starts_with("thumb") {
        println!("cargo:rustc-cfg=thumb");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
