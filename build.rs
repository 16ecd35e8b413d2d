use std::{env, fs, path::PathBuf};

/// Copy the memory layout matching the target into OUT_DIR so the linker
/// finds `memory.x`. Host builds need no layout.
fn main() {
    let target = env::var("TARGET").expect("TARGET is set by cargo");

    let source = if target.starts_with("thumbv8m") || target.starts_with("riscv32") {
        Some("memory-pico2.x")
    } else if target.starts_with("thumbv6m") {
        Some("memory-pico1.x")
    } else {
        None
    };

    if let Some(source) = source {
        let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
        let memory_x =
            fs::read_to_string(source).unwrap_or_else(|_| panic!("failed to read {source}"));
        fs::write(out_dir.join("memory.x"), memory_x).expect("failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed={source}");
    }
}
