// File: crates/chart-core/build.rs
// Summary: Build script linking the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry lookups used by the DirectWrite font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
