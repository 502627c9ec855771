use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LIBSHA3_DIR");

    if env::var_os("CARGO_FEATURE_LIBSHA3").is_none() {
        return;
    }

    if let Some(dir) = env::var_os("LIBSHA3_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
    }
}
