use std::env;
use std::path::PathBuf;

const DEFAULT_ROUTINE_LIB: &str = "giniround";

fn main() {
    println!("cargo:rerun-if-env-changed=GINI_ROUTINE_LIB_DIR");
    println!("cargo:rerun-if-env-changed=GINI_ROUTINE_LIB");

    if env::var_os("CARGO_FEATURE_LINKED_ROUTINE").is_none() {
        return;
    }

    if let Some(dir) = env::var_os("GINI_ROUTINE_LIB_DIR") {
        println!(
            "cargo:rustc-link-search=native={}",
            PathBuf::from(dir).display()
        );
    }
    let lib = env::var("GINI_ROUTINE_LIB").unwrap_or_else(|_| DEFAULT_ROUTINE_LIB.to_string());
    println!("cargo:rustc-link-lib={lib}");
}
