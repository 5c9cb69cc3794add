//! Loads this crate's own cdylib at runtime and rounds through the routine it
//! exports, the same way an externally built routine is picked up.

#![cfg(not(feature = "linked-routine"))]

use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};
use std::path::PathBuf;

use gini_compat::{BridgeError, DEFAULT_SENTINEL, ExternalLibrary, NATIVE_ROUTINE_SYMBOL};

/// The cdylib cargo builds next to the test binary (`deps/`) and uplifts one
/// directory above it.
fn built_cdylib() -> PathBuf {
    let exe = std::env::current_exe().expect("test executable path");
    let deps = exe.parent().expect("test executable directory");
    let name = format!("{DLL_PREFIX}gini_compat{DLL_SUFFIX}");
    [Some(deps.join(&name)), deps.parent().map(|dir| dir.join(&name))]
        .into_iter()
        .flatten()
        .find(|path| path.exists())
        .unwrap_or_else(|| panic!("{name} should be built near {}", deps.display()))
}

#[test]
fn exported_routine_rounds_through_the_slot() {
    let library = unsafe { ExternalLibrary::open(built_cdylib()) }.expect("cdylib should load");
    let bridge =
        unsafe { library.bridge(NATIVE_ROUTINE_SYMBOL) }.expect("native routine is exported");

    assert_eq!(bridge.symbol(), NATIVE_ROUTINE_SYMBOL);
    assert_eq!(bridge.sentinel(), DEFAULT_SENTINEL);
    assert_eq!(bridge.round(-42.5), -43);
    assert_eq!(bridge.round(42.7), 43);
    assert_eq!(bridge.round_checked(-999.0), Ok(-999));
}

#[test]
fn decorated_name_resolves_to_canonical_export() {
    let library = unsafe { ExternalLibrary::open(built_cdylib()) }.expect("cdylib should load");
    let bridge = unsafe { library.bridge("_native_float_round") }
        .expect("decorated name should fall back to the canonical export");

    assert_eq!(bridge.symbol(), NATIVE_ROUTINE_SYMBOL);
    assert_eq!(bridge.round(-0.8), -1);
}

#[test]
fn unexported_routine_is_reported_with_library_path() {
    let path = built_cdylib();
    let library = unsafe { ExternalLibrary::open(&path) }.expect("cdylib should load");
    let err = unsafe { library.bridge("asm_float_round") }.expect_err("not exported here");

    assert_eq!(
        err,
        BridgeError::SymbolNotFound {
            symbol: "asm_float_round".to_string(),
            path: path.display().to_string(),
        }
    );
}
