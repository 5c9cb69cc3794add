use std::path::{Path, PathBuf};

use libloading::Library;

use crate::abi::RoundIntoFn;
use crate::bridge::Bridge;
use crate::error::BridgeError;
use crate::symbols::lookup_candidates;

/// Shared library holding an externally built rounding routine.
#[derive(Debug)]
pub struct ExternalLibrary {
    path: PathBuf,
    library: Library,
}

impl ExternalLibrary {
    /// Loads the library at `path`.
    ///
    /// # Safety
    ///
    /// Loading runs the library's initialisation routines, which can do
    /// anything.
    pub unsafe fn open(path: impl AsRef<Path>) -> Result<Self, BridgeError> {
        let path = path.as_ref();
        let library = unsafe { Library::new(path) }.map_err(|err| BridgeError::LibraryLoad {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        log::info!("loaded external library {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            library,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves `symbol` as a [`RoundIntoFn`] and builds a bridge that
    /// borrows this library.
    ///
    /// The name as given is tried first, then its canonical form, then the
    /// `_`-decorated canonical form.
    ///
    /// # Safety
    ///
    /// The exported symbol must have the [`RoundIntoFn`] signature and honor
    /// the out-parameter contract described on [`Bridge::new`].
    pub unsafe fn bridge(&self, symbol: &str) -> Result<Bridge<'_>, BridgeError> {
        for candidate in lookup_candidates(symbol) {
            match unsafe { self.library.get::<RoundIntoFn>(candidate.as_bytes()) } {
                Ok(found) => {
                    let routine = *found;
                    log::info!("resolved {candidate} in {}", self.path.display());
                    return Ok(unsafe { Bridge::new(candidate, routine) });
                }
                Err(err) => log::debug!("{candidate} not exported: {err}"),
            }
        }

        Err(BridgeError::SymbolNotFound {
            symbol: symbol.to_string(),
            path: self.path.display().to_string(),
        })
    }
}
