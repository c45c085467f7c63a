//! Ordered font discovery with a guaranteed fallback
//!
//! Candidates are probed in order through a [`FontResolver`]. The first one
//! whose bytes parse as a font wins; if none do, the built-in block face is
//! used. Discovery never fails, it only degrades rendering quality.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::glyph::face::FontFace;
use crate::io::configuration::{FONT_CANDIDATES, FONT_SEARCH_DIRS};

/// Source of font file bytes for candidate identifiers
pub trait FontResolver {
    /// Bytes for `candidate`, or `None` if it cannot be found
    fn resolve(&self, candidate: &str) -> Option<Vec<u8>>;
}

/// Resolves candidates from the local filesystem
///
/// Absolute or relative paths are read directly; bare file names are also
/// looked up in each search directory in order.
#[derive(Debug, Clone)]
pub struct SystemFontResolver {
    search_dirs: Vec<PathBuf>,
}

impl Default for SystemFontResolver {
    fn default() -> Self {
        Self::new(FONT_SEARCH_DIRS.iter().map(PathBuf::from).collect())
    }
}

impl SystemFontResolver {
    /// Create a resolver searching `search_dirs` for bare file names
    pub const fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Directories searched for bare file names
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }
}

impl FontResolver for SystemFontResolver {
    fn resolve(&self, candidate: &str) -> Option<Vec<u8>> {
        let direct = Path::new(candidate);
        if let Ok(bytes) = std::fs::read(direct) {
            return Some(bytes);
        }

        let is_bare_name = direct.parent().is_none_or(|p| p.as_os_str().is_empty());
        if !is_bare_name {
            return None;
        }

        self.search_dirs
            .iter()
            .find_map(|dir| std::fs::read(dir.join(candidate)).ok())
    }
}

/// Resolver that never finds anything, forcing the built-in face
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinOnlyResolver;

impl FontResolver for BuiltinOnlyResolver {
    fn resolve(&self, _candidate: &str) -> Option<Vec<u8>> {
        None
    }
}

/// Pick the first candidate that resolves to a usable font
///
/// Falls back to [`FontFace::Builtin`] without failing.
pub fn select_face(candidates: &[&str], resolver: &dyn FontResolver) -> FontFace {
    for &candidate in candidates {
        let Some(bytes) = resolver.resolve(candidate) else {
            debug!("Font candidate '{candidate}' not found");
            continue;
        };

        if let Some(face) = FontFace::from_bytes(candidate, bytes) {
            info!("Using font '{candidate}'");
            return face;
        }
        debug!("Font candidate '{candidate}' is not a valid font");
    }

    warn!("No bold font found, falling back to the built-in block face");
    FontFace::Builtin
}

/// Select a face from the default bold candidates on this system
pub fn default_face() -> FontFace {
    select_face(&FONT_CANDIDATES, &SystemFontResolver::default())
}
