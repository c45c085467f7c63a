//! Glyph rasterization and letter-mask synthesis

/// Built-in 5x7 block face
pub mod builtin;
/// Font faces and coverage maps
pub mod face;
/// Candidate probing and font discovery
pub mod resolver;
/// Centered block-letter masks
pub mod renderer;

pub use face::{FontFace, GlyphCoverage};
pub use renderer::GlyphMaskRenderer;
pub use resolver::{BuiltinOnlyResolver, FontResolver, SystemFontResolver, select_face};
