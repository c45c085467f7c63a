//! Rendering constants and runtime configuration defaults

// Mask synthesis defaults
/// Glyph drawn into the selection mask
pub const DEFAULT_GLYPH: &str = "S";
/// Glyph size as a fraction of the smaller canvas side
pub const DEFAULT_SIZE_RATIO: f32 = 0.9;
/// Mask values below this count as removed
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Bold faces probed in order before falling back to the built-in block face
pub const FONT_CANDIDATES: [&str; 6] = [
    "DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "arialbd.ttf",
];

/// Directories searched for candidates given as bare file names
pub const FONT_SEARCH_DIRS: [&str; 7] = [
    ".",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/TTF",
    "/Library/Fonts",
    "/System/Library/Fonts/Supplemental",
    "C:\\Windows\\Fonts",
];

// Figure geometry, in inches unless noted
/// Figure width
pub const FIGURE_WIDTH_IN: f32 = 14.0;
/// Figure height
pub const FIGURE_HEIGHT_IN: f32 = 4.5;
/// Left edge of the panel row as a fraction of figure width
pub const SUBPLOT_LEFT: f32 = 0.03;
/// Right edge of the panel row as a fraction of figure width
pub const SUBPLOT_RIGHT: f32 = 0.98;
/// Bottom edge of the panel row as a fraction of figure height
pub const SUBPLOT_BOTTOM: f32 = 0.11;
/// Top edge of the panel row as a fraction of figure height
pub const SUBPLOT_TOP: f32 = 0.88;
/// Gap between panels as a fraction of one panel cell width
pub const PANEL_SPACING: f32 = 0.15;
/// Padding kept around the occupied area after cropping
pub const CROP_PADDING_IN: f32 = 0.05;

// Typography and strokes, in points (1/72 inch)
/// Title font size
pub const TITLE_FONT_PT: f32 = 15.0;
/// Gap between a title and the top of its panel
pub const TITLE_PAD_PT: f32 = 16.0;
/// Width of the border drawn around each panel
pub const BORDER_WIDTH_PT: f32 = 1.0;
/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Panel titles in their fixed semantic order
pub const PANEL_TITLES: [&str; 4] = ["Reality", "Your Model", "Selection Bias", "Estimate"];
/// Number of panels in the composite
pub const PANEL_COUNT: usize = PANEL_TITLES.len();

// Output defaults
/// Output resolution in dots per inch
pub const DEFAULT_DPI: u32 = 150;
// Keeps the figure canvas allocation bounded
/// Maximum accepted output resolution
pub const MAX_DPI: u32 = 1200;
/// Figure background color
pub const DEFAULT_BACKGROUND: &str = "pink";
/// Panel border color
pub const DEFAULT_BORDER_COLOR: &str = "black";
/// Output file written when no path is given
pub const DEFAULT_OUTPUT: &str = "selection_bias_meme.png";
