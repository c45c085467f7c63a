//! Single-row panel geometry
//!
//! Figure-space constants (inches, points, subplot fractions) are converted
//! to pixels here. Everything downstream of [`FigureLayout`] works in whole
//! pixels on the figure canvas.

use crate::io::configuration::{
    BORDER_WIDTH_PT, CROP_PADDING_IN, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN, PANEL_SPACING,
    POINTS_PER_INCH, SUBPLOT_BOTTOM, SUBPLOT_LEFT, SUBPLOT_RIGHT, SUBPLOT_TOP, TITLE_FONT_PT,
    TITLE_PAD_PT,
};
use crate::io::error::{MemeError, Result};

/// Axis-aligned pixel rectangle; the origin may lie outside the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge
    pub x: i64,
    /// Top edge
    pub y: i64,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl PixelRect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub const fn right(&self) -> i64 {
        self.x + self.width as i64
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> i64 {
        self.y + self.height as i64
    }

    /// Grow by `amount` pixels on every side
    #[must_use]
    pub const fn expand(&self, amount: u32) -> Self {
        Self {
            x: self.x - amount as i64,
            y: self.y - amount as i64,
            width: self.width + 2 * amount,
            height: self.height + 2 * amount,
        }
    }

    /// Smallest rectangle containing both
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, (right - x) as u32, (bottom - y) as u32)
    }

    /// Intersection with a `width` x `height` canvas, if any pixels remain
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Self> {
        let x = self.x.max(0);
        let y = self.y.max(0);
        let right = self.right().min(i64::from(width));
        let bottom = self.bottom().min(i64::from(height));
        (right > x && bottom > y).then(|| Self::new(x, y, (right - x) as u32, (bottom - y) as u32))
    }
}

/// Where one panel's image and title go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelFrame {
    /// Area the image is scaled into
    pub image: PixelRect,
    /// Ink box of the title, `None` for titles without ink
    pub title: Option<PixelRect>,
}

impl PanelFrame {
    /// Image area including a border of `border_width`
    pub const fn framed(&self, border_width: u32) -> PixelRect {
        self.image.expand(border_width)
    }
}

/// Pixel geometry of the whole figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureLayout {
    /// Canvas width
    pub width: u32,
    /// Canvas height
    pub height: u32,
    /// Panel frames, left to right
    pub panels: Vec<PanelFrame>,
    /// Border thickness around each image
    pub border_width: u32,
    /// Padding kept around the occupied area when cropping
    pub padding: u32,
}

/// Convert points to whole pixels at `dpi`, never below one pixel
pub fn points_to_pixels(points: f32, dpi: u32) -> u32 {
    (points * dpi as f32 / POINTS_PER_INCH).round().max(1.0) as u32
}

/// Figure canvas size in pixels at `dpi`
pub fn figure_size(dpi: u32) -> (u32, u32) {
    let width = (FIGURE_WIDTH_IN * dpi as f32).round().max(1.0) as u32;
    let height = (FIGURE_HEIGHT_IN * dpi as f32).round().max(1.0) as u32;
    (width, height)
}

/// Title font size in pixels at `dpi`
pub fn title_pixel_size(dpi: u32) -> u32 {
    points_to_pixels(TITLE_FONT_PT, dpi)
}

impl FigureLayout {
    /// Lay out one panel per title size on a `width` x `height` canvas
    ///
    /// All panels display an image of `image_shape` `(height, width)`, fitted
    /// into equal cells with its aspect ratio kept. `title_sizes` holds the
    /// ink `(width, height)` of each panel's title.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas or the image shape has no pixels
    pub fn compute(
        width: u32,
        height: u32,
        dpi: u32,
        image_shape: (usize, usize),
        title_sizes: &[(usize, usize)],
    ) -> Result<Self> {
        if width == 0 || height == 0 || image_shape.0 == 0 || image_shape.1 == 0 {
            return Err(MemeError::EmptyImage {
                operation: "figure layout",
            });
        }

        let fig_w = width as f32;
        let fig_h = height as f32;
        let count = title_sizes.len().max(1) as f32;

        let row_left = SUBPLOT_LEFT * fig_w;
        let row_width = (SUBPLOT_RIGHT - SUBPLOT_LEFT) * fig_w;
        let cell_w = row_width / (count - 1.0).mul_add(PANEL_SPACING, count);
        let gap = cell_w * PANEL_SPACING;
        let cell_top = (1.0 - SUBPLOT_TOP) * fig_h;
        let cell_h = (SUBPLOT_TOP - SUBPLOT_BOTTOM) * fig_h;

        let (img_h, img_w) = (image_shape.0 as f32, image_shape.1 as f32);
        let scale = (cell_w / img_w).min(cell_h / img_h);
        let shown_w = (img_w * scale).round().max(1.0);
        let shown_h = (img_h * scale).round().max(1.0);
        let title_pad = i64::from(points_to_pixels(TITLE_PAD_PT, dpi));

        let panels = title_sizes
            .iter()
            .enumerate()
            .map(|(index, &(title_w, title_h))| {
                let cell_x = (index as f32).mul_add(cell_w + gap, row_left);
                let image = PixelRect::new(
                    (cell_x + (cell_w - shown_w) / 2.0).round() as i64,
                    (cell_top + (cell_h - shown_h) / 2.0).round() as i64,
                    shown_w as u32,
                    shown_h as u32,
                );

                let title = (title_w > 0 && title_h > 0).then(|| {
                    PixelRect::new(
                        image.x + (i64::from(image.width) - title_w as i64).div_euclid(2),
                        image.y - title_pad - title_h as i64,
                        title_w as u32,
                        title_h as u32,
                    )
                });

                PanelFrame { image, title }
            })
            .collect();

        Ok(Self {
            width,
            height,
            panels,
            border_width: points_to_pixels(BORDER_WIDTH_PT, dpi),
            padding: (CROP_PADDING_IN * dpi as f32).round().max(1.0) as u32,
        })
    }

    /// Union of every bordered panel and title
    pub fn occupied(&self) -> Option<PixelRect> {
        self.panels
            .iter()
            .flat_map(|panel| [Some(panel.framed(self.border_width)), panel.title])
            .flatten()
            .reduce(|a, b| a.union(&b))
    }

    /// Region kept after tight cropping: occupied area plus padding
    pub fn crop_region(&self) -> Option<PixelRect> {
        self.occupied()?
            .expand(self.padding)
            .clamp_to(self.width, self.height)
    }
}
