//! Icon geometry and rendering
//!
//! The icon is a rounded square with a center dot. Above
//! [`SIMPLIFIED_MAX`](crate::constants::sizes::SIMPLIFIED_MAX) it also gets
//! four L-shaped corner brackets and a four-armed crosshair with a gap
//! around the center. Every measurement is derived from the size with
//! integer division and clamped to a floor so strokes stay visible.

use anyhow::{bail, Result};
use image::{Rgba, RgbaImage};

use crate::constants::{floors, palette, sizes};
use crate::raster::{self, Point, RoundedRect};

/// Colors used to paint an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgba<u8>,
    pub secondary: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            primary: Rgba(palette::PRIMARY),
            secondary: Rgba(palette::SECONDARY),
        }
    }
}

/// Which palette entry a shape is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Primary,
    Secondary,
}

impl Ink {
    fn color(self, palette: &Palette) -> Rgba<u8> {
        match self {
            Ink::Primary => palette.primary,
            Ink::Secondary => palette.secondary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arm {
    Left,
    Right,
    Up,
    Down,
}

impl Arm {
    pub const ALL: [Arm; 4] = [Arm::Left, Arm::Right, Arm::Up, Arm::Down];
}

/// Corner bracket measurements (full composition only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketGeometry {
    /// Length of each leg of the L
    pub length: u32,
    pub width: u32,
}

/// Crosshair measurements (full composition only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosshairGeometry {
    /// Distance from the center to the outer end of each arm
    pub reach: u32,
    /// Distance from the center to the inner end of each arm
    pub gap: u32,
}

/// Every measurement needed to draw an icon of one size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    pub center: u32,
    pub padding: u32,
    pub line_width: u32,
    pub radius: u32,
    pub dot_radius: u32,
    pub brackets: Option<BracketGeometry>,
    pub crosshair: Option<CrosshairGeometry>,
}

/// One drawing operation, in paint order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Border {
        rect: RoundedRect,
        width: u32,
    },
    Bracket {
        corner: Corner,
        /// Arm end on the vertical edge, the corner vertex, arm end on the
        /// horizontal edge
        points: [Point; 3],
        width: u32,
    },
    CrosshairArm {
        arm: Arm,
        from: Point,
        to: Point,
        width: u32,
    },
    Dot {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
    },
}

impl Shape {
    pub fn ink(&self) -> Ink {
        match self {
            Shape::Border { .. } | Shape::CrosshairArm { .. } => Ink::Primary,
            Shape::Bracket { .. } | Shape::Dot { .. } => Ink::Secondary,
        }
    }

    fn draw(&self, img: &mut RgbaImage, palette: &Palette) {
        let color = self.ink().color(palette);
        match *self {
            Shape::Border { rect, width } => {
                raster::rounded_rectangle_outline(img, rect, width, color)
            }
            Shape::Bracket { points, width, .. } => raster::polyline(img, &points, width, color),
            Shape::CrosshairArm { from, to, width, .. } => {
                raster::line(img, from, to, width, color)
            }
            Shape::Dot { x0, y0, x1, y1 } => raster::fill_ellipse(img, x0, y0, x1, y1, color),
        }
    }
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Result<Self> {
        if size == 0 {
            bail!("icon size must be greater than 0");
        }
        if size > sizes::MAX_ICON_SIZE {
            bail!("icon size must be <= {}", sizes::MAX_ICON_SIZE);
        }

        let center = size / 2;
        let padding = floors::MIN_PADDING.max(size / 8);

        if size <= sizes::SIMPLIFIED_MAX {
            // Tiny icons only keep the outline and the dot
            return Ok(IconGeometry {
                size,
                center,
                padding,
                line_width: floors::MIN_LINE_WIDTH,
                radius: floors::MIN_RADIUS,
                dot_radius: floors::MIN_DOT_RADIUS,
                brackets: None,
                crosshair: None,
            });
        }

        let line_width = floors::MIN_LINE_WIDTH.max(size / 16);
        Ok(IconGeometry {
            size,
            center,
            padding,
            line_width,
            radius: floors::MIN_RADIUS.max(size / 8),
            dot_radius: floors::MIN_DOT_RADIUS.max(size / 20),
            brackets: Some(BracketGeometry {
                length: size / 4,
                width: line_width + 1,
            }),
            crosshair: Some(CrosshairGeometry {
                reach: size / 5,
                gap: floors::MIN_CROSSHAIR_GAP.max(size / 10),
            }),
        })
    }

    pub fn is_simplified(&self) -> bool {
        self.brackets.is_none() && self.crosshair.is_none()
    }

    /// Inclusive coordinate of the far edge of the border box
    fn far_edge(&self) -> i32 {
        self.size as i32 - self.padding as i32 - 1
    }

    pub fn border(&self) -> RoundedRect {
        let near = self.padding as i32;
        let far = self.far_edge();
        RoundedRect::new(near, near, far, far, self.radius as i32)
    }

    fn bracket(&self, corner: Corner, bracket: BracketGeometry) -> Shape {
        let near = self.padding as i32;
        // Even stroke bands sit one pixel toward +; shift the far center
        // line back so the frame keeps equal margins on every side
        let (lo, hi) = raster::stroke_band(bracket.width);
        let far = self.far_edge() - (lo + hi);
        let len = bracket.length as i32;

        let points = match corner {
            Corner::TopLeft => [
                Point::new(near, near + len),
                Point::new(near, near),
                Point::new(near + len, near),
            ],
            Corner::TopRight => [
                Point::new(far, near + len),
                Point::new(far, near),
                Point::new(far - len, near),
            ],
            Corner::BottomLeft => [
                Point::new(near, far - len),
                Point::new(near, far),
                Point::new(near + len, far),
            ],
            Corner::BottomRight => [
                Point::new(far, far - len),
                Point::new(far, far),
                Point::new(far - len, far),
            ],
        };

        Shape::Bracket {
            corner,
            points,
            width: bracket.width,
        }
    }

    fn crosshair_arm(&self, arm: Arm, crosshair: CrosshairGeometry) -> Shape {
        let c = self.center as i32;
        let gap = crosshair.gap as i32;
        let reach = crosshair.reach as i32;

        let (from, to) = match arm {
            Arm::Left => (Point::new(c - reach, c), Point::new(c - gap, c)),
            Arm::Right => (Point::new(c + gap, c), Point::new(c + reach, c)),
            Arm::Up => (Point::new(c, c - reach), Point::new(c, c - gap)),
            Arm::Down => (Point::new(c, c + gap), Point::new(c, c + reach)),
        };

        Shape::CrosshairArm {
            arm,
            from,
            to,
            width: self.line_width,
        }
    }

    pub fn dot(&self) -> Shape {
        let c = self.center as i32;
        let r = self.dot_radius as i32;
        Shape::Dot {
            x0: c - r,
            y0: c - r,
            x1: c + r,
            y1: c + r,
        }
    }

    /// Drawing operations in paint order: border, brackets, crosshair, dot
    pub fn layers(&self) -> Vec<Shape> {
        let mut layers = vec![Shape::Border {
            rect: self.border(),
            width: self.line_width,
        }];

        if let Some(bracket) = self.brackets {
            layers.extend(Corner::ALL.iter().map(|&corner| self.bracket(corner, bracket)));
        }
        if let Some(crosshair) = self.crosshair {
            layers.extend(Arm::ALL.iter().map(|&arm| self.crosshair_arm(arm, crosshair)));
        }

        layers.push(self.dot());
        layers
    }
}

/// Render the icon for `size` onto a transparent canvas
pub fn create_icon(size: u32, palette: &Palette) -> Result<RgbaImage> {
    let geometry = IconGeometry::for_size(size)?;
    Ok(render(&geometry, palette))
}

pub fn render(geometry: &IconGeometry, palette: &Palette) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(geometry.size, geometry.size, Rgba(palette::BACKGROUND));

    log::debug!("Rendering {}px icon: {:?}", geometry.size, geometry);

    for shape in geometry.layers() {
        shape.draw(&mut img, palette);
    }

    img
}
