//! Aliased drawing primitives on `RgbaImage`
//!
//! Every primitive writes pixels directly (no blending) and silently clips
//! to the image bounds, so coordinates may fall outside the canvas. Output
//! depends only on the arguments, which keeps generated icons pixel exact
//! across runs.

use image::{Rgba, RgbaImage};

/// A pixel coordinate. Signed so shapes can extend past the top/left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Inclusive bounding box `[x0, y0, x1, y1]` with rounded corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
    pub radius: i32,
}

impl RoundedRect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32, radius: i32) -> Self {
        RoundedRect { x0, y0, x1, y1, radius }
    }

    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Shrink by `by` pixels on every side; the radius shrinks with it
    pub fn inset(&self, by: i32) -> Self {
        RoundedRect {
            x0: self.x0 + by,
            y0: self.y0 + by,
            x1: self.x1 - by,
            y1: self.y1 - by,
            radius: (self.radius - by).max(0),
        }
    }

    /// Whether the pixel at (x, y) lies inside the rounded box
    pub fn contains(&self, x: i32, y: i32) -> bool {
        if self.is_empty() || x < self.x0 || x > self.x1 || y < self.y0 || y > self.y1 {
            return false;
        }

        // Radius can't exceed half the shorter side
        let r = self
            .radius
            .max(0)
            .min((self.x1 - self.x0) / 2)
            .min((self.y1 - self.y0) / 2);

        let cx = if x < self.x0 + r {
            self.x0 + r
        } else if x > self.x1 - r {
            self.x1 - r
        } else {
            return true;
        };
        let cy = if y < self.y0 + r {
            self.y0 + r
        } else if y > self.y1 - r {
            self.y1 - r
        } else {
            return true;
        };

        let dx = (x - cx) as i64;
        let dy = (y - cy) as i64;
        dx * dx + dy * dy <= (r as i64) * (r as i64)
    }
}

/// Offsets of a `width`-pixel band around a center line: `(lo, hi)` inclusive
pub fn stroke_band(width: u32) -> (i32, i32) {
    let w = width.max(1) as i32;
    (-(w - 1) / 2, w / 2)
}

fn put_clipped(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Clamp an inclusive coordinate span to `0..limit`
fn clip_span(a: i32, b: i32, limit: u32) -> Option<(i32, i32)> {
    let lo = a.min(b).max(0);
    let hi = a.max(b).min(limit as i32 - 1);
    (lo <= hi).then_some((lo, hi))
}

/// Fill the inclusive box spanned by the two corners
pub fn fill_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    let (Some((xa, xb)), Some((ya, yb))) = (
        clip_span(x0, x1, img.width()),
        clip_span(y0, y1, img.height()),
    ) else {
        return;
    };

    for y in ya..=yb {
        for x in xa..=xb {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Outline a rounded box with a stroke of `width` pixels laid inside the box
///
/// A pixel is painted when it is inside `rect` but outside `rect` inset by
/// `width`. If the inset collapses the whole box is filled.
pub fn rounded_rectangle_outline(
    img: &mut RgbaImage,
    rect: RoundedRect,
    width: u32,
    color: Rgba<u8>,
) {
    if rect.is_empty() {
        return;
    }
    let inner = rect.inset(width.max(1) as i32);

    let (Some((xa, xb)), Some((ya, yb))) = (
        clip_span(rect.x0, rect.x1, img.width()),
        clip_span(rect.y0, rect.y1, img.height()),
    ) else {
        return;
    };

    for y in ya..=yb {
        for x in xa..=xb {
            if rect.contains(x, y) && !inner.contains(x, y) {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Stroke a straight segment
///
/// Horizontal and vertical segments become bands exactly `width` pixels
/// wide (see [`stroke_band`]). A zero-length segment is a `width` square.
/// Diagonal segments paint every pixel within `width / 2` of the segment,
/// with butt ends.
pub fn line(img: &mut RgbaImage, from: Point, to: Point, width: u32, color: Rgba<u8>) {
    let (lo, hi) = stroke_band(width);

    if from == to {
        fill_rect(img, from.x + lo, from.y + lo, from.x + hi, from.y + hi, color);
        return;
    }
    if from.y == to.y {
        fill_rect(img, from.x, from.y + lo, to.x, from.y + hi, color);
        return;
    }
    if from.x == to.x {
        fill_rect(img, from.x + lo, from.y, from.x + hi, to.y, color);
        return;
    }

    let dx = (to.x - from.x) as f64;
    let dy = (to.y - from.y) as f64;
    let len_sq = dx * dx + dy * dy;
    let len = len_sq.sqrt();
    let half = width.max(1) as f64 / 2.0;
    let pad = half.ceil() as i32;

    for y in (from.y.min(to.y) - pad)..=(from.y.max(to.y) + pad) {
        for x in (from.x.min(to.x) - pad)..=(from.x.max(to.x) + pad) {
            let px = (x - from.x) as f64;
            let py = (y - from.y) as f64;
            let t = (px * dx + py * dy) / len_sq;
            if !(0.0..=1.0).contains(&t) {
                continue;
            }
            let distance = (px * dy - py * dx).abs() / len;
            if distance <= half {
                put_clipped(img, x, y, color);
            }
        }
    }
}

/// Stroke connected segments; interior vertices get a square joint so
/// right-angle corners are closed
pub fn polyline(img: &mut RgbaImage, points: &[Point], width: u32, color: Rgba<u8>) {
    for segment in points.windows(2) {
        line(img, segment[0], segment[1], width, color);
    }

    if points.len() > 2 {
        let (lo, hi) = stroke_band(width);
        for vertex in &points[1..points.len() - 1] {
            fill_rect(img, vertex.x + lo, vertex.y + lo, vertex.x + hi, vertex.y + hi, color);
        }
    }
}

/// Fill the ellipse inscribed in the inclusive box `[x0, y0, x1, y1]`
///
/// The ellipse touches the outer edges of the box pixels and a pixel is
/// painted when its center falls inside.
pub fn fill_ellipse(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    let (x0, x1) = (x0.min(x1), x0.max(x1));
    let (y0, y1) = (y0.min(y1), y0.max(y1));

    // Doubled coordinates: pixel centers sit at 2x + 1, box edges at 2x0 and 2x1 + 2
    let rx2 = (x1 - x0 + 1) as i64;
    let ry2 = (y1 - y0 + 1) as i64;
    let limit = rx2 * rx2 * ry2 * ry2;

    for y in y0..=y1 {
        let dy = (2 * y + 1) as i64 - (y0 + y1 + 1) as i64;
        for x in x0..=x1 {
            let dx = (2 * x + 1) as i64 - (x0 + x1 + 1) as i64;
            if dx * dx * ry2 * ry2 + dy * dy * rx2 * rx2 <= limit {
                put_clipped(img, x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
    const INK: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn canvas(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, CLEAR)
    }

    fn painted(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| **p == INK).count()
    }

    #[test]
    fn test_stroke_band_width() {
        for width in 1..12 {
            let (lo, hi) = stroke_band(width);
            assert_eq!((hi - lo + 1) as u32, width);
        }
        assert_eq!(stroke_band(0), (0, 0));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut img = canvas(4);
        fill_rect(&mut img, -3, -3, 1, 1, INK);
        assert_eq!(painted(&img), 4);

        fill_rect(&mut img, 10, 10, 20, 20, INK);
        assert_eq!(painted(&img), 4);
    }

    #[test]
    fn test_horizontal_line_is_exact_width() {
        let mut img = canvas(20);
        line(&mut img, Point::new(2, 10), Point::new(12, 10), 3, INK);
        // 11 pixels long, 3 rows
        assert_eq!(painted(&img), 33);
        assert_eq!(*img.get_pixel(2, 9), INK);
        assert_eq!(*img.get_pixel(12, 11), INK);
        assert_eq!(*img.get_pixel(13, 10), CLEAR);
    }

    #[test]
    fn test_vertical_line_reversed_endpoints() {
        let mut img = canvas(20);
        line(&mut img, Point::new(5, 15), Point::new(5, 5), 2, INK);
        assert_eq!(painted(&img), 22);
        assert_eq!(*img.get_pixel(6, 5), INK);
        assert_eq!(*img.get_pixel(4, 5), CLEAR);
    }

    #[test]
    fn test_diagonal_line_stays_near_segment() {
        let mut img = canvas(20);
        line(&mut img, Point::new(2, 2), Point::new(17, 17), 2, INK);
        assert_eq!(*img.get_pixel(10, 10), INK);
        assert_eq!(*img.get_pixel(2, 17), CLEAR);
        assert_eq!(*img.get_pixel(17, 2), CLEAR);
    }

    #[test]
    fn test_zero_length_line_is_square() {
        let mut img = canvas(10);
        line(&mut img, Point::new(5, 5), Point::new(5, 5), 2, INK);
        assert_eq!(painted(&img), 4);
        assert_eq!(*img.get_pixel(6, 6), INK);

        let mut img = canvas(10);
        line(&mut img, Point::new(5, 5), Point::new(5, 5), 3, INK);
        assert_eq!(painted(&img), 9);
        assert_eq!(*img.get_pixel(4, 4), INK);
    }

    #[test]
    fn test_polyline_closes_right_angle() {
        let mut img = canvas(20);
        let points = [Point::new(5, 15), Point::new(5, 5), Point::new(15, 5)];
        polyline(&mut img, &points, 3, INK);
        // Outer corner of the joint is painted
        assert_eq!(*img.get_pixel(4, 4), INK);
        // Inside of the L is untouched
        assert_eq!(*img.get_pixel(10, 10), CLEAR);
    }

    #[test]
    fn test_rounded_outline_leaves_center_and_corners_clear() {
        let mut img = canvas(16);
        let rect = RoundedRect::new(2, 2, 13, 13, 2);
        rounded_rectangle_outline(&mut img, rect, 2, INK);

        assert_eq!(*img.get_pixel(8, 8), CLEAR);
        assert_eq!(*img.get_pixel(2, 2), CLEAR);
        assert_eq!(*img.get_pixel(0, 0), CLEAR);
        assert_eq!(*img.get_pixel(2, 8), INK);
        assert_eq!(*img.get_pixel(13, 8), INK);
        assert_eq!(*img.get_pixel(8, 3), INK);
        assert_eq!(*img.get_pixel(8, 4), CLEAR);
    }

    #[test]
    fn test_rounded_outline_collapsed_inset_fills() {
        let mut img = canvas(8);
        let rect = RoundedRect::new(2, 2, 5, 5, 0);
        rounded_rectangle_outline(&mut img, rect, 4, INK);
        assert_eq!(painted(&img), 16);
    }

    #[test]
    fn test_empty_rounded_rect_draws_nothing() {
        let mut img = canvas(4);
        rounded_rectangle_outline(&mut img, RoundedRect::new(3, 3, 1, 1, 1), 1, INK);
        assert_eq!(painted(&img), 0);
    }

    #[test]
    fn test_small_ellipse_is_rounded_disc() {
        let mut img = canvas(11);
        fill_ellipse(&mut img, 3, 3, 7, 7, INK);

        let row_widths: Vec<usize> = (3..=7)
            .map(|y| (0..11).filter(|&x| *img.get_pixel(x, y) == INK).count())
            .collect();
        assert_eq!(row_widths, vec![3, 5, 5, 5, 3]);
        assert_eq!(painted(&img), 21);

        assert_eq!(*img.get_pixel(3, 3), CLEAR);
        assert_eq!(*img.get_pixel(4, 3), INK);
        assert_eq!(*img.get_pixel(3, 4), INK);
        assert_eq!(*img.get_pixel(7, 7), CLEAR);
    }

    #[test]
    fn test_ellipse_is_symmetric() {
        let mut img = canvas(15);
        fill_ellipse(&mut img, 1, 1, 13, 13, INK);

        for y in 0..15 {
            for x in 0..15 {
                assert_eq!(img.get_pixel(x, y), img.get_pixel(14 - x, y));
                assert_eq!(img.get_pixel(x, y), img.get_pixel(x, 14 - y));
            }
        }

        // Top row is a flat run, not a single-pixel tip
        let top = (0..15).filter(|&x| *img.get_pixel(x, 1) == INK).count();
        assert_eq!(top, 5);
    }

    #[test]
    fn test_degenerate_ellipse_is_a_column() {
        let mut img = canvas(8);
        fill_ellipse(&mut img, 4, 1, 4, 6, INK);
        assert_eq!(painted(&img), 6);
    }
}
