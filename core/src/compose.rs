//! Deterministic 2D compositing math: centered crops to a target aspect
//! ratio and scale-to-fit placement inside a bounding box.

use image::DynamicImage;

/// Centered crop rectangle `(x, y, width, height)` that brings a
/// `width`x`height` image to `target_ratio`.
///
/// Wider images lose columns symmetrically from the sides; taller images
/// lose rows from top and bottom. Equal ratios return the full frame.
pub fn crop_box(width: u32, height: u32, target_ratio: f64) -> (u32, u32, u32, u32) {
    if width == 0 || height == 0 || target_ratio <= 0.0 {
        return (0, 0, width, height);
    }
    let ratio = f64::from(width) / f64::from(height);
    if ratio > target_ratio {
        let new_width = (f64::from(height) * target_ratio).round() as u32;
        let new_width = new_width.clamp(1, width);
        let left = (width - new_width) / 2;
        (left, 0, new_width, height)
    } else {
        let new_height = (f64::from(width) / target_ratio).round() as u32;
        let new_height = new_height.clamp(1, height);
        let top = (height - new_height) / 2;
        (0, top, width, new_height)
    }
}

/// Crops `image` to `target_ratio` around its center. A no-op clone when the
/// ratios already match.
pub fn crop_to_ratio(image: &DynamicImage, target_ratio: f64) -> DynamicImage {
    let (x, y, width, height) = crop_box(image.width(), image.height(), target_ratio);
    if width == image.width() && height == image.height() {
        return image.clone();
    }
    image.crop_imm(x, y, width, height)
}

/// Scale-to-fit placement of a `img_w`x`img_h` image inside a
/// `max_w`x`max_h` box: the result occupies at most `fill_fraction` of both
/// axes, keeps the source aspect ratio, and is centered in the box.
///
/// Returns `(draw_width, draw_height, offset_x, offset_y)` in the box's
/// units.
pub fn fit_within(
    img_w: u32,
    img_h: u32,
    max_w: i64,
    max_h: i64,
    fill_fraction: f64,
) -> (i64, i64, i64, i64) {
    if img_w == 0 || img_h == 0 {
        return (0, 0, max_w / 2, max_h / 2);
    }
    let limit_w = (max_w as f64 * fill_fraction).floor();
    let limit_h = (max_h as f64 * fill_fraction).floor();
    let img_ratio = f64::from(img_w) / f64::from(img_h);

    // Width binds first; fall back to height when that overflows.
    let mut draw_w = limit_w;
    let mut draw_h = draw_w / img_ratio;
    if draw_h > limit_h {
        draw_h = limit_h;
        draw_w = draw_h * img_ratio;
    }

    let draw_w = draw_w.round() as i64;
    let draw_h = draw_h.round() as i64;
    let offset_x = (max_w - draw_w) / 2;
    let offset_y = (max_h - draw_h) / 2;
    (draw_w, draw_h, offset_x, offset_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_image_is_cropped_on_the_sides() {
        // 1792x1024 background onto a 16:9 canvas.
        let target = 16.0 / 9.0;
        let (x, y, w, h) = crop_box(1792, 1024, target);
        assert_eq!(h, 1024, "height must be untouched when width binds");
        assert_eq!(y, 0);
        let out_ratio = f64::from(w) / f64::from(h);
        assert!((out_ratio - target).abs() < 0.01, "ratio {out_ratio} != {target}");
        // Symmetric within one pixel of integer division.
        assert!(x <= 1792 - (x + w) + 1 && 1792 - (x + w) <= x + 1);
    }

    #[test]
    fn taller_image_is_cropped_top_and_bottom() {
        let target = 16.0 / 9.0;
        let (x, y, w, h) = crop_box(1024, 1792, target);
        assert_eq!(w, 1024, "width must be untouched when height binds");
        assert_eq!(x, 0);
        let out_ratio = f64::from(w) / f64::from(h);
        assert!((out_ratio - target).abs() < 0.01);
        assert!(y > 0);
    }

    #[test]
    fn matching_ratio_is_a_full_frame() {
        assert_eq!(crop_box(1600, 900, 16.0 / 9.0), (0, 0, 1600, 900));
    }

    #[test]
    fn crop_to_ratio_applies_the_box() {
        let img = DynamicImage::new_rgba8(1792, 1024);
        let cropped = crop_to_ratio(&img, 16.0 / 9.0);
        assert_eq!(cropped.height(), 1024);
        let ratio = f64::from(cropped.width()) / f64::from(cropped.height());
        assert!((ratio - 16.0 / 9.0).abs() < 0.01);
    }

    #[test]
    fn fit_within_respects_the_fill_fraction_on_both_axes() {
        let cases = [
            (800u32, 600u32),
            (600, 800),
            (3000, 100),
            (100, 3000),
            (1, 1),
            (1920, 1080),
        ];
        let (max_w, max_h) = (12_192_000i64, 6_858_000i64);
        for (img_w, img_h) in cases {
            let (w, h, x, y) = fit_within(img_w, img_h, max_w, max_h, 0.95);
            assert!(w <= (max_w as f64 * 0.95) as i64, "{img_w}x{img_h}: w={w}");
            assert!(h <= (max_h as f64 * 0.95) as i64, "{img_w}x{img_h}: h={h}");
            // Centered.
            assert!((x - (max_w - w - x)).abs() <= 1);
            assert!((y - (max_h - h - y)).abs() <= 1);
            // Aspect ratio preserved within rounding.
            let in_ratio = f64::from(img_w) / f64::from(img_h);
            let out_ratio = w as f64 / h as f64;
            assert!(
                (in_ratio - out_ratio).abs() / in_ratio < 0.01,
                "{img_w}x{img_h}: {in_ratio} vs {out_ratio}"
            );
        }
    }

    #[test]
    fn fit_within_handles_degenerate_input() {
        let (w, h, x, y) = fit_within(0, 0, 1000, 500, 0.95);
        assert_eq!((w, h), (0, 0));
        assert_eq!((x, y), (500, 250));
    }
}
