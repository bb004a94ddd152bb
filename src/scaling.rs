//! Fit computation for drawing an image inside the display area.

/// Returns the size to draw an `image` of (width, height) inside an `area` of (width, height).
///
/// Images that already fit are left at their natural size. Larger ones are scaled down along
/// the axis that overflows the most, preserving aspect ratio.
pub fn fit_within(image: (u32, u32), area: (u32, u32)) -> (u32, u32) {
    let (image_w, image_h) = image;
    let (area_w, area_h) = area;

    if image_w == 0 || image_h == 0 || area_w == 0 || area_h == 0 {
        return image;
    }

    let ratio_x = image_w as f64 / area_w as f64;
    let ratio_y = image_h as f64 / area_h as f64;

    if ratio_x > 1.0 && ratio_x >= ratio_y {
        let height = (image_h as f64 * area_w as f64 / image_w as f64).round() as u32;
        (area_w, height.max(1))
    } else if ratio_y > 1.0 && ratio_y > ratio_x {
        let width = (image_w as f64 * area_h as f64 / image_h as f64).round() as u32;
        (width.max(1), area_h)
    } else {
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aspect(size: (u32, u32)) -> f64 {
        size.0 as f64 / size.1 as f64
    }

    #[test]
    fn small_images_keep_natural_size() {
        assert_eq!(fit_within((320, 200), (800, 600)), (320, 200));
        assert_eq!(fit_within((800, 600), (800, 600)), (800, 600));
    }

    #[test]
    fn wide_images_scale_to_area_width() {
        let fitted = fit_within((4000, 1000), (800, 600));
        assert_eq!(fitted, (800, 200));
    }

    #[test]
    fn tall_images_scale_to_area_height() {
        let fitted = fit_within((1000, 3000), (800, 600));
        assert_eq!(fitted, (200, 600));
    }

    #[test]
    fn same_aspect_overflow_still_scales() {
        assert_eq!(fit_within((1600, 1200), (800, 600)), (800, 600));
    }

    #[test]
    fn scaling_preserves_aspect_ratio() {
        let cases = [
            ((3000, 2000), (1024, 768)),
            ((1234, 4321), (640, 480)),
            ((1920, 1080), (1000, 1000)),
        ];
        for (image, area) in cases {
            let fitted = fit_within(image, area);
            assert!(fitted.0 <= area.0 && fitted.1 <= area.1, "{fitted:?} overflows {area:?}");
            assert!((aspect(fitted) - aspect(image)).abs() < 0.01);
        }
    }

    #[test]
    fn zero_sizes_are_guarded() {
        assert_eq!(fit_within((640, 480), (0, 0)), (640, 480));
        assert_eq!(fit_within((0, 480), (800, 600)), (0, 480));
    }

    #[test]
    fn extreme_aspect_never_collapses_to_zero() {
        assert_eq!(fit_within((100_000, 10), (100, 100)), (100, 1));
    }
}
