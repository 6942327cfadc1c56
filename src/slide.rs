use raylib::prelude::*;
use carousel::constants::FIT_RATIO;

pub struct Slide<T> {
    pub image: T,
    pub visible: bool,
}

impl<T> Slide<T> {
    pub fn new(image: T) -> Self {
        Self { image, visible: false }
    }
}

/// Scale at which a `width` x `height` image fits inside `bounds`.
/// Images that already fit are never enlarged.
pub fn fit_scale(width: f32, height: f32, bounds: Rectangle) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 0.0;
    }
    let scale_x = bounds.width * FIT_RATIO / width;
    let scale_y = bounds.height * FIT_RATIO / height;
    scale_x.min(scale_y).min(1.0)
}

impl Slide<Texture2D> {
    /// Draws the slide centered in `bounds`, if visible.
    pub fn draw(&self, d: &mut RaylibDrawHandle, bounds: Rectangle) {
        if !self.visible {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = fit_scale(tex_width, tex_height, bounds);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                bounds.x + (bounds.width - scaled_width) * 0.5,
                bounds.y + (bounds.height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_keep_their_size() {
        let bounds = Rectangle::new(0.0, 0.0, 1000.0, 1000.0);
        assert_eq!(fit_scale(100.0, 50.0, bounds), 1.0);
    }

    #[test]
    fn large_images_shrink_along_the_tighter_axis() {
        let bounds = Rectangle::new(0.0, 0.0, 500.0, 1000.0);
        let scale = fit_scale(1000.0, 1000.0, bounds);
        assert!((scale - 0.45).abs() < 1e-6);
    }

    #[test]
    fn degenerate_images_do_not_divide_by_zero() {
        let bounds = Rectangle::new(0.0, 0.0, 500.0, 500.0);
        assert_eq!(fit_scale(0.0, 10.0, bounds), 0.0);
    }

    #[test]
    fn new_slides_start_hidden() {
        assert!(!Slide::new(()).visible);
    }
}
