use raylib::prelude::*;
use crate::constants::*;
use crate::layout::{fit_into, Layout};

/// Opacity ramp played when an artwork becomes the current one.
pub struct Fade {
    tween: ease::Tween,
    timer: f32,
    pub alpha: f32,
    pub is_animating: bool,
}

impl Fade {
    pub fn new() -> Self {
        Self {
            tween: ease::Tween::new(ease::cubic_out, 0.0, 1.0, FADE_DURATION),
            timer: FADE_DURATION,
            alpha: 1.0,
            is_animating: false,
        }
    }

    pub fn restart(&mut self) {
        self.tween = ease::Tween::new(ease::cubic_out, 0.0, 1.0, FADE_DURATION);
        self.timer = 0.0;
        self.alpha = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.alpha = self.tween.apply(dt).clamp(0.0, 1.0);
        self.timer += dt;
        if self.timer >= FADE_DURATION {
            self.is_animating = false;
            self.alpha = 1.0;
        }
    }
}

pub struct Slide {
    image: Texture2D,
    pub placeholder: bool, // Generated stand-in, the artwork file could not be loaded
    pub fade: Fade,
}

impl Slide {
    pub fn new(image: Texture2D, placeholder: bool) -> Self {
        Self { image, placeholder, fade: Fade::new() }
    }

    pub fn start_fade_in(&mut self) {
        self.fade.restart();
    }

    pub fn update(&mut self, dt: f32) {
        self.fade.update(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, layout: &Layout) {
        let frame = layout.frame;

        // Soft drop shadow, darkest next to the card
        for i in (1..=SHADOW_SIZE as i32).rev() {
            let spread = i as f32;
            let alpha = (40.0 / spread) as u8;
            d.draw_rectangle_rec(
                Rectangle::new(frame.x - spread * 0.5, frame.y + spread * 0.5, frame.width + spread, frame.height + spread),
                Color::new(0, 0, 0, alpha),
            );
        }
        d.draw_rectangle_rec(frame, Color::WHITE);

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let dest = fit_into(tex_width, tex_height, layout.image_area);

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, (self.fade.alpha * 255.0) as u8),
        );
    }
}
