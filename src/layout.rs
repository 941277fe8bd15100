use raylib::prelude::*;
use crate::constants::*;
use crate::state::GalleryEvent;

/// Screen regions of the gallery view, recomputed whenever the window size changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub frame: Rectangle,       // White card around the artwork
    pub image_area: Rectangle,  // Card interior the artwork is fitted into
    pub description: Rectangle,
    pub previous_button: Rectangle,
    pub next_button: Rectangle,
}

impl Layout {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let available_width = (screen_width - 2.0 * (MARGIN_SIDE + PADDING)).max(0.0);
        let card_width = (FRAME_MAX_WIDTH + 2.0 * PADDING).min(available_width);
        let card_x = (screen_width - card_width) * 0.5;

        // Buttons are pinned to the bottom edge
        let button_y = screen_height - MARGIN_BOTTOM - BUTTON_HEIGHT;
        let previous_button = Rectangle::new(MARGIN_SIDE + PADDING, button_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let next_button = Rectangle::new(
            screen_width - MARGIN_SIDE - PADDING - BUTTON_WIDTH,
            button_y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        let description_y = button_y - PADDING - DESCRIPTION_HEIGHT;
        let description = Rectangle::new(card_x, description_y, card_width, DESCRIPTION_HEIGHT);

        // The card takes what is left above the description, up to its natural size
        let card_y = MARGIN_TOP + PADDING;
        let card_height = (description_y - PADDING - 4.0 - card_y)
            .min(FRAME_MAX_HEIGHT + 2.0 * PADDING)
            .max(2.0 * PADDING);
        let frame = Rectangle::new(card_x, card_y, card_width, card_height);
        let image_area = Rectangle::new(
            frame.x + PADDING,
            frame.y + PADDING,
            (frame.width - 2.0 * PADDING).max(0.0),
            (frame.height - 2.0 * PADDING).max(0.0),
        );

        Self { frame, image_area, description, previous_button, next_button }
    }

    /// Which button, if any, lies under `point`.
    pub fn hit_test(&self, point: Vector2) -> Option<GalleryEvent> {
        if self.previous_button.check_collision_point_rec(point) {
            Some(GalleryEvent::Previous)
        } else if self.next_button.check_collision_point_rec(point) {
            Some(GalleryEvent::Next)
        } else {
            None
        }
    }
}

/// Largest rectangle with the texture's aspect ratio that fits `area`, centred in it.
pub fn fit_into(texture_width: f32, texture_height: f32, area: Rectangle) -> Rectangle {
    if texture_width <= 0.0 || texture_height <= 0.0 {
        return Rectangle::new(area.x + area.width * 0.5, area.y + area.height * 0.5, 0.0, 0.0);
    }
    let scale = (area.width / texture_width).min(area.height / texture_height);
    let width = texture_width * scale;
    let height = texture_height * scale;
    Rectangle::new(
        area.x + (area.width - width) * 0.5,
        area.y + (area.height - height) * 0.5,
        width,
        height,
    )
}

pub fn event_for_key(key: KeyboardKey) -> Option<GalleryEvent> {
    match key {
        KeyboardKey::KEY_LEFT | KeyboardKey::KEY_A => Some(GalleryEvent::Previous),
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_D | KeyboardKey::KEY_SPACE => Some(GalleryEvent::Next),
        _ => None,
    }
}
