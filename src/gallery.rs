use std::path::Path;
use anyhow::Context;
use raylib::prelude::*;
use tracing::{debug, info, warn};
use crate::artwork::catalogue;
use crate::layout::{event_for_key, Layout};
use crate::slide::Slide;
use crate::state::{GalleryEvent, GalleryState};
use crate::texture_loader::{load_texture_with_exif_rotation, placeholder_texture, resolve_image_path};
use crate::view::{draw_button, draw_description, BACKGROUND};

const BOUND_KEYS: [KeyboardKey; 5] = [
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_A,
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_D,
    KeyboardKey::KEY_SPACE,
];

pub struct GalleryEngine {
    state: GalleryState,
    slides: Vec<Slide>, // One per artwork, in catalogue order
}

impl GalleryEngine {
    fn handle(&mut self, event: GalleryEvent) {
        let before = self.state.current_index();
        let id = self.state.apply(event);
        debug!(?event, from = before, to = id.index(), "artwork changed");
        if let Some(slide) = self.slides.get_mut(id.slot()) {
            slide.start_fade_in();
        }
    }

    fn poll_events(rl: &RaylibHandle, layout: &Layout) -> Vec<GalleryEvent> {
        let mut events: Vec<GalleryEvent> = BOUND_KEYS
            .iter()
            .filter(|key| rl.is_key_pressed(**key))
            .filter_map(|key| event_for_key(*key))
            .collect();

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(event) = layout.hit_test(rl.get_mouse_position()) {
                events.push(event);
            }
        }
        events
    }
}

impl crate::engine::Engine for GalleryEngine {
    fn new() -> Self {
        Self {
            state: GalleryState::new(),
            slides: Vec::new(),
        }
    }

    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, assets: &Path) -> anyhow::Result<()> {
        for artwork in catalogue() {
            let loaded = resolve_image_path(assets, artwork.image_ref)
                .and_then(|path| load_texture_with_exif_rotation(rl, thread, &path));
            let slide = match loaded {
                Ok(texture) => {
                    info!(index = artwork.id.index(), title = artwork.title, "loaded artwork");
                    Slide::new(texture, false)
                }
                Err(e) => {
                    warn!(index = artwork.id.index(), error = %e, "using placeholder");
                    let texture = placeholder_texture(rl, thread)
                        .with_context(|| format!("no image available for '{}'", artwork.title))?;
                    Slide::new(texture, true)
                }
            };
            self.slides.push(slide);
        }

        let missing = self.slides.iter().filter(|s| s.placeholder).count();
        if missing > 0 {
            warn!(missing, assets = %assets.display(), "some artworks are shown as placeholders");
        }
        Ok(())
    }

    fn update(&mut self, dt: f32, rl: &mut RaylibHandle) {
        let layout = Layout::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);

        // Each event completes before the next one is looked at
        for event in Self::poll_events(rl, &layout) {
            self.handle(event);
        }

        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let layout = Layout::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let mouse = rl.get_mouse_position();
        let hovered = layout.hit_test(mouse);

        let mut d = rl.begin_drawing(thread);
        d.clear_background(BACKGROUND);

        if let Some(slide) = self.slides.get(self.state.current().slot()) {
            slide.draw(&mut d, &layout);
        }
        draw_description(&mut d, &layout, self.state.artwork());
        draw_button(&mut d, layout.previous_button, "Previous", hovered == Some(GalleryEvent::Previous));
        draw_button(&mut d, layout.next_button, "Next", hovered == Some(GalleryEvent::Next));
    }
}
