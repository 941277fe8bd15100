use raylib::prelude::*;
use crate::artwork::Artwork;
use crate::constants::*;
use crate::layout::Layout;

pub const BACKGROUND: Color = Color::new(250, 250, 250, 255);
pub const PANEL: Color = Color::new(211, 211, 211, 255);
pub const BUTTON: Color = Color::new(103, 80, 164, 255);
pub const BUTTON_HOVER: Color = Color::new(127, 103, 190, 255);
pub const MIN_FONT_SIZE: i32 = 12;

/// Largest font size in `min..=start` at which `text` fits in `max_width`.
pub fn fit_font_size(text: &str, max_width: f32, start: i32, min: i32, measure: impl Fn(&str, i32) -> i32) -> i32 {
    let mut size = start;
    while size > min && measure(text, size) as f32 > max_width {
        size -= 1;
    }
    size
}

/// Font size and placement of the "author (year)" line.
#[derive(Debug, PartialEq)]
pub struct InfoLine {
    pub size: i32,
    pub year: String,
    pub year_offset: i32, // From the start of the author, past the bold overdraw
}

pub fn info_line(artwork: &Artwork, max_width: f32, measure: impl Fn(&str, i32) -> i32) -> InfoLine {
    let year = format!(" ({})", artwork.year);
    let line = format!("{}{}", artwork.author, year);
    // One extra pixel for the bold overdraw
    let size = fit_font_size(&line, max_width - 1.0, INFO_FONT_SIZE, MIN_FONT_SIZE, &measure);
    let year_offset = measure(artwork.author, size) + 1;
    InfoLine { size, year, year_offset }
}

/// Left edge of a label centred in `rect`.
pub fn centred_x(rect: Rectangle, label_width: i32) -> i32 {
    (rect.x + (rect.width - label_width as f32) * 0.5) as i32
}

pub fn draw_description(d: &mut RaylibDrawHandle, layout: &Layout, artwork: &Artwork) {
    let panel = layout.description;
    let text_width = panel.width - 2.0 * PADDING;
    let x = (panel.x + PADDING) as i32;
    let mut y = (panel.y + PADDING) as i32;

    let title_size = fit_font_size(artwork.title, text_width, TITLE_FONT_SIZE, MIN_FONT_SIZE, |t, s| d.measure_text(t, s));
    let info = info_line(artwork, text_width, |t, s| d.measure_text(t, s));

    d.draw_rectangle_rec(panel, PANEL);
    d.draw_text(artwork.title, x, y, title_size, Color::BLACK);
    y += TITLE_FONT_SIZE + 8;

    // Author in bold, then the year
    d.draw_text(artwork.author, x, y, info.size, Color::BLACK);
    d.draw_text(artwork.author, x + 1, y, info.size, Color::BLACK);
    d.draw_text(&info.year, x + info.year_offset, y, info.size, Color::DARKGRAY);
}

pub fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str, hovered: bool) {
    let fill = if hovered { BUTTON_HOVER } else { BUTTON };
    let label_x = centred_x(rect, d.measure_text(label, BUTTON_FONT_SIZE));

    d.draw_rectangle_rounded(rect, 0.5, 12, fill);
    d.draw_text(
        label,
        label_x,
        (rect.y + (rect.height - BUTTON_FONT_SIZE as f32) * 0.5) as i32,
        BUTTON_FONT_SIZE,
        Color::WHITE,
    );
}
