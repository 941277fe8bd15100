use std::path::Path;
use raylib::prelude::*;

pub trait Engine {
    fn new() -> Self;
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, assets: &Path) -> anyhow::Result<()>;
    fn update(&mut self, dt: f32, rl: &mut RaylibHandle);
    fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread);
}
