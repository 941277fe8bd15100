use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use artspace::config::Args;
use artspace::constants::*;
use artspace::engine::Engine;
use artspace::gallery::GalleryEngine;

fn init_tracing(args: &Args) {
    // RUST_LOG overrides the -v flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args);
    args.validate().context("invalid command line")?;

    info!(assets = %args.assets.display(), width = args.width, height = args.height, fps = args.fps, "starting art space");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Art Space")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_window_min_size(MIN_WIDTH, MIN_HEIGHT);

    let mut engine = GalleryEngine::new();
    engine
        .initialize(&mut rl, &thread, &args.assets)
        .context("failed to load artworks")?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        engine.update(dt, &mut rl);
        engine.render_frame(&mut rl, &thread);
    }

    info!("window closed");
    Ok(())
}
