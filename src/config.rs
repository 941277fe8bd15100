use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("window size {width}x{height} is below the minimum {}x{}", MIN_WIDTH, MIN_HEIGHT)]
    WindowTooSmall { width: i32, height: i32 },

    #[error("fps must be greater than zero")]
    ZeroFps,
}

/// Browse three artworks, one at a time.
#[derive(Debug, Parser)]
#[command(name = "artspace", version, about)]
pub struct Args {
    /// Directory holding image_1, image_2 and image_3 (png, jpg, jpeg, bmp or gif)
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Initial window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(ConfigError::WindowTooSmall { width: self.width, height: self.height });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(())
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["artspace"]).unwrap();
        assert_eq!(args.assets, PathBuf::from("assets"));
        assert_eq!(args.width, DEFAULT_WIDTH);
        assert_eq!(args.height, DEFAULT_HEIGHT);
        assert_eq!(args.fps, FPS);
        assert_eq!(args.verbose, 0);
        assert!(args.validate().is_ok());
        assert_eq!(args.log_filter(), "info");
    }

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "artspace", "--assets", "/tmp/art", "--width", "600", "--height", "900", "--fps", "30", "-vv",
        ])
        .unwrap();
        assert_eq!(args.assets, PathBuf::from("/tmp/art"));
        assert_eq!((args.width, args.height, args.fps), (600, 900, 30));
        assert_eq!(args.log_filter(), "trace");
    }

    #[test]
    fn rejects_small_window() {
        let args = Args::try_parse_from(["artspace", "--width", "100"]).unwrap();
        assert_eq!(
            args.validate(),
            Err(ConfigError::WindowTooSmall { width: 100, height: DEFAULT_HEIGHT })
        );
    }

    #[test]
    fn rejects_zero_fps() {
        let args = Args::try_parse_from(["artspace", "--fps", "0"]).unwrap();
        assert_eq!(args.validate(), Err(ConfigError::ZeroFps));
    }

    #[test]
    fn rejects_non_numeric_width() {
        assert!(Args::try_parse_from(["artspace", "--width", "wide"]).is_err());
    }
}
