use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no image named '{image_ref}' in {dir}")]
    NotFound { dir: PathBuf, image_ref: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("failed to create texture for {path}: {message}")]
    Texture { path: PathBuf, message: String },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Transform {
    RotateCw,
    RotateCcw,
    FlipHorizontal,
    FlipVertical,
}

// --- Helper: Find the file behind an image handle ---
// Files are matched case-insensitively on the extension; the first extension in
// IMAGE_EXTENSIONS order wins when several exist.
pub fn resolve_image_path(assets_dir: &Path, image_ref: &str) -> Result<PathBuf, AssetError> {
    let entries = fs::read_dir(assets_dir).map_err(|e| AssetError::Read {
        path: assets_dir.to_path_buf(),
        source: e,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AssetError::Read {
            path: assets_dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() || path.file_stem().and_then(|s| s.to_str()) != Some(image_ref) {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Some(rank) = IMAGE_EXTENSIONS.iter().position(|e| *e == ext.to_lowercase()) {
            candidates.push((rank, path));
        }
    }

    candidates.sort();
    candidates
        .into_iter()
        .next()
        .map(|(_, path)| path)
        .ok_or_else(|| AssetError::NotFound {
            dir: assets_dir.to_path_buf(),
            image_ref: image_ref.to_string(),
        })
}

/// Steps that bring an image stored with the given EXIF orientation upright.
pub fn orientation_transforms(orientation: u16) -> &'static [Transform] {
    match orientation {
        2 => &[Transform::FlipHorizontal],
        3 => &[Transform::RotateCw, Transform::RotateCw],
        4 => &[Transform::FlipVertical],
        5 => &[Transform::RotateCw, Transform::FlipHorizontal],
        6 => &[Transform::RotateCw],
        7 => &[Transform::RotateCcw, Transform::FlipHorizontal],
        8 => &[Transform::RotateCcw],
        _ => &[],
    }
}

fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Not fatal, the image is shown as stored
            warn!(path = %image_path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, AssetError> {
    let file_bytes = fs::read(image_path).map_err(|e| AssetError::Read {
        path: image_path.to_path_buf(),
        source: e,
    })?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();

    // EXIF is only read reliably from JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes).map_err(|e| {
        AssetError::Decode {
            path: image_path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    for step in orientation_transforms(orientation) {
        match step {
            Transform::RotateCw => image.rotate_cw(),
            Transform::RotateCcw => image.rotate_ccw(),
            Transform::FlipHorizontal => image.flip_horizontal(),
            Transform::FlipVertical => image.flip_vertical(),
        }
    }
    debug!(path = %image_path.display(), orientation, "decoded image");

    let texture = rl.load_texture_from_image(thread, &image).map_err(|e| AssetError::Texture {
        path: image_path.to_path_buf(),
        message: e.to_string(),
    })?;

    // CPU copy is no longer needed once uploaded
    drop(image);

    Ok(texture)
}

/// Checkerboard shown in place of an artwork whose file could not be loaded.
pub fn placeholder_texture(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Texture2D, AssetError> {
    let image = Image::gen_image_checked(400, 460, 40, 40, Color::LIGHTGRAY, Color::GRAY);
    rl.load_texture_from_image(thread, &image).map_err(|e| AssetError::Texture {
        path: PathBuf::from("<placeholder>"),
        message: e.to_string(),
    })
}
