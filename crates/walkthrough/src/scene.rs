//! Scene asset bounds.
//!
//! The viewer only needs the bounding volume of the asset to frame it; meshes are
//! handed to the renderer by the host.

use std::io::BufRead;
use std::path::Path;

use glam::Vec3;
use walkthrough_core::{Result, SceneBounds, WalkthroughError};

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    }
}

fn bounds_of(models: &[tobj::Model], source: &str) -> Result<SceneBounds> {
    let points = models.iter().flat_map(|model| {
        model
            .mesh
            .positions
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
    });
    SceneBounds::from_points(points).ok_or_else(|| WalkthroughError::EmptyScene(source.to_string()))
}

/// Loads an OBJ file and returns the bounds of all its meshes.
pub fn load_bounds(path: impl AsRef<Path>) -> Result<SceneBounds> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let (models, _materials) =
        tobj::load_obj(path, &load_options()).map_err(|e| WalkthroughError::SceneLoad {
            path: source.clone(),
            reason: e.to_string(),
        })?;
    let bounds = bounds_of(&models, &source)?;
    log::info!(
        "loaded scene {source}: {} meshes, bounds {:?} .. {:?}",
        models.len(),
        bounds.min,
        bounds.max
    );
    Ok(bounds)
}

/// Reads OBJ data from a buffer and returns its bounds. Material libraries are
/// ignored.
pub fn bounds_from_obj_reader(reader: &mut impl BufRead, source: &str) -> Result<SceneBounds> {
    let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })
    .map_err(|e| WalkthroughError::SceneLoad {
        path: source.to_string(),
        reason: e.to_string(),
    })?;
    bounds_of(&models, source)
}
