use std::path::{Path, PathBuf};

use crate::error::MatteError;

/// Numeric id at the start of a sprite file name, e.g. `12` for
/// `12-glimmer.png` or `7.png`.
pub fn sprite_id(file_name: &str) -> Option<u32> {
    let digits: String = file_name
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Lists the PNG sprites in `dir` that should be processed.
///
/// Files whose name starts with `_` are skipped. When `only` is given, a
/// file is kept only if its [`sprite_id`] is listed. The result is sorted
/// by id; files without an id come last, ordered by name.
///
/// # Errors
///
/// * `MatteError::Io` - `dir` cannot be read
pub fn select_sprites(dir: &Path, only: Option<&[u32]>) -> Result<Vec<PathBuf>, MatteError> {
    let entries = std::fs::read_dir(dir).map_err(|source| MatteError::io(dir, source))?;

    let mut sprites = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| MatteError::io(dir, source))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !name.ends_with(".png") || name.starts_with('_') {
            continue;
        }
        let id = sprite_id(name);
        if let Some(only) = only {
            if !id.is_some_and(|id| only.contains(&id)) {
                continue;
            }
        }
        sprites.push((id, name.to_owned(), path));
    }

    sprites.sort_by(|(a_id, a_name, _), (b_id, b_name, _)| {
        (a_id.is_none(), a_id, a_name).cmp(&(b_id.is_none(), b_id, b_name))
    });

    Ok(sprites.into_iter().map(|(_, _, path)| path).collect())
}
