//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Everything the game needs from disk. Pieces that failed to load hold
/// their built-in defaults.
#[derive(Debug, Clone)]
pub struct LoadedContent {
    pub config: GameplayConfig,
    pub level: LevelDef,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse RON text containing a DataFile<T> wrapper.
pub(crate) fn parse_data_file<T>(file: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse RON text containing a single struct (not wrapped in DataFile).
pub(crate) fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Picks the level with the wanted id out of a level file.
pub(crate) fn select_level(
    file: &str,
    levels: Vec<LevelDef>,
    id: &str,
) -> Result<LevelDef, ContentLoadError> {
    levels
        .into_iter()
        .find(|level| level.id == id)
        .ok_or_else(|| ContentLoadError {
            file: file.to_string(),
            message: format!("no level with id '{}'", id),
        })
}

pub fn load_gameplay_config(base_path: &Path) -> Result<GameplayConfig, ContentLoadError> {
    let path = base_path.join("gameplay.ron");
    let contents = read_file(&path)?;
    parse_single(&path.display().to_string(), &contents)
}

pub fn load_level(base_path: &Path, id: &str) -> Result<LevelDef, ContentLoadError> {
    let path = base_path.join(format!("{}.ron", id));
    let file = path.display().to_string();
    let contents = read_file(&path)?;
    let levels = parse_data_file::<LevelDef>(&file, &contents)?;
    select_level(&file, levels, id)
}

/// Load gameplay config and the start level from assets/data/.
/// Each piece falls back to its built-in default on failure; the errors are
/// returned alongside so the caller can report them.
pub fn load_all_content(base_path: &Path) -> (LoadedContent, Vec<ContentLoadError>) {
    let mut errors = Vec::new();

    let config = match load_gameplay_config(base_path) {
        Ok(config) => config,
        Err(e) => {
            errors.push(e);
            GameplayConfig::default()
        }
    };

    let level = match load_level(base_path, &config.start_level) {
        Ok(level) => level,
        Err(e) => {
            errors.push(e);
            LevelDef::builtin()
        }
    };

    (LoadedContent { config, level }, errors)
}
