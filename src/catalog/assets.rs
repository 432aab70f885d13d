//! Optional JSON overrides for the built-in catalogs.
//!
//! `assets/catalog/planets.json` and `assets/catalog/quiz.json` replace the
//! built-in data when present. Missing files are not an error; a malformed or
//! invalid file is reported and the built-in data is kept.

use std::fs;
use std::path::Path;

use bevy::prelude::*;

use super::{CatalogError, Planet, PlanetCatalog, QuizBank, QuizQuestion};

/// Default directory searched for catalog overrides.
pub const CATALOG_ASSETS_DIR: &str = "assets/catalog";

const PLANETS_FILE: &str = "planets.json";
const QUIZ_FILE: &str = "quiz.json";

impl PlanetCatalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let planets: Vec<Planet> = serde_json::from_str(json)?;
        Self::new(planets)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}

impl QuizBank {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let questions: Vec<QuizQuestion> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}

/// Load a catalog file if it exists. `Ok(None)` means "use the built-in data".
fn load_optional<T>(
    path: &Path,
    load: impl FnOnce(&Path) -> Result<T, CatalogError>,
) -> Result<Option<T>, CatalogError> {
    if !path.exists() {
        return Ok(None);
    }
    load(path).map(Some)
}

/// Resolve both catalogs from `dir`, falling back to built-in data per file.
pub fn load_catalogs(dir: impl AsRef<Path>) -> (PlanetCatalog, QuizBank) {
    let dir = dir.as_ref();

    let planets_path = dir.join(PLANETS_FILE);
    let planets = match load_optional(&planets_path, |p| PlanetCatalog::load(p)) {
        Ok(Some(catalog)) => {
            info!("Loaded {} bodies from {}", catalog.len(), planets_path.display());
            catalog
        }
        Ok(None) => PlanetCatalog::builtin(),
        Err(err) => {
            warn!("Ignoring {}: {err}", planets_path.display());
            PlanetCatalog::builtin()
        }
    };

    let quiz_path = dir.join(QUIZ_FILE);
    let bank = match load_optional(&quiz_path, |p| QuizBank::load(p)) {
        Ok(Some(bank)) => {
            info!("Loaded {} quiz questions from {}", bank.len(), quiz_path.display());
            bank
        }
        Ok(None) => QuizBank::builtin(),
        Err(err) => {
            warn!("Ignoring {}: {err}", quiz_path.display());
            QuizBank::builtin()
        }
    };

    (planets, bank)
}
