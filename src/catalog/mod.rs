//! Static planet catalog and quiz bank.
//!
//! Both datasets are immutable after load and are injected into the app as
//! resources, so tests can substitute fixtures. Lookups return `Option`;
//! only construction from untrusted data can fail.

pub mod assets;
pub mod data;
pub mod planet;
pub mod questions;

#[cfg(test)]
mod proptest_catalog;

use std::collections::HashSet;
use std::path::PathBuf;

use bevy::prelude::*;

pub use assets::{load_catalogs, CATALOG_ASSETS_DIR};
pub use data::builtin_planets;
pub use planet::{Composition, Planet, Temperature};
pub use questions::{builtin_questions, Difficulty, QuizQuestion};

/// Number of bodies that orbit the Sun.
pub const ORBITING_BODIES: u32 = 8;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate planet id '{0}'")]
    DuplicatePlanet(String),

    #[error("catalog has no body at position 0 (the Sun)")]
    MissingSun,

    #[error("planet positions must be exactly 0..={max}, got {got:?}")]
    BadPositions { max: u32, got: Vec<u32> },

    #[error("duplicate question id {0}")]
    DuplicateQuestion(u32),

    #[error("question {id}: correct answer '{answer}' is not one of its options")]
    AnswerNotInOptions { id: u32, answer: String },
}

/// Loads both catalogs once at build time and inserts them as resources.
pub struct CatalogPlugin {
    /// Directory searched for JSON overrides.
    pub dir: PathBuf,
}

impl Default for CatalogPlugin {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(CATALOG_ASSETS_DIR),
        }
    }
}

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        let (catalog, bank) = load_catalogs(&self.dir);
        info!(
            "Catalog ready: {} bodies, {} quiz questions",
            catalog.len(),
            bank.len()
        );
        app.insert_resource(catalog).insert_resource(bank);
    }
}

/// Read-only planet registry, ordered by position.
#[derive(Resource, Clone, Debug)]
pub struct PlanetCatalog {
    planets: Vec<Planet>,
}

impl PlanetCatalog {
    /// Validate and wrap a planet list. Order of the input does not matter.
    pub fn new(mut planets: Vec<Planet>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for planet in &planets {
            if !ids.insert(planet.id.as_str()) {
                return Err(CatalogError::DuplicatePlanet(planet.id.clone()));
            }
        }

        planets.sort_by_key(|p| p.position);

        if planets.first().map(|p| p.position) != Some(0) {
            return Err(CatalogError::MissingSun);
        }

        let positions: Vec<u32> = planets.iter().map(|p| p.position).collect();
        let expected: Vec<u32> = (0..=ORBITING_BODIES).collect();
        if positions != expected {
            return Err(CatalogError::BadPositions {
                max: ORBITING_BODIES,
                got: positions,
            });
        }

        Ok(Self { planets })
    }

    /// The built-in Sun and eight planets.
    pub fn builtin() -> Self {
        Self {
            planets: builtin_planets(),
        }
    }

    /// All bodies ordered by position, Sun first.
    pub fn all(&self) -> &[Planet] {
        &self.planets
    }

    /// Look up a body by id. Unknown ids are `None`.
    pub fn get(&self, id: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    pub fn sun(&self) -> &Planet {
        &self.planets[0]
    }

    /// Planets in orbital order (everything except the Sun).
    pub fn orbiting(&self) -> &[Planet] {
        &self.planets[1..]
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

impl Default for PlanetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Read-only bank of quiz questions.
#[derive(Resource, Clone, Debug)]
pub struct QuizBank {
    questions: Vec<QuizQuestion>,
}

impl QuizBank {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for q in &questions {
            if !ids.insert(q.id) {
                return Err(CatalogError::DuplicateQuestion(q.id));
            }
            if !q.options.contains(&q.correct_answer) {
                return Err(CatalogError::AnswerNotInOptions {
                    id: q.id,
                    answer: q.correct_answer.clone(),
                });
            }
        }
        Ok(Self { questions })
    }

    pub fn builtin() -> Self {
        Self {
            questions: builtin_questions(),
        }
    }

    pub fn all(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuizBank {
    fn default() -> Self {
        Self::builtin()
    }
}
