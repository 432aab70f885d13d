//! Quiz question records and the built-in question bank.

use serde::{Deserialize, Serialize};

/// Difficulty tag carried by every question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One multiple-choice question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    /// Catalog id of the planet the question illustrates, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet_id: Option<String>,
}

impl QuizQuestion {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

fn question(
    id: u32,
    text: &str,
    options: [&str; 4],
    correct: &str,
    explanation: &str,
    difficulty: Difficulty,
    planet_id: Option<&str>,
) -> QuizQuestion {
    QuizQuestion {
        id,
        question: text.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        correct_answer: correct.to_string(),
        explanation: explanation.to_string(),
        difficulty,
        planet_id: planet_id.map(str::to_string),
    }
}

/// The built-in bank of 15 questions, ordered by id.
pub fn builtin_questions() -> Vec<QuizQuestion> {
    use Difficulty::*;

    vec![
        question(
            1,
            "Which planet is closest to the Sun?",
            ["Venus", "Mercury", "Earth", "Mars"],
            "Mercury",
            "Mercury is the closest planet to the Sun, orbiting at an average distance of about \
             58 million kilometers.",
            Easy,
            None,
        ),
        question(
            2,
            "Which planet is known as the \"Red Planet\"?",
            ["Jupiter", "Venus", "Mars", "Saturn"],
            "Mars",
            "Mars is often called the \"Red Planet\" because of the iron oxide (rust) on its \
             surface that gives it a reddish appearance.",
            Easy,
            Some("mars"),
        ),
        question(
            3,
            "Which planet has the most moons?",
            ["Earth", "Jupiter", "Saturn", "Uranus"],
            "Saturn",
            "Saturn has 82 confirmed moons, the most of any planet in our solar system.",
            Medium,
            Some("saturn"),
        ),
        question(
            4,
            "Which planet rotates on its side?",
            ["Earth", "Mars", "Uranus", "Neptune"],
            "Uranus",
            "Uranus rotates on its side with an axial tilt of about 98 degrees, likely caused by a \
             collision with an Earth-sized object long ago.",
            Medium,
            Some("uranus"),
        ),
        question(
            5,
            "Which planet has the Great Red Spot?",
            ["Mars", "Jupiter", "Saturn", "Neptune"],
            "Jupiter",
            "The Great Red Spot is a giant storm on Jupiter that has been raging for at least \
             400 years.",
            Easy,
            Some("jupiter"),
        ),
        question(
            6,
            "Which planet is the hottest in our solar system?",
            ["Mercury", "Venus", "Earth", "Mars"],
            "Venus",
            "Despite being farther from the Sun than Mercury, Venus is the hottest planet due to \
             its thick atmosphere that traps heat in a runaway greenhouse effect.",
            Medium,
            Some("venus"),
        ),
        question(
            7,
            "How many planets in our solar system have rings?",
            ["1", "2", "3", "4"],
            "4",
            "Four planets have rings: Jupiter, Saturn, Uranus, and Neptune. Saturn's rings are \
             the most visible and spectacular.",
            Hard,
            None,
        ),
        question(
            8,
            "Which planet takes the longest to orbit the Sun?",
            ["Jupiter", "Saturn", "Uranus", "Neptune"],
            "Neptune",
            "Neptune takes about 165 Earth years to complete one orbit around the Sun.",
            Medium,
            Some("neptune"),
        ),
        question(
            9,
            "Which planet has a day longer than its year?",
            ["Mercury", "Venus", "Mars", "Jupiter"],
            "Venus",
            "Venus rotates so slowly that its day (243 Earth days) is longer than its year \
             (225 Earth days).",
            Hard,
            Some("venus"),
        ),
        question(
            10,
            "Which planet is the only one not named after a god?",
            ["Mars", "Earth", "Venus", "Neptune"],
            "Earth",
            "Earth is the only planet not named after a Roman or Greek god. The name comes from \
             Old English and Germanic words meaning \"ground\" or \"soil\".",
            Medium,
            Some("earth"),
        ),
        question(
            11,
            "Which planet has the strongest winds in the solar system?",
            ["Jupiter", "Saturn", "Uranus", "Neptune"],
            "Neptune",
            "Neptune has the strongest winds in the solar system, reaching speeds of up to 2,100 \
             kilometers per hour (1,300 mph).",
            Hard,
            Some("neptune"),
        ),
        question(
            12,
            "Which planet would float if placed in water?",
            ["Earth", "Mars", "Saturn", "Mercury"],
            "Saturn",
            "Saturn has such low density that it would float in water if there were a bathtub \
             large enough to hold it.",
            Hard,
            Some("saturn"),
        ),
        question(
            13,
            "How many Earth days does it take Mercury to orbit the Sun?",
            ["88 days", "225 days", "365 days", "687 days"],
            "88 days",
            "Mercury orbits the Sun every 88 Earth days, making it the fastest planet in our \
             solar system.",
            Medium,
            Some("mercury"),
        ),
        question(
            14,
            "Which planet has a hexagonal cloud pattern at its north pole?",
            ["Jupiter", "Saturn", "Uranus", "Neptune"],
            "Saturn",
            "Saturn has a persistent hexagonal cloud pattern at its north pole, a unique feature \
             not seen on any other planet.",
            Hard,
            Some("saturn"),
        ),
        question(
            15,
            "Which is the largest planet in our solar system?",
            ["Earth", "Saturn", "Jupiter", "Neptune"],
            "Jupiter",
            "Jupiter is the largest planet in our solar system, with a diameter of about 143,000 \
             kilometers (88,850 miles).",
            Easy,
            Some("jupiter"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bank_size() {
        assert_eq!(builtin_questions().len(), 15);
    }

    #[test]
    fn test_easy_questions() {
        let easy: Vec<u32> = builtin_questions()
            .iter()
            .filter(|q| q.difficulty == Difficulty::Easy)
            .map(|q| q.id)
            .collect();
        assert_eq!(easy, vec![1, 2, 5, 15]);
    }

    #[test]
    fn test_is_correct() {
        let bank = builtin_questions();
        assert!(bank[0].is_correct("Mercury"));
        assert!(!bank[0].is_correct("Venus"));
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
