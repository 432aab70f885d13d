//! Built-in catalog of the Sun and the eight planets.
//! Figures are rounded textbook values; animation speeds and sizes are artistic.

use super::planet::{Composition, Planet, Temperature};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn temperature(min: f64, max: f64, avg: f64) -> Temperature {
    Temperature { min, max, avg }
}

fn composition(kind: &str, atmosphere: &[&str]) -> Composition {
    Composition {
        kind: kind.to_string(),
        atmosphere: strings(atmosphere),
    }
}

/// All built-in bodies, ordered by position (Sun first).
pub fn builtin_planets() -> Vec<Planet> {
    vec![
        Planet {
            id: "sun".into(),
            name: "Sun".into(),
            description: "The Sun is the star at the center of our Solar System. It is a nearly \
                perfect sphere of hot plasma, heated to incandescence by nuclear fusion reactions \
                in its core. The Sun radiates energy mainly as light, ultraviolet, and infrared \
                radiation, and is the most important source of energy for life on Earth."
                .into(),
            diameter: 1_392_700.0,
            mass: "1.989 × 10^30".into(),
            distance_from_sun: 0.0,
            orbital_period: 0.0,
            rotation_period: 27.0,
            temperature: temperature(5500.0, 15_000_000.0, 5778.0),
            moons: 0,
            has_rings: false,
            color: "#FDB813".into(),
            texture: "textures/sun.jpg".into(),
            fun_facts: strings(&[
                "The Sun contains 99.86% of the mass in the Solar System.",
                "The Sun is classified as a G-type main-sequence star, or G dwarf star, or more \
                 informally, a yellow dwarf.",
                "Light from the Sun takes about 8 minutes to reach Earth.",
                "The Sun is about 4.6 billion years old.",
            ]),
            composition: composition("Star", &["Hydrogen", "Helium"]),
            position: 0,
            orbit_speed: 0.0,
            rotation_speed: 0.01,
            size: 5.0,
            real_size: 109.0,
        },
        Planet {
            id: "mercury".into(),
            name: "Mercury".into(),
            description: "Mercury is the smallest and innermost planet in the Solar System. It \
                has no natural satellites and no substantial atmosphere. The planet has a large \
                iron core which generates a magnetic field about 1% as strong as that of Earth."
                .into(),
            diameter: 4879.0,
            mass: "3.3011 × 10^23".into(),
            distance_from_sun: 57.9,
            orbital_period: 88.0,
            rotation_period: 58.6,
            temperature: temperature(-173.0, 427.0, 167.0),
            moons: 0,
            has_rings: false,
            color: "#B7B8B9".into(),
            texture: "textures/mercury.jpg".into(),
            fun_facts: strings(&[
                "Mercury is the fastest planet, orbiting the Sun every 88 Earth days.",
                "Mercury is the smallest planet in our solar system.",
                "Mercury has the most extreme temperature variations of any planet, ranging from \
                 -173°C at night to 427°C during the day.",
                "A day on Mercury (sunrise to sunrise) is 176 Earth days long.",
            ]),
            composition: composition("Terrestrial", &["Oxygen", "Sodium", "Hydrogen", "Helium"]),
            position: 1,
            orbit_speed: 0.04,
            rotation_speed: 0.004,
            size: 0.8,
            real_size: 0.38,
        },
        Planet {
            id: "venus".into(),
            name: "Venus".into(),
            description: "Venus is the second planet from the Sun. It is named after the Roman \
                goddess of love and beauty. As the brightest natural object in Earth's night sky \
                after the Moon, Venus can cast shadows and can be visible to the naked eye in \
                broad daylight."
                .into(),
            diameter: 12_104.0,
            mass: "4.8675 × 10^24".into(),
            distance_from_sun: 108.2,
            orbital_period: 224.7,
            rotation_period: -243.0,
            temperature: temperature(462.0, 462.0, 462.0),
            moons: 0,
            has_rings: false,
            color: "#E6E2AF".into(),
            texture: "textures/venus.jpg".into(),
            fun_facts: strings(&[
                "Venus rotates in the opposite direction to most planets.",
                "A day on Venus is longer than a year on Venus.",
                "Venus is the hottest planet in our solar system, even though Mercury is closer \
                 to the Sun.",
                "Venus has a thick atmosphere that traps heat, causing a runaway greenhouse \
                 effect.",
            ]),
            composition: composition("Terrestrial", &["Carbon Dioxide", "Nitrogen"]),
            position: 2,
            orbit_speed: 0.015,
            rotation_speed: -0.002,
            size: 1.5,
            real_size: 0.95,
        },
        Planet {
            id: "earth".into(),
            name: "Earth".into(),
            description: "Earth is the third planet from the Sun and the only astronomical object \
                known to harbor life. About 71% of Earth's surface is covered with water. Earth's \
                atmosphere consists mostly of nitrogen and oxygen."
                .into(),
            diameter: 12_756.0,
            mass: "5.9724 × 10^24".into(),
            distance_from_sun: 149.6,
            orbital_period: 365.2,
            rotation_period: 1.0,
            temperature: temperature(-88.0, 58.0, 15.0),
            moons: 1,
            has_rings: false,
            color: "#6B93D6".into(),
            texture: "textures/earth.jpg".into(),
            fun_facts: strings(&[
                "Earth is the only planet not named after a god.",
                "Earth is the densest planet in the Solar System.",
                "Earth rotation is gradually slowing down.",
                "Earth has a powerful magnetic field that protects us from the solar wind.",
            ]),
            composition: composition(
                "Terrestrial",
                &["Nitrogen", "Oxygen", "Argon", "Carbon Dioxide"],
            ),
            position: 3,
            orbit_speed: 0.01,
            rotation_speed: 0.01,
            size: 1.5,
            real_size: 1.0,
        },
        Planet {
            id: "mars".into(),
            name: "Mars".into(),
            description: "Mars is the fourth planet from the Sun and the second-smallest planet in \
                the Solar System. Mars is often referred to as the \"Red Planet\" because of the \
                iron oxide prevalent on its surface, which gives it a reddish appearance."
                .into(),
            diameter: 6792.0,
            mass: "6.4171 × 10^23".into(),
            distance_from_sun: 227.9,
            orbital_period: 687.0,
            rotation_period: 1.03,
            temperature: temperature(-153.0, 20.0, -65.0),
            moons: 2,
            has_rings: false,
            color: "#E27B58".into(),
            texture: "textures/mars.jpg".into(),
            fun_facts: strings(&[
                "Mars has the largest dust storms in the solar system.",
                "Mars has the tallest mountain in the solar system, Olympus Mons.",
                "Mars has seasons like Earth, but they last twice as long.",
                "Scientists have found evidence of liquid water on Mars.",
            ]),
            composition: composition("Terrestrial", &["Carbon Dioxide", "Nitrogen", "Argon"]),
            position: 4,
            orbit_speed: 0.008,
            rotation_speed: 0.009,
            size: 1.2,
            real_size: 0.53,
        },
        Planet {
            id: "jupiter".into(),
            name: "Jupiter".into(),
            description: "Jupiter is the fifth planet from the Sun and the largest in the Solar \
                System. It is a gas giant with a mass one-thousandth that of the Sun, but \
                two-and-a-half times that of all the other planets in the Solar System combined."
                .into(),
            diameter: 142_984.0,
            mass: "1.8982 × 10^27".into(),
            distance_from_sun: 778.6,
            orbital_period: 4331.0,
            rotation_period: 0.41,
            temperature: temperature(-145.0, -145.0, -145.0),
            moons: 79,
            has_rings: true,
            color: "#C88B3A".into(),
            texture: "textures/jupiter.jpg".into(),
            fun_facts: strings(&[
                "Jupiter has the shortest day of all the planets, rotating once every 9.8 hours.",
                "Jupiter has the Great Red Spot, a giant storm that has been raging for hundreds \
                 of years.",
                "Jupiter has a very strong magnetic field, 14 times stronger than Earth's.",
                "Jupiter has at least 79 moons, the most of any planet in our solar system.",
            ]),
            composition: composition("Gas Giant", &["Hydrogen", "Helium", "Methane", "Ammonia"]),
            position: 5,
            orbit_speed: 0.004,
            rotation_speed: 0.04,
            size: 3.0,
            real_size: 11.2,
        },
        Planet {
            id: "saturn".into(),
            name: "Saturn".into(),
            description: "Saturn is the sixth planet from the Sun and the second-largest in the \
                Solar System, after Jupiter. It is a gas giant with an average radius about nine \
                times that of Earth. It has only one-eighth the average density of Earth; \
                however, with its larger volume, Saturn is over 95 times more massive."
                .into(),
            diameter: 120_536.0,
            mass: "5.6834 × 10^26".into(),
            distance_from_sun: 1433.5,
            orbital_period: 10_747.0,
            rotation_period: 0.45,
            temperature: temperature(-178.0, -178.0, -178.0),
            moons: 82,
            has_rings: true,
            color: "#E4D191".into(),
            texture: "textures/saturn.jpg".into(),
            fun_facts: strings(&[
                "Saturn has the most extensive rings in the solar system.",
                "Saturn is the least dense planet in our solar system and would float in water.",
                "Saturn has a hexagonal cloud pattern at its north pole.",
                "A day on Saturn is only 10.7 hours long.",
            ]),
            composition: composition("Gas Giant", &["Hydrogen", "Helium", "Methane"]),
            position: 6,
            orbit_speed: 0.003,
            rotation_speed: 0.03,
            size: 2.5,
            real_size: 9.45,
        },
        Planet {
            id: "uranus".into(),
            name: "Uranus".into(),
            description: "Uranus is the seventh planet from the Sun. It has the third-largest \
                planetary radius and fourth-largest planetary mass in the Solar System. Uranus is \
                similar in composition to Neptune, and both have bulk chemical compositions which \
                differ from that of the larger gas giants Jupiter and Saturn."
                .into(),
            diameter: 51_118.0,
            mass: "8.6810 × 10^25".into(),
            distance_from_sun: 2872.5,
            orbital_period: 30_589.0,
            rotation_period: -0.72,
            temperature: temperature(-224.0, -224.0, -224.0),
            moons: 27,
            has_rings: true,
            color: "#D1E7E7".into(),
            texture: "textures/uranus.jpg".into(),
            fun_facts: strings(&[
                "Uranus rotates on its side, with an axial tilt of 98 degrees.",
                "Uranus is the coldest planet in our solar system, despite not being the farthest \
                 from the Sun.",
                "Uranus was the first planet discovered with a telescope.",
                "Uranus is named after the Greek god of the sky.",
            ]),
            composition: composition("Ice Giant", &["Hydrogen", "Helium", "Methane"]),
            position: 7,
            orbit_speed: 0.002,
            rotation_speed: -0.02,
            size: 2.0,
            real_size: 4.01,
        },
        Planet {
            id: "neptune".into(),
            name: "Neptune".into(),
            description: "Neptune is the eighth and farthest known planet from the Sun in the \
                Solar System. In the Solar System, it is the fourth-largest planet by diameter, \
                the third-most-massive planet, and the densest giant planet. Neptune is 17 times \
                the mass of Earth, slightly more massive than its near-twin Uranus."
                .into(),
            diameter: 49_528.0,
            mass: "1.0243 × 10^26".into(),
            distance_from_sun: 4495.1,
            orbital_period: 59_800.0,
            rotation_period: 0.67,
            temperature: temperature(-218.0, -218.0, -218.0),
            moons: 14,
            has_rings: true,
            color: "#5B5DDF".into(),
            texture: "textures/neptune.jpg".into(),
            fun_facts: strings(&[
                "Neptune has the strongest winds in the solar system, reaching speeds of \
                 2,100 km/h.",
                "Neptune was predicted to exist through mathematical calculations before it was \
                 actually observed.",
                "Neptune has a Great Dark Spot, similar to Jupiter's Great Red Spot.",
                "A year on Neptune lasts 165 Earth years.",
            ]),
            composition: composition("Ice Giant", &["Hydrogen", "Helium", "Methane"]),
            position: 8,
            orbit_speed: 0.001,
            rotation_speed: 0.025,
            size: 2.0,
            real_size: 3.88,
        },
    ]
}
