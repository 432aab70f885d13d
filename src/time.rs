//! Animation clock driving orbits and spin.
//!
//! Elapsed time only moves forward; toggling scale mode or orbit visibility
//! never resets it.

use bevy::prelude::*;

use crate::types::AppSet;

/// Plugin providing the animation clock.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationClock>()
            .add_systems(Update, advance_clock.in_set(AppSet::Scene));
    }
}

/// Seconds of animation since the scene was spawned, plus a frame counter.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct AnimationClock {
    pub elapsed: f32,
    /// Number of animation ticks, used for per-frame spin.
    pub ticks: u64,
}

impl AnimationClock {
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
        self.ticks += 1;
    }
}

pub fn advance_clock(mut clock: ResMut<AnimationClock>, time: Res<Time>) {
    clock.advance(time.delta_secs());
}
