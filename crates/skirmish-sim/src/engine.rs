//! Simulation engine — the core of the game.
//!
//! `ArenaEngine` owns the hecs ECS world, consumes one input snapshot
//! per frame, runs all systems in a fixed order, and produces
//! `ArenaSnapshot`s. Completely headless (no windowing or rendering
//! dependency), enabling deterministic testing.

use hecs::World;

use skirmish_core::constants::MAX_FRAME_DT;
use skirmish_core::events::GameEvent;
use skirmish_core::input::InputSnapshot;
use skirmish_core::state::ArenaSnapshot;
use skirmish_core::types::SimTime;

use crate::systems;
use crate::world_setup::{self, ArenaConfig};

/// The simulation engine. Owns the ECS world and all frame state.
pub struct ArenaEngine {
    world: World,
    time: SimTime,
    events: Vec<GameEvent>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl ArenaEngine {
    /// Create a new engine with the arena described by `config`.
    pub fn new(config: &ArenaConfig) -> Self {
        let mut world = World::new();
        world_setup::setup_arena(&mut world, config);

        Self {
            world,
            time: SimTime::default(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Advance the simulation by one frame and return the resulting
    /// snapshot. `frame_dt` is the wall-clock delta supplied by the
    /// caller; it is clamped to `MAX_FRAME_DT` before use.
    pub fn tick(&mut self, input: &InputSnapshot, frame_dt: f32) -> ArenaSnapshot {
        let dt = frame_dt.min(MAX_FRAME_DT);

        self.run_systems(input, dt);
        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputSnapshot, dt: f32) {
        // 1. Avatar: firing, steering, integration, cooldown
        systems::avatar::run(&mut self.world, input, dt, &mut self.events);
        // 2. Pursuer AI decision + integration
        systems::pursuit::run(&mut self.world, dt);
        // 3. Projectile flight + lifetime expiry
        systems::projectile::run(&mut self.world, dt);
        // Walls and breakables have no per-frame update of their own.
        // 4. Collision detection and resolution
        systems::collision::run(&mut self.world, &mut self.events);
        // 5. Sweep entities whose active flag was cleared this frame
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
