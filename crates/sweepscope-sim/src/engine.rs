//! Radar simulation engine.
//!
//! `RadarEngine` owns the hecs world of contacts, the zone store and the
//! sweep, processes operator commands, runs all systems, and produces
//! `RadarSnapshot`s. It is headless and deterministic for a given seed and
//! sequence of tick times.

use std::collections::{HashMap, VecDeque};

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use sweepscope_core::commands::OperatorCommand;
use sweepscope_core::components::ContactInfo;
use sweepscope_core::config::RadarConfig;
use sweepscope_core::enums::{ContactStatus, ZoneKind};
use sweepscope_core::error::{CommandError, ConfigError};
use sweepscope_core::events::RadarEvent;
use sweepscope_core::state::RadarSnapshot;
use sweepscope_core::types::{DVec2, SimTime};
use sweepscope_terrain::{apply_sectors, ClipReport, DistanceTable, RemovedZone, Sector, ZoneStore};

use crate::systems;
use crate::systems::spawner::{SpawnContext, SpawnOutcome, SpawnState};
use crate::systems::sweep::SweepState;
use crate::world_setup::{self, ContactSpec};

/// The simulation engine. Owns the ECS world and all radar state.
pub struct RadarEngine {
    config: RadarConfig,
    world: World,
    /// Live contacts by target id. Evicted contacts are removed.
    index: HashMap<u32, Entity>,
    time: SimTime,
    rng: ChaCha8Rng,
    sweep: SweepState,
    zones: ZoneStore,
    spawn: SpawnState,
    command_queue: VecDeque<OperatorCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<RadarEvent>,
}

impl Default for RadarEngine {
    fn default() -> Self {
        Self::build(RadarConfig::default())
    }
}

impl RadarEngine {
    /// Validate the config and create an engine at `config.start_time`.
    pub fn new(config: RadarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RadarConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut zones = ZoneStore::new(DistanceTable::new(config.distance_circles.clone()));
        world_setup::setup_zones(&mut zones, &mut rng, &config);
        info!(seed = config.seed, start = config.start_time, "radar engine ready");

        Self {
            world: World::new(),
            index: HashMap::new(),
            time: SimTime::starting_at(config.start_time),
            rng,
            sweep: SweepState::from_config(&config),
            zones,
            spawn: SpawnState::new(config.start_time),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = OperatorCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation to clock value `now` and return the resulting snapshot.
    pub fn tick(&mut self, now: f64) -> RadarSnapshot {
        self.process_commands();
        self.time.advance_to(now);
        self.run_systems();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.zones,
            &self.sweep,
            &self.time,
            &self.config,
            events,
        )
    }

    /// Snapshot of the current state without advancing. Pending events are
    /// included but not consumed.
    pub fn snapshot(&self) -> RadarSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.zones,
            &self.sweep,
            &self.time,
            &self.config,
            self.events.clone(),
        )
    }

    fn run_systems(&mut self) {
        let now = self.time.now_secs;

        self.sweep.advance();

        let ctx = SpawnContext {
            world: &mut self.world,
            index: &mut self.index,
            state: &mut self.spawn,
            rng: &mut self.rng,
            events: &mut self.events,
        };
        systems::spawner::run(ctx, &self.config, now);

        systems::movement::run(
            &mut self.world,
            now,
            self.config.history_interval_secs,
            &mut self.events,
        );
        systems::sweep::run(&mut self.world, &self.sweep, now, &mut self.events);

        systems::cleanup::run(
            &mut self.world,
            &mut self.index,
            &mut self.despawn_buffer,
            now,
            self.config.eviction_delay_secs,
            &mut self.events,
        );
    }

    // --- Commands ---

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply_command(command) {
                warn!(%err, "operator command rejected");
                self.events.push(RadarEvent::CommandRejected {
                    reason: err.to_string(),
                });
            }
        }
    }

    /// Apply a command immediately.
    pub fn apply_command(&mut self, command: OperatorCommand) -> Result<(), CommandError> {
        match command {
            OperatorCommand::SetContactStatus { target_id, status } => {
                self.set_contact_status(target_id, status)
            }
            OperatorCommand::ToggleTrajectory { target_id } => {
                self.toggle_trajectory(target_id).map(|_| ())
            }
            OperatorCommand::CreateSector {
                distance_km,
                angle_degrees,
                kind,
            } => self
                .create_sector(distance_km, angle_degrees, kind)
                .map(|_| ()),
            OperatorCommand::SetSectorActive { id, active } => {
                if self.zones.set_sector_active(id, active) {
                    Ok(())
                } else {
                    Err(CommandError::UnknownZone(id))
                }
            }
            OperatorCommand::AddPolygon { vertices, kind } => {
                self.add_polygon(vertices, kind).map(|_| ())
            }
            OperatorCommand::RemoveZone { id } => self.remove_zone(id).map(|_| ()),
            OperatorCommand::ApplySectorClipping => {
                self.apply_sector_clipping();
                Ok(())
            }
            OperatorCommand::SetRotationSpeed { deg_per_tick } => {
                self.sweep.set_rotation_speed(deg_per_tick)
            }
            OperatorCommand::ScaleRotationSpeed { factor } => {
                self.sweep.scale_rotation_speed(factor)
            }
        }
    }

    // --- Contacts ---

    /// Spawn attempt at a random border bearing, outside the spawn schedule.
    pub fn try_spawn(&mut self, now: f64) -> SpawnOutcome {
        let ctx = SpawnContext {
            world: &mut self.world,
            index: &mut self.index,
            state: &mut self.spawn,
            rng: &mut self.rng,
            events: &mut self.events,
        };
        systems::spawner::try_spawn(ctx, &self.config, now)
    }

    /// Spawn attempt entering at bearing `azimuth` (radians). A non-finite
    /// bearing is rejected before any gate runs.
    pub fn try_spawn_at_azimuth(
        &mut self,
        now: f64,
        azimuth: f64,
    ) -> Result<SpawnOutcome, CommandError> {
        if !azimuth.is_finite() {
            return Err(CommandError::InvalidFlight(format!(
                "entry bearing must be finite, got {azimuth}"
            )));
        }
        let ctx = SpawnContext {
            world: &mut self.world,
            index: &mut self.index,
            state: &mut self.spawn,
            rng: &mut self.rng,
            events: &mut self.events,
        };
        Ok(systems::spawner::try_spawn_at(ctx, &self.config, now, azimuth))
    }

    /// Spawn a contact with explicit flight parameters, skipping the capacity
    /// and density checks. No id is issued for a rejected spec.
    pub fn spawn_contact(&mut self, spec: ContactSpec, now: f64) -> Result<u32, CommandError> {
        spec.validate()?;
        let target_id = self.spawn.issue_target_id();
        let entity = world_setup::spawn_contact(&mut self.world, target_id, spec, now);
        self.index.insert(target_id, entity);
        self.events.push(RadarEvent::ContactSpawned {
            target_id,
            azimuth_degrees: sweepscope_core::geometry::azimuth_degrees(spec.start),
        });
        Ok(target_id)
    }

    fn contact_entity(&self, target_id: u32) -> Result<Entity, CommandError> {
        self.index
            .get(&target_id)
            .copied()
            .ok_or(CommandError::UnknownContact(target_id))
    }

    pub fn set_contact_status(
        &mut self,
        target_id: u32,
        status: ContactStatus,
    ) -> Result<(), CommandError> {
        let entity = self.contact_entity(target_id)?;
        let mut info = self
            .world
            .get::<&mut ContactInfo>(entity)
            .map_err(|_| CommandError::UnknownContact(target_id))?;
        info.status = status;
        Ok(())
    }

    /// Set a contact's status from its text tag (`unknown`, `enemy`, `ally`).
    pub fn set_contact_status_tag(&mut self, target_id: u32, tag: &str) -> Result<(), CommandError> {
        let status: ContactStatus = tag.parse()?;
        self.set_contact_status(target_id, status)
    }

    /// Flip the trajectory overlay flag. Returns the new value.
    pub fn toggle_trajectory(&mut self, target_id: u32) -> Result<bool, CommandError> {
        let entity = self.contact_entity(target_id)?;
        let mut info = self
            .world
            .get::<&mut ContactInfo>(entity)
            .map_err(|_| CommandError::UnknownContact(target_id))?;
        info.show_trajectory = !info.show_trajectory;
        Ok(info.show_trajectory)
    }

    /// Copy of a live contact's info component.
    pub fn contact(&self, target_id: u32) -> Option<ContactInfo> {
        let entity = self.index.get(&target_id)?;
        self.world
            .get::<&ContactInfo>(*entity)
            .ok()
            .map(|info| (*info).clone())
    }

    // --- Zones ---

    pub fn create_sector(
        &mut self,
        distance_km: f64,
        angle_degrees: f64,
        kind: ZoneKind,
    ) -> Result<Sector, CommandError> {
        let sector = self.zones.create_sector(distance_km, angle_degrees, kind)?;
        self.events.push(RadarEvent::SectorCreated { id: sector.id });
        Ok(sector)
    }

    /// Create a sector with its kind given as a text tag.
    pub fn create_sector_tagged(
        &mut self,
        distance_km: f64,
        angle_degrees: f64,
        kind: &str,
    ) -> Result<Sector, CommandError> {
        let kind: ZoneKind = kind.parse()?;
        self.create_sector(distance_km, angle_degrees, kind)
    }

    pub fn add_polygon(&mut self, vertices: Vec<DVec2>, kind: ZoneKind) -> Result<u32, CommandError> {
        self.zones.add_polygon(vertices, kind)
    }

    /// Remove the polygon with this id, or the sector if no polygon matches.
    pub fn remove_zone(&mut self, id: u32) -> Result<RemovedZone, CommandError> {
        let removed = self
            .zones
            .remove_polygon_or_sector(id)
            .ok_or(CommandError::UnknownZone(id))?;
        self.events.push(RadarEvent::ZoneRemoved { id });
        Ok(removed)
    }

    /// Split terrain polygons against every active sector.
    pub fn apply_sector_clipping(&mut self) -> ClipReport {
        let report = apply_sectors(&mut self.zones, |sector| sector.active);
        for (original_id, pieces) in &report.split {
            self.events.push(RadarEvent::PolygonSplit {
                original_id: *original_id,
                pieces: pieces.clone(),
            });
        }
        report
    }

    // --- Accessors ---

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn zones(&self) -> &ZoneStore {
        &self.zones
    }

    pub fn sweep(&self) -> &SweepState {
        &self.sweep
    }

    /// Flip the beam's direction of rotation.
    pub fn reverse_rotation(&mut self) {
        self.sweep.reverse();
    }

    /// Scheduled spawn attempts made so far, accepted or rejected.
    pub fn spawn_attempts(&self) -> u64 {
        self.spawn.attempts
    }

    pub fn active_contact_count(&self) -> usize {
        systems::spawner::active_count(&self.world)
    }

    /// Contacts still held in memory, active or not.
    pub fn contact_count(&self) -> usize {
        self.index.len()
    }
}
