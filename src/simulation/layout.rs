use crate::constants::{BASE_ANGULAR_SPEED, SHELL_BASE_RADIUS, SHELL_RADIUS_STEP};
use crate::physics::configuration::SubshellToken;
use crate::simulation::orbit::OrbitDescriptor;
use glam::Vec3;
use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Geometry constants shared by every ring of a layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub shell_base_radius: f32,
    pub radius_step: f32,
    /// Angular speed of a shell-1 ring, in rad/s.
    pub base_speed: f32,
}

impl LayoutConfig {
    pub const fn new(shell_base_radius: f32, radius_step: f32, base_speed: f32) -> Self {
        Self {
            shell_base_radius,
            radius_step,
            base_speed,
        }
    }

    /// Reads a JSON layout file; missing fields keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn ring_radius(&self, principal_shell: u8) -> f32 {
        self.shell_base_radius + f32::from(principal_shell) * self.radius_step
    }

    /// Speed of ring `slot` in shell `principal_shell`; odd slots counter-rotate.
    pub fn angular_speed(&self, principal_shell: u8, slot: usize) -> f32 {
        let direction = if slot % 2 == 0 { 1.0 } else { -1.0 };
        self.base_speed / f32::from(principal_shell.max(1)).sqrt() * direction
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(SHELL_BASE_RADIUS, SHELL_RADIUS_STEP, BASE_ANGULAR_SPEED)
    }
}

/// Splits `electrons` over `slots` rings, filling from the first slot.
///
/// Each slot takes `ceil(remaining / slots_left)`, so earlier rings carry
/// the extra electron when the split is uneven. Empty trailing slots are
/// not returned.
pub fn distribute_electrons(electrons: u32, slots: usize) -> Vec<u32> {
    let mut remaining = electrons;
    let mut allocation = Vec::with_capacity(slots);

    for slots_left in (1..=slots as u32).rev() {
        let share = remaining.div_ceil(slots_left);
        if share == 0 {
            break;
        }
        allocation.push(share);
        remaining -= share;
    }

    allocation
}

/// Turns subshell tokens into orbit rings.
///
/// Radii, electron split and speeds are deterministic; only the ring
/// orientation is drawn from the generator's random source.
pub struct OrbitLayoutGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl OrbitLayoutGenerator<ChaCha8Rng> {
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for OrbitLayoutGenerator<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> OrbitLayoutGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Rings for every token, in token order.
    pub fn generate(
        &mut self,
        tokens: &[SubshellToken],
        config: LayoutConfig,
    ) -> Vec<OrbitDescriptor> {
        tokens
            .iter()
            .flat_map(|token| self.generate_subshell(token, config))
            .collect()
    }

    /// Rings for a single subshell. Electron counts of the result sum to
    /// `token.electron_count`.
    pub fn generate_subshell(
        &mut self,
        token: &SubshellToken,
        config: LayoutConfig,
    ) -> Vec<OrbitDescriptor> {
        let ring_radius = config.ring_radius(token.principal_shell);

        distribute_electrons(token.electron_count, token.subshell.ring_slots())
            .into_iter()
            .enumerate()
            .map(|(slot, electron_count)| {
                let orbit = OrbitDescriptor {
                    ring_radius,
                    electron_count,
                    orientation: self.random_orientation(),
                    angular_speed: config.angular_speed(token.principal_shell, slot),
                    slot: slot as u8,
                };
                trace!(
                    "{} ring {}: {} electrons, r={:.2}, w={:.3}",
                    token, slot, orbit.electron_count, orbit.ring_radius, orbit.angular_speed
                );
                orbit
            })
            .collect()
    }

    fn random_orientation(&mut self) -> Vec3 {
        Vec3::new(
            self.rng.gen_range(0.0..PI),
            self.rng.gen_range(0.0..PI),
            self.rng.gen_range(0.0..PI),
        )
    }
}
