use crate::constants::{NUCLEUS_BASE_SCALE, NUCLEUS_MAX_SCALE, NUCLEUS_SCALE_PER_PROTON};
use glam::Vec3;
use serde::{Deserialize, Serialize};

const CORE_RATIO: f32 = 0.5;
const SHELL_RATIO: f32 = 0.8;
const GLOW_RATIO: f32 = 1.8;

// Containment shell spin, rad/s per axis
const SHELL_SPIN: Vec3 = Vec3::new(0.3, 0.2, 0.0);

/// Visual sizing of the nucleus drawn at the centre of an atom model.
///
/// The nucleus is three concentric layers: a dense core, a wireframe
/// containment shell that slowly tumbles, and a faint glow.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NucleusProfile {
    pub scale: f32,
    pub core_radius: f32,
    pub shell_radius: f32,
    pub glow_radius: f32,
}

impl NucleusProfile {
    pub fn for_atomic_number(z: u8) -> Self {
        let scale = nucleus_scale(u32::from(z));
        Self {
            scale,
            core_radius: scale * CORE_RATIO,
            shell_radius: scale * SHELL_RATIO,
            glow_radius: scale * GLOW_RATIO,
        }
    }

    /// Euler angles (XYZ) of the containment shell after `elapsed` seconds.
    pub fn shell_rotation(&self, elapsed: f32) -> Vec3 {
        SHELL_SPIN * elapsed
    }
}

fn nucleus_scale(proton_count: u32) -> f32 {
    // Grows linearly with Z, capped so heavy atoms do not swallow the inner shells.
    (NUCLEUS_BASE_SCALE + proton_count as f32 * NUCLEUS_SCALE_PER_PROTON).min(NUCLEUS_MAX_SCALE)
}
