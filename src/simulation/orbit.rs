use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// One visual ring of a subshell and the electrons travelling on it.
///
/// The ring lies in its local XY plane, centred on the nucleus, and is
/// tilted into the scene by `orientation` (Euler angles, XYZ order).
/// Electrons start evenly spaced and all advance at `angular_speed`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitDescriptor {
    pub ring_radius: f32,
    pub electron_count: u32,
    pub orientation: Vec3,
    /// rad/s; negative rings counter-rotate
    pub angular_speed: f32,
    /// Index of the ring within its subshell's canonical slots.
    pub slot: u8,
}

impl OrbitDescriptor {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.orientation.x,
            self.orientation.y,
            self.orientation.z,
        )
    }

    /// Starting phase of electron `index`.
    pub fn phase_offset(&self, index: u32) -> f32 {
        if self.electron_count == 0 {
            return 0.0;
        }
        TAU / self.electron_count as f32 * index as f32
    }

    pub fn electron_phase(&self, index: u32, elapsed: f32) -> f32 {
        elapsed * self.angular_speed + self.phase_offset(index)
    }

    /// Position in the ring's own plane, before the orientation is applied.
    pub fn local_position(&self, index: u32, elapsed: f32) -> Vec3 {
        let phase = self.electron_phase(index, elapsed);
        Vec3::new(phase.cos(), phase.sin(), 0.0) * self.ring_radius
    }

    /// Scene position of electron `index` after `elapsed` seconds.
    pub fn electron_position(&self, index: u32, elapsed: f32) -> Vec3 {
        self.rotation() * self.local_position(index, elapsed)
    }

    pub fn electron_positions(&self, elapsed: f32) -> Vec<Vec3> {
        let rotation = self.rotation();
        (0..self.electron_count)
            .map(|index| rotation * self.local_position(index, elapsed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn flat_ring(electron_count: u32, angular_speed: f32) -> OrbitDescriptor {
        OrbitDescriptor {
            ring_radius: 2.0,
            electron_count,
            orientation: Vec3::ZERO,
            angular_speed,
            slot: 0,
        }
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn electrons_are_evenly_spaced() {
        let ring = flat_ring(4, 1.0);
        let offsets: Vec<f32> = (0..4).map(|i| ring.phase_offset(i)).collect();
        assert_eq!(offsets, vec![0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2]);
    }

    #[test]
    fn phase_advances_with_speed() {
        let ring = flat_ring(2, -1.5);
        assert!((ring.electron_phase(1, 2.0) - (PI - 3.0)).abs() < 1e-6);
    }

    #[test]
    fn flat_ring_positions_lie_on_circle() {
        let ring = flat_ring(4, 1.0);
        let positions = ring.electron_positions(0.0);
        assert!(close(positions[0], Vec3::new(2.0, 0.0, 0.0)));
        assert!(close(positions[1], Vec3::new(0.0, 2.0, 0.0)));
        for position in positions {
            assert!((position.length() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn orientation_tilts_the_ring() {
        let ring = OrbitDescriptor {
            orientation: Vec3::new(FRAC_PI_2, 0.0, 0.0),
            ..flat_ring(1, 1.0)
        };
        // Quarter turn about X carries the local +Y axis onto +Z.
        let position = ring.electron_position(0, FRAC_PI_2);
        assert!(close(position, Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn positions_are_deterministic_for_a_given_time() {
        let ring = OrbitDescriptor {
            orientation: Vec3::new(0.4, 1.1, 2.3),
            ..flat_ring(3, 0.75)
        };
        assert_eq!(ring.electron_positions(5.0), ring.electron_positions(5.0));
        assert_eq!(ring.electron_positions(5.0).len(), 3);
    }
}
