//! Confetti - Particle Field for the Celebration Effect
//!
//! Pieces start above the top edge, fall under gravity with a sideways
//! drift, and are recycled to the top once they pass the bottom edge.

use rand::Rng;

use crate::state::capabilities::Viewport;

/// Confetti colors (RGB)
pub const PALETTE: [u32; 8] = [
    0xf44336, 0xe91e63, 0x9c27b0, 0x3f51b5, 0x03a9f4, 0x4caf50, 0xffeb3b, 0xff9800,
];

/// Terminal fall speed in pixels per second
const MAX_FALL_SPEED: f32 = 420.0;

/// A single piece of confetti
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub width: f32,
    pub height: f32,
    pub color: u32,
}

impl Particle {
    fn spawn(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let width = rng.random_range(4.0..10.0);
        Self {
            x: random_x(viewport, rng),
            y: rng.random_range(-viewport.height.max(1.0)..0.0),
            vx: rng.random_range(-40.0..40.0),
            vy: rng.random_range(40.0..160.0),
            width,
            height: width * rng.random_range(1.2..2.0),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
        }
    }
}

fn random_x(viewport: Viewport, rng: &mut impl Rng) -> f32 {
    if viewport.width <= 0.0 {
        0.0
    } else {
        rng.random_range(0.0..viewport.width)
    }
}

/// All confetti currently on screen
#[derive(Debug, Clone, Default)]
pub struct ConfettiField {
    particles: Vec<Particle>,
    viewport: Viewport,
    gravity: f32,
}

impl ConfettiField {
    /// Spawn `count` pieces for this viewport
    pub fn spawn(viewport: Viewport, count: usize, gravity: f32, rng: &mut impl Rng) -> Self {
        let particles = (0..count).map(|_| Particle::spawn(viewport, rng)).collect();
        Self {
            particles,
            viewport,
            gravity,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Follow a window resize
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32, rng: &mut impl Rng) {
        let viewport = self.viewport;
        for p in &mut self.particles {
            p.vy = (p.vy + self.gravity * dt).min(MAX_FALL_SPEED);
            p.x += p.vx * dt;
            p.y += p.vy * dt;

            if viewport.width > 0.0 {
                p.x = p.x.rem_euclid(viewport.width);
                // rem_euclid can round up to the divisor
                if p.x >= viewport.width {
                    p.x = 0.0;
                }
            }
            if p.y > viewport.height {
                *p = Particle::spawn(viewport, rng);
                p.y = -p.height;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_spawn_count_and_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let viewport = Viewport::new(800.0, 600.0);
        let field = ConfettiField::spawn(viewport, 50, 120.0, &mut rng);

        assert_eq!(field.particles().len(), 50);
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y < 0.0);
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_particles_stay_inside_horizontally() {
        let mut rng = StdRng::seed_from_u64(2);
        let viewport = Viewport::new(320.0, 240.0);
        let mut field = ConfettiField::spawn(viewport, 30, 120.0, &mut rng);

        for _ in 0..600 {
            field.step(1.0 / 60.0, &mut rng);
            for p in field.particles() {
                assert!(p.x >= 0.0 && p.x < 320.0);
                assert!(p.y <= 240.0);
            }
        }
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ConfettiField::spawn(Viewport::new(100.0, 10_000.0), 1, 120.0, &mut rng);
        let before = field.particles()[0];
        field.step(0.1, &mut rng);
        let after = field.particles()[0];
        assert!(after.vy > before.vy);
        assert!(after.y > before.y);
    }

    #[test]
    fn test_zero_viewport_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut field = ConfettiField::spawn(Viewport::default(), 5, 120.0, &mut rng);
        field.step(0.5, &mut rng);
        assert_eq!(field.particles().len(), 5);
    }
}
