//! Cursor-trail particle simulation.
//!
//! Pointer movement spawns small hearts that drift, spin and shrink until the
//! cull threshold removes them. The simulation is advanced by an explicit
//! `tick` so frame timing stays under the caller's (and the tests') control.

use crate::rng::Lcg;

/// Particles at or below this size are culled.
pub const FADE_THRESHOLD: f32 = 0.2;

/// Size lost per simulated frame.
pub const SHRINK_PER_TICK: f32 = 0.1;

/// Hearts spawned per pointer-move event.
pub const SPAWN_PER_MOVE: usize = 2;

/// The heart path's native width is ~110px with its visual center near
/// (75, 75); drawing translates by `-HEART_CENTER` and scales by
/// `size / HEART_DRAW_DIVISOR`.
pub const HEART_CENTER: (f64, f64) = (75.0, 75.0);
pub const HEART_DRAW_DIVISOR: f64 = 60.0;

/// Start point of the closed heart outline.
pub const HEART_START: (f64, f64) = (75.0, 40.0);

/// Cubic bezier segments `(c1x, c1y, c2x, c2y, x, y)` tracing the heart from
/// `HEART_START` back onto itself.
pub const HEART_CURVES: [(f64, f64, f64, f64, f64, f64); 6] = [
    (75.0, 37.0, 70.0, 25.0, 50.0, 25.0),
    (20.0, 25.0, 20.0, 62.5, 20.0, 62.5),
    (20.0, 80.0, 40.0, 102.0, 75.0, 120.0),
    (110.0, 102.0, 130.0, 80.0, 130.0, 62.5),
    (130.0, 62.5, 130.0, 25.0, 100.0, 25.0),
    (85.0, 25.0, 75.0, 37.0, 75.0, 40.0),
];

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub vx: f32,
    pub vy: f32,
    pub rotation: f32,
    pub spin: f32,
    /// HSL hue; rendered at 100% saturation, 75% lightness.
    pub hue: f32,
}

impl Particle {
    fn spawn(x: f32, y: f32, rng: &mut Lcg) -> Self {
        Self {
            x,
            y,
            size: rng.range(2.0, 7.0),
            vx: rng.range(-1.5, 1.5),
            vy: rng.range(-1.5, 1.5),
            rotation: rng.range(-0.25, 0.25),
            spin: rng.range(-0.01, 0.01),
            hue: rng.range(330.0, 350.0),
        }
    }

    /// CSS color for the 2D context fill.
    pub fn css_color(&self) -> String {
        format!("hsl({:.0}, 100%, 75%)", self.hue)
    }

    /// Advance one simulated frame.
    pub fn step(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.rotation += self.spin;
        // Shrinking stops at the threshold, so size can never go negative.
        if self.size > FADE_THRESHOLD {
            self.size -= SHRINK_PER_TICK;
        }
    }
}

/// Owns every live particle; nothing else holds references into it.
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: Lcg,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: Lcg::new(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Pointer-move handler: a small burst at the pointer position.
    pub fn spawn_burst(&mut self, x: f32, y: f32) {
        for _ in 0..SPAWN_PER_MOVE {
            let p = Particle::spawn(x, y, &mut self.rng);
            self.particles.push(p);
        }
    }

    /// One simulated frame: advance every particle, then cull the faded ones.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.step();
        }
        self.particles.retain(|p| p.size > FADE_THRESHOLD);
    }
}
