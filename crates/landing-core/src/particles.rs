//! Decorative particle field drawn behind the page.
//!
//! The field is rebuilt wholesale whenever the viewport changes size; it is
//! never grown or shrunk incrementally. Connection lines come from an
//! all-pairs pass over a capped particle count.

use crate::config::SiteConfig;
use glam::Vec2;
use rand::prelude::*;

/// Max alpha of a connection line between two coincident particles.
pub const LINK_ALPHA_MAX: f32 = 0.1;
/// RGB of the connection lines.
pub const LINK_RGB: (u8, u8, u8) = (99, 102, 241);

const SPEED_SPAN: f32 = 0.5;
const RADIUS_MIN: f32 = 1.0;
const RADIUS_SPAN: f32 = 3.0;
const OPACITY_MIN: f32 = 0.2;
const OPACITY_SPAN: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleColor {
    Indigo,
    Violet,
}

impl ParticleColor {
    pub fn hex(self) -> &'static str {
        match self {
            ParticleColor::Indigo => "#6366f1",
            ParticleColor::Violet => "#8b5cf6",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub color: ParticleColor,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * SPEED_SPAN,
                (rng.gen::<f32>() - 0.5) * SPEED_SPAN,
            ),
            radius: rng.gen::<f32>() * RADIUS_SPAN + RADIUS_MIN,
            opacity: rng.gen::<f32>() * OPACITY_SPAN + OPACITY_MIN,
            color: if rng.gen_bool(0.5) {
                ParticleColor::Indigo
            } else {
                ParticleColor::Violet
            },
        }
    }

    /// Canvas fill style: the base colour with a two-digit hex alpha suffix.
    pub fn fill_style(&self) -> String {
        let alpha = (self.opacity.clamp(0.0, 1.0) * 255.0).floor() as u8;
        format!("{}{:02x}", self.color.hex(), alpha)
    }
}

/// A line to draw between two particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

impl Link {
    pub fn stroke_style(&self) -> String {
        let (r, g, b) = LINK_RGB;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }
}

/// Number of particles for a viewport of the given CSS width.
#[inline]
pub fn particle_count_for_width(width: f32, config: &SiteConfig) -> usize {
    if !(width.is_finite() && width > 0.0) || config.px_per_particle <= 0.0 {
        return 0;
    }
    ((width / config.px_per_particle).floor() as usize).min(config.max_particles)
}

/// Linear fade factor for a pair at `distance`: 1 at zero, 0 at `threshold`.
/// Returns `None` when the pair is too far apart to be linked.
#[inline]
pub fn link_factor(distance: f32, threshold: f32) -> Option<f32> {
    (distance < threshold).then(|| 1.0 - distance / threshold)
}

/// Wrap a coordinate into `[0, extent)`.
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    if !(extent > 0.0) {
        return 0.0;
    }
    let w = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if w >= extent {
        0.0
    } else {
        w
    }
}

pub struct ParticleField {
    pub width: f32,
    pub height: f32,
    pub particles: Vec<Particle>,
    link_distance: f32,
}

impl ParticleField {
    pub fn new<R: Rng>(
        width: f32,
        height: f32,
        config: &SiteConfig,
        rng: &mut R,
    ) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            link_distance: config.link_distance,
        };
        field.respawn(width, height, config, rng);
        field
    }

    /// Discard every particle and spawn a fresh batch sized to the viewport.
    pub fn respawn<R: Rng>(
        &mut self,
        width: f32,
        height: f32,
        config: &SiteConfig,
        rng: &mut R,
    ) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.link_distance = config.link_distance;
        let count = particle_count_for_width(self.width, config);
        self.particles = (0..count)
            .map(|_| Particle::random(rng, self.width, self.height))
            .collect();
    }

    pub fn link_distance(&self) -> f32 {
        self.link_distance
    }

    /// Advance one animation tick: move by velocity, wrap at the edges.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.position += p.velocity;
            p.position.x = wrap_coord(p.position.x, w);
            p.position.y = wrap_coord(p.position.y, h);
        }
    }

    /// All connection lines for the current positions.
    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d = a.position.distance(b.position);
                if let Some(f) = link_factor(d, self.link_distance) {
                    out.push(Link {
                        from: a.position,
                        to: b.position,
                        alpha: LINK_ALPHA_MAX * f,
                    });
                }
            }
        }
        out
    }
}
