// Host-side tests for the particle field: sizing, wrap-around and links.

use glam::Vec2;
use landing_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn particle_at(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        velocity: Vec2::new(vx, vy),
        radius: 2.0,
        opacity: 0.5,
        color: ParticleColor::Indigo,
    }
}

#[test]
fn particle_count_scales_with_width_and_caps_at_80() {
    let cfg = SiteConfig::default();
    assert_eq!(particle_count_for_width(0.0, &cfg), 0);
    assert_eq!(particle_count_for_width(19.0, &cfg), 0);
    assert_eq!(particle_count_for_width(400.0, &cfg), 20);
    assert_eq!(particle_count_for_width(1599.0, &cfg), 79);
    assert_eq!(particle_count_for_width(1600.0, &cfg), 80);
    assert_eq!(particle_count_for_width(3840.0, &cfg), 80);
    assert_eq!(particle_count_for_width(f32::NAN, &cfg), 0);
}

#[test]
fn spawned_particles_respect_ranges() {
    let cfg = SiteConfig::default();
    let field = ParticleField::new(1024.0, 768.0, &cfg, &mut rng());
    assert_eq!(field.particles.len(), 51);
    for p in &field.particles {
        assert!(p.position.x >= 0.0 && p.position.x < 1024.0);
        assert!(p.position.y >= 0.0 && p.position.y < 768.0);
        assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
        assert!(p.radius >= 1.0 && p.radius <= 4.0);
        assert!(p.opacity >= 0.2 && p.opacity <= 0.7);
    }
}

#[test]
fn respawn_replaces_the_whole_batch() {
    let cfg = SiteConfig::default();
    let mut r = rng();
    let mut field = ParticleField::new(2000.0, 900.0, &cfg, &mut r);
    assert_eq!(field.particles.len(), 80);
    field.respawn(300.0, 600.0, &cfg, &mut r);
    assert_eq!(field.particles.len(), 15);
    assert_eq!(field.width, 300.0);
    for p in &field.particles {
        assert!(p.position.x < 300.0);
    }
}

#[test]
fn step_wraps_to_opposite_edge() {
    let cfg = SiteConfig::default();
    let mut field = ParticleField::new(100.0, 50.0, &cfg, &mut rng());
    field.particles = vec![
        particle_at(0.1, 10.0, -0.25, 0.0),
        particle_at(99.9, 10.0, 0.25, 0.0),
        particle_at(10.0, 0.1, 0.0, -0.25),
        particle_at(10.0, 49.9, 0.0, 0.25),
    ];
    field.step();
    let p = &field.particles;
    assert!(p[0].position.x > 99.0);
    assert!(p[1].position.x < 1.0);
    assert!(p[2].position.y > 49.0);
    assert!(p[3].position.y < 1.0);
}

#[test]
fn positions_stay_in_bounds_over_many_frames() {
    let cfg = SiteConfig::default();
    let mut field = ParticleField::new(640.0, 480.0, &cfg, &mut rng());
    for _ in 0..5000 {
        field.step();
        for p in &field.particles {
            assert!(p.position.x >= 0.0 && p.position.x < 640.0, "x={}", p.position.x);
            assert!(p.position.y >= 0.0 && p.position.y < 480.0, "y={}", p.position.y);
        }
    }
}

#[test]
fn wrap_coord_handles_edges() {
    assert_eq!(wrap_coord(0.0, 10.0), 0.0);
    assert_eq!(wrap_coord(10.0, 10.0), 0.0);
    assert!((wrap_coord(-0.5, 10.0) - 9.5).abs() < 1e-5);
    assert!(wrap_coord(-1e-9, 10.0) < 10.0);
    assert_eq!(wrap_coord(5.0, 0.0), 0.0);
}

#[test]
fn link_factor_is_zero_beyond_threshold_and_decreasing_inside() {
    assert_eq!(link_factor(100.0, 100.0), None);
    assert_eq!(link_factor(150.0, 100.0), None);
    assert_eq!(link_factor(0.0, 100.0), Some(1.0));
    let mut prev = f32::INFINITY;
    for d in 0..100 {
        let f = link_factor(d as f32, 100.0).expect("inside threshold");
        assert!(f < prev);
        assert!(f > 0.0 && f <= 1.0);
        prev = f;
    }
}

#[test]
fn links_only_join_close_pairs() {
    let cfg = SiteConfig::default();
    let mut field = ParticleField::new(1000.0, 1000.0, &cfg, &mut rng());
    field.particles = vec![
        particle_at(0.0, 0.0, 0.0, 0.0),
        particle_at(60.0, 80.0, 0.0, 0.0),  // 100 from the first: no link
        particle_at(30.0, 40.0, 0.0, 0.0),  // 50 from both
        particle_at(900.0, 900.0, 0.0, 0.0),
    ];
    let links = field.links();
    assert_eq!(links.len(), 2);
    for l in &links {
        assert!((l.alpha - LINK_ALPHA_MAX * 0.5).abs() < 1e-5);
        assert!(l.from.distance(l.to) < 100.0);
    }
}

#[test]
fn styles_use_expected_colour_formats() {
    let mut p = particle_at(0.0, 0.0, 0.0, 0.0);
    p.opacity = 0.5;
    assert_eq!(p.fill_style(), "#6366f17f");
    p.color = ParticleColor::Violet;
    p.opacity = 0.2;
    assert_eq!(p.fill_style(), "#8b5cf633");

    let link = Link {
        from: Vec2::ZERO,
        to: Vec2::ONE,
        alpha: 0.05,
    };
    assert_eq!(link.stroke_style(), "rgba(99, 102, 241, 0.05)");
}
