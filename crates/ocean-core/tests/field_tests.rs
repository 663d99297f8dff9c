// Host-side tests for the particle field physics.

use glam::Vec2;
use ocean_core::*;

const W: f32 = 800.0;
const H: f32 = 600.0;
// Far enough from every particle that repulsion never applies.
const FAR: Vec2 = Vec2::new(-10_000.0, -10_000.0);

fn make_field(seed: u64) -> ParticleField {
    ParticleField::new(FieldParams::default(), W, H, seed)
}

fn single_particle_field(p: Particle) -> ParticleField {
    let params = FieldParams {
        particle_count: 1,
        ..FieldParams::default()
    };
    let mut field = ParticleField::new(params, W, H, 7);
    field.particles[0] = p;
    field
}

#[test]
fn spawns_fixed_count_within_ranges() {
    let field = make_field(42);
    assert_eq!(field.len(), PARTICLE_COUNT);
    for p in &field.particles {
        assert!(p.position.x >= 0.0 && p.position.x < W);
        assert!(p.position.y >= 0.0 && p.position.y < H);
        assert!(p.size >= SIZE_MIN && p.size < SIZE_MAX);
        assert!(p.speed_y >= SPEED_MIN && p.speed_y < SPEED_MAX);
        assert!(p.opacity >= OPACITY_MIN && p.opacity < OPACITY_MAX);
    }
}

#[test]
fn same_seed_spawns_same_field() {
    let a = make_field(9);
    let b = make_field(9);
    assert_eq!(a.particles, b.particles);
}

#[test]
fn count_is_invariant_across_ticks_and_resizes() {
    let mut field = make_field(1);
    for i in 0..3_000 {
        field.step(Vec2::new(400.0, 300.0), Intensity::IDLE);
        if i % 500 == 0 {
            field.resize(320.0 + i as f32 * 0.1, 240.0);
        }
        assert_eq!(field.len(), PARTICLE_COUNT);
    }
}

#[test]
fn wrap_keeps_particles_within_vertical_margin() {
    let mut field = make_field(3);
    let intensity = Intensity::new(1.5).unwrap();
    for tick in 0..10_000 {
        field.step(FAR, intensity);
        for (i, p) in field.particles.iter().enumerate() {
            assert!(
                p.position.y >= -WRAP_MARGIN && p.position.y <= H + WRAP_MARGIN,
                "particle {i} at y={} after tick {tick}",
                p.position.y
            );
        }
    }
}

#[test]
fn wrap_reseeds_x_and_keeps_attributes() {
    let start = Particle {
        position: Vec2::new(123.0, -WRAP_MARGIN + 0.05),
        size: 2.5,
        speed_y: 0.3,
        opacity: 0.6,
    };
    let mut field = single_particle_field(start.clone());
    field.step(FAR, Intensity::IDLE);

    let p = &field.particles[0];
    assert_eq!(p.position.y, H + WRAP_MARGIN);
    assert!(p.position.x >= 0.0 && p.position.x < W);
    assert_eq!(p.size, start.size);
    assert_eq!(p.speed_y, start.speed_y);
    assert_eq!(p.opacity, start.opacity);
}

#[test]
fn particle_just_above_margin_does_not_wrap() {
    let start = Particle {
        position: Vec2::new(50.0, -WRAP_MARGIN + 0.5),
        size: 1.0,
        speed_y: 0.2,
        opacity: 0.5,
    };
    let mut field = single_particle_field(start);
    field.step(FAR, Intensity::IDLE);
    let p = &field.particles[0];
    assert!((p.position.y - (-WRAP_MARGIN + 0.3)).abs() < 1e-5);
    assert_eq!(p.position.x, 50.0);
}

#[test]
fn repulsion_is_zero_at_or_beyond_radius() {
    let pos = Vec2::new(100.0, 100.0);
    assert_eq!(
        repulsion(pos, pos + Vec2::new(REPEL_RADIUS, 0.0), REPEL_RADIUS, REPEL_STRENGTH),
        Vec2::ZERO
    );
    assert_eq!(
        repulsion(pos, pos + Vec2::new(120.0, 160.0), REPEL_RADIUS, REPEL_STRENGTH),
        Vec2::ZERO
    );
}

#[test]
fn repulsion_pushes_away_linearly() {
    let pos = Vec2::new(100.0, 100.0);
    // Half the radius away -> half strength, pointing away from the pointer.
    let push = repulsion(pos, pos + Vec2::new(75.0, 0.0), REPEL_RADIUS, REPEL_STRENGTH);
    assert!((push.x + 1.0).abs() < 1e-6, "push={push:?}");
    assert!(push.y.abs() < 1e-6);

    let near = repulsion(pos, pos + Vec2::new(0.0, 10.0), REPEL_RADIUS, REPEL_STRENGTH);
    let far = repulsion(pos, pos + Vec2::new(0.0, 100.0), REPEL_RADIUS, REPEL_STRENGTH);
    assert!(near.y < 0.0 && far.y < 0.0);
    assert!(near.length() > far.length());
    assert!(near.length() <= REPEL_STRENGTH);
}

#[test]
fn coincident_pointer_gives_finite_displacement() {
    let pos = Vec2::new(200.0, 200.0);
    let push = repulsion(pos, pos, REPEL_RADIUS, REPEL_STRENGTH);
    assert!(push.is_finite());

    let mut field = single_particle_field(Particle {
        position: pos,
        size: 2.0,
        speed_y: 0.25,
        opacity: 0.5,
    });
    field.step(pos, Intensity::IDLE);
    let p = &field.particles[0];
    assert!(p.position.is_finite());
    assert!((p.position.y - (200.0 - 0.25)).abs() < 1e-5);
}

#[test]
fn distant_pointer_leaves_only_drift() {
    let mut field = make_field(11);
    let before = field.particles.clone();
    field.step(FAR, Intensity::IDLE);
    for (a, b) in before.iter().zip(&field.particles) {
        assert_eq!(a.position.x, b.position.x);
        assert!((a.position.y - a.speed_y - b.position.y).abs() < 1e-4);
    }
}

#[test]
fn doubling_intensity_doubles_drift() {
    let mut slow = make_field(5);
    let mut fast = make_field(5);
    let before = slow.particles.clone();
    slow.step(FAR, Intensity::new(1.0).unwrap());
    fast.step(FAR, Intensity::new(2.0).unwrap());
    for ((b, s), f) in before.iter().zip(&slow.particles).zip(&fast.particles) {
        let ds = b.position.y - s.position.y;
        let df = b.position.y - f.position.y;
        assert!(ds > 0.0);
        assert!((df - 2.0 * ds).abs() < 1e-4, "ds={ds} df={df}");
    }
}

#[test]
fn resize_does_not_move_particles() {
    let mut field = make_field(8);
    let before = field.particles.clone();
    field.resize(100.0, 50.0);
    assert_eq!(field.width(), 100.0);
    assert_eq!(field.height(), 50.0);
    assert_eq!(field.particles, before);
}

#[test]
fn particles_outside_shrunk_bounds_recycle_into_new_bounds() {
    let mut field = make_field(12);
    field.resize(200.0, 100.0);
    // Slowest particle needs (600 + 10) / 0.1 ticks to clear the top edge.
    for _ in 0..6_200 {
        field.step(FAR, Intensity::IDLE);
    }
    for p in &field.particles {
        assert!(p.position.x >= 0.0 && p.position.x < 200.0);
        assert!(p.position.y >= -WRAP_MARGIN && p.position.y <= 100.0 + WRAP_MARGIN);
    }
}

#[test]
fn empty_surface_does_not_panic() {
    let mut field = ParticleField::new(FieldParams::default(), 0.0, 0.0, 2);
    for _ in 0..200 {
        field.step(Vec2::ZERO, Intensity::IDLE);
    }
    assert_eq!(field.len(), PARTICLE_COUNT);
    assert!(field.particles.iter().all(|p| p.position.is_finite()));
}
