#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use fishing_core::constants::*;
    use fishing_core::enums::Phase;

    use crate::curve::{catmull_rom, lerp, quadratic_bezier};
    use crate::morph::MorphAnimator;
    use crate::route::Route;
    use crate::timer::PhaseTimer;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "expected {b:?}, got {a:?}");
    }

    fn square_loop() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, -2.0),
            Vec3::new(10.0, 10.0, -4.0),
            Vec3::new(0.0, 10.0, -6.0),
            Vec3::new(-5.0, 5.0, -3.0),
        ]
    }

    // ---- Curves ----

    #[test]
    fn test_bezier_hits_endpoints() {
        let cases = [
            (Vec3::ZERO, Vec3::new(5.0, 5.0, 10.0), Vec3::new(10.0, 0.0, 0.0)),
            (
                Vec3::new(-3.0, 7.0, 1.0),
                Vec3::new(100.0, -40.0, 10.0),
                Vec3::new(0.5, 0.25, -8.0),
            ),
        ];
        for (p0, p1, p2) in cases {
            assert_close(quadratic_bezier(p0, p1, p2, 0.0), p0);
            assert_close(quadratic_bezier(p0, p1, p2, 1.0), p2);
        }
    }

    #[test]
    fn test_bezier_midpoint_pulled_toward_apex() {
        let p0 = Vec3::ZERO;
        let p2 = Vec3::new(10.0, 0.0, 0.0);
        let p1 = Vec3::new(5.0, 0.0, 10.0);
        // 0.25 p0 + 0.5 p1 + 0.25 p2
        assert_close(quadratic_bezier(p0, p1, p2, 0.5), Vec3::new(5.0, 0.0, 5.0));
    }

    #[test]
    fn test_catmull_interpolates_inner_points() {
        let [p0, p1, p2, p3] = [
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 2.0),
            Vec3::new(2.0, 0.0, 0.0),
        ];
        assert_close(catmull_rom(p0, p1, p2, p3, 0.0), p1);
        assert_close(catmull_rom(p0, p1, p2, p3, 1.0), p2);
    }

    #[test]
    fn test_catmull_continuous_across_segments() {
        let route = Route::new(square_loop());
        for i in 0..route.len() {
            let end = route.sample(i, 1.0).unwrap();
            let start = route.sample(route.next_index(i), 0.0).unwrap();
            assert_close(end, start);
        }
    }

    #[test]
    fn test_catmull_tangent_continuous_across_segments() {
        let route = Route::new(square_loop());
        let h = 1e-2;
        for i in 0..route.len() {
            let next = route.next_index(i);
            let out_tangent = route.sample(i, 1.0).unwrap() - route.sample(i, 1.0 - h).unwrap();
            let in_tangent = route.sample(next, h).unwrap() - route.sample(next, 0.0).unwrap();
            assert!(
                (out_tangent - in_tangent).length() < 0.05,
                "tangent jump at segment {i}: {out_tangent:?} vs {in_tangent:?}"
            );
        }
    }

    #[test]
    fn test_lerp_midpoint() {
        assert_close(
            lerp(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.5),
            Vec3::new(5.0, 0.0, 0.0),
        );
    }

    // ---- PhaseTimer ----

    #[test]
    fn test_timer_only_ticks_while_active() {
        let mut timer = PhaseTimer::new(2.0);
        timer.tick(1.0);
        assert_eq!(timer.elapsed(), 0.0);
        assert_eq!(timer.phase(), Phase::Idle);

        timer.start(2.0);
        timer.tick(0.5);
        assert_eq!(timer.phase(), Phase::Active);
        assert!((timer.progress() - 0.25).abs() < 1e-6);

        timer.complete();
        timer.tick(5.0);
        assert!((timer.elapsed() - 0.5).abs() < 1e-6);
        assert_eq!(timer.phase(), Phase::Complete);
    }

    #[test]
    fn test_timer_progress_unclamped() {
        let mut timer = PhaseTimer::default();
        timer.start(1.0);
        timer.tick(1.5);
        assert!((timer.progress() - 1.5).abs() < 1e-6);
        assert!(timer.has_elapsed_past(1.0));
        assert!(timer.is_finished());
    }

    #[test]
    fn test_timer_start_resets_elapsed() {
        let mut timer = PhaseTimer::default();
        timer.start(1.0);
        timer.tick(0.7);
        timer.start(3.0);
        assert_eq!(timer.elapsed(), 0.0);
        assert_eq!(timer.duration(), 3.0);
    }

    #[test]
    fn test_timer_edge_is_strict_but_finished_is_not() {
        let mut timer = PhaseTimer::default();
        timer.start(1.0);
        timer.tick(1.0);
        assert!(!timer.has_elapsed_past(1.0));
        assert!(timer.is_finished());
    }

    #[test]
    fn test_timer_wrap_carries_overshoot() {
        let mut timer = PhaseTimer::default();
        timer.start(1.0);
        timer.tick(2.25);
        assert!(timer.wrap());
        assert!(timer.wrap());
        assert!(!timer.wrap());
        assert!((timer.elapsed() - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_timer_zero_duration_never_divides() {
        let mut timer = PhaseTimer::default();
        timer.start(0.0);
        timer.tick(1.0);
        assert_eq!(timer.progress(), 1.0);
        assert!(!timer.wrap());
    }

    // ---- Route ----

    #[test]
    fn test_two_point_route_is_linear() {
        let route = Route::new(vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]);
        assert!(route.is_linear());
        assert_close(route.sample(0, 0.5).unwrap(), Vec3::new(5.0, 0.0, 0.0));
        assert_close(route.sample(1, 0.5).unwrap(), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(route.heading_point(0), Some(Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn test_unsampleable_routes() {
        for count in [0usize, 1, 3] {
            let route = Route::new(vec![Vec3::ONE; count]);
            assert!(!route.is_sampleable());
            assert_eq!(route.sample(0, 0.5), None);
        }
    }

    #[test]
    fn test_route_indices_wrap() {
        let route = Route::new(square_loop());
        assert_eq!(route.next_index(4), 0);
        assert_close(
            route.sample(7, 0.0).unwrap(),
            route.sample(2, 0.0).unwrap(),
        );
        assert_close(route.sample(0, 0.0).unwrap(), square_loop()[0]);
    }

    #[test]
    fn test_random_patrol_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let route = Route::random_patrol(&mut rng);
        let points = route.points();

        assert_eq!(points.len(), PATROL_RANDOM_WAYPOINTS + 3);
        assert_eq!(points[0], DOCK_ENTRY);
        assert_eq!(points[1], DOCK_MOUTH);
        assert_eq!(*points.last().unwrap(), DOCK_MOUTH);
        for p in &points[2..points.len() - 1] {
            assert!(p.cmpge(PATROL_BOX_MIN).all(), "{p:?} below patrol box");
            assert!(p.cmple(PATROL_BOX_MAX).all(), "{p:?} above patrol box");
        }
    }

    #[test]
    fn test_first_patrol_leaves_from_deeper_dock() {
        let first = Route::first_patrol(&mut ChaCha8Rng::seed_from_u64(7));
        let regular = Route::random_patrol(&mut ChaCha8Rng::seed_from_u64(7));
        let points = first.points();

        assert_eq!(points.len(), regular.len());
        assert_eq!(points[0], Vec3::new(DOCK_ENTRY.x, DOCK_ENTRY.y, FIRST_DOCK_DEPTH));
        assert_eq!(points[1], Vec3::new(DOCK_MOUTH.x, DOCK_MOUTH.y, FIRST_DOCK_DEPTH));
        assert_eq!(*points.last().unwrap(), DOCK_MOUTH);
        assert_eq!(&points[2..], &regular.points()[2..]);
    }

    #[test]
    fn test_random_patrol_deterministic_per_seed() {
        let a = Route::random_patrol(&mut ChaCha8Rng::seed_from_u64(99));
        let b = Route::random_patrol(&mut ChaCha8Rng::seed_from_u64(99));
        let c = Route::random_patrol(&mut ChaCha8Rng::seed_from_u64(100));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    // ---- Morph ----

    #[test]
    fn test_morph_holds_still_until_played() {
        let mut anim = MorphAnimator::new(3, 0.1);
        anim.update(1.0);
        let blend = anim.blend();
        assert_eq!((blend.from, blend.to), (0, 1));
        assert_eq!(blend.t, 0.0);
    }

    #[test]
    fn test_morph_cycles_and_wraps() {
        let mut anim = MorphAnimator::new(3, 0.1);
        anim.set_playing(true);

        anim.update(0.05);
        let blend = anim.blend();
        assert_eq!((blend.from, blend.to), (0, 1));
        assert!((blend.t - 0.5).abs() < 1e-5);

        anim.update(0.06);
        assert_eq!(anim.blend().from, 1);
        assert_eq!(anim.blend().t, 0.0);

        anim.update(0.11);
        let blend = anim.blend();
        assert_eq!((blend.from, blend.to), (2, 0));

        anim.update(0.11);
        assert_eq!(anim.blend().from, 0);
    }

    #[test]
    fn test_morph_without_frames_is_inert() {
        let mut anim = MorphAnimator::new(0, 0.1);
        anim.set_playing(true);
        anim.update(1.0);
        assert_eq!(anim.blend(), Default::default());
    }
}
