#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::enums::ShapeKind;
    use crate::events::GameEvent;
    use crate::input::InputSnapshot;
    use crate::state::ArenaSnapshot;
    use crate::types::{Color, Extent, Rect, SimTime};

    // ---- Rect intersection ----

    #[test]
    fn test_rect_intersection_overlap_extents() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(30.0, 30.0));
        let b = Rect::new(Vec2::new(20.0, 10.0), Vec2::new(30.0, 30.0));

        let overlap = a.intersection(&b).unwrap();
        assert_eq!(overlap.position, Vec2::new(20.0, 10.0));
        // a spans x 0..30, b spans x 20..50 -> overlap width 10
        assert_eq!(overlap.size, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_rect_intersection_disjoint() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(50.0, 50.0), Vec2::new(10.0, 10.0));
        assert!(a.intersection(&b).is_none());
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_rect_edge_touching_is_not_intersecting() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(
            a.intersection(&b).is_none(),
            "Zero-width overlap must not count as an intersection"
        );
    }

    #[test]
    fn test_rect_contained() {
        let outer = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        let inner = Rect::new(Vec2::new(40.0, 40.0), Vec2::new(10.0, 10.0));

        let overlap = outer.intersection(&inner).unwrap();
        assert_eq!(overlap, inner, "Containment overlaps as the inner box");
    }

    #[test]
    fn test_rect_from_entity() {
        let bounds = Rect::from_entity(Vec2::new(5.0, 6.0), Extent::new(30.0, 20.0));
        assert_eq!(bounds.position, Vec2::new(5.0, 6.0));
        assert_eq!(bounds.right(), 35.0);
        assert_eq!(bounds.bottom(), 26.0);
    }

    // ---- Color ----

    #[test]
    fn test_color_scaled_half() {
        let faded = Color::new(139, 69, 19).scaled(0.5);
        // Truncating cast: 69.5 -> 69, 34.5 -> 34, 9.5 -> 9
        assert_eq!(faded, Color::new(69, 34, 9));
    }

    #[test]
    fn test_color_scaled_to_black() {
        assert_eq!(Color::new(255, 255, 255).scaled(0.0), Color::new(0, 0, 0));
    }

    #[test]
    fn test_color_scaled_identity() {
        let base = Color::new(100, 100, 100);
        assert_eq!(base.scaled(1.0), base);
    }

    // ---- SimTime ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.frame, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-5);
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_shape_kind_serde() {
        for v in [ShapeKind::Rectangle, ShapeKind::Circle] {
            let json = serde_json::to_string(&v).unwrap();
            let back: ShapeKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_input_snapshot_serde() {
        let input = InputSnapshot {
            up: true,
            down: false,
            left: true,
            right: false,
            fire: Some(Vec2::new(120.0, 340.0)),
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: InputSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }

    /// Verify GameEvent round-trips through serde (tagged union).
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::ShotFired {
                origin: Vec2::new(415.0, 315.0),
            },
            GameEvent::PursuerDown { id: 7 },
            GameEvent::ObstacleDamaged {
                id: 3,
                health: 75.0,
            },
            GameEvent::ObstacleDestroyed { id: 3 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_snapshot_serde_default() {
        let snapshot = ArenaSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ArenaSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }
}
