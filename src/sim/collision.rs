//! Axis-aligned bounding box collision

use super::state::{Obstacle, Player};

/// Axis-aligned box in world space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap on both axes; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// First obstacle overlapping the player, in spawn order
pub fn first_hit<'a>(player: &Player, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    let bounds = player.bounds();
    obstacles.iter().find(|o| bounds.overlaps(&o.bounds()))
}

/// Whether the player overlaps any obstacle
pub fn check_collision(player: &Player, obstacles: &[Obstacle]) -> bool {
    first_hit(player, obstacles).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::ObstacleKind;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(20.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Aabb::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::new(-10.0, -10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_no_obstacles_no_collision() {
        let player = Player::at_start(&GameConfig::default());
        assert!(!check_collision(&player, &[]));
        assert!(first_hit(&player, &[]).is_none());
    }

    #[test]
    fn test_first_hit_is_in_spawn_order() {
        let config = GameConfig::default();
        let player = Player::at_start(&config);
        let obstacles = vec![
            Obstacle::new(ObstacleKind::Rock, 600.0, &config),
            Obstacle::new(ObstacleKind::Cactus, 110.0, &config),
            Obstacle::new(ObstacleKind::Rock, 120.0, &config),
        ];
        let hit = first_hit(&player, &obstacles).unwrap();
        assert_eq!(hit.kind, ObstacleKind::Cactus);
    }

    #[test]
    fn test_jumping_player_clears_obstacle() {
        let config = GameConfig::default();
        let mut player = Player::at_start(&config);
        let rock = Obstacle::new(ObstacleKind::Rock, 110.0, &config);
        assert!(check_collision(&player, std::slice::from_ref(&rock)));

        // Bottom edge exactly on the rock's top is not a hit
        player.pos.y = rock.pos.y - player.height;
        assert!(!check_collision(&player, std::slice::from_ref(&rock)));
    }

    fn arb_box() -> impl Strategy<Value = Aabb> {
        (-500.0f32..500.0, -500.0f32..500.0, 1.0f32..200.0, 1.0f32..200.0)
            .prop_map(|(x, y, w, h)| Aabb::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_box_overlaps_itself(a in arb_box()) {
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn prop_separated_on_x_never_overlaps(a in arb_box(), gap in 0.0f32..100.0) {
            let b = Aabb::new(a.right() + gap, a.y, a.width, a.height);
            prop_assert!(!a.overlaps(&b));
        }
    }
}
