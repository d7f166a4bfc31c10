use nalgebra::{Point2, Vector2};

use laneswitch_graphics::Rect;

/// A car on the road: a bounding box around `center` plus the distance it
/// travels each tick. The player's speed stays 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    center: Point2<i32>,
    size: Vector2<i32>,
    /// Pixels per tick toward the bottom of the screen.
    pub speed: i32,
}

impl Vehicle {
    pub fn new(center: Point2<i32>, size: Vector2<i32>, speed: i32) -> Self {
        Self {
            center,
            size,
            speed,
        }
    }

    pub fn center(&self) -> Point2<i32> {
        self.center
    }

    pub fn size(&self) -> Vector2<i32> {
        self.size
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center.x, self.center.y, self.size.x, self.size.y)
    }

    pub fn move_to_lane(&mut self, lane_x: i32) {
        self.center.x = lane_x;
    }

    pub fn advance(&mut self, delta_y: i32) {
        self.center.y += delta_y;
    }

    pub fn respawn_above(&mut self, lane_x: i32, y: i32) {
        self.center = Point2::new(lane_x, y);
    }

    pub fn intersects(&self, other: &Vehicle) -> bool {
        self.rect().intersects(&other.rect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(x: i32, y: i32) -> Vehicle {
        Vehicle::new(Point2::new(x, y), Vector2::new(50, 100), 0)
    }

    #[test]
    fn rect_is_centered() {
        let vehicle = car(100, 200);
        assert_eq!(vehicle.rect(), Rect::new(75, 150, 50, 100));
    }

    #[test]
    fn move_to_lane_keeps_y() {
        let mut vehicle = car(100, 200);
        vehicle.move_to_lane(300);
        assert_eq!(vehicle.center(), Point2::new(300, 200));
        vehicle.move_to_lane(300);
        assert_eq!(vehicle.center(), Point2::new(300, 200));
    }

    #[test]
    fn advance_moves_down() {
        let mut vehicle = car(100, 200);
        vehicle.advance(7);
        vehicle.advance(7);
        assert_eq!(vehicle.center(), Point2::new(100, 214));
    }

    #[test]
    fn respawn_resets_center() {
        let mut vehicle = car(100, 2000);
        vehicle.respawn_above(275, -200);
        assert_eq!(vehicle.center(), Point2::new(275, -200));
        assert_eq!(vehicle.size(), Vector2::new(50, 100));
    }

    #[test]
    fn intersection_is_symmetric() {
        let player = car(275, 640);
        for (x, y) in [(275, 640), (275, 545), (275, 540), (525, 640), (300, 700), (0, 0)] {
            let enemy = car(x, y);
            assert_eq!(player.intersects(&enemy), enemy.intersects(&player));
        }
    }

    #[test]
    fn same_lane_overlap_collides_other_lane_does_not() {
        let player = car(275, 640);
        assert!(player.intersects(&car(275, 560)));
        assert!(!player.intersects(&car(275, 540)));
        assert!(!player.intersects(&car(525, 640)));
    }
}
