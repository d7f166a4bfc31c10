use crate::config::road::{MARKING_WIDTH_DIVISOR, ROAD_WIDTH_RATIO};

/// Static geometry of the window and the two-lane road, derived once from the
/// window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadLayout {
    pub width: i32,
    pub height: i32,
    pub road_width: i32,
    pub marking_width: i32,
    pub left_lane: i32,
    pub right_lane: i32,
}

impl RoadLayout {
    pub fn new(width: i32, height: i32) -> Self {
        let road_width = width * ROAD_WIDTH_RATIO.0 / ROAD_WIDTH_RATIO.1;
        let marking_width = width / MARKING_WIDTH_DIVISOR;

        Self {
            width,
            height,
            road_width,
            marking_width,
            left_lane: width / 2 - road_width / 4,
            right_lane: width / 2 + road_width / 4,
        }
    }

    /// X coordinate of the road's left edge.
    pub fn road_left(&self) -> i32 {
        self.width / 2 - self.road_width / 2
    }

    /// X coordinate of the road's right edge.
    pub fn road_right(&self) -> i32 {
        self.road_left() + self.road_width
    }

    pub fn lane_spacing(&self) -> i32 {
        self.right_lane - self.left_lane
    }

    pub fn lane_x(&self, lane: Lane) -> i32 {
        match lane {
            Lane::Left => self.left_lane,
            Lane::Right => self.right_lane,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_geometry() {
        let layout = RoadLayout::new(800, 800);
        assert_eq!(layout.road_width, 500);
        assert_eq!(layout.marking_width, 10);
        assert_eq!(layout.left_lane, 275);
        assert_eq!(layout.right_lane, 525);
        assert_eq!(layout.road_left(), 150);
        assert_eq!(layout.road_right(), 650);
    }

    #[test]
    fn lanes_are_ordered_and_on_the_road() {
        for width in [320, 640, 800, 1024, 1920] {
            let layout = RoadLayout::new(width, 600);
            assert!(layout.left_lane < layout.right_lane);
            assert!(layout.road_left() <= layout.left_lane);
            assert!(layout.right_lane <= layout.road_right());
        }
    }

    #[test]
    fn lane_lookup() {
        let layout = RoadLayout::new(800, 800);
        assert_eq!(layout.lane_x(Lane::Left), 275);
        assert_eq!(layout.lane_x(Lane::Right), 525);
        assert_eq!(layout.lane_spacing(), 250);
    }
}
