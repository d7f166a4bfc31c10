// config.rs

use laneswitch_graphics::Color;

/// Window constants
pub mod window {
    use super::Color;

    pub const WIDTH: i32 = 800;
    pub const HEIGHT: i32 = 800;
    pub const TITLE: &str = "Lane Switch";
    pub const BACKGROUND_COLOR: Color = Color::new(88, 169, 201);
}

/// Road geometry and colors
pub mod road {
    use super::Color;

    /// Road width is `window width * ROAD_WIDTH_RATIO.0 / ROAD_WIDTH_RATIO.1` (1/1.6).
    pub const ROAD_WIDTH_RATIO: (i32, i32) = (5, 8);
    /// Lane marking width is `window width / MARKING_WIDTH_DIVISOR`.
    pub const MARKING_WIDTH_DIVISOR: i32 = 80;

    pub const ROAD_COLOR: Color = Color::new(50, 50, 50);
    pub const CENTRE_LINE_COLOR: Color = Color::new(255, 240, 60);
    pub const EDGE_MARKING_COLOR: Color = Color::new(255, 255, 255);
}

/// Gameplay constants
pub mod gameplay {
    use std::time::Duration;

    pub const FRAME_RATE: u32 = 60;
    /// Ticks between two level ups.
    pub const LEVEL_UP_TICKS: u32 = 1000;
    pub const SPEED_INCREMENT: i32 = 1;
    pub const INITIAL_ENEMY_SPEED: i32 = 7;
    /// Center y of a freshly spawned enemy, above the top edge.
    pub const RESPAWN_Y: i32 = -200;
    /// Player center y as a fraction of the window height.
    pub const PLAYER_Y_RATIO: f32 = 0.8;
    pub const LEVEL_UP_BANNER_DURATION: Duration = Duration::from_secs(2);
}

/// Text overlays
pub mod hud {
    use super::Color;

    pub const STOPWATCH_POSITION: (i32, i32) = (10, 10);
    pub const STOPWATCH_COLOR: Color = Color::new(0, 0, 0);
    pub const LEVEL_UP_COLOR: Color = Color::new(0, 255, 0);
    pub const GAME_OVER_COLOR: Color = Color::new(255, 0, 0);
    pub const REPLAY_PROMPT_COLOR: Color = Color::new(255, 255, 255);
    /// Vertical distance of the game over lines from the window center.
    pub const GAME_OVER_LINE_OFFSET: i32 = 30;
}

/// Sprites shipped with the crate
pub mod assets {
    pub const PLAYER_CAR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/car.png");
    pub const ENEMY_CAR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/other_car.png");
}

/// Environment variables read by the logger.
pub mod logging {
    pub const LEVEL_ENV: &str = "LANESWITCH_LOG";
    pub const STYLE_ENV: &str = "LANESWITCH_LOG_STYLE";
    pub const DEFAULT_LEVEL: &str = "info";
}
