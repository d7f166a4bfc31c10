/*!
 * Road backdrop and text overlays. Nothing here holds state.
 */

use std::time::Duration;

use laneswitch_graphics::{Rect, Renderer, TextAnchor};

use super::road::RoadLayout;
use crate::config::{hud, road, window};

pub fn draw_background(layout: &RoadLayout, renderer: &mut impl Renderer) {
    let (w, h) = (layout.width, layout.height);
    let mark = layout.marking_width;

    renderer.fill_rect(Rect::new(0, 0, w, h), window::BACKGROUND_COLOR);
    renderer.fill_rect(
        Rect::new(layout.road_left(), 0, layout.road_width, h),
        road::ROAD_COLOR,
    );
    renderer.fill_rect(
        Rect::new(w / 2 - mark / 2, 0, mark, h),
        road::CENTRE_LINE_COLOR,
    );
    renderer.fill_rect(
        Rect::new(layout.road_left() + mark * 2, 0, mark, h),
        road::EDGE_MARKING_COLOR,
    );
    renderer.fill_rect(
        Rect::new(layout.road_right() - mark * 3, 0, mark, h),
        road::EDGE_MARKING_COLOR,
    );
}

pub fn stopwatch_text(elapsed: Duration) -> String {
    format!("Time: {}s", elapsed.as_secs())
}

pub fn draw_stopwatch(elapsed: Duration, renderer: &mut impl Renderer) {
    let (x, y) = hud::STOPWATCH_POSITION;
    renderer.draw_text(
        &stopwatch_text(elapsed),
        hud::STOPWATCH_COLOR,
        TextAnchor::TopLeft(x, y),
    );
}

pub fn draw_level_up_banner(layout: &RoadLayout, level: u32, renderer: &mut impl Renderer) {
    renderer.draw_text(
        &format!("LEVEL UP! Level: {}", level),
        hud::LEVEL_UP_COLOR,
        TextAnchor::Center(layout.width / 2, layout.height / 2),
    );
}

pub const GAME_OVER_TEXT: &str = "GAME OVER! YOU LOST!";
pub const REPLAY_PROMPT_TEXT: &str = "Press R to Replay or Q to Quit";

pub fn draw_game_over(layout: &RoadLayout, renderer: &mut impl Renderer) {
    let (cx, cy) = (layout.width / 2, layout.height / 2);

    renderer.draw_text(
        GAME_OVER_TEXT,
        hud::GAME_OVER_COLOR,
        TextAnchor::Center(cx, cy - hud::GAME_OVER_LINE_OFFSET),
    );
    renderer.draw_text(
        REPLAY_PROMPT_TEXT,
        hud::REPLAY_PROMPT_COLOR,
        TextAnchor::Center(cx, cy + hud::GAME_OVER_LINE_OFFSET),
    );
}
