/*!
 * Game logic.
 */

use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use nalgebra::{Point2, Vector2};
use rand::Rng;

use laneswitch_graphics::{Image, Renderer};

use crate::config::{assets, gameplay};
use crate::core::{clock::Clock, input::Command};

use road::{Lane, RoadLayout};
use vehicle::Vehicle;

pub mod road;
pub mod vehicle;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    Collision,
    OffRoad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    /// Waiting for replay or quit. Only `KeyR`, `KeyQ` and `Quit` are honored.
    GameOver(GameOverCause),
}

/// What the event loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Sprites {
    pub player: Image,
    pub enemy: Image,
}

impl Sprites {
    pub fn load() -> Result<Self> {
        Ok(Self {
            player: Image::load_png(assets::PLAYER_CAR).context("loading player sprite")?,
            enemy: Image::load_png(assets::ENEMY_CAR).context("loading enemy sprite")?,
        })
    }

    fn size(image: &Image) -> Vector2<i32> {
        Vector2::new(image.width() as i32, image.height() as i32)
    }
}

pub struct GameLoop<R, C> {
    layout: RoadLayout,
    sprites: Sprites,
    rng: R,
    clock: C,

    state: GameState,
    player: Vehicle,
    enemy: Vehicle,

    /// Ticks since the last level up, always below `LEVEL_UP_TICKS` between ticks.
    level_counter: u32,
    level: u32,
    started_at: Instant,
    /// When the level up banner was armed, `None` when hidden.
    level_up_banner: Option<Instant>,
}

impl<R: Rng, C: Clock> GameLoop<R, C> {
    pub fn new(layout: RoadLayout, sprites: Sprites, rng: R, clock: C) -> Result<Self> {
        check_geometry(&layout, &sprites)?;

        let (player, enemy) = initial_vehicles(&layout, &sprites);
        let started_at = clock.now();

        Ok(Self {
            layout,
            sprites,
            rng,
            clock,
            state: GameState::Running,
            player,
            enemy,
            level_counter: 0,
            level: 0,
            started_at,
            level_up_banner: None,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn player(&self) -> &Vehicle {
        &self.player
    }

    pub fn enemy(&self) -> &Vehicle {
        &self.enemy
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started_at)
    }

    pub fn level_up_banner_active(&self) -> bool {
        self.level_up_banner.is_some()
    }

    /// Runs one frame with the commands received since the previous one.
    pub fn tick(&mut self, commands: &[Command], renderer: &mut impl Renderer) -> Result<Flow> {
        match self.state {
            GameState::Running => self.tick_running(commands, renderer),
            GameState::GameOver(_) => Ok(self.handle_game_over_commands(commands)),
        }
    }

    fn tick_running(&mut self, commands: &[Command], renderer: &mut impl Renderer) -> Result<Flow> {
        self.respawn_enemy_if_passed();
        self.level_up();
        self.enemy.advance(self.enemy.speed);

        let cause = if self.player.intersects(&self.enemy) {
            Some(GameOverCause::Collision)
        } else if self.is_off_road() {
            Some(GameOverCause::OffRoad)
        } else {
            None
        };
        if let Some(cause) = cause {
            self.enter_game_over(cause, renderer)?;
            // The rest of this tick's batch goes to the game over prompt.
            return Ok(self.handle_game_over_commands(commands));
        }

        for command in commands {
            match command {
                Command::MoveLeft => self.switch_lane(Lane::Left),
                Command::MoveRight => self.switch_lane(Lane::Right),
                Command::Quit => {
                    log::info!("Quit requested at level {}", self.level);
                    return Ok(Flow::Exit);
                }
                Command::KeyR | Command::KeyQ => {}
            }
        }

        self.draw(renderer)?;

        Ok(Flow::Continue)
    }

    fn respawn_enemy_if_passed(&mut self) {
        if self.enemy.rect().top() <= self.layout.height {
            return;
        }

        let lane = if self.rng.gen_bool(0.5) {
            Lane::Left
        } else {
            Lane::Right
        };
        log::debug!("Enemy respawning in {:?} lane", lane);
        self.enemy
            .respawn_above(self.layout.lane_x(lane), gameplay::RESPAWN_Y);
    }

    fn level_up(&mut self) {
        self.level_counter += 1;
        debug_assert!(self.level_counter <= gameplay::LEVEL_UP_TICKS);

        if self.level_counter == gameplay::LEVEL_UP_TICKS {
            self.enemy.speed += gameplay::SPEED_INCREMENT;
            self.level += 1;
            self.level_counter = 0;
            self.level_up_banner = Some(self.clock.now());

            log::info!(
                "Level up: level {}, enemy speed {}",
                self.level,
                self.enemy.speed
            );
        }
    }

    fn is_off_road(&self) -> bool {
        let rect = self.player.rect();
        rect.left() < self.layout.road_left() || rect.right() > self.layout.road_right()
    }

    fn switch_lane(&mut self, lane: Lane) {
        log::trace!("Player switching to {:?} lane", lane);
        self.player.move_to_lane(self.layout.lane_x(lane));
    }

    fn draw(&mut self, renderer: &mut impl Renderer) -> Result<()> {
        let now = self.clock.now();

        view::draw_background(&self.layout, renderer);
        view::draw_stopwatch(self.elapsed(), renderer);

        if let Some(armed_at) = self.level_up_banner {
            if now.saturating_duration_since(armed_at) > gameplay::LEVEL_UP_BANNER_DURATION {
                self.level_up_banner = None;
            } else {
                view::draw_level_up_banner(&self.layout, self.level, renderer);
            }
        }

        let player = self.player.rect();
        renderer.draw_image(&self.sprites.player, player.x, player.y);
        let enemy = self.enemy.rect();
        renderer.draw_image(&self.sprites.enemy, enemy.x, enemy.y);

        renderer.present()
    }

    /// Draws the game over screen over the last frame. Nothing else is drawn
    /// until the player picks replay or quit.
    fn enter_game_over(
        &mut self,
        cause: GameOverCause,
        renderer: &mut impl Renderer,
    ) -> Result<()> {
        self.state = GameState::GameOver(cause);
        log::info!(
            "Game over ({:?}) at level {} after {}s",
            cause,
            self.level,
            self.elapsed().as_secs()
        );

        view::draw_game_over(&self.layout, renderer);
        renderer.present()
    }

    /// Quitting wins over replaying when both arrive in the same batch.
    fn handle_game_over_commands(&mut self, commands: &[Command]) -> Flow {
        if commands
            .iter()
            .any(|command| matches!(command, Command::KeyQ | Command::Quit))
        {
            log::info!("Quitting from game over screen");
            return Flow::Exit;
        }

        if commands.contains(&Command::KeyR) {
            self.restart();
        }
        Flow::Continue
    }

    fn restart(&mut self) {
        log::info!("Replaying");

        let (player, enemy) = initial_vehicles(&self.layout, &self.sprites);
        self.player = player;
        self.enemy = enemy;
        self.level_counter = 0;
        self.level = 0;
        self.started_at = self.clock.now();
        self.level_up_banner = None;
        self.state = GameState::Running;
    }
}

fn initial_vehicles(layout: &RoadLayout, sprites: &Sprites) -> (Vehicle, Vehicle) {
    let player_y = (layout.height as f32 * gameplay::PLAYER_Y_RATIO) as i32;
    let player = Vehicle::new(
        Point2::new(layout.right_lane, player_y),
        Sprites::size(&sprites.player),
        0,
    );
    let enemy = Vehicle::new(
        Point2::new(layout.left_lane, gameplay::RESPAWN_Y),
        Sprites::size(&sprites.enemy),
        gameplay::INITIAL_ENEMY_SPEED,
    );
    (player, enemy)
}

/// A car sitting in either lane has to fit on the road, otherwise the player
/// would be off-road by just switching lanes.
fn check_geometry(layout: &RoadLayout, sprites: &Sprites) -> Result<()> {
    ensure!(
        layout.left_lane < layout.right_lane,
        "Left lane {} is not left of right lane {}",
        layout.left_lane,
        layout.right_lane
    );

    for (name, image) in [("player", &sprites.player), ("enemy", &sprites.enemy)] {
        let width = image.width() as i32;
        ensure!(
            layout.road_width > layout.lane_spacing() + width,
            "Road width {} too narrow for {} car of width {} with lane spacing {}",
            layout.road_width,
            name,
            width,
            layout.lane_spacing()
        );
    }

    Ok(())
}
