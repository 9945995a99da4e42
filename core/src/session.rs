use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    GainHealth,
    BreakWall,
    RevealPath,
}

/// Remaining uses of each ability, shared by every level of a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityCharges {
    pub gain_health: u8,
    pub break_wall: u8,
    pub reveal_path: u8,
}

impl AbilityCharges {
    pub const fn get(&self, ability: Ability) -> u8 {
        use Ability::*;
        match ability {
            GainHealth => self.gain_health,
            BreakWall => self.break_wall,
            RevealPath => self.reveal_path,
        }
    }

    /// Spends one charge, returning `false` when none are left.
    fn take(&mut self, ability: Ability) -> bool {
        use Ability::*;
        let charges = match ability {
            GainHealth => &mut self.gain_health,
            BreakWall => &mut self.break_wall,
            RevealPath => &mut self.reveal_path,
        };
        match charges.checked_sub(1) {
            Some(left) => {
                *charges = left;
                true
            }
            None => false,
        }
    }
}

impl Default for AbilityCharges {
    fn default() -> Self {
        Self {
            gain_health: 2,
            break_wall: 2,
            reveal_path: 1,
        }
    }
}

/// Tuning for a full run of levels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// `(cols, rows)` of every level.
    pub maze_size: Coord2,
    pub total_levels: u8,
    /// Health at the start of the first level; one less for each level after.
    pub starting_health: u8,
    pub base_traps: CellCount,
    pub traps_per_level: CellCount,
    pub base_time_limit: Duration,
    pub time_limit_step: Duration,
    pub min_time_limit: Duration,
    pub path_hint_duration: Duration,
    pub trap_damage: u8,
    pub abilities: AbilityCharges,
    pub trap_policy: TrapPolicy,
}

impl SessionConfig {
    pub fn traps_for_level(&self, level: u8) -> CellCount {
        self.traps_per_level
            .saturating_mul(level.into())
            .saturating_add(self.base_traps)
    }

    pub fn time_limit_for_level(&self, level: u8) -> Duration {
        self.base_time_limit
            .saturating_sub(self.time_limit_step.saturating_mul(level.into()))
            .max(self.min_time_limit)
    }

    pub fn maze_config_for_level(&self, level: u8) -> MazeConfig {
        MazeConfig::new(self.maze_size, self.traps_for_level(level))
    }

    /// Maze for the zero-based `level` of the run started from `seed`.
    pub fn generate_level(&self, seed: u64, level: u8) -> Result<Maze> {
        BacktrackMazeGenerator::new(level_seed(seed, level))
            .with_trap_policy(self.trap_policy)
            .generate(self.maze_config_for_level(level))
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            maze_size: (25, 20),
            total_levels: 6,
            starting_health: 6,
            base_traps: 15,
            traps_per_level: 5,
            base_time_limit: Duration::from_secs(45),
            time_limit_step: Duration::from_secs(5),
            min_time_limit: Duration::from_secs(5),
            path_hint_duration: Duration::from_secs(8),
            trap_damage: 1,
            abilities: AbilityCharges::default(),
            trap_policy: TrapPolicy::default(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    /// Level loaded, timer waiting for the first move.
    Ready,
    Active,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Ready
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    Blocked,
    Moved,
    HitTrap,
    LevelComplete,
    Won,
    Lost,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AbilityOutcome {
    Rejected,
    /// Waiting for a direction before the charge is spent.
    Pending,
    Used,
}

impl AbilityOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Revealed route to the exit and how much longer it stays visible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathHint {
    pub path: Path,
    pub remaining: Duration,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelSession {
    config: SessionConfig,
    seed: u64,
    level: u8,
    base_health: u8,
    health: u8,
    abilities: AbilityCharges,
    maze: Maze,
    player: Coord2,
    state: SessionState,
    time_left: Duration,
    path_hint: Option<PathHint>,
    awaiting_break: bool,
    triggered_trap: Option<Coord2>,
}

impl LevelSession {
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self> {
        let maze = config.generate_level(seed, 0)?;
        let mut session = Self {
            base_health: config.starting_health,
            abilities: config.abilities,
            player: maze.start(),
            time_left: config.time_limit_for_level(0),
            config,
            seed,
            level: 0,
            health: 0,
            maze,
            state: Default::default(),
            path_hint: None,
            awaiting_break: false,
            triggered_trap: None,
        };
        session.reset_level();
        Ok(session)
    }

    /// Starts a new run from the first level.
    pub fn restart(&mut self, seed: u64) -> Result<()> {
        self.maze = self.config.generate_level(seed, 0)?;
        self.seed = seed;
        self.level = 0;
        self.base_health = self.config.starting_health;
        self.abilities = self.config.abilities;
        self.reset_level();
        Ok(())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Zero-based index of the current level.
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn total_levels(&self) -> u8 {
        self.config.total_levels.max(1)
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn base_health(&self) -> u8 {
        self.base_health
    }

    pub fn abilities(&self) -> AbilityCharges {
        self.abilities
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> Coord2 {
        self.player
    }

    pub fn time_left(&self) -> Duration {
        self.time_left
    }

    pub fn path_hint(&self) -> Option<&[Coord2]> {
        self.path_hint.as_ref().map(|hint| hint.path.as_slice())
    }

    pub fn is_awaiting_break(&self) -> bool {
        self.awaiting_break
    }

    pub fn triggered_trap(&self) -> Option<Coord2> {
        self.triggered_trap
    }

    pub fn try_move(&mut self, direction: Direction) -> Result<MoveOutcome> {
        use MoveOutcome::*;

        self.check_not_finished()?;

        if self.awaiting_break {
            return Ok(Blocked);
        }

        let Some(target) = direction.step(self.player, 1, self.maze.size()) else {
            return Ok(Blocked);
        };
        if self.maze[target].is_wall() {
            return Ok(Blocked);
        }

        self.player = target;
        self.mark_started();

        if target == self.maze.exit() {
            return self.complete_level();
        }

        if self.maze[target].is_trap() {
            return Ok(self.trigger_trap(target));
        }

        Ok(Moved)
    }

    pub fn use_ability(&mut self, ability: Ability) -> Result<AbilityOutcome> {
        use Ability::*;
        match ability {
            GainHealth => self.gain_health(),
            BreakWall => self.begin_break(),
            RevealPath => self.reveal_path(),
        }
    }

    /// Adds one health for the rest of the current level.
    pub fn gain_health(&mut self) -> Result<AbilityOutcome> {
        self.check_not_finished()?;

        if !self.abilities.take(Ability::GainHealth) {
            return Ok(AbilityOutcome::Rejected);
        }
        self.health = self.health.saturating_add(1);
        Ok(AbilityOutcome::Used)
    }

    /// Arms a wall break; the next [`Self::finish_break`] picks the wall.
    pub fn begin_break(&mut self) -> Result<AbilityOutcome> {
        self.check_not_finished()?;

        if self.abilities.get(Ability::BreakWall) == 0 {
            return Ok(AbilityOutcome::Rejected);
        }
        self.awaiting_break = true;
        Ok(AbilityOutcome::Pending)
    }

    /// Breaks the wall next to the player, spending a charge only on success.
    ///
    /// Any call disarms a pending break, whether or not a wall was hit.
    pub fn finish_break(&mut self, direction: Direction) -> Result<AbilityOutcome> {
        use AbilityOutcome::*;

        self.check_not_finished()?;

        if !core::mem::take(&mut self.awaiting_break) {
            return Ok(Rejected);
        }

        let Some(target) = direction.step(self.player, 1, self.maze.size()) else {
            return Ok(Rejected);
        };
        if !self.maze.break_wall(target)? {
            return Ok(Rejected);
        }

        self.abilities.take(Ability::BreakWall);
        log::debug!("Broke wall at {:?}", target);
        Ok(Used)
    }

    /// Disarms a pending break, returning whether one was pending.
    pub fn cancel_break(&mut self) -> bool {
        core::mem::take(&mut self.awaiting_break)
    }

    /// Shows the shortest route from the player to the exit for a while.
    ///
    /// The charge is spent even if the exit has become unreachable.
    pub fn reveal_path(&mut self) -> Result<AbilityOutcome> {
        self.check_not_finished()?;

        if !self.abilities.take(Ability::RevealPath) {
            return Ok(AbilityOutcome::Rejected);
        }
        let path = self.maze.shortest_path(self.player, self.maze.exit());
        if path.is_empty() {
            log::warn!("Exit unreachable from {:?}", self.player);
        }
        self.path_hint = Some(PathHint {
            path,
            remaining: self.config.path_hint_duration,
        });
        Ok(AbilityOutcome::Used)
    }

    /// Advances the level timer and path hint by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) -> SessionState {
        if self.state.is_finished() {
            return self.state;
        }

        if let Some(hint) = self.path_hint.as_mut() {
            hint.remaining = hint.remaining.saturating_sub(elapsed);
        }
        if self
            .path_hint
            .as_ref()
            .is_some_and(|hint| hint.remaining.is_zero())
        {
            self.path_hint = None;
        }

        if matches!(self.state, SessionState::Active) {
            self.time_left = self.time_left.saturating_sub(elapsed);
            if self.time_left.is_zero() {
                log::debug!("Level {} timed out", self.level);
                self.end_game(false);
            }
        }

        self.state
    }

    fn complete_level(&mut self) -> Result<MoveOutcome> {
        let next_level = self.level.saturating_add(1);
        if next_level >= self.total_levels() {
            self.level = next_level;
            self.end_game(true);
            return Ok(MoveOutcome::Won);
        }

        self.maze = self.config.generate_level(self.seed, next_level)?;
        self.level = next_level;
        self.base_health = self.base_health.saturating_sub(1);
        self.reset_level();

        Ok(if self.state.is_finished() {
            MoveOutcome::Lost
        } else {
            MoveOutcome::LevelComplete
        })
    }

    fn trigger_trap(&mut self, coords: Coord2) -> MoveOutcome {
        self.triggered_trap = Some(coords);
        self.health = self.health.saturating_sub(self.config.trap_damage);
        log::debug!("Trap at {:?}, health left {}", coords, self.health);

        if self.health == 0 {
            self.end_game(false);
            MoveOutcome::Lost
        } else {
            MoveOutcome::HitTrap
        }
    }

    /// Puts the player at the start of the current maze with fresh per-level state.
    fn reset_level(&mut self) {
        self.player = self.maze.start();
        self.health = self.base_health;
        self.time_left = self.config.time_limit_for_level(self.level);
        self.path_hint = None;
        self.awaiting_break = false;
        self.triggered_trap = None;
        self.state = SessionState::Ready;

        if self.health == 0 {
            self.end_game(false);
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, SessionState::Ready) {
            self.state = SessionState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            SessionState::Won
        } else {
            SessionState::Lost
        };
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

fn level_seed(seed: u64, level: u8) -> u64 {
    seed ^ u64::from(level).wrapping_mul(0x9e37_79b9_7f4a_7c15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Even sides keep the exit a dead end, so no route passes through it.
    fn config() -> SessionConfig {
        SessionConfig {
            maze_size: (12, 10),
            base_traps: 0,
            traps_per_level: 0,
            ..Default::default()
        }
    }

    fn direction_between(from: Coord2, to: Coord2) -> Direction {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.step(from, 1, (Coord::MAX, Coord::MAX)) == Some(to))
            .unwrap()
    }

    /// Follows the shortest route to `to`, stopping early on anything but a plain step.
    fn walk(session: &mut LevelSession, to: Coord2) -> Vec<MoveOutcome> {
        let path = session.maze().shortest_path(session.player(), to);
        let mut outcomes = Vec::new();
        for pair in path.windows(2) {
            let outcome = session
                .try_move(direction_between(pair[0], pair[1]))
                .unwrap();
            outcomes.push(outcome);
            if !matches!(outcome, MoveOutcome::Moved | MoveOutcome::HitTrap) {
                break;
            }
        }
        outcomes
    }

    fn walk_to_exit(session: &mut LevelSession) -> MoveOutcome {
        let exit = session.maze().exit();
        *walk(session, exit).last().unwrap()
    }

    fn open_direction(session: &LevelSession) -> Direction {
        Direction::ALL
            .into_iter()
            .find(|direction| {
                direction
                    .step(session.player(), 1, session.maze().size())
                    .is_some_and(|coords| session.maze()[coords].is_passable())
            })
            .unwrap()
    }

    #[test]
    fn new_session_starts_at_first_level() {
        let session = LevelSession::new(SessionConfig::default(), 1).unwrap();

        assert_eq!(session.level(), 0);
        assert_eq!(session.health(), 6);
        assert_eq!(session.player(), session.maze().start());
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.time_left(), Duration::from_secs(45));
        assert_eq!(session.maze().trap_count(), 15);
        assert_eq!(session.abilities(), AbilityCharges::default());
    }

    #[test]
    fn level_tuning_follows_level_index() {
        let config = SessionConfig::default();

        assert_eq!(config.traps_for_level(2), 25);
        assert_eq!(config.time_limit_for_level(1), Duration::from_secs(40));
        assert_eq!(config.time_limit_for_level(8), Duration::from_secs(5));
        assert_eq!(config.time_limit_for_level(200), Duration::from_secs(5));
    }

    #[test]
    fn first_move_starts_timer() {
        let mut session = LevelSession::new(config(), 2).unwrap();

        assert_eq!(session.try_move(Direction::Up).unwrap(), MoveOutcome::Blocked);
        assert_eq!(session.tick(Duration::from_secs(10)), SessionState::Ready);
        assert_eq!(session.time_left(), Duration::from_secs(45));

        let direction = open_direction(&session);
        assert_eq!(session.try_move(direction).unwrap(), MoveOutcome::Moved);
        assert_eq!(session.state(), SessionState::Active);

        assert_eq!(session.tick(Duration::from_secs(10)), SessionState::Active);
        assert_eq!(session.time_left(), Duration::from_secs(35));
    }

    #[test]
    fn running_out_of_time_loses() {
        let mut session = LevelSession::new(config(), 3).unwrap();
        session.try_move(open_direction(&session)).unwrap();

        assert_eq!(session.tick(Duration::from_secs(45)), SessionState::Lost);
        assert_eq!(
            session.try_move(Direction::Left),
            Err(GameError::AlreadyEnded)
        );
    }

    #[test]
    fn reaching_exit_loads_next_level() {
        let mut session = LevelSession::new(config(), 4).unwrap();
        let first_maze = session.maze().clone();

        assert_eq!(walk_to_exit(&mut session), MoveOutcome::LevelComplete);
        assert_eq!(session.level(), 1);
        assert_eq!(session.base_health(), 5);
        assert_eq!(session.health(), 5);
        assert_eq!(session.player(), session.maze().start());
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.time_left(), Duration::from_secs(40));
        assert_ne!(session.maze(), &first_maze);
    }

    #[test]
    fn clearing_last_level_wins() {
        let mut session = LevelSession::new(
            SessionConfig {
                total_levels: 2,
                ..config()
            },
            5,
        )
        .unwrap();

        assert_eq!(walk_to_exit(&mut session), MoveOutcome::LevelComplete);
        assert_eq!(walk_to_exit(&mut session), MoveOutcome::Won);
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.gain_health(), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn exhausted_base_health_loses_on_next_level() {
        let mut session = LevelSession::new(
            SessionConfig {
                starting_health: 1,
                ..config()
            },
            6,
        )
        .unwrap();

        assert_eq!(walk_to_exit(&mut session), MoveOutcome::Lost);
        assert_eq!(session.state(), SessionState::Lost);
        assert_eq!(session.health(), 0);
    }

    #[test]
    fn traps_hurt_every_time() {
        let mut session = LevelSession::new(
            SessionConfig {
                starting_health: 100,
                base_traps: 10,
                ..config()
            },
            7,
        )
        .unwrap();
        let maze = session.maze().clone();
        let (trap, _) = maze
            .grid()
            .indexed_iter()
            .find(|&(_, cell)| cell.is_trap())
            .unwrap();
        let trap = (trap.1 as Coord, trap.0 as Coord);
        let traps_on_route = maze
            .shortest_path(maze.start(), trap)
            .iter()
            .filter(|&&coords| maze[coords].is_trap())
            .count();

        let outcomes = walk(&mut session, trap);

        assert_eq!(outcomes.last(), Some(&MoveOutcome::HitTrap));
        assert_eq!(session.triggered_trap(), Some(trap));
        assert_eq!(usize::from(100 - session.health()), traps_on_route);
    }

    #[test]
    fn traps_stay_armed() {
        let config = SessionConfig {
            starting_health: 100,
            base_traps: 10,
            ..config()
        };
        let mut session = LevelSession::new(config.clone(), 7).unwrap();
        let maze = session.maze().clone();
        let trap = (0..maze.rows())
            .flat_map(|y| (0..maze.cols()).map(move |x| (x, y)))
            .find(|&coords| maze[coords].is_trap())
            .unwrap();
        let route = maze.shortest_path(maze.start(), trap);
        let before_trap = route[route.len() - 2];

        assert_eq!(walk(&mut session, trap).last(), Some(&MoveOutcome::HitTrap));
        session
            .try_move(direction_between(trap, before_trap))
            .unwrap();
        assert_eq!(session.player(), before_trap);

        let health = session.health();
        assert_eq!(
            session.try_move(direction_between(before_trap, trap)).unwrap(),
            MoveOutcome::HitTrap
        );
        assert_eq!(session.triggered_trap(), Some(trap));
        assert_eq!(session.health(), health - config.trap_damage);
        assert!(session.maze()[trap].is_trap());
    }

    #[test]
    fn lethal_trap_loses() {
        let mut session = LevelSession::new(
            SessionConfig {
                starting_health: 1,
                base_traps: 10,
                ..config()
            },
            8,
        )
        .unwrap();
        let maze = session.maze().clone();
        let trap = (0..maze.rows())
            .flat_map(|y| (0..maze.cols()).map(move |x| (x, y)))
            .find(|&coords| maze[coords].is_trap())
            .unwrap();

        let outcomes = walk(&mut session, trap);

        assert_eq!(outcomes.last(), Some(&MoveOutcome::Lost));
        assert_eq!(session.state(), SessionState::Lost);
    }

    #[test]
    fn gain_health_uses_charges() {
        let mut session = LevelSession::new(config(), 9).unwrap();

        assert_eq!(session.gain_health().unwrap(), AbilityOutcome::Used);
        assert_eq!(
            session.use_ability(Ability::GainHealth).unwrap(),
            AbilityOutcome::Used
        );
        assert_eq!(session.gain_health().unwrap(), AbilityOutcome::Rejected);
        assert_eq!(session.health(), 8);
        assert_eq!(session.abilities().get(Ability::GainHealth), 0);
    }

    #[test]
    fn break_wall_opens_adjacent_wall() {
        let mut session = LevelSession::new(config(), 10).unwrap();
        let start = session.player();

        assert_eq!(
            session.finish_break(Direction::Left).unwrap(),
            AbilityOutcome::Rejected
        );
        assert_eq!(session.begin_break().unwrap(), AbilityOutcome::Pending);
        assert_eq!(session.try_move(Direction::Left).unwrap(), MoveOutcome::Blocked);
        assert_eq!(session.player(), start);

        assert_eq!(
            session.finish_break(Direction::Left).unwrap(),
            AbilityOutcome::Used
        );
        assert_eq!(session.maze()[(0, 1)], Cell::Open);
        assert_eq!(session.abilities().get(Ability::BreakWall), 1);
        assert!(!session.is_awaiting_break());

        assert_eq!(session.try_move(Direction::Left).unwrap(), MoveOutcome::Moved);
        assert_eq!(session.player(), (0, 1));

        assert_eq!(
            session.use_ability(Ability::BreakWall).unwrap(),
            AbilityOutcome::Pending
        );
        assert_eq!(
            session.finish_break(Direction::Left).unwrap(),
            AbilityOutcome::Rejected
        );
        assert_eq!(session.abilities().get(Ability::BreakWall), 1);
    }

    #[test]
    fn breaking_open_cell_disarms_without_charge() {
        let mut session = LevelSession::new(config(), 11).unwrap();
        let direction = open_direction(&session);

        session.begin_break().unwrap();
        assert_eq!(
            session.finish_break(direction).unwrap(),
            AbilityOutcome::Rejected
        );
        assert!(!session.is_awaiting_break());
        assert_eq!(session.abilities().get(Ability::BreakWall), 2);

        session.begin_break().unwrap();
        assert!(session.cancel_break());
        assert_eq!(session.try_move(direction).unwrap(), MoveOutcome::Moved);
    }

    #[test]
    fn reveal_path_shows_route_until_expired() {
        let mut session = LevelSession::new(config(), 12).unwrap();

        assert_eq!(session.reveal_path().unwrap(), AbilityOutcome::Used);
        let hint = session.path_hint().unwrap();
        assert_eq!(hint.first(), Some(&session.player()));
        assert_eq!(hint.last(), Some(&session.maze().exit()));
        assert_eq!(hint, session.maze().solution());

        assert_eq!(session.reveal_path().unwrap(), AbilityOutcome::Rejected);

        session.tick(Duration::from_secs(7));
        assert!(session.path_hint().is_some());
        session.tick(Duration::from_secs(1));
        assert!(session.path_hint().is_none());
    }

    #[test]
    fn restart_resets_run() {
        let mut session = LevelSession::new(config(), 13).unwrap();
        let first_maze = session.maze().clone();
        walk_to_exit(&mut session);
        session.gain_health().unwrap();

        session.restart(13).unwrap();

        assert_eq!(session.level(), 0);
        assert_eq!(session.health(), 6);
        assert_eq!(session.abilities(), AbilityCharges::default());
        assert_eq!(session.maze(), &first_maze);
        assert_eq!(session.state(), SessionState::Ready);
    }

    #[test]
    fn config_fills_missing_fields_with_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"total_levels": 3, "maze_size": [15, 11]}"#).unwrap();

        assert_eq!(config.total_levels, 3);
        assert_eq!(config.maze_size, (15, 11));
        assert_eq!(config.starting_health, 6);
        assert_eq!(config.abilities, AbilityCharges::default());
    }
}
