//! Sessions: a series of games against the computer.
//!
//! A `Session` owns the only RNG in play. It resolves the AI seat at the
//! start of each game, drives the engine by asking agents for answers, and
//! keeps the running scoreboard.
//!
//! ## Usage
//!
//! ```rust
//! use quantum_ttt::engine::NullPresenter;
//! use quantum_ttt::search::SearchConfig;
//! use quantum_ttt::session::{AiSeat, SearchAgent, Session, SessionConfig};
//!
//! let config = SessionConfig::default()
//!     .with_seed(7)
//!     .with_ai_seat(AiSeat::Random)
//!     .with_search(SearchConfig::default().with_max_depth(1));
//! let mut session = Session::new(config);
//!
//! let mut opponent = SearchAgent::new(SearchConfig::default().with_max_depth(1));
//! let record = session.play_game(&mut opponent, &mut NullPresenter).unwrap();
//!
//! assert_eq!(session.scoreboard().games(), 1);
//! assert!(record.ai_player.is_some());
//! ```

pub mod agent;
pub mod config;
pub mod scoreboard;

pub use agent::{Agent, ScriptedAgent, SearchAgent};
pub use config::{AiSeat, SessionConfig};
pub use scoreboard::{points_for, Scoreboard};

use im::Vector;
use thiserror::Error;
use tracing::info;

use crate::core::{GameRng, MoveRecord, Player};
use crate::engine::{GameEngine, Presenter, TurnError, TurnPhase};
use crate::rules::WinClassification;

/// Why a game could not be played to the end.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("{player} gave no answer in round {round}")]
    Forfeit { player: Player, round: u32 },

    #[error("{player} gave an invalid answer: {source}")]
    InvalidAnswer {
        player: Player,
        #[source]
        source: TurnError,
    },
}

/// Summary of one finished game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    /// The seat the computer played, if any.
    pub ai_player: Option<Player>,
    pub outcome: WinClassification,
    /// Rounds played.
    pub rounds: u32,
    pub history: Vector<MoveRecord>,
}

/// A series of games with a shared RNG and scoreboard.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    rng: GameRng,
    ai: SearchAgent,
    scoreboard: Scoreboard,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            ai: SearchAgent::new(config.search.clone()),
            scoreboard: Scoreboard::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// The session RNG, e.g. to fork a stream for `spawn_search`.
    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    /// Decide which seat the computer takes in the next game.
    pub fn next_ai_seat(&mut self) -> Option<Player> {
        match self.config.ai_seat {
            AiSeat::None => None,
            AiSeat::Fixed(player) => Some(player),
            AiSeat::Random => Some(self.rng.coin_flip()),
        }
    }

    /// Play one game: the computer takes its seat, `opponent` the other
    /// (or both, when there is no AI seat).
    pub fn play_game(
        &mut self,
        opponent: &mut dyn Agent,
        presenter: &mut dyn Presenter,
    ) -> Result<GameRecord, SessionError> {
        let ai_player = self.next_ai_seat();
        info!(ai = ?ai_player, game = self.scoreboard.games() + 1, "new game");

        let mut ai = std::mem::take(&mut self.ai);
        let result = match ai_player {
            Some(Player::O) => self.play_match(&mut ai, opponent, presenter),
            Some(Player::X) => self.play_match(opponent, &mut ai, presenter),
            None => self.play_solo(opponent, presenter),
        };
        self.ai = ai;

        let mut record = result?;
        record.ai_player = ai_player;
        Ok(record)
    }

    /// Play one game between two agents and record the result.
    pub fn play_match(
        &mut self,
        o: &mut dyn Agent,
        x: &mut dyn Agent,
        presenter: &mut dyn Presenter,
    ) -> Result<GameRecord, SessionError> {
        let mut engine = GameEngine::new();
        engine.start(presenter);

        let outcome = loop {
            let phase = engine.phase();
            let agent: &mut dyn Agent = match phase.awaiting() {
                Some(Player::O) => &mut *o,
                Some(Player::X) => &mut *x,
                None => match phase {
                    TurnPhase::GameOver(outcome) => break outcome,
                    _ => unreachable!("engine idle outside a game: {phase:?}"),
                },
            };
            self.answer(&mut engine, agent, presenter)?;
        };

        Ok(self.finish(&engine, outcome))
    }

    fn play_solo(
        &mut self,
        agent: &mut dyn Agent,
        presenter: &mut dyn Presenter,
    ) -> Result<GameRecord, SessionError> {
        let mut engine = GameEngine::new();
        engine.start(presenter);

        let outcome = loop {
            if let TurnPhase::GameOver(outcome) = engine.phase() {
                break outcome;
            }
            self.answer(&mut engine, agent, presenter)?;
        };

        Ok(self.finish(&engine, outcome))
    }

    /// Ask `agent` for the outstanding answer and hand it to the engine.
    fn answer(
        &mut self,
        engine: &mut GameEngine,
        agent: &mut dyn Agent,
        presenter: &mut dyn Presenter,
    ) -> Result<(), SessionError> {
        let round = engine.state().count();
        let invalid = |player, source| SessionError::InvalidAnswer { player, source };

        match engine.phase() {
            TurnPhase::AwaitingQuantumMove { player } => {
                let (a, b) = agent
                    .choose_placement(engine.state(), &mut self.rng)
                    .ok_or(SessionError::Forfeit { player, round })?;
                engine
                    .complete_placement(a, b, presenter)
                    .map_err(|e| invalid(player, e))
            }
            TurnPhase::AwaitingCollapseChoice { player, between, .. } => {
                let position = agent
                    .choose_collapse(engine.state(), between, &mut self.rng)
                    .ok_or(SessionError::Forfeit { player, round })?;
                engine
                    .complete_collapse(position, presenter)
                    .map_err(|e| invalid(player, e))
            }
            phase => unreachable!("no request outstanding: {phase:?}"),
        }
    }

    fn finish(&mut self, engine: &GameEngine, outcome: WinClassification) -> GameRecord {
        self.scoreboard.record(outcome);
        info!(
            %outcome,
            o = self.scoreboard.points(Player::O),
            x = self.scoreboard.points(Player::X),
            draws = self.scoreboard.draws(),
            "scoreboard"
        );

        GameRecord {
            ai_player: None,
            outcome,
            rounds: engine.state().count(),
            history: engine.state().history().clone(),
        }
    }
}
