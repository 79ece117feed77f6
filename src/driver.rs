//! Console driver: player setup prompts and the turn loop.

use crate::input::Coordinates;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, MoveOutcome, Outcome, Player};
use tracing::{debug, info, instrument, warn};

/// Seat a player is being set up for, as named in prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Seat {
    /// First player prompted.
    One,
    /// Second player prompted.
    Two,
}

/// Console failure that stops the game.
#[derive(Debug, Display, Error)]
pub enum DriverError {
    /// Reading or writing the console failed.
    #[display("console I/O failed: {_0}")]
    Io(std::io::Error),
    /// Input ended before the game finished.
    #[display("input closed before the game finished")]
    InputClosed,
}

impl From<std::io::Error> for DriverError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Runs a game over a pair of console streams.
///
/// Generic over the streams so a game can be scripted in tests.
pub struct Driver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Creates a driver reading moves from `input` and printing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the driver, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts for both players. Player two may not reuse player one's
    /// marker.
    #[instrument(skip(self))]
    pub fn setup_players(&mut self) -> Result<[Player; 2], DriverError> {
        let one = self.setup_player(Seat::One, None)?;
        let two = self.setup_player(Seat::Two, Some(&one))?;
        let players = [one, two];
        self.announce_players(&players)?;
        Ok(players)
    }

    /// Prompts for one player's name and marker, re-prompting until both
    /// are non-empty and the marker differs from `taken`'s.
    #[instrument(skip(self, taken))]
    pub fn setup_player(
        &mut self,
        seat: Seat,
        taken: Option<&Player>,
    ) -> Result<Player, DriverError> {
        let name = loop {
            writeln!(self.output, "What is the name of player {}", seat)?;
            let name = self.read_line()?;
            if !name.is_empty() {
                break name;
            }
            writeln!(self.output, "Name cannot be empty.")?;
        };

        let marker = loop {
            writeln!(self.output, "What symbol would you like to use?")?;
            let marker = self.read_line()?;
            if marker.is_empty() {
                writeln!(self.output, "Symbol cannot be empty.")?;
                continue;
            }
            if let Some(other) = taken
                && *other.marker() == marker
            {
                writeln!(
                    self.output,
                    "'{}' is already used by {}.",
                    marker,
                    other.name()
                )?;
                continue;
            }
            break marker;
        };

        info!(%name, %marker, "Player set up");
        Ok(Player::new(name, marker))
    }

    /// Prints each player's description.
    pub fn announce_players(&mut self, players: &[Player; 2]) -> Result<(), DriverError> {
        for player in players {
            writeln!(self.output, "{}", player)?;
        }
        Ok(())
    }

    /// Plays `board` to completion and returns it.
    ///
    /// Players are switched before every prompt, including the first, so
    /// the board's `other_player` at construction makes the opening move.
    #[instrument(skip_all)]
    pub fn play(&mut self, mut board: Board) -> Result<Board, DriverError> {
        while !board.game_over() {
            board.switch_player();
            write!(self.output, "{}", board)?;
            self.ask_for_move(&mut board)?;
        }

        write!(self.output, "{}", board)?;
        match board.outcome() {
            Some(Outcome::Win { .. }) => {
                writeln!(self.output, "{} is the winner!", board.current_player().name())?
            }
            Some(Outcome::Tie) | None => writeln!(self.output, "It's a tie!")?,
        }
        info!(outcome = ?board.outcome(), "Game finished");
        Ok(board)
    }

    /// Prompts the current player until they enter a move the board
    /// accepts.
    #[instrument(skip_all, fields(player = %board.current_player().name()))]
    pub fn ask_for_move(&mut self, board: &mut Board) -> Result<MoveOutcome, DriverError> {
        let player = board.current_player().clone();
        loop {
            writeln!(
                self.output,
                "{}'s turn. Where would you like to mark? Indicate using 'row,col' with top corner being 0,0",
                player.name()
            )?;
            let line = self.read_line()?;

            let reason = match line.parse::<Coordinates>() {
                Ok(Coordinates { row, col }) => match board.attempt_move(row, col, &player) {
                    Ok(outcome) => {
                        debug!(row, col, "Move accepted");
                        return Ok(outcome);
                    }
                    Err(e) => e.to_string(),
                },
                Err(e) => e.to_string(),
            };

            warn!(input = %line, %reason, "Move rejected");
            writeln!(self.output, "Invalid move. {}", reason)?;
        }
    }

    fn read_line(&mut self) -> Result<String, DriverError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(DriverError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
