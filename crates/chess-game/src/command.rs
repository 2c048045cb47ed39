//! Textual command surface for the dispatch loop.

use chess_model::Position;

use crate::session::SessionError;

/// A parsed session command.
///
/// This is the boundary shape an input loop feeds the session: the
/// keyword dispatch happens here, the state checks happen in
/// [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Move { from: Position, to: Position },
    Status,
    End,
}

impl Command {
    /// Parses a command line such as `start`, `move b2 b3`, `status`,
    /// or `end`.
    ///
    /// Unrecognized keywords and wrong arity fail with
    /// [`SessionError::UnknownCommand`]; malformed coordinates propagate
    /// as [`MoveError::InvalidCoordinate`](chess_model::MoveError).
    pub fn parse(input: &str) -> Result<Self, SessionError> {
        let mut tokens = input.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Err(SessionError::UnknownCommand(input.trim().to_string()));
        };

        let command = match keyword {
            "start" => Command::Start,
            "status" => Command::Status,
            "end" => Command::End,
            "move" => {
                let (Some(from), Some(to)) = (tokens.next(), tokens.next()) else {
                    return Err(SessionError::UnknownCommand(input.trim().to_string()));
                };
                Command::Move {
                    from: from.parse::<Position>()?,
                    to: to.parse::<Position>()?,
                }
            }
            other => return Err(SessionError::UnknownCommand(other.to_string())),
        };

        if tokens.next().is_some() {
            return Err(SessionError::UnknownCommand(input.trim().to_string()));
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_model::MoveError;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn parses_each_keyword() {
        assert_eq!(Command::parse("start"), Ok(Command::Start));
        assert_eq!(Command::parse("status"), Ok(Command::Status));
        assert_eq!(Command::parse("end"), Ok(Command::End));
        assert_eq!(
            Command::parse("move b2 b3"),
            Ok(Command::Move {
                from: pos("b2"),
                to: pos("b3"),
            })
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(Command::parse("  move  e2   e4 "), Ok(Command::Move {
            from: pos("e2"),
            to: pos("e4"),
        }));
    }

    #[test]
    fn rejects_unknown_keywords() {
        assert_eq!(
            Command::parse("restart"),
            Err(SessionError::UnknownCommand("restart".to_string()))
        );
        assert!(matches!(
            Command::parse(""),
            Err(SessionError::UnknownCommand(_))
        ));
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(matches!(
            Command::parse("move b2"),
            Err(SessionError::UnknownCommand(_))
        ));
        assert!(matches!(
            Command::parse("start now"),
            Err(SessionError::UnknownCommand(_))
        ));
    }

    #[test]
    fn bad_coordinates_propagate() {
        assert_eq!(
            Command::parse("move b2 j9"),
            Err(SessionError::Move(MoveError::InvalidCoordinate(
                "j9".to_string()
            )))
        );
    }
}
