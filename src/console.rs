#![cfg(feature = "std")]

//! Blocking text loop: show the board, read a shot, report the outcome.

use std::io::{self, BufRead, Write};

use log::warn;

use crate::{
    common::{GameError, ShotResult},
    game::Game,
};

/// Parse a line holding exactly two whitespace-separated integers.
pub fn parse_shot(line: &str) -> Result<(i64, i64), GameError> {
    let mut parts = line.split_whitespace();
    let (Some(r), Some(c), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(GameError::MalformedInput(
            "expected two numbers: row and column".to_string(),
        ));
    };
    let parse = |tok: &str| {
        tok.parse::<i64>()
            .map_err(|_| GameError::MalformedInput(format!("'{}' is not a number", tok)))
    };
    Ok((parse(r)?, parse(c)?))
}

/// Non-UTF-8 bytes are reported as malformed input.
fn decode_line(buf: &[u8]) -> Result<&str, GameError> {
    std::str::from_utf8(buf)
        .map_err(|_| GameError::MalformedInput("input is not valid UTF-8".to_string()))
}

/// Text reported to the player for one shot.
pub fn describe(result: ShotResult) -> &'static str {
    if result.destroyed {
        "Ship destroyed"
    } else if result.hit {
        "Hit, but ship is alive"
    } else {
        "Miss"
    }
}

/// Run the console game until the ship is destroyed or `input` runs dry.
/// Bad input and rejected shots print `error: <message>` and do not count.
pub fn run_console<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let mut buf = Vec::new();
    while !game.is_over() {
        writeln!(output, "{}", game.board().render())?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            warn!("input closed after {} shots, game left unfinished", game.shots());
            break;
        }

        let shot = decode_line(&buf)
            .and_then(parse_shot)
            .and_then(|(r, c)| game.take_shot(r, c));
        match shot {
            Ok(res) => writeln!(output, "{}", describe(res))?,
            Err(e) => writeln!(output, "error: {}", e)?,
        }
    }
    writeln!(output, "Final board: ")?;
    writeln!(output, "{}", game.board().render())?;
    output.flush()
}
