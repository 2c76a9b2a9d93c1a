use std::{
    iter::{Enumerate, Peekable},
    str::Chars,
};

use crate::ConfigError;

/// Cursor over cycle notation such as `"(AELTPHQXRU) (BKNW) (S)"`.
///
/// Yields the body of each cycle in order, with whitespace removed. The
/// lookahead lives here and nowhere else; each parse owns its own cursor.
pub(crate) struct CycleCursor<'a> {
    chars: Peekable<Enumerate<Chars<'a>>>,
    failed: bool,
}

impl<'a> CycleCursor<'a> {
    pub(crate) fn new(notation: &'a str) -> Self {
        Self {
            chars: notation.chars().enumerate().peekable(),
            failed: false,
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .chars
            .next_if(|(_, symbol)| symbol.is_whitespace())
            .is_some()
        {}
    }

    fn read_cycle(&mut self) -> Result<Option<String>, ConfigError> {
        self.skip_whitespace();

        let Some((open, first)) = self.chars.next() else {
            return Ok(None);
        };
        if first != '(' {
            return Err(ConfigError::MalformedCycles {
                position: open,
                found: first,
            });
        }

        let mut body = String::new();
        loop {
            match self.chars.next() {
                None => return Err(ConfigError::UnterminatedCycle { position: open }),
                Some((_, ')')) => return Ok(Some(body)),
                Some((position, found @ ('(' | '*'))) => {
                    return Err(ConfigError::MalformedCycles { position, found });
                }
                Some((_, symbol)) if symbol.is_whitespace() => {}
                Some((_, symbol)) => body.push(symbol),
            }
        }
    }
}

impl Iterator for CycleCursor<'_> {
    type Item = Result<String, ConfigError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_cycle() {
            Ok(cycle) => cycle.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
