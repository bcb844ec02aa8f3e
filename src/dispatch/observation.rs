// Mon Oct 19 2026 - Alex

use std::io::BufRead;
use std::str::FromStr;

use crate::dispatch::error::ObservationError;
use crate::memory::{Address, MemoryError, RawValue};

/// One `(address, raw word)` pair as reported by a memory watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub address: Address,
    pub raw: RawValue,
}

impl Observation {
    pub fn new(address: Address, raw: RawValue) -> Self {
        Self { address, raw }
    }

    fn parse_line(text: &str, line: usize) -> Result<Self, ObservationError> {
        let mut parts = text.split_whitespace();
        let (Some(address), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ObservationError::Syntax { line, text: text.to_string() });
        };

        let field = |source: MemoryError| ObservationError::Field { line, source };
        Ok(Self {
            address: Address::parse(address).map_err(field)?,
            raw: RawValue::parse_hex(value).map_err(field)?,
        })
    }
}

impl FromStr for Observation {
    type Err = ObservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s.trim(), 1)
    }
}

/// Iterates observations from line-oriented text, skipping blanks and `#` comments.
pub struct ObservationReader<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> ObservationReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for ObservationReader<R> {
    type Item = Result<Observation, ObservationError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(err) => return Some(Err(err.into())),
            };
            self.line += 1;

            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some(Observation::parse_line(trimmed, self.line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_observation() {
        let obs: Observation = "80479d60 4b0".parse().unwrap();
        assert_eq!(obs.address, Address::new(0x8047_9D60));
        assert_eq!(obs.raw.as_i32(), 0x4B0);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(matches!("80479D60".parse::<Observation>(), Err(ObservationError::Syntax { .. })));
        assert!(matches!("a b c".parse::<Observation>(), Err(ObservationError::Syntax { .. })));
        assert!(matches!("xyz 1".parse::<Observation>(), Err(ObservationError::Field { .. })));
        assert!(matches!("80479D60 123456789".parse::<Observation>(), Err(ObservationError::Field { .. })));
    }

    #[test]
    fn test_reader_skips_comments_and_tracks_lines() {
        let input = "# frame\n80479D60 1\n\n80479D30 zz\n";
        let results: Vec<_> = ObservationReader::new(Cursor::new(input)).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        match &results[1] {
            Err(ObservationError::Field { line, .. }) => assert_eq!(*line, 4),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
