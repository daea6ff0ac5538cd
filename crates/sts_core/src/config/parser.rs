//! Attribute-file reader
//!
//! Recursive descent over the tag format:
//!
//! ```text
//! <begin pitch>
//!     <length>200<\length>
//!     <width>100<\width>
//! <\end pitch>
//! <begin team>
//!     <name>Red Lions<\name>
//!     <numberOfPlayers>11<\numberOfPlayers>
//!     <strategy>custom
//!         <region>(16,0)(82,33)<\region>
//!     <\strategy>
//! <\end team>
//! ```

use super::scanner::Scanner;
use super::{ConfigError, PitchConfig, RoamingStrategy, TeamConfig, TournamentConfig};
use crate::engine::types::Point;

/// Parse an attribute file into a [`TournamentConfig`].
///
/// Records may appear in any order; a later pitch record replaces an
/// earlier one. The result is not validated.
pub fn parse_attributes(text: &str) -> Result<TournamentConfig, ConfigError> {
    let mut parser = Parser { s: Scanner::new(text) };
    parser.records()
}

struct Parser<'a> {
    s: Scanner<'a>,
}

impl Parser<'_> {
    fn records(&mut self) -> Result<TournamentConfig, ConfigError> {
        let mut pitch = None;
        let mut teams = Vec::new();

        while !self.s.at_end() {
            self.s.expect("<begin")?;
            let line = self.s.line();
            match self.s.scan_word() {
                "pitch" => {
                    self.s.expect(">")?;
                    pitch = Some(self.pitch_record()?);
                }
                "team" => {
                    self.s.expect(">")?;
                    teams.push(self.team_record()?);
                }
                other => return Err(ConfigError::UnknownTag { tag: other.to_string(), line }),
            }
        }

        let pitch = pitch.ok_or(ConfigError::MissingPitch)?;
        Ok(TournamentConfig { pitch, teams })
    }

    /// Consume `<\end record>` once the opening `<` has been read.
    fn end_record(&mut self, record: &str) -> Result<(), ConfigError> {
        self.s.expect("\\end")?;
        let line = self.s.line();
        let word = self.s.scan_word();
        if word != record {
            return Err(ConfigError::Parse {
                line,
                message: format!("expected `<\\end {record}>`, found `<\\end {word}`"),
            });
        }
        self.s.expect(">")
    }

    fn pitch_record(&mut self) -> Result<PitchConfig, ConfigError> {
        let mut pitch = PitchConfig { width: 0, length: 0 };
        loop {
            self.s.expect("<")?;
            if self.s.peek() == Some('\\') {
                self.end_record("pitch")?;
                return Ok(pitch);
            }
            let line = self.s.line();
            match self.s.scan_word() {
                "length" => pitch.length = self.number_element("length")?,
                "width" => pitch.width = self.number_element("width")?,
                other => return Err(ConfigError::UnknownTag { tag: other.to_string(), line }),
            }
        }
    }

    fn team_record(&mut self) -> Result<TeamConfig, ConfigError> {
        let mut team = TeamConfig {
            name: String::new(),
            players: 0,
            strategy: RoamingStrategy::Random,
        };
        loop {
            self.s.expect("<")?;
            if self.s.peek() == Some('\\') {
                self.end_record("team")?;
                return Ok(team);
            }
            let line = self.s.line();
            match self.s.scan_word() {
                "name" => team.name = self.name()?,
                "numberOfPlayers" => team.players = self.number_element("numberOfPlayers")?,
                "strategy" => team.strategy = self.strategy()?,
                other => return Err(ConfigError::UnknownTag { tag: other.to_string(), line }),
            }
        }
    }

    /// `>` NUMBER `<\tag>`
    fn number_element<T: std::str::FromStr>(&mut self, tag: &str) -> Result<T, ConfigError> {
        self.s.expect(">")?;
        let value = self.number()?;
        self.s.expect(&format!("<\\{tag}>"))?;
        Ok(value)
    }

    fn number<T: std::str::FromStr>(&mut self) -> Result<T, ConfigError> {
        let line = self.s.line();
        let digits = self.s.scan_number();
        if digits.is_empty() {
            return Err(ConfigError::Parse { line, message: "expected a number".to_string() });
        }
        digits
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { text: digits.to_string(), line })
    }

    /// Words separated by whitespace, joined with single spaces.
    fn name(&mut self) -> Result<String, ConfigError> {
        self.s.expect(">")?;
        let mut words = Vec::new();
        loop {
            let word = self.s.scan_word();
            if word.is_empty() {
                break;
            }
            words.push(word);
        }
        self.s.expect("<\\name>")?;
        Ok(words.join(" "))
    }

    fn strategy(&mut self) -> Result<RoamingStrategy, ConfigError> {
        self.s.expect(">")?;
        let line = self.s.line();
        match self.s.scan_word() {
            "random" => {
                self.s.expect("<\\strategy>")?;
                Ok(RoamingStrategy::Random)
            }
            "custom" => Ok(RoamingStrategy::Custom(self.regions()?)),
            other => Err(ConfigError::UnknownStrategy { strategy: other.to_string(), line }),
        }
    }

    /// Zero or more `<region>` elements, then `<\strategy>`.
    fn regions(&mut self) -> Result<Vec<[Point; 2]>, ConfigError> {
        let mut regions = Vec::new();
        loop {
            self.s.expect("<")?;
            if self.s.peek() == Some('\\') {
                self.s.expect("\\strategy>")?;
                return Ok(regions);
            }
            self.s.expect("region>")?;
            let bottom_left = self.point()?;
            let top_right = self.point()?;
            self.s.expect("<\\region>")?;
            regions.push([bottom_left, top_right]);
        }
    }

    fn point(&mut self) -> Result<Point, ConfigError> {
        self.s.expect("(")?;
        let x = self.number()?;
        self.s.expect(",")?;
        let y = self.number()?;
        self.s.expect(")")?;
        Ok(Point::new(x, y))
    }
}
