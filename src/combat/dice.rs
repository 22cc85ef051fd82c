//! Damage dice in `<count>d<size>` notation

use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::separated_pair;
use nom::{IResult, Parser};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// A parsed dice expression such as `2d6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceSpec {
    pub count: u32,
    pub sides: u32,
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |digits: &str| digits.parse::<u32>()).parse(input)
}

fn dice_expr(input: &str) -> IResult<&str, (u32, u32)> {
    separated_pair(number, char('d'), number).parse(input)
}

impl DiceSpec {
    pub fn new(count: u32, sides: u32) -> Result<Self> {
        if count == 0 || sides == 0 {
            return Err(SimError::InvalidDice(format!("{}d{}", count, sides)));
        }
        Ok(Self { count, sides })
    }

    /// Parse `<count>d<size>`; surrounding whitespace is ignored
    pub fn parse(spec: &str) -> Result<Self> {
        let (_, (count, sides)) = all_consuming(dice_expr)
            .parse(spec.trim())
            .map_err(|_| SimError::InvalidDice(spec.to_string()))?;
        Self::new(count, sides).map_err(|_| SimError::InvalidDice(spec.to_string()))
    }

    /// Sum of `count` uniform draws over `1..=sides`, saturating at `i32::MAX`
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        let total = (0..self.count).fold(0i64, |acc, _| {
            acc.saturating_add(i64::from(rng.gen_range(1..=self.sides)))
        });
        saturate(total)
    }

    pub fn min_total(&self) -> i32 {
        saturate(i64::from(self.count))
    }

    pub fn max_total(&self) -> i32 {
        self.count.saturating_mul(self.sides).min(i32::MAX as u32) as i32
    }
}

fn saturate(total: i64) -> i32 {
    i32::try_from(total).unwrap_or(i32::MAX)
}

impl std::str::FromStr for DiceSpec {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}
