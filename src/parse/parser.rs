use super::error::{InvalidNotation, Reason};
use super::lexer::{lexer, Lexer, TokenKind};
use crate::common::*;
use crate::dice::RollDescriptor;

type PResult<T> = Result<T, InvalidNotation>;

/// Largest count or number of sides accepted by [`Parser::new`].
pub const DEFAULT_MAX: UInt = 1000;

/// Dice notation parser.
///
/// Understands `NdX`, `ND` (same as `Nd6`), `NdF`/`NdXF` (fudge dice),
/// `+NdX` (keep the best die) and `-NdX` (keep the worst die). Whitespace
/// between tokens is ignored.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Parser {
    max: UInt,
}

impl Parser {
    pub const fn new() -> Self {
        Self { max: DEFAULT_MAX }
    }

    /// A parser that accepts counts and sides up to `max` inclusive.
    pub const fn with_max(max: NonZeroUInt) -> Self {
        Self { max: max.get() }
    }

    pub const fn max(&self) -> UInt {
        self.max
    }

    pub fn parse(&self, s: &str) -> PResult<RollDescriptor> {
        self.scan(s)?
            .descriptor()
            .ok_or_else(|| InvalidNotation::new(Reason::Incomplete, s.len()))
    }

    /// Dry run: gives the same verdict as [`Parser::parse`] without building
    /// a descriptor.
    pub fn check(&self, s: &str) -> PResult<()> {
        if self.scan(s)?.is_complete() {
            Ok(())
        } else {
            Err(InvalidNotation::new(Reason::Incomplete, s.len()))
        }
    }

    fn scan(&self, s: &str) -> PResult<State> {
        Scanner {
            lexer: lexer(s),
            max: self.max,
            state: State::Start,
        }
        .run()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the scan is, together with everything read so far.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum State {
    /// Only whitespace so far; a sign is still allowed.
    Start,
    /// A sign was read; the count comes next.
    Signed(Variant),
    /// The count was read; waiting for `d` or `D`.
    Count(Variant, NonZeroUInt),
    /// `d` was read; sides or a fudge marker come next.
    Sides(Variant, NonZeroUInt),
    /// Count and sides were read; a fudge marker may still follow.
    SidesRun(Variant, NonZeroUInt, NonZeroUInt),
    /// `ND`. Terminal.
    SixSided(Variant, NonZeroUInt),
    /// `NdF` or `NdXF`. Terminal.
    Fudged(NonZeroUInt),
}

impl State {
    fn is_complete(self) -> bool {
        matches!(self, Self::SidesRun(..) | Self::SixSided(..) | Self::Fudged(_))
    }

    fn descriptor(self) -> Option<RollDescriptor> {
        Some(match self {
            Self::SidesRun(variant, count, sides) => with_variant(variant, count, sides),
            Self::SixSided(variant, count) => with_variant(variant, count, SIX),
            Self::Fudged(count) => RollDescriptor::fudge(count),
            Self::Start | Self::Signed(_) | Self::Count(..) | Self::Sides(..) => return None,
        })
    }
}

const SIX: NonZeroUInt = match NonZeroUInt::new(6) {
    Some(x) => x,
    None => unreachable!(),
};

fn with_variant(variant: Variant, count: NonZeroUInt, sides: NonZeroUInt) -> RollDescriptor {
    match variant {
        Variant::Sum => RollDescriptor::sum(count, sides),
        Variant::Max => RollDescriptor::max(count, sides),
        Variant::Min => RollDescriptor::min(count, sides),
        Variant::Fudge => RollDescriptor::fudge(count),
    }
}

struct Scanner<'a> {
    lexer: Lexer<'a>,
    max: UInt,
    state: State,
}

impl Scanner<'_> {
    fn run(mut self) -> PResult<State> {
        while let Some(kind) = self.lexer.next() {
            self.state = self.step(kind)?;
        }
        Ok(self.state)
    }

    fn step(&self, kind: TokenKind) -> PResult<State> {
        use State::*;

        Ok(match (kind, self.state) {
            (TokenKind::Error, _) => return self.error(Reason::UnexpectedCharacter),
            (_, SixSided(..) | Fudged(_)) => return self.error(Reason::TrailingInput),

            (TokenKind::Plus, Start) => Signed(Variant::Max),
            (TokenKind::Minus, Start) => Signed(Variant::Min),
            (TokenKind::Plus | TokenKind::Minus, _) => return self.error(Reason::MisplacedSign),

            (TokenKind::Digits, state) => {
                let value = self.close_field()?;
                match state {
                    Start => Count(Variant::Sum, value),
                    Signed(variant) => Count(variant, value),
                    Sides(variant, count) => SidesRun(variant, count, value),
                    _ => return self.error(Reason::DuplicateField),
                }
            }

            (TokenKind::Dice, Count(variant, count)) => Sides(variant, count),
            (TokenKind::SixSided, Count(variant, count)) => SixSided(variant, count),
            (TokenKind::Dice | TokenKind::SixSided, _) => return self.error(Reason::MisplacedDice),

            // The sides, if any, were already range checked; they are dropped here.
            (TokenKind::Fudge, Sides(Variant::Sum, count) | SidesRun(Variant::Sum, count, _)) => {
                Fudged(count)
            }
            (TokenKind::Fudge, _) => return self.error(Reason::MisplacedFudge),
        })
    }

    /// Converts the current digit run into a field value: range first, then zero.
    fn close_field(&self) -> PResult<NonZeroUInt> {
        let out_of_range = Reason::OutOfRange { max: self.max };
        // Runs too long for a `UInt` are out of range as well.
        let value: UInt = match self.lexer.slice().parse() {
            Ok(value) => value,
            Err(_) => return self.error(out_of_range),
        };
        if value > self.max {
            return self.error(out_of_range);
        }
        match NonZeroUInt::new(value) {
            Some(value) => Ok(value),
            None => self.error(Reason::Zero),
        }
    }

    fn error<T>(&self, reason: Reason) -> PResult<T> {
        Err(InvalidNotation::new(reason, self.lexer.span().start))
    }
}
