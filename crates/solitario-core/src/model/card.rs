use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// DOM identifier the front-end looks cards up by, e.g. `d9`, `h10`, `sa`.
    pub fn id(self) -> CardId {
        CardId(self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.glyph())
    }
}

/// Lazily formatted card id: suit initial followed by the lowercase rank label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(Card);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.suit.initial())?;
        for ch in self.0.rank.label().chars() {
            write!(f, "{}", ch.to_ascii_lowercase())?;
        }
        Ok(())
    }
}
