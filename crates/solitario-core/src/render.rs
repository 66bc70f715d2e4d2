use core::fmt::{self, Write};

use crate::layout::{LAYOUT_TABLE, Layout};
use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;

/// Markup for one card face, ready to be dropped into the game page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFragment {
    card: Card,
    id: String,
    markup: String,
}

impl CardFragment {
    pub fn suit(&self) -> Suit {
        self.card.suit
    }

    pub fn rank(&self) -> Rank {
        self.card.rank
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The fragment text. Starts with a newline, has no trailing newline.
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl fmt::Display for CardFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

/// Render a single card face using `layout` for the pips.
pub fn render_card(suit: Suit, rank: Rank, layout: &Layout) -> CardFragment {
    let card = Card::new(rank, suit);
    let id = card.id().to_string();
    let mut markup = String::with_capacity(512 + 48 * layout.pip_count());
    // Writing into a String cannot fail.
    let _ = write_markup(&mut markup, suit, rank, &id, layout);
    CardFragment { card, id, markup }
}

fn write_markup(
    out: &mut String,
    suit: Suit,
    rank: Rank,
    id: &str,
    layout: &Layout,
) -> fmt::Result {
    let name = suit.name();
    let glyph = suit.glyph();
    let label = rank.label();

    writeln!(out)?;
    writeln!(
        out,
        r#"<div class="card {name}" id="{id}" data-suit="{name}" data-number="{label}">"#
    )?;
    writeln!(out, r#"  <div class="flipper">"#)?;
    writeln!(out, r#"    <div class="front">"#)?;
    write_corner(out, "top", label, glyph)?;
    for pip in layout.pips() {
        writeln!(out, r#"      <span class="suit {pip}">{glyph}</span>"#)?;
    }
    write_corner(out, "bottom", label, glyph)?;
    writeln!(out, "    </div>")?;
    writeln!(out, r#"    <div class="back"></div>"#)?;
    writeln!(out, "  </div>")?;
    write!(out, "</div>")
}

fn write_corner(out: &mut String, position: &str, label: &str, glyph: char) -> fmt::Result {
    writeln!(out, r#"      <div class="corner {position}">"#)?;
    writeln!(out, r#"        <span class="number">{label}</span>"#)?;
    writeln!(out, "        <span>{glyph}</span>")?;
    writeln!(out, "      </div>")
}

/// Every face of `suit`, in layout table order (A through K).
pub fn render_suit(suit: Suit) -> impl Iterator<Item = CardFragment> {
    LAYOUT_TABLE
        .into_iter()
        .map(move |(rank, layout)| render_card(suit, rank, &layout))
}

/// All 52 faces, suit by suit in [`Suit::ALL`] order.
pub fn render_deck() -> impl Iterator<Item = CardFragment> {
    Suit::ALL.into_iter().flat_map(render_suit)
}
