use std::io::{self, Write};

use solitario_core::model::suit::Suit;
use solitario_core::render::render_suit;
use tracing::{debug, info};

/// Write every face of `suit` to `out`, one fragment per rank followed by a
/// newline, then flush. Returns how many fragments were written.
pub fn write_suit<W: Write>(suit: Suit, out: &mut W) -> io::Result<usize> {
    let mut written = 0usize;
    for fragment in render_suit(suit) {
        debug!(
            suit = suit.name(),
            rank = fragment.rank().label(),
            id = fragment.id(),
            pips = fragment.rank().pip_count(),
            "rendered card face"
        );
        writeln!(out, "{fragment}")?;
        written += 1;
    }
    out.flush()?;
    info!(
        suit = suit.name(),
        color = suit.color().as_str(),
        fragments = written,
        "card faces written"
    );
    Ok(written)
}

/// A suit's output as one string, byte-identical to what [`write_suit`] writes.
pub fn suit_markup(suit: Suit) -> String {
    render_suit(suit)
        .map(|fragment| format!("{fragment}\n"))
        .collect()
}
