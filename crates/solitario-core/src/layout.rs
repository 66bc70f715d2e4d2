//! Pip placement for every rank.
//!
//! Class names produced here are read by the game stylesheet, so rows and
//! columns must keep their exact spelling.

use core::fmt;

use crate::model::rank::Rank;

use self::Column::{Center, Left, Right};
use self::Row::{Bottom, Middle, OverBottom, OverMiddle, Top, UnderMiddle, UnderTop};

/// Vertical band on the card face, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    Top,
    UnderTop,
    OverMiddle,
    Middle,
    UnderMiddle,
    OverBottom,
    Bottom,
}

impl Row {
    pub const fn class(self) -> &'static str {
        match self {
            Row::Top => "top",
            Row::UnderTop => "under-top",
            Row::OverMiddle => "over-middle",
            Row::Middle => "middle",
            Row::UnderMiddle => "under-middle",
            Row::OverBottom => "over-bottom",
            Row::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Left,
    Center,
    Right,
}

impl Column {
    pub const fn class(self) -> &'static str {
        match self {
            Column::Left => "left",
            Column::Center => "center",
            Column::Right => "right",
        }
    }
}

/// One place a suit glyph is drawn on the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PipSlot {
    pub row: Row,
    pub column: Column,
}

impl PipSlot {
    pub const fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }
}

/// Writes the slot's class pair, e.g. `under-top center`.
impl fmt::Display for PipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row.class(), self.column.class())
    }
}

const fn slot(row: Row, column: Column) -> PipSlot {
    PipSlot::new(row, column)
}

const PIPS_A: &[PipSlot] = &[slot(Middle, Center)];
const PIPS_2: &[PipSlot] = &[slot(Top, Center), slot(Bottom, Center)];
const PIPS_3: &[PipSlot] = &[slot(Top, Center), slot(Middle, Center), slot(Bottom, Center)];
const PIPS_4: &[PipSlot] = &[
    slot(Top, Left),
    slot(Top, Right),
    slot(Bottom, Left),
    slot(Bottom, Right),
];
const PIPS_5: &[PipSlot] = &[
    slot(Top, Left),
    slot(Top, Right),
    slot(Middle, Center),
    slot(Bottom, Left),
    slot(Bottom, Right),
];
const PIPS_6: &[PipSlot] = &[
    slot(Top, Left),
    slot(Top, Right),
    slot(Middle, Left),
    slot(Middle, Right),
    slot(Bottom, Left),
    slot(Bottom, Right),
];
const PIPS_7: &[PipSlot] = &[
    slot(Top, Left),
    slot(Top, Right),
    slot(UnderTop, Center),
    slot(Middle, Left),
    slot(Middle, Right),
    slot(Bottom, Left),
    slot(Bottom, Right),
];
const PIPS_8: &[PipSlot] = &[
    slot(Top, Left),
    slot(Top, Right),
    slot(UnderTop, Center),
    slot(Middle, Left),
    slot(Middle, Right),
    slot(OverBottom, Center),
    slot(Bottom, Left),
    slot(Bottom, Right),
];
const PIPS_9: &[PipSlot] = &[
    slot(Top, Left),
    slot(Top, Right),
    slot(OverMiddle, Left),
    slot(OverMiddle, Right),
    slot(Middle, Center),
    slot(UnderMiddle, Left),
    slot(UnderMiddle, Right),
    slot(Bottom, Left),
    slot(Bottom, Right),
];
const PIPS_10: &[PipSlot] = &[
    slot(Top, Left),
    slot(Top, Right),
    slot(UnderTop, Center),
    slot(OverMiddle, Left),
    slot(OverMiddle, Right),
    slot(UnderMiddle, Left),
    slot(UnderMiddle, Right),
    slot(OverBottom, Center),
    slot(Bottom, Left),
    slot(Bottom, Right),
];

/// Ordered pip arrangement for a rank. Both corners are implicit: every
/// layout draws the rank label and one glyph at the top and bottom corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pips: &'static [PipSlot],
}

impl Layout {
    pub const fn new(pips: &'static [PipSlot]) -> Self {
        Self { pips }
    }

    pub const fn pips(&self) -> &'static [PipSlot] {
        self.pips
    }

    pub const fn pip_count(&self) -> usize {
        self.pips.len()
    }
}

/// Rank to layout, in emission order.
///
/// Jack, queen and king have no illustrated faces yet and borrow the ace's
/// single centred pip.
pub const LAYOUT_TABLE: [(Rank, Layout); 13] = [
    (Rank::Ace, Layout::new(PIPS_A)),
    (Rank::Two, Layout::new(PIPS_2)),
    (Rank::Three, Layout::new(PIPS_3)),
    (Rank::Four, Layout::new(PIPS_4)),
    (Rank::Five, Layout::new(PIPS_5)),
    (Rank::Six, Layout::new(PIPS_6)),
    (Rank::Seven, Layout::new(PIPS_7)),
    (Rank::Eight, Layout::new(PIPS_8)),
    (Rank::Nine, Layout::new(PIPS_9)),
    (Rank::Ten, Layout::new(PIPS_10)),
    (Rank::Jack, Layout::new(PIPS_A)),
    (Rank::Queen, Layout::new(PIPS_A)),
    (Rank::King, Layout::new(PIPS_A)),
];

pub fn layout_for(rank: Rank) -> Layout {
    // ORDERED and LAYOUT_TABLE share indices; the table test pins that.
    LAYOUT_TABLE[usize::from(rank.value() - 1)].1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(rank: Rank) -> Vec<String> {
        layout_for(rank)
            .pips()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn table_follows_rank_order() {
        let ranks: Vec<Rank> = LAYOUT_TABLE.iter().map(|(rank, _)| *rank).collect();
        assert_eq!(ranks, Rank::ORDERED);
        for (rank, layout) in LAYOUT_TABLE {
            assert_eq!(layout_for(rank), layout);
        }
    }

    #[test]
    fn numbered_ranks_have_matching_pip_counts() {
        for rank in Rank::ORDERED.into_iter().filter(|r| !r.is_face()) {
            assert_eq!(layout_for(rank).pip_count(), usize::from(rank.value()));
        }
    }

    #[test]
    fn face_cards_reuse_ace_layout() {
        let ace = layout_for(Rank::Ace);
        for rank in [Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(layout_for(rank), ace);
        }
        assert_eq!(classes(Rank::King), ["middle center"]);
    }

    #[test]
    fn ten_layout_classes() {
        assert_eq!(
            classes(Rank::Ten),
            [
                "top left",
                "top right",
                "under-top center",
                "over-middle left",
                "over-middle right",
                "under-middle left",
                "under-middle right",
                "over-bottom center",
                "bottom left",
                "bottom right",
            ]
        );
    }

    #[test]
    fn low_ranks_stay_in_center_column() {
        assert_eq!(classes(Rank::Two), ["top center", "bottom center"]);
        assert_eq!(
            classes(Rank::Three),
            ["top center", "middle center", "bottom center"]
        );
    }

    #[test]
    fn no_layout_repeats_a_slot() {
        for (rank, layout) in LAYOUT_TABLE {
            let pips = layout.pips();
            for (i, a) in pips.iter().enumerate() {
                assert!(
                    !pips[i + 1..].contains(a),
                    "rank {rank} repeats slot {a}"
                );
            }
        }
    }
}
