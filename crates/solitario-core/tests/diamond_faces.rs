use solitario_core::layout::layout_for;
use solitario_core::model::rank::Rank;
use solitario_core::model::suit::Suit;
use solitario_core::render::{CardFragment, render_card, render_suit};

fn diamonds() -> Vec<CardFragment> {
    render_suit(Suit::Diamond).collect()
}

fn pip_classes(fragment: &CardFragment) -> Vec<String> {
    fragment
        .markup()
        .lines()
        .filter_map(|line| {
            let rest = line.trim().strip_prefix(r#"<span class="suit "#)?;
            let (classes, _) = rest.split_once('"')?;
            Some(classes.to_string())
        })
        .collect()
}

#[test]
fn first_diamond_is_the_ace() {
    let cards = diamonds();
    let ace = &cards[0];
    assert_eq!(ace.rank(), Rank::Ace);
    assert!(ace.markup().contains(r#"id="da""#));
    assert!(ace.markup().contains(r#"class="card diamond""#));
    assert!(ace.markup().contains(r#"data-suit="diamond""#));
    assert!(ace.markup().contains(r#"data-number="A""#));
    assert_eq!(ace.markup().matches('♦').count(), 3);
    assert_eq!(pip_classes(ace), ["middle center"]);
}

#[test]
fn tenth_diamond_draws_ten_pips() {
    let cards = diamonds();
    let ten = &cards[9];
    assert_eq!(ten.rank(), Rank::Ten);
    assert_eq!(ten.id(), "d10");
    assert_eq!(ten.markup().matches('♦').count(), 12);

    let classes = pip_classes(ten);
    assert_eq!(classes.len(), 10);
    let count = |needle: &str| classes.iter().filter(|c| c.starts_with(needle)).count();
    assert_eq!(count("top "), 2);
    assert_eq!(count("under-top "), 1);
    assert_eq!(count("over-middle "), 2);
    assert_eq!(count("under-middle "), 2);
    assert_eq!(count("over-bottom "), 1);
    assert_eq!(count("bottom "), 2);
}

#[test]
fn corners_carry_rank_label_twice() {
    for fragment in diamonds() {
        let number = format!(r#"<span class="number">{}</span>"#, fragment.rank().label());
        assert_eq!(fragment.markup().matches(&number).count(), 2, "{}", fragment.id());
        assert!(fragment.markup().contains(r#"<div class="back"></div>"#));
    }
}

#[test]
fn face_cards_render_like_the_ace_apart_from_labels() {
    let ace = render_card(Suit::Club, Rank::Ace, &layout_for(Rank::Ace));
    for rank in [Rank::Jack, Rank::Queen, Rank::King] {
        let face = render_card(Suit::Club, rank, &layout_for(rank));
        let expected = ace
            .markup()
            .replace(r#"id="ca""#, &format!(r#"id="c{}""#, rank.label().to_lowercase()))
            .replace(r#"data-number="A""#, &format!(r#"data-number="{}""#, rank.label()))
            .replace(">A<", &format!(">{}<", rank.label()));
        assert_eq!(face.markup(), expected);
    }
}

#[test]
fn every_suit_uses_its_own_glyph() {
    for (suit, glyph) in [
        (Suit::Club, '♣'),
        (Suit::Diamond, '♦'),
        (Suit::Heart, '♥'),
        (Suit::Spade, '♠'),
    ] {
        for fragment in render_suit(suit) {
            assert!(fragment.markup().contains(glyph));
            let others = Suit::ALL.iter().filter(|s| **s != suit).map(|s| s.glyph());
            for other in others {
                assert!(!fragment.markup().contains(other));
            }
            let prefix = fragment.id().chars().next();
            assert_eq!(prefix, Some(suit.initial()));
        }
    }
}
