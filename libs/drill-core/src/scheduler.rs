//! Review scheduling: which card comes next, and how a card's state
//! changes after an answer.

use rand::Rng;

use crate::types::{Card, DEFAULT_WEIGHT, MIN_WEIGHT};

const FIRST_INTERVAL: i64 = 60;
const SECOND_INTERVAL: i64 = 600;
const DAY: i64 = 86_400;

/// How many never-solved cards are offered at once. Keeps an early session
/// focused on a small batch of new words instead of spraying across the
/// whole deck.
pub const FRESH_POOL_SIZE: usize = 10;

/// Seconds until the next review after the n-th consecutive correct answer:
/// one minute, ten minutes, one day, then doubling per correct answer.
pub fn interval_for(streak: u32) -> i64 {
    match streak {
        0 | 1 => FIRST_INTERVAL,
        2 => SECOND_INTERVAL,
        3 => DAY,
        // Clamped; 2^40 days is already past any real review horizon.
        n => DAY << (n - 3).min(40),
    }
}

/// Fold an answer into the card's scheduling state.
///
/// A correct answer extends the streak, pushes the next review out by
/// [`interval_for`] and halves the weight (floored at [`MIN_WEIGHT`]). A
/// wrong answer makes the card due immediately with a fresh streak and full
/// weight.
pub fn record_outcome(card: &mut Card, is_correct: bool, now: i64) {
    card.last_reviewed_at = now;

    if is_correct {
        card.correct_streak += 1;
        card.next_review_at = now + interval_for(card.correct_streak);
        card.weight = (card.weight * 0.5).max(MIN_WEIGHT);
    } else {
        card.correct_streak = 0;
        card.next_review_at = now;
        card.weight = DEFAULT_WEIGHT;
    }
}

/// Pick the next card to present.
///
/// Due cards win, weighted by `weight` — the weight deliberately biases
/// *among* due cards, so a card that keeps being missed shows up more often
/// than other due cards. With nothing due, never-solved cards are drawn
/// uniformly from the first [`FRESH_POOL_SIZE`] in deck order. Failing
/// that, the whole deck is sampled by weight.
pub fn select_next<'a, R: Rng + ?Sized>(
    cards: &'a [Card],
    now: i64,
    rng: &mut R,
) -> Option<&'a Card> {
    if cards.is_empty() {
        return None;
    }

    let due: Vec<&Card> = cards.iter().filter(|c| c.next_review_at <= now).collect();
    if !due.is_empty() {
        return Some(weighted_pick(&due, rng));
    }

    let fresh: Vec<&Card> = cards.iter().filter(|c| c.correct_streak == 0).collect();
    if !fresh.is_empty() {
        let pool = &fresh[..fresh.len().min(FRESH_POOL_SIZE)];
        return Some(pool[rng.gen_range(0..pool.len())]);
    }

    let all: Vec<&Card> = cards.iter().collect();
    Some(weighted_pick(&all, rng))
}

/// Discrete weighted sampling over a cumulative-weight table. Weights are
/// at least [`MIN_WEIGHT`], so the running totals are strictly increasing
/// and `partition_point` lands on the first card whose cumulative weight
/// exceeds the draw.
fn weighted_pick<'a, R: Rng + ?Sized>(cards: &[&'a Card], rng: &mut R) -> &'a Card {
    let mut cumulative = Vec::with_capacity(cards.len());
    let mut total = 0.0;
    for card in cards {
        total += card.weight;
        cumulative.push(total);
    }

    let draw = rng.gen_range(0.0..total);
    let idx = cumulative.partition_point(|&bound| bound <= draw);
    cards[idx.min(cards.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn card(id: i64, term: &str, translation: &str) -> Card {
        Card::new(id, term, translation, "", "")
    }

    fn sample_deck() -> Vec<Card> {
        vec![
            card(1, "run", "koşmak"),
            card(2, "eat", "yemek"),
            card(3, "sleep", "uyumak"),
            card(4, "jump", "zıplamak"),
        ]
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn interval_table_matches_the_backoff() {
        assert_eq!(interval_for(1), 60);
        assert_eq!(interval_for(2), 600);
        assert_eq!(interval_for(3), 86_400);
        assert_eq!(interval_for(4), 172_800);
        assert_eq!(interval_for(5), 345_600);
        assert_eq!(interval_for(6), 691_200);
    }

    #[test]
    fn huge_streaks_do_not_overflow() {
        assert!(interval_for(200) > 0);
    }

    #[test]
    fn three_correct_answers_follow_the_interval_table() {
        let mut deck = sample_deck();
        let c = &mut deck[0];

        record_outcome(c, true, 0);
        assert_eq!(c.correct_streak, 1);
        assert_eq!(c.next_review_at, 60);
        assert_eq!(c.weight, 50.0);

        record_outcome(c, true, 70);
        assert_eq!(c.correct_streak, 2);
        assert_eq!(c.next_review_at, 670);
        assert_eq!(c.weight, 25.0);

        record_outcome(c, true, 700);
        assert_eq!(c.correct_streak, 3);
        assert_eq!(c.next_review_at, 700 + 86_400);
        assert_eq!(c.weight, 12.5);
        assert_eq!(c.last_reviewed_at, 700);
    }

    #[test]
    fn wrong_answer_resets_progress() {
        let mut c = card(1, "run", "koşmak");
        record_outcome(&mut c, true, 0);
        record_outcome(&mut c, true, 70);

        record_outcome(&mut c, false, 700);
        assert_eq!(c.correct_streak, 0);
        assert_eq!(c.weight, 100.0);
        assert_eq!(c.next_review_at, 700);
        assert_eq!(c.last_reviewed_at, 700);
    }

    #[test]
    fn weight_is_non_increasing_and_floored() {
        let mut c = card(1, "run", "koşmak");
        let mut previous = c.weight;
        for t in 0..12 {
            record_outcome(&mut c, true, t);
            assert!(c.weight <= previous);
            assert!(c.weight >= MIN_WEIGHT);
            previous = c.weight;
        }
        assert_eq!(c.weight, MIN_WEIGHT);
    }

    #[test]
    fn empty_deck_selects_nothing() {
        assert!(select_next(&[], 0, &mut rng()).is_none());
    }

    #[test]
    fn due_cards_always_win() {
        let mut deck = sample_deck();
        for c in deck.iter_mut() {
            c.correct_streak = 1;
            c.next_review_at = 5_000;
        }
        deck[2].next_review_at = 900;

        let mut rng = rng();
        for _ in 0..200 {
            let picked = select_next(&deck, 1_000, &mut rng).unwrap();
            assert!(picked.next_review_at <= 1_000);
            assert_eq!(picked.id, 3);
        }
    }

    #[test]
    fn fresh_pool_is_capped() {
        // Unsolved cards can sit in the future when imported with an
        // explicit schedule; they fall through to the fresh-card pool.
        let deck: Vec<Card> = (1..=25)
            .map(|i| {
                let mut c = card(i, &format!("term-{i}"), &format!("tr-{i}"));
                c.next_review_at = 10_000;
                c
            })
            .collect();

        let mut rng = rng();
        for _ in 0..500 {
            let picked = select_next(&deck, 0, &mut rng).unwrap();
            assert!(
                picked.id <= FRESH_POOL_SIZE as i64,
                "picked {} outside the fresh pool",
                picked.id
            );
        }
    }

    #[test]
    fn weighted_fallback_prefers_heavy_cards() {
        let mut deck = sample_deck();
        for c in deck.iter_mut() {
            c.correct_streak = 2;
            c.next_review_at = 10_000;
            c.weight = 1.0;
        }
        deck[3].weight = 97.0;

        let mut rng = rng();
        let mut heavy_hits = 0;
        for _ in 0..1_000 {
            if select_next(&deck, 0, &mut rng).unwrap().id == 4 {
                heavy_hits += 1;
            }
        }
        // Expected share is 97%; anything clearly above uniform will do.
        assert!(heavy_hits > 800, "heavy card picked only {heavy_hits} times");
    }

    #[test]
    fn weighted_selection_reaches_light_cards_too() {
        let mut deck = sample_deck();
        for c in deck.iter_mut() {
            c.correct_streak = 2;
            c.next_review_at = 10_000;
        }
        deck[0].weight = 1.0;

        let mut rng = rng();
        let mut light_hits = 0;
        for _ in 0..2_000 {
            if select_next(&deck, 0, &mut rng).unwrap().id == 1 {
                light_hits += 1;
            }
        }
        assert!(light_hits > 0, "light card was never picked");
    }
}
