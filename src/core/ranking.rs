use tracing::event;

use super::{FullScore, TieRule};

/// Copy of `scores` sorted strongest first.
pub fn sorted_descending(scores: &[FullScore]) -> Vec<FullScore> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));
    sorted
}

/// Give every score its 0 based rank, 0 being the strongest.
///
/// The result is aligned with `scores` by index.
///
/// ```
/// use poker_rank::core::{rank_scores, FullScore, TieRule};
///
/// let mut strong = [0; 26];
/// strong[1] = 7;
/// let mut weak = [0; 26];
/// weak[21] = 9;
/// let scores = [FullScore::from(weak), FullScore::from(strong), FullScore::from(weak)];
///
/// // The later of two equal scores gets the better position.
/// assert_eq!(vec![2, 0, 1], rank_scores(&scores, TieRule::Positional));
/// assert_eq!(vec![1, 0, 1], rank_scores(&scores, TieRule::Competition));
/// ```
pub fn rank_scores(scores: &[FullScore], ties: TieRule) -> Vec<usize> {
    let ranks = match ties {
        TieRule::Positional => positional_ranks(scores),
        TieRule::Competition => competition_ranks(scores),
    };
    event!(
        tracing::Level::DEBUG,
        ?ties,
        sorted = ?sorted_descending(scores),
        ?ranks,
        "Ranked scores"
    );
    ranks
}

/// Stable sort weakest first, then flip. Equal scores end up in
/// reverse input order.
fn positional_ranks(scores: &[FullScore]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by_key(|idx| scores[*idx]);
    order.reverse();

    let mut ranks = vec![0; scores.len()];
    for (position, idx) in order.into_iter().enumerate() {
        ranks[idx] = position;
    }
    ranks
}

/// Rank is the number of strictly stronger scores, which is also
/// where the first equal score sits in the descending sort.
fn competition_ranks(scores: &[FullScore]) -> Vec<usize> {
    let sorted = sorted_descending(scores);
    scores
        .iter()
        .map(|score| sorted.partition_point(|other| other > score))
        .collect()
}
