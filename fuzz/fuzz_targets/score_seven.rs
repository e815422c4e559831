#![no_main]
use libfuzzer_sys::fuzz_target;
use poker_rank::core::{Card, CardBitSet, RankConfig, Scorer, WindowStrategy};

fuzz_target!(|cards: [Card; 7]| {
    if CardBitSet::first_duplicate(&cards).is_some() {
        return;
    }

    let contiguous = Scorer::default().score_cards(&cards).unwrap();
    let all = Scorer::new(RankConfig::default().with_windows(WindowStrategy::AllCombinations))
        .score_cards(&cards)
        .unwrap();

    // More windows can only find better hands.
    assert!(all >= contiguous);
    // Valid cards always make at least a high card or a pair.
    assert!(contiguous.label().is_some());
    assert!(all.label().is_some());
});
