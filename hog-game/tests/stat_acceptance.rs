use hog_game::{
    BaconStrategy, DiceSet, FinalStrategy, always_roll, average_win_rate, evaluate_win_rate,
    four_sided, make_averaged_fallible, max_scoring_num_rolls, roll_dice, six_sided,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const SAMPLE_SIZE: u32 = 20_000;
const GAMES_PER_SEAT: u32 = 2_000;

fn expected_turn_score(num_rolls: i32, sides: f64) -> f64 {
    let no_pig_out = ((sides - 1.0) / sides).powi(num_rolls);
    let mean_face_without_one = (2.0 + sides) / 2.0;
    mean_face_without_one * f64::from(num_rolls) * no_pig_out + (1.0 - no_pig_out)
}

#[test]
fn single_die_averages_match_face_means() {
    let d6 = six_sided(ChaCha20Rng::seed_from_u64(11));
    let d4 = four_sided(ChaCha20Rng::seed_from_u64(12));
    let mut averaged = make_averaged_fallible(
        |(n, die): (u32, &hog_game::SeededDie)| roll_dice(n, die),
        SAMPLE_SIZE,
    )
    .unwrap();
    let six = averaged((1, &d6)).unwrap();
    let four = averaged((1, &d4)).unwrap();
    assert!((six - 3.5).abs() <= 0.05, "d6 mean drifted: {six:.4}");
    assert!((four - 2.5).abs() <= 0.05, "d4 mean drifted: {four:.4}");
}

#[test]
fn turn_score_table_tracks_pig_out_expectation() {
    let d6 = six_sided(ChaCha20Rng::seed_from_u64(0xACED));
    let report = max_scoring_num_rolls(&d6, SAMPLE_SIZE).unwrap();
    assert_eq!(report.averages.len(), 10);
    for entry in &report.averages {
        let expected = expected_turn_score(i32::try_from(entry.num_rolls).unwrap(), 6.0);
        assert!(
            (entry.average - expected).abs() <= 0.4,
            "{} dice averaged {:.3}, expected {expected:.3}",
            entry.num_rolls,
            entry.average
        );
    }
    // Five through seven dice sit within noise of each other; anything else is wrong.
    assert!((5..=7).contains(&report.best), "best was {}", report.best);
}

#[test]
fn mirrored_baseline_wins_half_the_time() {
    let dice = DiceSet::seeded(1337);
    let rate = average_win_rate(&always_roll(5), &always_roll(5), &dice, 100, GAMES_PER_SEAT)
        .unwrap();
    assert!((rate - 0.5).abs() <= 0.05, "baseline self-play drifted: {rate:.4}");
}

#[test]
fn bacon_strategy_beats_the_baseline() {
    let dice = DiceSet::seeded(99);
    let rate = average_win_rate(
        &BaconStrategy::default(),
        &always_roll(5),
        &dice,
        100,
        GAMES_PER_SEAT,
    )
    .unwrap();
    assert!(rate > 0.52, "bacon strategy win rate {rate:.4}");
}

#[test]
fn final_strategy_beats_the_baseline_from_both_seats() {
    let dice = DiceSet::seeded(4242);
    let rate = evaluate_win_rate(
        &FinalStrategy::default(),
        &always_roll(5),
        &dice,
        100,
        GAMES_PER_SEAT,
    )
    .unwrap();
    assert!(rate.overall() > 0.55, "final strategy win rate {:.4}", rate.overall());
    assert!(rate.as_player_zero > 0.5);
    assert!(rate.as_player_one > 0.5);
}
