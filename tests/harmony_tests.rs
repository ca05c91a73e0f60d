// Tests for interval tables, chord selection and the transposition walk.

use drone::core::*;

#[test]
fn just_intervals_are_exact_ratios() {
    assert_eq!(FIFTH, 1.5);
    assert!((FOURTH * FIFTH - 2.0).abs() < 1e-12);
    assert!((MAJOR_3RD * MINOR_3RD - FIFTH).abs() < 1e-12);
    assert_eq!(JUST_CHROMATIC[0], ROOT);
    assert_eq!(JUST_CHROMATIC[7], FIFTH);
}

#[test]
fn chromatic_tables_ascend_within_one_octave() {
    for tuning in [Tuning::Just, Tuning::Pythagorean] {
        let table = tuning.chromatic();
        for pair in table.windows(2) {
            assert!(pair[1] > pair[0], "{tuning:?} not ascending: {pair:?}");
        }
        assert!(table[11] < 2.0);
        assert_eq!(tuning.step(12), 2.0);
        assert_eq!(tuning.step(0), 1.0);
    }
}

#[test]
fn note_in_scale_doubles_exactly_each_octave() {
    for chord in default_progression() {
        let len = chord.len();
        assert_eq!(note_in_scale(&chord, len), 2.0 * note_in_scale(&chord, 0));
        for i in 0..3 * len {
            assert_eq!(note_in_scale(&chord, i + len), 2.0 * note_in_scale(&chord, i));
        }
    }
}

#[test]
fn note_in_scale_walks_chord_then_stacks() {
    let chord = major7();
    assert_eq!(note_in_scale(&chord, 0), ROOT);
    assert_eq!(note_in_scale(&chord, 1), MAJOR_3RD);
    assert_eq!(note_in_scale(&chord, 3), MAJOR_7TH);
    assert_eq!(note_in_scale(&chord, 5), MAJOR_3RD * 2.0);
    assert_eq!(note_in_scale(&chord, 9), MAJOR_3RD * 4.0);
}

#[test]
fn chords_differ_in_length() {
    let lens: Vec<usize> = default_progression().iter().map(|c| c.len()).collect();
    assert_eq!(lens.len(), 8);
    assert!(lens.contains(&3) && lens.contains(&4));
}

#[test]
fn current_chord_uses_shared_time_over_duration() {
    let progression = default_progression();
    let sel = current_chord(&progression, 25.0, 10.0, None);
    assert_eq!(sel.index, 2);
    assert_eq!(sel.fraction, 0.25);
    assert_eq!(sel.chord, &progression[2]);

    assert_eq!(current_chord(&progression, 0.0, 10.0, None).index, 0);
    assert_eq!(current_chord(&progression, 79.9, 10.0, None).index, 7);
    assert_eq!(current_chord(&progression, 80.0, 10.0, None).index, 0);
}

#[test]
fn current_chord_respects_max_chords() {
    let progression = default_progression();
    assert_eq!(current_chord(&progression, 25.0, 10.0, Some(2)).index, 0);
    assert_eq!(current_chord(&progression, 35.0, 10.0, Some(3)).index, 0);
    assert_eq!(current_chord(&progression, 45.0, 10.0, Some(3)).index, 1);
    // caps larger than the progression change nothing
    assert_eq!(current_chord(&progression, 25.0, 10.0, Some(100)).index, 2);
    // zero still selects a chord
    assert_eq!(current_chord(&progression, 25.0, 10.0, Some(0)).index, 0);
}

#[test]
fn transposition_meets_table_values_at_step_boundaries() {
    let at_step = transposition(Tuning::Just, 0.0, 20.0, 13);
    assert_eq!(at_step.multiplier, 1.0);
    assert_eq!(at_step.level, 1.0);

    let mid = transposition(Tuning::Just, 10.0, 20.0, 13);
    assert!((mid.multiplier - (1.0 + MINOR_2ND) / 2.0).abs() < 1e-12);
    assert!(mid.level < 1e-12);

    let next = transposition(Tuning::Just, 20.0, 20.0, 13);
    assert!((next.multiplier - MINOR_2ND).abs() < 1e-12);
}

#[test]
fn transposition_curve_is_flat_mid_step() {
    // A quarter of the way through a step the odd power has already flattened
    // the curve onto the midpoint of the two ratios
    let quarter = transposition(Tuning::Just, 5.0, 20.0, 13);
    let progress = normalize(quarter.multiplier, 1.0, MINOR_2ND);
    assert!((progress - 0.5).abs() < 1e-3, "progress {progress}");
    assert!(quarter.level < 1e-3);

    // and it only sweeps in the last sliver of the step
    let late = transposition(Tuning::Just, 19.9, 20.0, 13);
    assert!(normalize(late.multiplier, 1.0, MINOR_2ND) > 0.9);
}

#[test]
fn transposition_last_step_rises_to_octave() {
    let t = transposition(Tuning::Pythagorean, 11.5 * 20.0, 20.0, 13);
    assert!((t.multiplier - (243.0 / 128.0 + 2.0) / 2.0).abs() < 1e-12);
    let wrapped = transposition(Tuning::Pythagorean, 12.0 * 20.0, 20.0, 13);
    assert_eq!(wrapped.multiplier, 1.0);
}

#[test]
fn transposition_stays_within_one_octave() {
    for i in 0..2000 {
        let t = transposition(Tuning::Just, i as f64 * 0.37, 20.0, 13);
        assert!(t.multiplier >= 1.0 && t.multiplier <= 2.0);
        assert!((0.0..=1.0).contains(&t.level));
    }
}
