use gcgen::gc::{self, Constraint};
use gcgen::generate::{self, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_REPAIRS};
use gcgen::seq::NUCLEOTIDES;
use gcgen::GcgenError;

use rand::rngs::StdRng;
use rand::SeedableRng;

const TIGHT_BAND: Constraint = Constraint {
    desired_gc: 50,
    tolerance: 3,
    window_size: 50,
};

const RELAXED_BAND: Constraint = Constraint {
    desired_gc: 50,
    tolerance: 5,
    window_size: 40,
};

#[test]
fn accepted_sequence_holds_the_band_in_every_window() {
    let mut rng = StdRng::seed_from_u64(321);
    let record = generate::sequence(
        120,
        &RELAXED_BAND,
        DEFAULT_MAX_ATTEMPTS,
        DEFAULT_MAX_REPAIRS,
        &mut rng,
    )
    .unwrap();

    assert_eq!(record.length, 120);
    assert_eq!(record.sequence.len(), 120);
    assert!(record.sequence.iter().all(|b| NUCLEOTIDES.contains(b)));

    // Checked directly against the meter, independently of the scanner.
    for window in record.sequence.windows(40) {
        let gc = gc::percent(window).unwrap();
        assert!((45..=55).contains(&gc), "window GC {}% outside 45-55%", gc);
    }

    assert!(record.windowed_gc_max >= record.windowed_gc_min);
    assert!(record.windowed_gc_min >= 45);
    assert!(record.windowed_gc_max <= 55);
}

#[test]
fn reported_statistics_match_a_rescan() {
    let mut rng = StdRng::seed_from_u64(321);
    let record = generate::sequence(
        120,
        &RELAXED_BAND,
        DEFAULT_MAX_ATTEMPTS,
        DEFAULT_MAX_REPAIRS,
        &mut rng,
    )
    .unwrap();

    assert_eq!(
        gc::percent(&record.sequence).unwrap(),
        record.overall_gc_percent
    );
    assert_eq!(
        gc::windowed_range(&record.sequence, 40).unwrap(),
        (record.windowed_gc_max, record.windowed_gc_min)
    );
}

#[test]
fn batch_with_one_seed_is_reproducible() {
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        [120usize, 80]
            .iter()
            .map(|&length| {
                generate::sequence(
                    length,
                    &RELAXED_BAND,
                    DEFAULT_MAX_ATTEMPTS,
                    DEFAULT_MAX_REPAIRS,
                    &mut rng,
                )
                .unwrap()
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(321), run(321));
}

#[test]
fn window_equal_to_length_is_a_single_window() {
    let constraint = Constraint {
        desired_gc: 50,
        tolerance: 6,
        window_size: 64,
    };
    let mut rng = StdRng::seed_from_u64(9);
    let record = generate::sequence(
        64,
        &constraint,
        DEFAULT_MAX_ATTEMPTS,
        DEFAULT_MAX_REPAIRS,
        &mut rng,
    )
    .unwrap();

    assert_eq!(record.windowed_gc_max, record.windowed_gc_min);
    assert_eq!(record.overall_gc_percent, record.windowed_gc_max);
    assert!(constraint.admits(record.overall_gc_percent));
}

#[test]
fn zero_tolerance_two_base_windows() {
    let constraint = Constraint {
        desired_gc: 50,
        tolerance: 0,
        window_size: 2,
    };
    let mut rng = StdRng::seed_from_u64(10);
    match generate::sequence(
        10,
        &constraint,
        DEFAULT_MAX_ATTEMPTS,
        DEFAULT_MAX_REPAIRS,
        &mut rng,
    ) {
        // Converged: every adjacent pair pairs one G/C with one A/T.
        Ok(record) => {
            for window in record.sequence.windows(2) {
                assert_eq!(gc::percent(window).unwrap(), 50);
            }
        }
        Err(err) => assert!(matches!(err, GcgenError::RepairLimitExceeded { .. })),
    }
}

#[test]
fn tight_band_over_wide_windows_stops_at_the_repair_cap() {
    // A ±3 band over 50-base windows admits roughly a third of candidates,
    // and every splice disturbs up to 49 validated windows to its left, so
    // the scan stalls near the start of the sequence instead of converging.
    // The repair cap turns that stall into a typed failure.
    let mut rng = StdRng::seed_from_u64(321);
    let err = generate::sequence(200, &TIGHT_BAND, DEFAULT_MAX_ATTEMPTS, 500, &mut rng)
        .unwrap_err();

    assert_eq!(
        err,
        GcgenError::RepairLimitExceeded {
            window_size: 50,
            lo: 47,
            hi: 53,
            repairs: 500,
        }
    );
    assert!(err.to_string().contains("after 500 repairs"));
}

#[test]
fn unreachable_band_fails_after_the_cap() {
    // 4-base windows only measure 0, 25, 50, 75 or 100 percent, so a band of
    // exactly 10% rejects every candidate no matter the draws.
    let constraint = Constraint {
        desired_gc: 10,
        tolerance: 0,
        window_size: 4,
    };
    let mut rng = StdRng::seed_from_u64(11);
    let err = generate::sequence(12, &constraint, 64, DEFAULT_MAX_REPAIRS, &mut rng).unwrap_err();

    assert_eq!(
        err,
        GcgenError::ConstraintUnsatisfiable {
            window_size: 4,
            lo: 10,
            hi: 10,
            attempts: 64,
        }
    );
    assert!(err.to_string().contains("after 64 attempts"));
}
