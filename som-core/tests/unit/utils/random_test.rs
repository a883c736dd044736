use super::*;

#[test]
fn can_produce_same_sequence_with_same_seed() {
    let first = DefaultRandom::new_repeatable(42);
    let second = DefaultRandom::new_repeatable(42);

    let first = (0..100).map(|_| first.uniform_real(0., 1.)).collect::<Vec<_>>();
    let second = (0..100).map(|_| second.uniform_real(0., 1.)).collect::<Vec<_>>();

    assert_eq!(first, second);
    assert!(first.windows(2).any(|pair| pair[0] != pair[1]));
}

#[test]
fn can_keep_values_in_range() {
    let random = DefaultRandom::new_repeatable(0);

    (0..1000).for_each(|_| {
        let int_value = random.uniform_int(-2, 3);
        let real_value = random.uniform_real(0.45, 0.55);

        assert!((-2..=3).contains(&int_value));
        assert!((0.45..0.55).contains(&real_value));
    });
}

#[test]
fn can_return_bound_for_degenerated_range() {
    let random = DefaultRandom::default();

    assert_eq!(random.uniform_int(5, 5), 5);
    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
}

#[test]
fn can_sample_all_ints_uniformly() {
    let random = DefaultRandom::new_repeatable(1);
    let experiments = 10000_usize;
    let mut counter = [0_usize; 4];

    (0..experiments).for_each(|_| counter[random.uniform_int(0, 3) as usize] += 1);

    counter.iter().for_each(|&count| {
        let actual_ratio = count as f64 / experiments as f64;
        assert!((actual_ratio - 0.25).abs() < 0.05);
    });
}
