use wav_dataset_prep::core::splitter::resolve;
use wav_dataset_prep::{
    align_pairs, build_dataset, prepare_in_memory, split, Accumulator, Channel, Pair, PrepError,
    Role, RoleRange, SampleSequence, SplitBounds,
};

fn ramp(start: f32, len: usize, rate: u32) -> SampleSequence {
    SampleSequence::new((0..len).map(|i| start + i as f32).collect(), rate)
}

fn pair(start: f32, len: usize) -> Pair {
    Pair::new(ramp(start, len, 44_100), ramp(-start, len, 44_100))
}

#[test]
fn regions_are_concatenated_in_pair_order() {
    let p1 = pair(0.0, 100);
    let p2 = pair(1000.0, 60);
    let bounds = SplitBounds::default();

    let s1 = split(&p1.input.samples, &bounds).unwrap();
    let s2 = split(&p2.input.samples, &bounds).unwrap();
    let expected_train: Vec<f32> = [s1.train, s2.train].concat();
    let expected_val: Vec<f32> = [s1.val, s2.val].concat();

    let t1 = split(&p1.target.samples, &bounds).unwrap();
    let t2 = split(&p2.target.samples, &bounds).unwrap();
    let expected_test_target: Vec<f32> = [t1.test, t2.test].concat();

    let ds = prepare_in_memory(vec![p1.clone(), p2.clone()], &bounds).unwrap();

    assert_eq!(ds.sample_rate(), 44_100);
    assert_eq!(ds.samples(Role::Train, Channel::Input), expected_train.as_slice());
    assert_eq!(ds.samples(Role::Val, Channel::Input), expected_val.as_slice());
    assert_eq!(
        ds.samples(Role::Test, Channel::Target),
        expected_test_target.as_slice()
    );
}

#[test]
fn input_and_target_stay_aligned_per_role() {
    let pairs = vec![pair(0.0, 333), pair(500.0, 1000)];
    let ds = prepare_in_memory(pairs, &SplitBounds::default()).unwrap();
    for role in Role::ALL {
        let data = ds.role(role);
        assert_eq!(data.input.len(), data.target.len(), "role {role}");
    }
}

#[test]
fn mismatched_lengths_are_aligned_before_splitting() {
    let p = Pair::new(ramp(0.0, 1000, 48_000), ramp(0.0, 900, 48_000));
    let ds = prepare_in_memory(vec![p], &SplitBounds::default()).unwrap();
    let total: usize = Role::ALL
        .iter()
        .map(|&r| ds.samples(r, Channel::Input).len())
        .sum();
    assert_eq!(total, 900);
    assert_eq!(ds.samples(Role::Train, Channel::Target).len(), 630);
}

#[test]
fn absolute_defaults_resolve_against_each_pair() {
    let bounds = SplitBounds::Absolute {
        train: RoleRange::new(Some(10), None),
        test: RoleRange::full(),
        val: RoleRange::new(Some(0), Some(5)),
    };
    let ds = prepare_in_memory(vec![pair(0.0, 50), pair(100.0, 20)], &bounds).unwrap();
    assert_eq!(ds.samples(Role::Train, Channel::Input).len(), 40 + 10);
    assert_eq!(ds.samples(Role::Test, Channel::Input).len(), 50 + 20);
    assert_eq!(ds.samples(Role::Val, Channel::Input).len(), 5 + 5);
    assert_eq!(ds.samples(Role::Train, Channel::Input)[40], 110.0);
}

#[test]
fn invalid_bounds_on_a_later_pair_abort_the_whole_run() {
    // Clamped to 20..20 on the short pair, but 30..25 on the long one.
    let bounds = SplitBounds::Absolute {
        train: RoleRange::new(Some(30), Some(25)),
        test: RoleRange::full(),
        val: RoleRange::full(),
    };
    let err = prepare_in_memory(vec![pair(0.0, 20), pair(0.0, 50)], &bounds).unwrap_err();
    assert!(matches!(err, PrepError::InvalidBounds(_)));
}

#[test]
fn accumulator_presizes_from_plan() {
    let bounds = SplitBounds::default();
    let plan = vec![
        resolve(&bounds, 1000).unwrap(),
        resolve(&bounds, 200).unwrap(),
    ];
    let acc = Accumulator::with_plan(&plan);
    assert_eq!(acc.len(Role::Train), 0);

    let a = align_pairs(vec![pair(0.0, 1000), pair(0.0, 200)]).unwrap();
    let ds = build_dataset(a, &bounds).unwrap();
    assert_eq!(ds.samples(Role::Train, Channel::Input).len(), 700 + 140);
    assert_eq!(ds.samples(Role::Test, Channel::Input).len(), 150 + 30);
}
