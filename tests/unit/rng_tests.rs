/*!
 * Tests for the injectable random source
 */

use tirgul::rng::{RandomSource, SeededSource, SystemSource};

#[test]
fn test_seededSource_withSameSeed_shouldRepeatSequence() {
    let mut a = SeededSource::new(99);
    let mut b = SeededSource::new(99);

    for _ in 0..16 {
        assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        assert_eq!(a.index(7), b.index(7));
    }
}

#[test]
fn test_seededSource_withDifferentSeeds_shouldDiverge() {
    let mut a = SeededSource::new(1);
    let mut b = SeededSource::new(2);

    let same = (0..16).all(|_| a.next_f64().to_bits() == b.next_f64().to_bits());
    assert!(!same);
}

#[test]
fn test_nextF64_shouldStayInUnitInterval() {
    let mut source = SeededSource::new(5);
    for _ in 0..100 {
        let draw = source.next_f64();
        assert!((0.0..1.0).contains(&draw));
    }
}

#[test]
fn test_index_shouldStayInBounds() {
    let mut source = SystemSource::new();
    for _ in 0..100 {
        assert!(source.index(3) < 3);
    }
}

#[test]
fn test_choose_withEmptySlice_shouldReturnNone() {
    let mut source = SeededSource::new(5);
    let rng: &mut dyn RandomSource = &mut source;
    let empty: [u8; 0] = [];
    assert!(rng.choose(&empty).is_none());
}

#[test]
fn test_shuffle_shouldPreserveElements() {
    let mut source = SeededSource::new(5);
    let rng: &mut dyn RandomSource = &mut source;

    let mut items = vec![1, 2, 3, 4, 5, 6];
    rng.shuffle(&mut items);

    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
}
