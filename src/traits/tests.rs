use std::collections::HashSet as StdHashSet;

use rand::prelude::*;

use super::Set;
use crate::hash::HashSet;

fn random_elements(rng: &mut ThreadRng, len: usize) -> Vec<u16> {
    // A small range so that duplicates and overlaps between sets are common.
    (0..len).map(|_| rng.gen_range(0..64)).collect()
}

fn distinct(items: &[u16]) -> usize {
    let mut items = items.to_vec();
    items.sort();
    items.dedup();
    items.len()
}

/// Checks every algebraic property that should hold for any two sets `a` and `b`, through the
/// trait alone.
fn check_algebra<S: Set<u16>>(a: &S, b: &S) {
    assert!(a.equals(a), "Equality should be reflexive.");
    assert_eq!(a.equals(b), b.equals(a), "Equality should be symmetric.");

    let union = a.union(b);
    assert!(union.len() <= a.len() + b.len());
    assert!(a.is_subset(&union) && b.is_subset(&union));
    assert!(union.iter().all(|i| a.contains(i) || b.contains(i)));

    let intersection = a.intersection(b);
    assert!(intersection.is_subset(a) && intersection.is_subset(b));
    assert!(a.iter().filter(|i| b.contains(i)).all(|i| intersection.contains(i)));

    let difference = a.difference(b);
    assert!(difference.iter().all(|i| a.contains(i) && !b.contains(i)));
    assert_eq!(difference.len() + intersection.len(), a.len());
    assert!(difference.is_disjoint(b));

    let symmetric = a.symmetric_difference(b);
    assert!(
        symmetric.equals(&b.symmetric_difference(a)),
        "Symmetric difference should be commutative."
    );
    assert!(
        symmetric.equals(&difference.union(&b.difference(a))),
        "Symmetric difference should equal (A \\ B) ∪ (B \\ A)."
    );
    assert_eq!(symmetric.len() + intersection.len(), union.len());
}

fn check_round_trip<S: Set<u16>>(set: &S) {
    let rebuilt = set.iter().copied().collect::<S>();
    assert!(rebuilt.equals(set), "Rebuilding a set from its iterator should give an equal set.");

    let elements = set.elements();
    assert_eq!(elements.len(), set.len());
    assert!(elements.iter().all(|i| set.contains(i)));
}

fn check_empty_identities<S: Set<u16>>() {
    let empty = S::from_iter([]);
    assert!(empty.is_empty());
    assert!(empty.union(&empty).equals(&empty));
    assert!(empty.intersection(&empty).equals(&empty));
    assert!(empty.difference(&empty).equals(&empty));
    assert!(empty.symmetric_difference(&empty).equals(&empty));
}

fn check_mutation<S: Set<u16>>(items: &[u16]) {
    let mut set = S::from_iter(items.iter().copied());
    assert_eq!(set.len(), distinct(items), "Duplicates should be collapsed.");

    let before = set.len();
    set.add(items.iter().copied());
    assert_eq!(set.len(), before, "Adding present elements should be a no-op.");

    assert_eq!(set.remove(&u16::MAX), None);
    assert_eq!(set.len(), before, "Removing an absent element should be a no-op.");

    for item in items {
        set.remove(item);
        assert!(!set.contains(item));
    }
    assert!(set.is_empty());
}

#[test]
fn test_random_algebra() {
    let mut rng = thread_rng();
    for _ in 0..200 {
        let len_a = rng.gen_range(0..40);
        let len_b = rng.gen_range(0..40);
        let a = random_elements(&mut rng, len_a);
        let b = random_elements(&mut rng, len_b);

        check_algebra(&HashSet::from_slice(&a), &HashSet::from_slice(&b));
        check_algebra(&a.iter().copied().collect::<StdHashSet<_>>(), &b.iter().copied().collect());
    }
}

#[test]
fn test_random_mutation() {
    let mut rng = thread_rng();
    for _ in 0..200 {
        let len = rng.gen_range(0..100);
        let items = random_elements(&mut rng, len);

        check_mutation::<HashSet<u16>>(&items);
        check_mutation::<StdHashSet<u16>>(&items);
        check_round_trip(&HashSet::from_slice(&items));
        check_round_trip(&items.iter().copied().collect::<StdHashSet<_>>());
    }
}

#[test]
fn test_empty_identities() {
    check_empty_identities::<HashSet<u16>>();
    check_empty_identities::<StdHashSet<u16>>();
}

#[test]
fn test_interoperability() {
    let ours = HashSet::from([1_u16, 2, 3]);
    let theirs = StdHashSet::from([3_u16, 2, 1]);

    assert!(ours.equals(&theirs), "Sets should compare equal across implementations.");
    assert!(theirs.equals(&ours), "Sets should compare equal across implementations.");

    let other = StdHashSet::from([3_u16, 4]);
    assert_eq!(ours.union(&other), HashSet::from([1, 2, 3, 4]));
    assert_eq!(ours.intersection(&other), HashSet::from([3]));
    assert_eq!(ours.difference(&other), HashSet::from([1, 2]));
    assert_eq!(ours.symmetric_difference(&other), HashSet::from([1, 2, 4]));
    assert_eq!(Set::difference(&other, &ours), StdHashSet::from([4]));
}

#[test]
fn test_lazy_views() {
    let a = HashSet::from([1_u16, 2]);
    let b = HashSet::from([2_u16, 3]);

    let mut union = a.iter_union(&b).copied().collect::<Vec<_>>();
    union.sort();
    assert_eq!(union, [1, 2, 3], "The lazy union shouldn't repeat shared elements.");

    assert_eq!(a.iter_intersection(&b).copied().collect::<Vec<_>>(), [2]);
    assert_eq!(a.iter_difference(&b).copied().collect::<Vec<_>>(), [1]);

    let mut symmetric = a.iter_symmetric_difference(&b).copied().collect::<Vec<_>>();
    symmetric.sort();
    assert_eq!(symmetric, [1, 3]);

    let mut partial = a.iter_union(&b);
    assert!(partial.next().is_some(), "Lazy views should be safe to abandon part way.");
}

#[test]
fn test_add_chains() {
    let mut set = HashSet::<u16>::new();
    set.add([1, 2]).add([2, 3]).add([]);
    assert_eq!(set, HashSet::from([1, 2, 3]));
}

fn sorted_through_trait<S: Set<u16>>(set: &S) -> Vec<u16> {
    let mut items = set.iter().copied().collect::<Vec<_>>();
    items.sort();
    items
}

#[test]
fn test_iter_through_trait() {
    let ours = HashSet::from([3_u16, 1, 2]);
    let theirs = StdHashSet::from([2_u16, 3, 1]);

    assert_eq!(sorted_through_trait(&ours), [1, 2, 3]);
    assert_eq!(sorted_through_trait(&theirs), [1, 2, 3]);
    assert!(sorted_through_trait(&HashSet::<u16>::new()).is_empty());
}
