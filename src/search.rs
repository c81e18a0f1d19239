use itertools::Itertools;

use std::collections::hash_map::{self, HashMap};
use std::rc::Rc;

use crate::error::Result;
use crate::resistance::{Kind, Resistance};
use crate::value::ValueKey;
use crate::RSeries;

/// A set of resistances with distinct rounded values.
///
/// Membership is decided by [`ValueKey`] alone, so two structurally different resistances with
/// the same value are the same member. The first one inserted is kept.
#[derive(Debug, Clone, Default)]
pub struct ResistanceSet {
    members: HashMap<ValueKey, Rc<Resistance>>,
}

impl ResistanceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `r` unless a resistance of the same value is present. Returns whether it was added.
    pub fn insert(&mut self, r: Rc<Resistance>) -> bool {
        match self.members.entry(ValueKey::of(r.value())) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(e) => {
                e.insert(r);
                true
            }
        }
    }

    /// Moves every member of `other` into this set, keeping existing members on conflict.
    pub fn merge(&mut self, other: ResistanceSet) {
        for r in other.members.into_values() {
            self.insert(r);
        }
    }

    pub fn get(&self, value: f64) -> Option<&Rc<Resistance>> {
        self.members.get(&ValueKey::of(value))
    }

    pub fn contains(&self, value: f64) -> bool {
        self.members.contains_key(&ValueKey::of(value))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Resistance>> {
        self.members.values()
    }

    /// A frozen copy of the members, sorted by descending value.
    pub fn snapshot(&self) -> Vec<Rc<Resistance>> {
        self.members
            .iter()
            .sorted_by(|(a, _), (b, _)| b.cmp(a))
            .map(|(_, r)| Rc::clone(r))
            .collect()
    }
}

/// Stores the result of a ranked search.
#[derive(Debug)]
pub struct Ranking {
    target: f64,
    res: Vec<Rc<Resistance>>,
}

impl Ranking {
    pub fn target(&self) -> f64 {
        self.target
    }

    /// The closest resistance, if any were found.
    pub fn best(&self) -> Option<&Rc<Resistance>> {
        self.res.first()
    }

    /// Provides an iterator over all results, from closest to furthest from the target. Results
    /// equally close come with fewer components first.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Resistance>> {
        self.res.iter()
    }

    /// Keeps the first `limit` results, or all of them when `limit` is 0.
    pub fn truncate(&mut self, limit: usize) {
        if limit > 0 {
            self.res.truncate(limit);
        }
    }

    pub fn len(&self) -> usize {
        self.res.len()
    }

    pub fn is_empty(&self) -> bool {
        self.res.is_empty()
    }
}

/// Main search struct
#[derive(Debug)]
pub struct CombinationSearch {
    values: Vec<f64>,
    max_count: usize,
}

impl CombinationSearch {
    /// Creates a search over the raw component `values`, combining at most `max_count` components.
    /// Values are deduplicated after rounding.
    /// # Examples
    /// ```
    ///     # use resistor_finder::*;
    ///     let search = CombinationSearch::new(&[100.0, 220.0], 2);
    ///     let set = search.run().unwrap();
    ///     assert_eq!(set.len(), 8);
    ///     assert!(set.contains(68.75));
    /// ```
    pub fn new(values: &[f64], max_count: usize) -> Self {
        CombinationSearch {
            values: values
                .iter()
                .cloned()
                .unique_by(|v| ValueKey::of(*v))
                .collect(),
            max_count,
        }
    }

    /// Creates a search over every value of a standard series.
    pub fn from_series(series: &RSeries, max_count: usize) -> Self {
        Self::new(series.values(), max_count)
    }

    /// Builds every distinct resistance reachable with up to `max_count` components.
    ///
    /// Each round combines pairs from a snapshot taken before the round, so a resistance built in
    /// a round is never an operand in that same round. Runtime grows exponentially with
    /// `max_count`.
    pub fn run(&self) -> Result<ResistanceSet> {
        let mut set = ResistanceSet::new();
        if self.max_count == 0 {
            return Ok(set);
        }
        for v in &self.values {
            set.insert(Rc::new(Resistance::leaf(*v)));
        }

        for count in 2..=self.max_count {
            let snapshot = set.snapshot();
            let mut round = ResistanceSet::new();
            for (first, second) in snapshot
                .iter()
                .cartesian_product(snapshot.iter())
                .filter(|(a, b)| {
                    a.value() >= b.value() && a.component_count() + b.component_count() == count
                })
            {
                let operands = [Rc::clone(first), Rc::clone(second)];
                for kind in &[Kind::Parallel, Kind::Series] {
                    let r = Resistance::combine(*kind, &operands)?;
                    if !set.contains(r.value()) {
                        trace!("{} {} = {}", kind.rules().name, r, r.value_with_unit());
                        round.insert(Rc::new(r));
                    }
                }
            }
            debug!(
                "round {}: {} new resistances from {} operands",
                count,
                round.len(),
                snapshot.len()
            );
            set.merge(round);
        }
        info!(
            "found {} distinct resistances with up to {} components",
            set.len(),
            self.max_count
        );
        Ok(set)
    }

    /// Runs the search and orders the results by `(|value - target|, component count)`.
    /// # Examples
    /// ```
    ///     # use resistor_finder::*;
    ///     let ranking = CombinationSearch::new(&[100.0, 220.0], 2).rank(150.0).unwrap();
    ///     let best = ranking.best().unwrap();
    ///     assert_eq!(best.value(), 110.0);
    ///     assert_eq!(best.expression(), "(220||220)");
    /// ```
    pub fn rank(&self, target: f64) -> Result<Ranking> {
        let mut res: Vec<Rc<Resistance>> = self.run()?.members.into_values().collect();
        res.sort_by(|a, b| {
            a.absolute_deviation_from(target)
                .total_cmp(&b.absolute_deviation_from(target))
                .then(a.component_count().cmp(&b.component_count()))
                .then(a.value().total_cmp(&b.value()))
        });
        if let Some(best) = res.first() {
            info!(
                "closest to {}: {} ({} components)",
                target,
                best,
                best.component_count()
            );
        }
        Ok(Ranking { target, res })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(set: &ResistanceSet) -> Vec<f64> {
        set.iter()
            .map(|r| r.value())
            .sorted_by(|a, b| a.total_cmp(b))
            .collect()
    }

    #[test]
    fn empty_values_give_empty_set() {
        let set = CombinationSearch::new(&[], 4).run().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn zero_maximum_gives_empty_set() {
        let set = CombinationSearch::new(&[100.0, 220.0], 0).run().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn maximum_one_gives_leaves() {
        let set = CombinationSearch::new(&[100.0, 220.0, 100.0], 1).run().unwrap();
        assert_eq!(values(&set), vec![100.0, 220.0]);
        assert!(set.iter().all(|r| r.kind().is_none()));
    }

    #[test]
    fn two_components_from_two_values() {
        let set = CombinationSearch::new(&[100.0, 220.0], 2).run().unwrap();
        assert_eq!(
            values(&set),
            vec![50.0, 68.75, 100.0, 110.0, 200.0, 220.0, 320.0, 440.0]
        );
        assert_eq!(set.get(320.0).unwrap().expression(), "(220+100)");
        assert_eq!(set.get(110.0).unwrap().component_count(), 2);
    }

    #[test]
    fn duplicate_values_keep_the_first_structure() {
        // 100+100 and 200 share a value, the leaf is inserted first.
        let set = CombinationSearch::new(&[100.0, 200.0], 2).run().unwrap();
        let r = set.get(200.0).unwrap();
        assert_eq!(r.component_count(), 1);
        assert_eq!(r.expression(), "200");
    }

    #[test]
    fn three_components_are_flattened() {
        let set = CombinationSearch::new(&[100.0], 3).run().unwrap();
        assert_eq!(values(&set), vec![33.333, 50.0, 66.667, 100.0, 150.0, 200.0, 300.0]);
        assert_eq!(set.get(300.0).unwrap().expression(), "(100+100+100)");
        assert_eq!(set.get(33.333).unwrap().expression(), "(100||100||100)");
        assert_eq!(set.get(150.0).unwrap().expression(), "(100+(100||100))");
        assert_eq!(set.get(66.667).unwrap().expression(), "((100+100)||100)");
        for r in set.iter() {
            for child in r.children() {
                assert!(r.kind().is_some());
                assert_ne!(child.kind(), r.kind());
            }
        }
    }

    #[test]
    fn distinct_counts_over_two_decades() {
        let e3 = [1.0, 2.2, 4.7, 10.0, 22.0, 47.0];
        assert_eq!(CombinationSearch::new(&e3, 2).run().unwrap().len(), 46);
        assert_eq!(CombinationSearch::new(&e3, 3).run().unwrap().len(), 382);
        let e6 = [1.0, 1.5, 2.2, 3.3, 4.7, 6.8];
        assert_eq!(CombinationSearch::new(&e6, 3).run().unwrap().len(), 376);
    }

    #[test]
    fn parallel_tie_rounds_to_even() {
        let set = CombinationSearch::new(&[15.0, 33.0], 2).run().unwrap();
        let r = set.get(10.312).unwrap();
        assert_eq!(r.expression(), "(33||15)");
        assert_eq!(r.value_string(), "10.312");
        assert!(!set.contains(10.313));
    }

    #[test]
    fn zero_value_in_parallel_is_an_error() {
        assert!(CombinationSearch::new(&[0.0, 100.0], 2).run().is_err());
    }

    #[test]
    fn ranking_prefers_closeness_then_fewer_components() {
        let ranking = CombinationSearch::new(&[100.0, 200.0], 2).rank(150.0).unwrap();
        let order = ranking
            .iter()
            .map(|r| (r.value(), r.component_count()))
            .collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                (100.0, 1),
                (200.0, 1),
                (66.667, 2),
                (50.0, 2),
                (300.0, 2),
                (400.0, 2),
            ]
        );
    }

    #[test]
    fn truncate_zero_keeps_everything() {
        let mut ranking = CombinationSearch::new(&[100.0, 220.0], 2).rank(150.0).unwrap();
        ranking.truncate(0);
        assert_eq!(ranking.len(), 8);
        ranking.truncate(3);
        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking.target(), 150.0);
    }
}
