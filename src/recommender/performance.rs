//! Per-category quiz performance counters.

use std::collections::BTreeMap;

use crate::domain::{Category, QuestionAttempt};

/// Raw counters for one category. Ratios are computed on demand only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
  pub correct: u64,
  pub total: u64,
}

impl Tally {
  pub fn accuracy(&self) -> f64 {
    self.correct as f64 / self.total as f64
  }
}

/// Category → counters. Only categories with at least one attempt are present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryPerformance {
  tallies: BTreeMap<Category, Tally>,
}

impl CategoryPerformance {
  /// Fold attempts into counters. Missing or unrecognized categories are skipped.
  pub fn aggregate<'a, I>(attempts: I) -> Self
  where
    I: IntoIterator<Item = &'a QuestionAttempt>,
  {
    let mut tallies = BTreeMap::<Category, Tally>::new();
    for attempt in attempts {
      let Some(category) = attempt.category.as_deref().and_then(Category::from_tag) else {
        continue;
      };
      let tally = tallies.entry(category).or_default();
      tally.total += 1;
      if attempt.is_correct {
        tally.correct += 1;
      }
    }
    Self { tallies }
  }

  pub fn get(&self, category: Category) -> Option<&Tally> {
    self.tallies.get(&category)
  }

  /// `correct / total`, or `None` when the category has no attempts.
  pub fn accuracy(&self, category: Category) -> Option<f64> {
    self.get(category).map(Tally::accuracy)
  }

  pub fn is_empty(&self) -> bool {
    self.tallies.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&Category, &Tally)> {
    self.tallies.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn attempts(rows: &[(Option<&str>, bool)]) -> Vec<QuestionAttempt> {
    rows.iter().map(|(c, ok)| QuestionAttempt::new(*c, *ok)).collect()
  }

  #[test]
  fn counts_correct_and_total_per_category() {
    let rows = attempts(&[
      (Some("frontend"), true),
      (Some("frontend"), false),
      (Some("frontend"), true),
      (Some("data"), false),
    ]);
    let perf = CategoryPerformance::aggregate(&rows);
    assert_eq!(perf.get(Category::Frontend), Some(&Tally { correct: 2, total: 3 }));
    assert_eq!(perf.get(Category::Data), Some(&Tally { correct: 0, total: 1 }));
    assert_eq!(perf.get(Category::Backend), None);
    assert!((perf.accuracy(Category::Frontend).unwrap() - 2.0 / 3.0).abs() < 1e-12);
  }

  #[test]
  fn null_and_unknown_categories_leave_counters_untouched() {
    let rows = attempts(&[(None, true), (Some("devops"), true), (Some("Backend"), false)]);
    let perf = CategoryPerformance::aggregate(&rows);
    assert!(perf.is_empty());
    assert_eq!(perf.accuracy(Category::Backend), None);
  }

  #[test]
  fn order_of_attempts_does_not_matter() {
    let mut rows = attempts(&[
      (Some("cloud"), true),
      (None, false),
      (Some("security"), false),
      (Some("cloud"), false),
      (Some("mobile"), true),
    ]);
    let forward = CategoryPerformance::aggregate(&rows);
    rows.reverse();
    assert_eq!(forward, CategoryPerformance::aggregate(&rows));
  }

  #[test]
  fn correct_never_exceeds_total() {
    let rows = attempts(&[(Some("backend"), true), (Some("backend"), true), (Some("mobile"), false)]);
    let perf = CategoryPerformance::aggregate(&rows);
    for (_, t) in perf.iter() {
      assert!(t.total > 0);
      assert!(t.correct <= t.total);
    }
  }
}
