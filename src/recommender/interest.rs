//! Interest questionnaire → category affinity mapping.
//!
//! The questionnaire is a fixed five-item form. Each question id owns an
//! ordered list of rules; the first rule whose pattern matches the response
//! applies its deltas and the rest are skipped. Responses matching no rule,
//! and question ids outside the table, contribute nothing.

use tracing::debug;

use crate::domain::{Category, InterestResponse};

/// How a rule tests the raw response string. Matching is case-sensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponsePattern {
  /// Response equals one of the listed values.
  OneOf(&'static [&'static str]),
  /// Response contains the fragment.
  Contains(&'static str),
}

impl ResponsePattern {
  pub fn matches(&self, response: &str) -> bool {
    match self {
      ResponsePattern::OneOf(values) => values.iter().any(|v| *v == response),
      ResponsePattern::Contains(fragment) => response.contains(fragment),
    }
  }
}

#[derive(Clone, Copy, Debug)]
pub struct InterestRule {
  pub pattern: ResponsePattern,
  pub deltas: &'static [(Category, f64)],
}

#[derive(Clone, Copy, Debug)]
pub struct QuestionRules {
  pub question_id: i64,
  pub topic: &'static str,
  pub rules: &'static [InterestRule],
}

const AGREE: ResponsePattern = ResponsePattern::OneOf(&["5", "4"]);

use Category::*;

pub const INTEREST_RULES: &[QuestionRules] = &[
  QuestionRules {
    question_id: 1,
    topic: "visual design",
    rules: &[InterestRule { pattern: AGREE, deltas: &[(Frontend, 2.0), (Mobile, 1.0)] }],
  },
  QuestionRules {
    question_id: 2,
    topic: "backend vs frontend",
    rules: &[
      InterestRule { pattern: ResponsePattern::Contains("Backend"), deltas: &[(Backend, 3.0), (Cloud, 1.0)] },
      InterestRule { pattern: ResponsePattern::Contains("Frontend"), deltas: &[(Frontend, 3.0), (Mobile, 1.0)] },
      InterestRule { pattern: ResponsePattern::Contains("Both"), deltas: &[(Frontend, 1.0), (Backend, 1.0)] },
    ],
  },
  QuestionRules {
    question_id: 3,
    topic: "math and statistics",
    rules: &[InterestRule { pattern: AGREE, deltas: &[(Data, 3.0), (Backend, 1.0)] }],
  },
  QuestionRules {
    question_id: 4,
    topic: "area of interest",
    rules: &[
      InterestRule {
        pattern: ResponsePattern::Contains("web applications"),
        deltas: &[(Frontend, 2.0), (Backend, 2.0)],
      },
      InterestRule { pattern: ResponsePattern::Contains("data"), deltas: &[(Data, 3.0)] },
      InterestRule { pattern: ResponsePattern::Contains("cloud"), deltas: &[(Cloud, 3.0)] },
      InterestRule { pattern: ResponsePattern::Contains("mobile"), deltas: &[(Mobile, 3.0)] },
      InterestRule { pattern: ResponsePattern::Contains("security"), deltas: &[(Security, 3.0)] },
    ],
  },
  QuestionRules {
    question_id: 5,
    topic: "problem solving",
    rules: &[InterestRule { pattern: AGREE, deltas: &[(Backend, 1.0), (Data, 1.0)] }],
  },
];

/// Rules for one question id, if the questionnaire defines it.
pub fn rules_for(question_id: i64) -> Option<&'static QuestionRules> {
  INTEREST_RULES.iter().find(|q| q.question_id == question_id)
}

/// First matching rule for a single response.
pub fn match_response(response: &InterestResponse) -> Option<&'static InterestRule> {
  rules_for(response.question_id)?
    .rules
    .iter()
    .find(|r| r.pattern.matches(&response.response))
}

/// Running affinity totals, one slot per category, all starting at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Affinities([f64; 6]);

impl Affinities {
  /// Accumulate every response. Repeated question ids add up.
  pub fn derive<'a, I>(responses: I) -> Self
  where
    I: IntoIterator<Item = &'a InterestResponse>,
  {
    let mut acc = Affinities::default();
    for response in responses {
      if rules_for(response.question_id).is_none() {
        debug!(target: "recommender", question_id = response.question_id, "Ignoring response to unknown questionnaire item");
        continue;
      }
      if let Some(rule) = match_response(response) {
        acc.apply(rule.deltas);
      }
    }
    acc
  }

  pub fn apply(&mut self, deltas: &[(Category, f64)]) {
    for (category, delta) in deltas {
      self.0[category.index()] += delta;
    }
  }

  pub fn get(&self, category: Category) -> f64 {
    self.0[category.index()]
  }
}
