//! Built-in content: the default career path catalog and the fixed questionnaire.

use serde::Serialize;

use crate::domain::CareerPathEntry;

/// Default catalog so the service resolves every path without external config.
pub fn seed_catalog() -> Vec<CareerPathEntry> {
  [
    ("path-fullstack", "Full Stack Web Developer", "fullstack"),
    ("path-datascience", "Data Science & Analytics", "datascience"),
    ("path-cloud", "Cloud Engineer", "cloud"),
    ("path-mobile", "Mobile App Developer", "mobile"),
    ("path-security", "Cybersecurity Specialist", "security"),
  ]
  .into_iter()
  .map(|(id, name, slug)| CareerPathEntry { id: id.into(), name: name.into(), slug: Some(slug.into()) })
  .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
  /// Answer is a digit "1".."5".
  Likert,
  /// Answer is one of `options`, verbatim.
  Choice,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireItem {
  pub id: i64,
  pub prompt: &'static str,
  pub kind: QuestionKind,
  pub options: Vec<&'static str>,
}

const LIKERT: [&str; 5] = ["1", "2", "3", "4", "5"];

/// The five-item interest questionnaire. Option wording matches the affinity rules.
pub fn questionnaire() -> Vec<QuestionnaireItem> {
  vec![
    QuestionnaireItem {
      id: 1,
      prompt: "I enjoy designing visual interfaces and user experiences.",
      kind: QuestionKind::Likert,
      options: LIKERT.to_vec(),
    },
    QuestionnaireItem {
      id: 2,
      prompt: "Which side of development do you prefer?",
      kind: QuestionKind::Choice,
      options: vec!["Backend (servers, APIs, databases)", "Frontend (user interfaces)", "Both equally"],
    },
    QuestionnaireItem {
      id: 3,
      prompt: "I am comfortable with math and statistics.",
      kind: QuestionKind::Likert,
      options: LIKERT.to_vec(),
    },
    QuestionnaireItem {
      id: 4,
      prompt: "Which area interests you most?",
      kind: QuestionKind::Choice,
      options: vec![
        "Building web applications",
        "Working with data and analytics",
        "Running systems in the cloud",
        "Building mobile apps",
        "Protecting systems (security)",
      ],
    },
    QuestionnaireItem {
      id: 5,
      prompt: "I enjoy solving complex logical problems.",
      kind: QuestionKind::Likert,
      options: LIKERT.to_vec(),
    },
  ]
}
