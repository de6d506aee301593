//! Design candidates, their specs and their score cards.

use crate::ids::CandidateId;
use serde::{Deserialize, Serialize};

/// Structured description of one UI/UX design direction.
///
/// The engine treats the fields as opaque text; only the mutation operator
/// looks at individual fields. The field set is closed and known up front,
/// so this is a plain struct rather than a dynamic map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSpec {
    #[serde(default)]
    pub layout_pattern: String,
    #[serde(default)]
    pub navigation_pattern: String,
    #[serde(default)]
    pub color_palette: String,
    #[serde(default)]
    pub typography_scale: String,
    #[serde(default)]
    pub component_library_style: String,
    #[serde(default)]
    pub interaction_notes: String,
    #[serde(default)]
    pub accessibility_notes: String,
}

impl DesignSpec {
    /// Mutable view over every text field, in declaration order.
    pub fn fields_mut(&mut self) -> [&mut String; 7] {
        [
            &mut self.layout_pattern,
            &mut self.navigation_pattern,
            &mut self.color_palette,
            &mut self.typography_scale,
            &mut self.component_library_style,
            &mut self.interaction_notes,
            &mut self.accessibility_notes,
        ]
    }
}

/// Scores the oracle assigns to a candidate. Sub-scores use a 0-10 scale;
/// `overall_fitness` is the weighted aggregate (higher is better).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub usability: f64,
    pub accessibility: f64,
    pub visual_clarity: f64,
    pub implementation_complexity: f64,
    pub overall_fitness: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

/// One member of a population.
///
/// Unscored until the oracle annotates it; immutable once scored. Mutation
/// always creates a new candidate rather than editing one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCandidate {
    pub id: CandidateId,
    pub name: String,
    pub summary: String,
    pub spec: DesignSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreCard>,
}

impl DesignCandidate {
    pub fn new(
        id: CandidateId,
        name: impl Into<String>,
        summary: impl Into<String>,
        spec: DesignSpec,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            summary: summary.into(),
            spec,
            scores: None,
        }
    }

    pub fn with_scores(mut self, scores: ScoreCard) -> Self {
        self.scores = Some(scores);
        self
    }

    /// Overall fitness, present only after the oracle has scored this
    /// candidate. Unscored candidates have no ranking.
    pub fn fitness(&self) -> Option<f64> {
        self.scores.as_ref().map(|s| s.overall_fitness)
    }

    pub fn is_scored(&self) -> bool {
        self.scores.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candidate() -> DesignCandidate {
        DesignCandidate::new(
            CandidateId::new(0, 0),
            "Concept 0",
            "baseline layout",
            DesignSpec {
                layout_pattern: "single column".into(),
                ..DesignSpec::default()
            },
        )
    }

    #[test]
    fn candidate_starts_unscored() {
        let candidate = make_candidate();
        assert!(!candidate.is_scored());
        assert_eq!(candidate.fitness(), None);
    }

    #[test]
    fn fitness_present_after_scoring() {
        let candidate = make_candidate().with_scores(ScoreCard {
            usability: 8.0,
            accessibility: 7.0,
            visual_clarity: 9.0,
            implementation_complexity: 4.0,
            overall_fitness: 5.6,
            rationale: Some("clean hierarchy".into()),
        });
        assert!(candidate.is_scored());
        assert_eq!(candidate.fitness(), Some(5.6));
    }

    #[test]
    fn spec_exposes_all_seven_fields() {
        let mut spec = DesignSpec::default();
        assert_eq!(spec.fields_mut().len(), 7);
    }

    #[test]
    fn unscored_candidate_serde_omits_scores() {
        let json = serde_json::to_string(&make_candidate()).unwrap();
        assert!(!json.contains("scores"));
        let restored: DesignCandidate = serde_json::from_str(&json).unwrap();
        assert!(!restored.is_scored());
    }
}
