//! Prompt construction for the chat backend.

use genomelab_types::{DesignCandidate, ResearchConfig};

/// Builds the system and user prompts for population generation, scoring and
/// query refinement.
pub struct DesignPromptBuilder;

impl DesignPromptBuilder {
    /// System prompt for generating an initial population.
    pub fn population_system_prompt() -> String {
        let mut prompt = String::new();
        prompt.push_str("You are a UI/UX design researcher.\n");
        prompt.push_str(
            "Propose distinct, concrete design directions for the given problem statement.\n",
        );
        prompt.push_str("Respond with ONLY a JSON array; no prose around it.\n");
        prompt.push_str("Each element must have this shape:\n");
        prompt.push_str(SPEC_SHAPE_BLOCK);
        prompt
    }

    /// User prompt requesting `population_size` candidates.
    pub fn build_population_prompt(config: &ResearchConfig, population_size: usize) -> String {
        let mut prompt = String::new();
        prompt.push_str(&format!("## Problem\n{}\n\n", config.problem_statement));
        prompt.push_str(&format!(
            "Return exactly {} candidates. Make them meaningfully different from each other \
             in layout, navigation and visual treatment.\n",
            population_size
        ));
        prompt
    }

    /// System prompt for scoring a population.
    pub fn scoring_system_prompt() -> String {
        let mut prompt = String::new();
        prompt.push_str("You are a UI/UX design evaluator.\n");
        prompt.push_str(
            "Score every candidate on usability, accessibility, visual_clarity and \
             implementation_complexity, each from 0.0 to 10.0.\n",
        );
        prompt.push_str("Higher is better except implementation_complexity, where higher means more costly to build.\n");
        prompt.push_str("Respond with ONLY a JSON array; no prose around it.\n");
        prompt.push_str("Each element must have this shape:\n");
        prompt.push_str(SCORE_SHAPE_BLOCK);
        prompt
    }

    /// User prompt carrying the candidates to score.
    pub fn build_scoring_prompt(candidates: &[DesignCandidate], config: &ResearchConfig) -> String {
        let serialized =
            serde_json::to_string_pretty(candidates).unwrap_or_else(|_| "[]".to_string());

        let mut prompt = String::new();
        prompt.push_str(&format!("## Problem\n{}\n\n", config.problem_statement));
        prompt.push_str("## Candidates\n");
        prompt.push_str(&serialized);
        prompt.push_str("\n\nScore every candidate above. Cover each id exactly once.\n");
        prompt
    }

    /// Prompt asking the backend to rewrite a raw question into the clearest
    /// research prompt, given external search context.
    pub fn build_refinement_prompt(raw_question: &str, search_summary: &str) -> String {
        let mut prompt = String::new();
        prompt.push_str(
            "You are a UI/UX research assistant. Given a rough question and some web \
             search results, rewrite the question into the clearest, most effective \
             research prompt for discovering UI/UX patterns.\n\n",
        );
        prompt.push_str(&format!("Raw question:\n{}\n\n", raw_question));
        prompt.push_str("Top web results (title/url/snippet):\n");
        prompt.push_str(search_summary);
        prompt.push_str("\n\nReturn ONLY the improved question text.");
        prompt
    }
}

const SPEC_SHAPE_BLOCK: &str = "\
{
  \"name\": \"short display name\",
  \"summary\": \"one-sentence pitch\",
  \"spec\": {
    \"layout_pattern\": \"...\",
    \"navigation_pattern\": \"...\",
    \"color_palette\": \"...\",
    \"typography_scale\": \"...\",
    \"component_library_style\": \"...\",
    \"interaction_notes\": \"...\",
    \"accessibility_notes\": \"...\"
  }
}\n";

const SCORE_SHAPE_BLOCK: &str = "\
{
  \"id\": \"candidate id, copied verbatim\",
  \"usability\": 0.0,
  \"accessibility\": 0.0,
  \"visual_clarity\": 0.0,
  \"implementation_complexity\": 0.0,
  \"rationale\": \"one or two sentences\"
}\n";
