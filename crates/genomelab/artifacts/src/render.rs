//! HTML rendering for candidates and the per-job index page.

use genomelab_types::{DesignCandidate, ResearchResult};

/// Render one candidate as a standalone HTML demo page.
///
/// Pure function of the candidate; every interpolated value is escaped.
pub fn render_html(candidate: &DesignCandidate) -> String {
    let spec = &candidate.spec;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\" />\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&candidate.name)));
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    html.push_str("<style>\n");
    html.push_str("body { font-family: system-ui, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }\n");
    html.push_str(".shell { max-width: 480px; margin: 0 auto; padding: 24px; }\n");
    html.push_str(".card { background: white; border-radius: 16px; padding: 24px; box-shadow: 0 10px 30px rgba(0,0,0,0.12); }\n");
    html.push_str(".tag { display: inline-block; padding: 2px 8px; border-radius: 999px; font-size: 11px; background: #eef; margin-right: 4px; }\n");
    html.push_str(".meta { font-size: 12px; color: #555; margin-top: 8px; }\n");
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<div class=\"shell\"><div class=\"card\">\n");

    html.push_str(&format!("<h1>{}</h1>\n", escape(&candidate.name)));
    html.push_str(&format!("<p>{}</p>\n", escape(&candidate.summary)));

    html.push_str("<div class=\"meta\">\n");
    html.push_str(&format!(
        "<span class=\"tag\">Layout: {}</span>\n",
        escape(&spec.layout_pattern)
    ));
    html.push_str(&format!(
        "<span class=\"tag\">Nav: {}</span>\n",
        escape(&spec.navigation_pattern)
    ));
    html.push_str(&format!(
        "<span class=\"tag\">Palette: {}</span>\n",
        escape(&spec.color_palette)
    ));
    html.push_str(&format!(
        "<span class=\"tag\">Type: {}</span>\n",
        escape(&spec.typography_scale)
    ));
    html.push_str(&format!(
        "<span class=\"tag\">Style: {}</span>\n",
        escape(&spec.component_library_style)
    ));
    html.push_str("</div>\n");

    if !spec.interaction_notes.trim().is_empty() {
        html.push_str("<h2>Interaction notes</h2>\n");
        html.push_str(&format!("<p>{}</p>\n", escape(&spec.interaction_notes)));
    }
    if !spec.accessibility_notes.trim().is_empty() {
        html.push_str("<h2>Accessibility notes</h2>\n");
        html.push_str(&format!("<p>{}</p>\n", escape(&spec.accessibility_notes)));
    }

    if let Some(scores) = &candidate.scores {
        if let Some(rationale) = &scores.rationale {
            html.push_str("<h2>Model evaluation</h2>\n");
            html.push_str(&format!("<p>{}</p>\n", escape(rationale)));
        }
        html.push_str("<h2>Scores</h2>\n<ul>\n");
        html.push_str(&format!("<li>Usability: {:.1}</li>\n", scores.usability));
        html.push_str(&format!(
            "<li>Accessibility: {:.1}</li>\n",
            scores.accessibility
        ));
        html.push_str(&format!(
            "<li>Visual clarity: {:.1}</li>\n",
            scores.visual_clarity
        ));
        html.push_str(&format!(
            "<li>Implementation complexity: {:.1}</li>\n",
            scores.implementation_complexity
        ));
        html.push_str(&format!(
            "<li>Overall fitness: {:.2}</li>\n",
            scores.overall_fitness
        ));
        html.push_str("</ul>\n");
    }

    html.push_str("</div></div>\n</body>\n</html>\n");
    html
}

/// Render the per-job index page: every candidate in a table, best fitness
/// first, each row linking to that candidate's demo file.
pub fn render_index(result: &ResearchResult) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\" />\n");
    html.push_str("<title>GenomeLab – Results</title>\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    html.push_str("<style>\n");
    html.push_str("body { font-family: system-ui, sans-serif; background: #f2f2f2; padding: 24px; }\n");
    html.push_str("table { border-collapse: collapse; width: 100%; background: white; border-radius: 12px; overflow: hidden; }\n");
    html.push_str("th, td { padding: 8px 12px; border-bottom: 1px solid #eee; font-size: 13px; }\n");
    html.push_str("th { background: #fafafa; text-align: left; }\n");
    html.push_str("tr:hover { background: #f9f9ff; }\n");
    html.push_str(".badge { display: inline-block; padding: 2px 8px; border-radius: 999px; font-size: 11px; background: #eef; }\n");
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&format!(
        "<h1>Job {} – Design Genome Results</h1>\n",
        escape(result.job_id.as_str())
    ));
    html.push_str(
        "<p>Each row links to an individual HTML demo. Scores approximate UX quality \
         (higher is better, except complexity).</p>\n",
    );

    html.push_str("<table><thead><tr>\n");
    html.push_str("<th>ID</th><th>Name</th><th>Layout</th><th>Nav</th><th>Palette</th><th>Style</th>\n");
    html.push_str("<th>Usability</th><th>Access.</th><th>Visual</th><th>Complexity</th><th>Fitness</th>\n");
    html.push_str("</tr></thead><tbody>\n");

    let mut ranked: Vec<_> = result.all_candidates.iter().collect();
    ranked.sort_by(|a, b| {
        let fa = a.fitness().unwrap_or(f64::NEG_INFINITY);
        let fb = b.fitness().unwrap_or(f64::NEG_INFINITY);
        fb.partial_cmp(&fa).unwrap_or(std::cmp::Ordering::Equal)
    });

    for candidate in ranked {
        let spec = &candidate.spec;
        let file_name = format!("{}.html", candidate.id);
        html.push_str("<tr>\n");
        html.push_str(&format!(
            "<td><a href=\"{}\">{}</a></td>\n",
            escape(&file_name),
            escape(candidate.id.as_str())
        ));
        html.push_str(&format!("<td>{}</td>\n", escape(&candidate.name)));
        html.push_str(&format!("<td>{}</td>\n", escape(&spec.layout_pattern)));
        html.push_str(&format!("<td>{}</td>\n", escape(&spec.navigation_pattern)));
        html.push_str(&format!("<td>{}</td>\n", escape(&spec.color_palette)));
        html.push_str(&format!(
            "<td>{}</td>\n",
            escape(&spec.component_library_style)
        ));
        match &candidate.scores {
            Some(scores) => {
                html.push_str(&format!("<td>{:.1}</td>\n", scores.usability));
                html.push_str(&format!("<td>{:.1}</td>\n", scores.accessibility));
                html.push_str(&format!("<td>{:.1}</td>\n", scores.visual_clarity));
                html.push_str(&format!(
                    "<td>{:.1}</td>\n",
                    scores.implementation_complexity
                ));
                html.push_str(&format!(
                    "<td><span class=\"badge\">{:.2}</span></td>\n",
                    scores.overall_fitness
                ));
            }
            None => html.push_str("<td>-</td><td>-</td><td>-</td><td>-</td><td>-</td>\n"),
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody></table>\n</body>\n</html>\n");
    html
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
