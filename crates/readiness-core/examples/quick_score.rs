//! Quick score example: minimal programmatic usage of readiness-core.
//!
//! ```bash
//! cargo run -p readiness-core --example quick_score
//! ```

use readiness_core::collector::{ResponseCollector, Step};
use readiness_core::model::{Catalog, Response};
use readiness_core::ScoringEngine;

fn main() -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    println!(
        "Loaded catalog: {} ({} questions)",
        catalog.title,
        catalog.total_questions()
    );

    // Score a partial response list directly.
    let responses = vec![
        Response::new("int_1", 4u32),
        Response::new("int_3", 3u32),
        Response::new("mot_2", 4u32),
        Response::new("tech_1", 2u32),
    ];
    let result = ScoringEngine::new(catalog).evaluate(&responses);
    println!(
        "Partial answers: overall {} -> {}",
        result.overall_score, result.recommendation
    );

    // Or walk the catalog with a collector, answering "Often" everywhere.
    let mut collector = ResponseCollector::new(catalog).with_respondent("example");
    loop {
        if collector.record(3u32)? == Step::Complete {
            break;
        }
    }
    if let Some(result) = collector.result() {
        for s in &result.section_scores {
            println!("  {:<12} {:>3}  {}", s.category_id, s.score, s.interpretation);
        }
        for (axis, value) in result.profile.axes() {
            println!("  {axis:<12} {value:>3}");
        }
        println!("{}", result.recommendation.headline());
        println!("{}", result.personalized_feedback);
    }

    Ok(())
}
