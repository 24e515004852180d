//! Basic build -> closure -> rank flow.

use lexigraph::*;

fn main() -> LexResult<()> {
    // Build a small sense graph
    let mut builder = SenseGraphBuilder::new();
    builder
        .node(1, ["animal", "beast"])
        .node(2, ["cat", "true_cat"])
        .node(3, ["dog", "domestic_dog"])
        .node(4, ["puppy"])
        .edges(1, &[2, 3])
        .edge(3, 4);
    let graph = builder.build()?;

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Record some usage counts
    let mut index = FrequencyIndex::new();
    index.record("cat", 2000, 500.0)?;
    index.record("dog", 2000, 800.0)?;
    index.record("dog", 2001, 700.0)?;
    index.record("puppy", 2001, 50.0)?;
    index.set_total(2000, 100_000.0)?;
    index.set_total(2001, 100_000.0)?;

    // Unranked closure
    let engine = ClosureEngine::new(&graph);
    let hyponyms = engine.closure(&["animal"], Direction::Descendants)?;
    println!("Hyponyms of animal: [{}]", hyponyms.join(", "));

    // Ranked closure
    let query = Query::new(["animal"]).years(2000, 2001).k(2);
    let ranked = engine.execute(&query, &index)?;
    println!("Top {} by usage:", query.k);
    for entry in &ranked.entries {
        println!("  {} ({})", entry.word, entry.score);
    }

    // Weight histories of the ranked words
    let history = HistoryEngine::new(&index);
    for h in history.history(&ranked.words(), 2000, 2001)? {
        println!("  {}: {}", h.word, h.weights);
    }

    Ok(())
}
