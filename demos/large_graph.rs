//! Build a large taxonomy with cycles and time closure/top-K queries.

use std::time::Instant;

use lexigraph::*;

fn main() -> LexResult<()> {
    let node_count = 50_000u64;

    let start = Instant::now();
    let mut graph = SenseGraph::new();
    let mut index = FrequencyIndex::new();
    for i in 0..node_count {
        let word = format!("w{}", i);
        graph.create_node(i, [word.clone(), format!("g{}", i % 1_000)])?;
        index.record(&word, 1950 + (i % 70) as i32, (i % 997) as f64 + 1.0)?;
    }
    for i in 1..node_count {
        graph.add_edge((i - 1) / 4, i)?;
    }
    // A few back edges so the closure has to guard against cycles.
    for i in (100..node_count).step_by(5_000) {
        graph.add_edge(i, 0)?;
    }
    for year in 1950..2020 {
        index.set_total(year, 1.0e8)?;
    }
    println!(
        "Built {} nodes / {} edges in {:?}",
        graph.node_count(),
        graph.edge_count(),
        start.elapsed()
    );

    let engine = ClosureEngine::new(&graph);

    let start = Instant::now();
    let all = engine.closure(&["w1"], Direction::Descendants)?;
    println!("closure(w1): {} words in {:?}", all.len(), start.elapsed());

    let start = Instant::now();
    let shared = engine.closure(&["g1", "g2"], Direction::Ancestors)?;
    println!(
        "closure(g1, g2, ancestors): {} words in {:?}",
        shared.len(),
        start.elapsed()
    );

    let start = Instant::now();
    let top = engine.top_k(&["w0"], 1960, 1990, 10, Direction::Descendants, &index)?;
    println!("top 10 under w0: {:?} in {:?}", top, start.elapsed());

    Ok(())
}
