//! CLI command implementations.

use crate::engine::{ClosureEngine, HistoryEngine, WordHistory};
use crate::types::{Direction, LexResult, Query, RankedResult};

use super::DataPaths;

/// Display sizes of the loaded graph and index.
pub fn cmd_info(paths: &DataPaths, json: bool) -> LexResult<()> {
    let graph = paths.load_graph()?;
    let index = paths.load_index()?;

    if json {
        let info = serde_json::json!({
            "synsets": paths.synsets.display().to_string(),
            "hyponyms": paths.hyponyms.display().to_string(),
            "words": paths.words.display().to_string(),
            "counts": paths.counts.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "graph_words": graph.word_count(),
            "indexed_words": index.word_count(),
            "years": index.year_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Synsets: {}", paths.synsets.display());
        println!("Hyponyms: {}", paths.hyponyms.display());
        println!("Words: {}", paths.words.display());
        println!("Counts: {}", paths.counts.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Graph words: {}", graph.word_count());
        println!("Indexed words: {}", index.word_count());
        println!("Years with totals: {}", index.year_count());
    }
    Ok(())
}

/// Print the weight history of each word, or their sum.
pub fn cmd_history(
    paths: &DataPaths,
    words: &[String],
    start_year: i32,
    end_year: i32,
    summed: bool,
    json: bool,
) -> LexResult<()> {
    let index = paths.load_index()?;

    if summed {
        let series = index.summed_weight_history(words, start_year, end_year)?;
        if json {
            println!("{}", serde_json::json!({ "words": words, "weights": series }));
        } else {
            println!("{}: {}", words.join(", "), series);
        }
        return Ok(());
    }

    let histories = HistoryEngine::new(&index).history(words, start_year, end_year)?;
    print_histories(&histories, json);
    Ok(())
}

/// Print the ranked closure of the query words.
pub fn cmd_hyponyms(paths: &DataPaths, query: &Query, json: bool) -> LexResult<()> {
    let graph = paths.load_graph()?;
    let index = paths.load_index()?;
    let result = ClosureEngine::new(&graph).execute(query, &index)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else {
        println!("{}", render_word_list(&result));
    }
    Ok(())
}

/// Print weight histories of the top-ranked closure words.
pub fn cmd_hypohist(paths: &DataPaths, query: &Query, json: bool) -> LexResult<()> {
    let graph = paths.load_graph()?;
    let index = paths.load_index()?;
    let closure = ClosureEngine::new(&graph);
    let histories = HistoryEngine::new(&index).hypohist(&closure, query)?;
    print_histories(&histories, json);
    Ok(())
}

/// Print the unranked closure of the query words. Needs no frequency data.
pub fn cmd_closure(
    paths: &DataPaths,
    words: &[String],
    direction: Direction,
    json: bool,
) -> LexResult<()> {
    let graph = paths.load_graph()?;
    let closure = ClosureEngine::new(&graph).closure(words, direction)?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "direction": direction, "words": closure })
        );
    } else {
        println!("[{}]", closure.join(", "));
    }
    Ok(())
}

/// Render ranked words as `[a, b, c]`.
pub fn render_word_list(result: &RankedResult) -> String {
    format!("[{}]", result.words().join(", "))
}

/// Render histories as `word: {year=weight, ...}` lines.
pub fn render_histories(histories: &[WordHistory]) -> String {
    let mut out = String::new();
    for h in histories {
        out.push_str(&format!("{}: {}\n", h.word, h.weights));
    }
    out
}

fn print_histories(histories: &[WordHistory], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(histories).unwrap_or_default()
        );
    } else {
        print!("{}", render_histories(histories));
    }
}
