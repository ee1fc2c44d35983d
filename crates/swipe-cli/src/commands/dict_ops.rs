use std::path::Path;

use serde::Serialize;

use super::{load_dictionary, CliError};

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    /// A complete word.
    Word,
    /// Only a prefix of longer words.
    Prefix,
    Absent,
}

#[derive(Debug, Serialize)]
pub struct LookupReport {
    pub query: String,
    pub status: LookupStatus,
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub words: usize,
    pub nodes: usize,
    pub load_ms: f64,
}

pub fn lookup_report(dict_file: &Path, query: &str) -> Result<LookupReport, CliError> {
    let (dict, _) = load_dictionary(dict_file)?;
    let trie = dict.snapshot();
    let status = match trie.walk(query) {
        Some(node) if node != trie.root() && trie.is_terminal(node) => LookupStatus::Word,
        Some(node) if node != trie.root() => LookupStatus::Prefix,
        _ => LookupStatus::Absent,
    };
    Ok(LookupReport {
        query: query.to_string(),
        status,
    })
}

pub fn stats_report(dict_file: &Path) -> Result<StatsReport, CliError> {
    let (_, stats) = load_dictionary(dict_file)?;
    Ok(StatsReport {
        words: stats.words,
        nodes: stats.nodes,
        load_ms: stats.elapsed.as_secs_f64() * 1000.0,
    })
}

pub fn lookup(dict_file: &Path, query: &str, json: bool) -> Result<(), CliError> {
    let report = lookup_report(dict_file, query)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    let status = match report.status {
        LookupStatus::Word => "word",
        LookupStatus::Prefix => "prefix only",
        LookupStatus::Absent => "not found",
    };
    println!("{}: {status}", report.query);
    Ok(())
}

pub fn stats(dict_file: &Path, json: bool) -> Result<(), CliError> {
    let report = stats_report(dict_file)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Words: {}", report.words);
        println!("Nodes: {}", report.nodes);
        println!("Load:  {:.1} ms", report.load_ms);
    }
    Ok(())
}
