use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use swipe_core::settings::Settings;
use swipe_core::Keyboard;
use swipe_session::{DecodeOutcome, Point, SwipeSession};

use super::{build_keyboard, load_dictionary, CliError};

#[derive(Debug, Clone, Copy)]
pub struct ReplayOptions {
    pub width: f32,
    pub glyph_height: f32,
    /// Interpolated samples per leg between key centres; 0 jumps centre to centre.
    pub steps: usize,
    /// Sample each key centre twice so the decoder sees the pointer settle.
    pub dwell: bool,
    pub max_candidates: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CandidateReport {
    pub word: String,
    pub score: f32,
    pub keys: usize,
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub letters: String,
    pub samples: usize,
    pub candidates: Vec<CandidateReport>,
}

/// Pointer samples that trace `letters` across `kb`.
pub fn synthesize(
    kb: &Keyboard,
    letters: &str,
    steps: usize,
    dwell: bool,
) -> Result<Vec<Point>, CliError> {
    let centres = letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            let (x, y) = kb.find_key(c).ok_or(CliError::NoKey(c))?.center();
            Ok(Point::new(x, y))
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    let mut out = Vec::new();
    for (i, &c) in centres.iter().enumerate() {
        out.push(c);
        if dwell {
            out.push(c);
        }
        if let Some(&next) = centres.get(i + 1) {
            for s in 1..=steps {
                let t = s as f32 / (steps + 1) as f32;
                out.push(Point::new(c.x + (next.x - c.x) * t, c.y + (next.y - c.y) * t));
            }
        }
    }
    Ok(out)
}

pub fn replay_report(
    settings: &Settings,
    dict_file: &Path,
    letters: &str,
    opts: &ReplayOptions,
) -> Result<ReplayReport, CliError> {
    let (dict, _) = load_dictionary(dict_file)?;
    let kb = build_keyboard(settings, opts.width, opts.glyph_height)?;
    let points = synthesize(&kb, letters, opts.steps, opts.dwell)?;

    let mut session = SwipeSession::new(Arc::new(dict), kb);
    session.set_max_candidates(opts.max_candidates.unwrap_or(settings.decoder.max_candidates));
    let candidates = match session.swipe_path(&points) {
        DecodeOutcome::Matches(ranked) => ranked
            .into_iter()
            .map(|w| CandidateReport {
                word: w.word,
                score: w.score,
                keys: w.keys,
            })
            .collect(),
        DecodeOutcome::NoMatches => Vec::new(),
    };
    Ok(ReplayReport {
        letters: letters.to_string(),
        samples: points.len(),
        candidates,
    })
}

pub fn replay(
    settings: &Settings,
    dict_file: &Path,
    letters: &str,
    opts: &ReplayOptions,
    json: bool,
) -> Result<(), CliError> {
    let report = replay_report(settings, dict_file, letters, opts)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("Gesture: {} ({} samples)", report.letters, report.samples);
    if report.candidates.is_empty() {
        println!("  (no matches)");
    }
    for (i, c) in report.candidates.iter().enumerate() {
        println!("  {:>2}. {:<16} score={:.3} keys={}", i + 1, c.word, c.score, c.keys);
    }
    Ok(())
}
