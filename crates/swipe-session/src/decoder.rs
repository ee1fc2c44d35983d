//! Gesture decoder: tracks every dictionary prefix the pointer path could be
//! spelling and ranks the complete words when the gesture ends.

use std::collections::HashSet;
use std::sync::Arc;

use swipe_core::{Keyboard, NodeId, Trie};
use tracing::{debug, debug_span, trace};

use crate::types::{DecodeOutcome, Point, ScoredWord};

/// Distance of a match whose key never had the pointer dwell on it.
const UNREFINED: f32 = f32::MAX;

/// A live candidate prefix.
#[derive(Debug, Clone)]
struct Match {
    node: NodeId,
    word: String,
    /// Value of the key counter when the last letter was consumed.
    key_index: usize,
    hits: usize,
    starting_score: f32,
    /// Closest the pointer came to the last key's centre while on that key.
    distance: f32,
}

impl Match {
    fn score(&self) -> f32 {
        self.starting_score + 100.0 / (self.distance + 50.0)
    }
}

/// State of one gesture, from pointer down to pointer up.
struct Gesture {
    /// Snapshots taken at pointer down; a reload or resize mid-gesture does
    /// not affect the gesture in progress.
    trie: Arc<Trie>,
    keyboard: Arc<Keyboard>,
    pt: Point,
    prev_pt: Point,
    prev_key: Option<usize>,
    key_counter: usize,
    /// Insertion order matters: see `refine`.
    matches: Vec<Match>,
    admitted: HashSet<String>,
}

impl Gesture {
    fn key_advance(&mut self, ch: char, idx: usize) {
        let _span = debug_span!("key_advance", %ch, idx).entered();
        if self.matches.is_empty() {
            self.extend(None, ch, idx);
            return;
        }
        let reach = self.keyboard.longest_key_span();
        let len = self.matches.len();
        for i in (0..len).rev() {
            if idx - self.matches[i].key_index > reach {
                break;
            }
            self.extend(Some(i), ch, idx);
        }
        trace!(live = self.matches.len(), "frontier advanced");
    }

    /// Append every prefix reachable from `parent` by one or more `ch` edges.
    /// Following repeated letters lets a single pass over a key spell a double
    /// letter.
    fn extend(&mut self, parent: Option<usize>, ch: char, idx: usize) {
        let (mut current, mut prefix, hits, starting_score) = match parent {
            Some(i) => {
                let m = &self.matches[i];
                (m.node, m.word.clone(), m.hits + 1, m.score())
            }
            None => (self.trie.root(), String::new(), 1, 0.0),
        };
        while let Some(next) = self.trie.child(current, ch) {
            prefix.push(ch);
            if !self.admitted.contains(&prefix) {
                self.admitted.insert(prefix.clone());
                self.matches.push(Match {
                    node: next,
                    word: prefix.clone(),
                    key_index: idx,
                    hits,
                    starting_score,
                    distance: UNREFINED,
                });
            }
            current = next;
        }
    }

    /// Lower the distance of the matches created for key `idx`.
    ///
    /// Matches are appended in creation order and children of more recent
    /// parents come later, so everything made for the current key sits at the
    /// tail with the same distance. Scan newest-first and stop at the first
    /// match that is not improved.
    fn refine(&mut self, d: f32, idx: usize) {
        for m in self.matches.iter_mut().rev() {
            if m.key_index != idx || m.distance <= d {
                break;
            }
            m.distance = d;
        }
    }
}

/// Per-session decoder. Holds at most one gesture at a time.
pub struct Decoder {
    max_candidates: usize,
    gesture: Option<Gesture>,
}

impl Decoder {
    pub fn new(max_candidates: usize) -> Self {
        Self {
            max_candidates: max_candidates.max(1),
            gesture: None,
        }
    }

    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    pub fn set_max_candidates(&mut self, n: usize) {
        self.max_candidates = n.max(1);
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Number of live candidate prefixes in the current gesture.
    pub fn live_matches(&self) -> usize {
        self.gesture.as_ref().map_or(0, |g| g.matches.len())
    }

    /// Keys crossed so far in the current gesture.
    pub fn key_count(&self) -> usize {
        self.gesture.as_ref().map_or(0, |g| g.key_counter)
    }

    /// Start a gesture at `(x, y)`. Any unfinished gesture is dropped.
    pub fn init_swipe(&mut self, trie: Arc<Trie>, keyboard: Arc<Keyboard>, x: f32, y: f32) {
        let pt = Point::new(x, y);
        debug!(x, y, words = trie.word_count(), "swipe started");
        self.gesture = Some(Gesture {
            trie,
            keyboard,
            pt,
            prev_pt: pt,
            prev_key: None,
            key_counter: 0,
            matches: Vec::new(),
            admitted: HashSet::new(),
        });
    }

    /// Feed one pointer sample. Returns the trail segment `(prev, current)`,
    /// or `None` when no gesture is in progress.
    pub fn swipe_changed(&mut self, x: f32, y: f32) -> Option<(Point, Point)> {
        let g = self.gesture.as_mut()?;
        g.prev_pt = g.pt;
        g.pt = Point::new(x, y);

        let hit = g
            .keyboard
            .key_at(x, y)
            .map(|k| (k.index(), k.ch(), g.keyboard.distance_from_center(k, x, y)));
        if let Some((key, ch, d)) = hit {
            if g.prev_key != Some(key) {
                g.key_counter += 1;
                let idx = g.key_counter;
                g.key_advance(ch, idx);
                g.prev_key = Some(key);
            } else {
                let idx = g.key_counter;
                g.refine(d, idx);
            }
        }
        Some((g.prev_pt, g.pt))
    }

    /// Finish the gesture and rank its complete words.
    pub fn end_swipe(&mut self) -> DecodeOutcome {
        let Some(g) = self.gesture.take() else {
            return DecodeOutcome::NoMatches;
        };
        let _span = debug_span!("end_swipe", keys = g.key_counter).entered();

        let mut ranked: Vec<ScoredWord> = g
            .matches
            .iter()
            .filter(|m| g.trie.is_terminal(m.node))
            .map(|m| ScoredWord {
                word: m.word.clone(),
                score: m.score(),
                keys: m.hits,
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(self.max_candidates);

        debug!(
            live = g.matches.len(),
            candidates = ranked.len(),
            "swipe ended"
        );
        if ranked.is_empty() {
            DecodeOutcome::NoMatches
        } else {
            DecodeOutcome::Matches(ranked)
        }
    }

    /// Drop the current gesture without producing a result.
    pub fn cancel(&mut self) {
        self.gesture = None;
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_MAX_CANDIDATES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_at(key_index: usize, distance: f32) -> Match {
        Match {
            node: NodeId::ROOT,
            word: String::new(),
            key_index,
            hits: 1,
            starting_score: 0.0,
            distance,
        }
    }

    #[test]
    fn test_score_formula() {
        let mut m = match_at(1, 0.0);
        assert_eq!(m.score(), 2.0);
        m.distance = 50.0;
        assert_eq!(m.score(), 1.0);
        m.starting_score = 3.0;
        assert_eq!(m.score(), 4.0);
    }

    #[test]
    fn test_unrefined_score_is_finite_and_tiny() {
        let m = match_at(1, UNREFINED);
        assert!(m.score().is_finite());
        assert!(m.score() < 1e-30);
    }

    #[test]
    fn test_refine_stops_at_older_key() {
        let kb = Keyboard::qwerty(swipe_core::Rect::sized(100.0, 30.0)).unwrap();
        let mut g = Gesture {
            trie: Arc::new(Trie::new()),
            keyboard: Arc::new(kb),
            pt: Point::default(),
            prev_pt: Point::default(),
            prev_key: None,
            key_counter: 2,
            matches: vec![match_at(1, UNREFINED), match_at(2, UNREFINED), match_at(2, UNREFINED)],
            admitted: HashSet::new(),
        };
        g.refine(10.0, 2);
        let d: Vec<f32> = g.matches.iter().map(|m| m.distance).collect();
        assert_eq!(d, vec![UNREFINED, 10.0, 10.0]);

        // farther sample: no change
        g.refine(20.0, 2);
        assert_eq!(g.matches[2].distance, 10.0);

        g.refine(5.0, 2);
        assert_eq!(g.matches[1].distance, 5.0);
        assert_eq!(g.matches[0].distance, UNREFINED);
    }
}
