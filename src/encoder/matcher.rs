use ahash::AHashMap;

/// Best backward match found for a position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Match {
    /// Distance back from the current position (0 when no match)
    pub offset: usize,
    pub length: usize,
}

/// Search strategy over the already-encoded prefix.
///
/// Implementations must return the longest run, keeping the largest offset
/// among runs of equal length.
pub trait MatchFinder {
    /// Find the best match for `input[position..]` against `input[..position]`
    fn find(&mut self, input: &[char], position: usize) -> Match;

    /// Make `input[from..to]` available to later searches
    fn commit(&mut self, input: &[char], from: usize, to: usize);
}

/// Length of the run starting at `candidate` that matches `input[position..]`.
///
/// The run never reaches past `position` on the candidate side nor past the
/// end of input on the lookahead side.
#[inline]
fn run_length(input: &[char], candidate: usize, position: usize) -> usize {
    debug_assert!(candidate < position);
    let limit = (input.len() - position).min(position - candidate);
    input[candidate..candidate + limit]
        .iter()
        .zip(&input[position..position + limit])
        .take_while(|(a, b)| a == b)
        .count()
}

/// Scan candidates in ascending order, replacing the best only on a strictly
/// longer run.
#[inline]
fn best_of<I: Iterator<Item = usize>>(input: &[char], position: usize, candidates: I) -> Match {
    let mut best = Match::default();
    for candidate in candidates {
        // Runs from here on are capped at position - candidate
        if best.length >= position - candidate {
            break;
        }
        let length = run_length(input, candidate, position);
        if length > best.length {
            best = Match { offset: position - candidate, length };
        }
    }
    best
}

/// Tries every start index of the prefix
#[derive(Debug, Default)]
pub struct ExhaustiveMatcher;

impl MatchFinder for ExhaustiveMatcher {
    fn find(&mut self, input: &[char], position: usize) -> Match {
        best_of(input, position, 0..position)
    }

    fn commit(&mut self, _input: &[char], _from: usize, _to: usize) {}
}

/// Tries only the earlier positions holding the same symbol.
///
/// A candidate whose first symbol differs has a run of 0 and can never
/// replace the best match, so the result is identical to
/// [`ExhaustiveMatcher`].
#[derive(Debug, Default)]
pub struct IndexedMatcher {
    positions: AHashMap<char, Vec<usize>>,
}

impl IndexedMatcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchFinder for IndexedMatcher {
    fn find(&mut self, input: &[char], position: usize) -> Match {
        match self.positions.get(&input[position]) {
            Some(candidates) => best_of(input, position, candidates.iter().copied()),
            None => Match::default(),
        }
    }

    fn commit(&mut self, input: &[char], from: usize, to: usize) {
        for (pos, &symbol) in input.iter().enumerate().take(to).skip(from) {
            self.positions.entry(symbol).or_default().push(pos);
        }
    }
}
