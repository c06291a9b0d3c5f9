//! Aggregate agent performance over many games.

use crate::common::BoardError;

/// Summary of shot counts over a batch of games.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scorecard {
    pub games: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
}

impl Scorecard {
    /// Summarize a non-empty list of scores.
    pub fn from_scores(scores: &[usize]) -> Result<Self, BoardError> {
        let (&first, rest) = scores.split_first().ok_or(BoardError::NoGames)?;
        let (mut min, mut max, mut sum) = (first, first, first as f64);
        for &s in rest {
            min = min.min(s);
            max = max.max(s);
            sum += s as f64;
        }
        let n = scores.len() as f64;
        let mean = sum / n;
        let variance = scores
            .iter()
            .map(|&s| {
                let d = s as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        Ok(Scorecard {
            games: scores.len(),
            mean,
            std_dev: libm::sqrt(variance),
            min,
            max,
        })
    }
}

/// Run `play` once per game and summarize the returned scores.
pub fn benchmark<F>(games: usize, mut play: F) -> Result<Scorecard, BoardError>
where
    F: FnMut(usize) -> Result<usize, BoardError>,
{
    if games == 0 {
        return Err(BoardError::NoGames);
    }
    let mut scores = alloc::vec::Vec::with_capacity(games);
    for game in 0..games {
        scores.push(play(game)?);
    }
    Scorecard::from_scores(&scores)
}
