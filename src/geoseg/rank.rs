//! Ranking candidate points (bus stops, usually) by how close they are to an origin

use crate::geoseg::{Endpoint, ReferenceablePoint, Segment, SegmentError};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// How many ranked segments to keep, and how far out to look
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Keep at most this many segments
    pub limit: Option<usize>,
    /// Drop segments longer than this, in the point type's unit
    pub max_distance: Option<f64>,
}

impl RankConfig {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }
}

/// Build a segment from `origin` to every candidate and return them shortest first.
///
/// Candidates that can't form a segment are skipped. Ties keep the order the candidates came in.
pub fn rank_by_proximity<P, I>(origin: &P, candidates: I, config: &RankConfig) -> Result<Vec<Segment<P>>, SegmentError>
where
    P: ReferenceablePoint + Clone,
    I: IntoIterator<Item = P>,
{
    if !origin.is_referenceable() {
        return Err(SegmentError::UnreferenceablePoint(Endpoint::From));
    }

    let mut segments: Vec<Segment<P>> = candidates
        .into_iter()
        .enumerate()
        .filter_map(|(index, candidate)| match Segment::new(origin.clone(), candidate) {
            Ok(seg) => Some(seg),
            Err(e) => {
                warn!("{}", skip_message(index, &e));
                None
            }
        })
        .filter(|seg| config.max_distance.map_or(true, |max| seg.distance() <= max))
        .collect();

    sort_by_distance(&mut segments);

    if let Some(limit) = config.limit {
        segments.truncate(limit);
    }

    debug!("Ranked {} segments from {}", segments.len(), origin);
    Ok(segments)
}

fn skip_message(index: usize, err: &SegmentError) -> String {
    format!("Skipping candidate #{index}: {err}")
}

/// Stable sort, shortest segment first
pub fn sort_by_distance<P>(segments: &mut [Segment<P>]) {
    segments.sort_by(|a, b| a.compare_to(b));
}
