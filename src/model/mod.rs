//! Aggregation model: reduce parsed log series to run statistics.

use crate::error::{Result, StatsError};
use crate::log::{RecordSeries, parse_log_file};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Mean tracking-quality rates in percent.
///
/// `Pred. suc. rate = Geo. valid / patchMatchPredict Num`,
/// `feature track rate = Geo. valid / RefKey Num`.
/// Frames with a zero denominator are left out of the corresponding mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityStats {
    pub mean_pred_success_rate: Option<f64>,
    pub mean_track_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub frame_count: usize,
    pub runtime: f64,
    pub fps: f64,
    pub mean_lost_feats: f64,
    pub lost_feats: Vec<f64>,
    pub quality: QualityStats,
}

/// Read one tracker log and summarize it.
pub fn process_file(path: &Path) -> Result<RunSummary> {
    let series = parse_log_file(path)?;
    let summary = summarize(&series)?;
    debug!(
        path = %path.display(),
        frames = summary.frame_count,
        runtime = summary.runtime,
        "summarized tracker log"
    );
    Ok(summary)
}

/// Compute run statistics. Needs at least one record and a non-zero
/// time span between the first and last record.
pub fn summarize(series: &RecordSeries) -> Result<RunSummary> {
    let frame_count = series.len();
    let times = series.times();

    let (Some(first), Some(last)) = (times.first(), times.last()) else {
        return Err(StatsError::InsufficientData {
            frames: 0,
            reason: "no records parsed",
        });
    };

    let runtime = last - first;
    if runtime == 0.0 {
        return Err(StatsError::InsufficientData {
            frames: frame_count,
            reason: "first and last timestamps are equal, fps is undefined",
        });
    }

    let fps = frame_count as f64 / runtime;
    let lost_feats = series.lost_feats().to_vec();
    let mean_lost_feats = lost_feats.iter().sum::<f64>() / frame_count as f64;

    Ok(RunSummary {
        frame_count,
        runtime,
        fps,
        mean_lost_feats,
        lost_feats,
        quality: quality_stats(series),
    })
}

fn quality_stats(series: &RecordSeries) -> QualityStats {
    QualityStats {
        mean_pred_success_rate: mean_ratio(series.geo_valid(), series.patch_match_predict_num()),
        mean_track_rate: mean_ratio(series.geo_valid(), series.ref_key_num()),
    }
}

/// Mean of `100 * num[i] / den[i]` over entries with a non-zero denominator.
fn mean_ratio(num: &[f64], den: &[f64]) -> Option<f64> {
    let (sum, n) = num
        .iter()
        .zip(den)
        .filter(|&(_, d)| *d != 0.0)
        .fold((0.0_f64, 0usize), |(s, n), (x, d)| (s + 100.0 * *x / *d, n + 1));

    (n > 0).then(|| sum / n as f64)
}
