use crate::model::RunSummary;

/// Two-line console report.
pub fn format_report(summary: &RunSummary) -> String {
    format!(
        "runtime: {:.2}, num_frames: {}, fps: {:.2}\naverage lost_feats/frame: {:.2}",
        summary.runtime, summary.frame_count, summary.fps, summary.mean_lost_feats
    )
}

/// The standard report followed by tracking-quality rates.
pub fn format_detailed_report(summary: &RunSummary) -> String {
    format!(
        "{}\nmean pred. suc. rate: {}\nmean feature track rate: {}",
        format_report(summary),
        percent(summary.quality.mean_pred_success_rate),
        percent(summary.quality.mean_track_rate)
    )
}

fn percent(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.2}%"),
        None => "n/a".to_string(),
    }
}
