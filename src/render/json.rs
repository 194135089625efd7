use crate::model::RunSummary;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct RunReport<'a> {
    log: String,
    #[serde(flatten)]
    summary: &'a RunSummary,
}

/// Render one run as a pretty-printed JSON document.
pub fn render_json_report(path: &Path, summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RunReport {
        log: path.display().to_string(),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QualityStats;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_report_carries_path_and_fields() {
        let summary = RunSummary {
            frame_count: 2,
            runtime: 1.0,
            fps: 2.0,
            mean_lost_feats: 6.5,
            lost_feats: vec![10.0, 3.0],
            quality: QualityStats {
                mean_pred_success_rate: None,
                mean_track_rate: Some(98.4),
            },
        };
        let json = render_json_report(Path::new("out/track.txt"), &summary).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(v["log"], "out/track.txt");
        assert_eq!(v["frame_count"], 2);
        assert_eq!(v["fps"], 2.0);
        assert_eq!(v["lost_feats"], serde_json::json!([10.0, 3.0]));
        assert_eq!(v["quality"]["mean_pred_success_rate"], serde_json::Value::Null);
        assert_eq!(v["quality"]["mean_track_rate"], 98.4);
    }
}
