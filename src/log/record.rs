/// Values parsed from a single tracker log line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogRecord {
    pub timestamp: f64,
    pub ref_key_num: f64,
    pub patch_match_predict_num: f64,
    pub geo_valid: f64,
}

impl LogRecord {
    /// Reference keypoints that did not survive geometric validation.
    pub fn lost_feats(&self) -> f64 {
        self.ref_key_num - self.geo_valid
    }
}

/// Per-field sequences in file order. Only grows through [`RecordSeries::push`],
/// so every sequence has the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSeries {
    times: Vec<f64>,
    ref_key_num: Vec<f64>,
    patch_match_predict_num: Vec<f64>,
    geo_valid: Vec<f64>,
    lost_feats: Vec<f64>,
}

impl RecordSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rec: LogRecord) {
        self.times.push(rec.timestamp);
        self.ref_key_num.push(rec.ref_key_num);
        self.patch_match_predict_num.push(rec.patch_match_predict_num);
        self.geo_valid.push(rec.geo_valid);
        self.lost_feats.push(rec.lost_feats());
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn ref_key_num(&self) -> &[f64] {
        &self.ref_key_num
    }

    pub fn patch_match_predict_num(&self) -> &[f64] {
        &self.patch_match_predict_num
    }

    pub fn geo_valid(&self) -> &[f64] {
        &self.geo_valid
    }

    pub fn lost_feats(&self) -> &[f64] {
        &self.lost_feats
    }
}

impl FromIterator<LogRecord> for RecordSeries {
    fn from_iter<I: IntoIterator<Item = LogRecord>>(iter: I) -> Self {
        let mut s = RecordSeries::new();
        for rec in iter {
            s.push(rec);
        }
        s
    }
}
