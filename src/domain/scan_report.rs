//! 走査結果を表現する型と、そのコンソール表示。

use std::fmt;

/// 1枚の画像に対する処理結果。
#[derive(Debug, Clone, PartialEq)]
pub enum ImageOutcome {
    /// デコードに成功し、正規化済み最大グレースケール値 (`0.0..=1.0`) が得られた。
    Measured(f64),
    /// デコードに失敗した。原因の説明を保持する。
    Failed(String),
}

/// 画像1枚分の測定結果。
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMeasurement {
    name: String,
    outcome: ImageOutcome,
}

impl ImageMeasurement {
    pub fn new(name: impl Into<String>, outcome: ImageOutcome) -> Self {
        Self {
            name: name.into(),
            outcome,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn outcome(&self) -> &ImageOutcome {
        &self.outcome
    }

    /// 集計に使う正規化済み最大値。失敗した画像は `0.0` として扱う。
    pub fn max_gray(&self) -> f64 {
        match self.outcome {
            ImageOutcome::Measured(m) => m,
            ImageOutcome::Failed(_) => 0.0,
        }
    }

    /// 最大値の逆数。最大値が `0.0` のときは定義されないため `None`。
    pub fn reciprocal(&self) -> Option<f64> {
        let m = self.max_gray();
        if m == 0.0 {
            None
        } else {
            Some(1.0 / m)
        }
    }
}

impl fmt::Display for ImageMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image {} max-gray: {:.2}, reciprocal: ", self.name, self.max_gray())?;
        match self.reciprocal() {
            Some(r) => write!(f, "{:.2}", r),
            None => write!(f, "undefined"),
        }
    }
}

/// ディレクトリ全体の走査結果。
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    directory: String,
    measurements: Vec<ImageMeasurement>,
}

impl ScanReport {
    pub fn new(directory: impl Into<String>, measurements: Vec<ImageMeasurement>) -> Self {
        Self {
            directory: directory.into(),
            measurements,
        }
    }

    pub fn measurements(&self) -> &[ImageMeasurement] {
        &self.measurements
    }

    /// 対象画像が1枚も見つからなかったかどうか。
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// デコードに失敗した画像の数。
    pub fn failure_count(&self) -> usize {
        self.measurements
            .iter()
            .filter(|m| matches!(m.outcome, ImageOutcome::Failed(_)))
            .count()
    }

    /// 全画像の正規化済み最大値のうち最大のもの。画像がなければ `0.0`。
    pub fn overall_max(&self) -> f64 {
        self.measurements
            .iter()
            .map(ImageMeasurement::max_gray)
            .fold(0.0, f64::max)
    }

    /// コンソールに出力する行を返します。
    pub fn lines(&self) -> Vec<String> {
        if self.is_empty() {
            return vec![format!("no images found in {}", self.directory)];
        }

        let names: Vec<&str> = self.measurements.iter().map(|m| m.name()).collect();
        let mut lines = Vec::with_capacity(self.measurements.len() + 1);
        lines.push(format!("found {} images: {:?}", names.len(), names));
        lines.extend(self.measurements.iter().map(ToString::to_string));
        lines
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
