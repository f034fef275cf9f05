// use宣言：画像のデコードとRGB8への変換のために image クレートを利用
use image::{Rgb, RgbImage};
use std::path::Path;
use thiserror::Error;

// --- 定数定義 ---

/// 赤チャンネルの心理的輝度係数。
pub const RED_WEIGHT: f64 = 0.299;
/// 緑チャンネルの心理的輝度係数。
pub const GREEN_WEIGHT: f64 = 0.587;
/// 青チャンネルの心理的輝度係数。
pub const BLUE_WEIGHT: f64 = 0.114;
/// 8ビットチャンネルの最大値。正規化の分母として使う。
pub const CHANNEL_MAX: f64 = 255.0;

// --- エラー定義 ---

/// 1枚の画像から最大グレースケール値を求める際のエラー。
#[derive(Debug, Error)]
pub enum GrayscaleError {
    /// ファイルの読み込み・デコードに失敗した場合。
    #[error("画像 '{path}' をデコードできません: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

// --- 関数定義 ---

/// R, G, B から心理学的グレースケール値 `0.299*R + 0.587*G + 0.114*B` を計算します。
///
/// 戻り値は `0.0..=255.0` に収まります。
#[inline]
pub fn grayscale_of(r: u8, g: u8, b: u8) -> f64 {
    RED_WEIGHT * f64::from(r) + GREEN_WEIGHT * f64::from(g) + BLUE_WEIGHT * f64::from(b)
}

/// 1ピクセルのグレースケール値。
#[inline]
pub fn grayscale_of_pixel(pixel: &Rgb<u8>) -> f64 {
    let [r, g, b] = pixel.0;
    grayscale_of(r, g, b)
}

/// RGB画像の全ピクセルを走査し、最大のグレースケール値を返します。
///
/// 空の画像（幅または高さが0）の場合は `0.0` を返します。
pub fn max_gray_of_pixels(image: &RgbImage) -> f64 {
    image
        .pixels()
        .map(grayscale_of_pixel)
        .fold(0.0, f64::max)
}

/// 画像ファイルをデコードして最大グレースケール値を求めます。
///
/// アルファ、パレット、グレースケールなどの元のカラーモードはRGB8に変換してから走査します。
///
/// # 戻り値
/// * `Ok(f64)`: `0.0..=255.0` の最大値。
/// * `Err(GrayscaleError)`: ファイルが存在しない、壊れている、未対応フォーマットの場合。
pub fn try_max_gray_in_image<P: AsRef<Path>>(path: P) -> Result<f64, GrayscaleError> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| GrayscaleError::Decode {
        path: path.display().to_string(),
        source,
    })?;
    Ok(max_gray_of_pixels(&image.to_rgb8()))
}

/// `try_max_gray_in_image` のフォールバック版。
///
/// デコードに失敗した場合は原因をログに出力し、`0.0` を返します。
pub fn max_gray_in_image<P: AsRef<Path>>(path: P) -> f64 {
    match try_max_gray_in_image(path) {
        Ok(max_gray) => max_gray,
        Err(e) => {
            tracing::warn!("{}", e);
            0.0
        }
    }
}

/// 最大グレースケール値を `0.0..=1.0` に正規化します。
#[inline]
pub fn normalize(gray: f64) -> f64 {
    gray / CHANNEL_MAX
}

// --- テストモジュール ---
