use std::path::Path;

/// 走査対象として認識する画像の拡張子（小文字）。
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "tiff"];

/// ファイル名の末尾だけを見て、対応している画像ファイル名か判定します。
///
/// 小文字化した名前が `.png` などで終わるかを調べるため、`.png` という名前のファイルも対象になる。
pub fn has_image_extension(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
        return false;
    };
    let name = name.to_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| name.ends_with(&format!(".{ext}")))
}

/// パスが通常ファイルであり、かつ対応している画像ファイル名か判定します。
pub fn is_image_file(path: &Path) -> bool {
    path.is_file() && has_image_extension(path)
}
