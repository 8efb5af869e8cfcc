use super::Split;
use crate::common::*;
use std::ffi::OsStr;

/// The directory name holding the images of all splits.
pub const IMAGE_DIR: &str = "images";
/// The directory name holding the label masks of all splits.
pub const LABEL_DIR: &str = "annotations";
/// The file extension of image files.
pub const IMAGE_EXTENSION: &str = "jpg";
/// The file extension of label files.
pub const LABEL_EXTENSION: &str = "png";

/// The directory scanned for image files, `<root>/images/<split dir>`.
pub fn image_dir(root: impl AsRef<Path>, split: Split) -> PathBuf {
    root.as_ref().join(IMAGE_DIR).join(split.dir_name())
}

/// Derive the label file path from an image file path.
///
/// The image is expected at `.../images/<split dir>/<stem>.jpg`. The `images`
/// component is replaced with `annotations` and the extension with `png`,
/// giving `.../annotations/<split dir>/<stem>.png`. Components above the
/// `images` directory are kept verbatim.
pub fn label_path_for(image_path: impl AsRef<Path>) -> Result<PathBuf> {
    let image_path = image_path.as_ref();
    let malformed = || {
        DatasetError::config(format!(
            "image path '{}' is not located in '.../{}/<split>/'",
            image_path.display(),
            IMAGE_DIR
        ))
    };

    let file_name = image_path.file_name().ok_or_else(malformed)?;
    let split_dir = image_path.parent().ok_or_else(malformed)?;
    let split_name = split_dir.file_name().ok_or_else(malformed)?;
    let image_dir = split_dir.parent().ok_or_else(malformed)?;
    if image_dir.file_name() != Some(OsStr::new(IMAGE_DIR)) {
        return Err(malformed());
    }
    let prefix = image_dir.parent().unwrap_or_else(|| Path::new(""));

    let mut label_path = prefix.join(LABEL_DIR).join(split_name).join(file_name);
    label_path.set_extension(LABEL_EXTENSION);
    Ok(label_path)
}
