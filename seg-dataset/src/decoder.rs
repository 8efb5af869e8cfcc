//! Image file decoding.

use crate::common::*;

/// Decodes image and label files into pixel tensors.
pub trait ImageDecoder
where
    Self: Debug + Send + Sync,
{
    /// Decode an image file into a `[C, H, W]` tensor.
    fn load_image(&self, path: &Path) -> Result<Tensor>;

    /// Decode a label file into a `[1, H, W]` tensor.
    fn load_label(&self, path: &Path) -> Result<Tensor>;
}

/// The decoder backed by libtorch image loading.
///
/// The loaded images are `[3, H, W]` uint8 tensors on CPU. The libtorch loader
/// always expands files to three channels, so single-channel label masks come
/// back replicated and [load_label](ImageDecoder::load_label) keeps the first
/// channel only.
#[derive(Debug, Clone, Copy, Default)]
pub struct TchImageDecoder;

impl TchImageDecoder {
    fn load(&self, path: &Path) -> Result<Tensor> {
        if !path.is_file() {
            return Err(DatasetError::NotFound {
                path: path.to_owned(),
            });
        }

        tch::no_grad(|| vision::image::load(path)).map_err(|source| DatasetError::Decode {
            path: path.to_owned(),
            source,
        })
    }
}

impl ImageDecoder for TchImageDecoder {
    fn load_image(&self, path: &Path) -> Result<Tensor> {
        self.load(path)
    }

    fn load_label(&self, path: &Path) -> Result<Tensor> {
        let image = self.load(path)?;
        let label = image.f_narrow(0, 0, 1)?;
        Ok(label)
    }
}
