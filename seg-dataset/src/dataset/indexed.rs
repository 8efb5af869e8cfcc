use super::{image_dir, label_path_for, SegmentationDataset, Split, IMAGE_EXTENSION};
use crate::{
    common::*,
    decoder::{ImageDecoder, TchImageDecoder},
    schema::DatasetSchema,
    transform::Transform,
};

/// The dataset of images and label masks indexed by a directory scan.
///
/// The files are laid out as
///
/// ```text
/// <root>/images/<training|validation>/<stem>.jpg
/// <root>/annotations/<training|validation>/<stem>.png
/// ```
///
/// Label masks are stored 1-based. Loaded labels are shifted by one so that
/// class indices start from zero and unlabeled pixels become `-1`.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct IndexedSegmentationDataset<D = TchImageDecoder>
where
    D: ImageDecoder,
{
    root: PathBuf,
    split: Split,
    files: Vec<PathBuf>,
    schema: DatasetSchema,
    #[derivative(Debug = "ignore")]
    transform: Option<Box<dyn Transform>>,
    decoder: D,
}

impl IndexedSegmentationDataset<TchImageDecoder> {
    /// Scan `<root>/images/<split>` and build the dataset with the libtorch decoder.
    pub fn open<P>(root: P, split: Split, schema: DatasetSchema) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::with_decoder(root, split, schema, TchImageDecoder)
    }
}

impl<D> IndexedSegmentationDataset<D>
where
    D: ImageDecoder,
{
    /// Scan `<root>/images/<split>` and build the dataset with a custom decoder.
    pub fn with_decoder<P>(root: P, split: Split, schema: DatasetSchema, decoder: D) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        schema.validate()?;

        let root = root.as_ref().to_owned();
        let scan_dir = image_dir(&root, split);
        let files = scan_images(&scan_dir)?;

        if files.is_empty() {
            return Err(DatasetError::NotFound { path: scan_dir });
        }

        info!("Found {} {} images.", files.len(), split.dir_name());

        Ok(Self {
            root,
            split,
            files,
            schema,
            transform: None,
            decoder,
        })
    }

    /// Set the transform applied to every loaded pair.
    pub fn with_transform<T>(mut self, transform: T) -> Self
    where
        T: Transform + 'static,
    {
        self.transform = Some(Box::new(transform));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn split(&self) -> Split {
        self.split
    }

    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    /// The image files in scan order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// The number of samples.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The image file of the sample at `index`.
    pub fn image_path(&self, index: usize) -> Result<&Path> {
        self.files
            .get(index)
            .map(|path| path.as_path())
            .ok_or(DatasetError::Index {
                index,
                len: self.len(),
            })
    }

    /// The label file of the sample at `index`.
    pub fn label_path(&self, index: usize) -> Result<PathBuf> {
        label_path_for(self.image_path(index)?)
    }

    /// Load the (image, label) pair at `index`.
    ///
    /// The image is returned as produced by the decoder and transform. The
    /// label is squeezed to `[H, W]`, cast to int64 and shifted down by one.
    pub fn get(&self, index: usize) -> Result<(Tensor, Tensor)> {
        let image_path = self.image_path(index)?;
        let label_path = label_path_for(image_path)?;
        debug!(
            "load sample {} from '{}' and '{}'",
            index,
            image_path.display(),
            label_path.display()
        );

        let image = self.decoder.load_image(image_path)?;
        let label = self.decoder.load_label(&label_path)?;

        let (image, label) = match &self.transform {
            Some(transform) => transform.apply(image, label)?,
            None => (image, label),
        };

        let label = squeeze_channel(label)?.to_kind(Kind::Int64).f_sub1(1)?;
        Ok((image, label))
    }

    /// Map each label value to its palette color.
    ///
    /// The output has the shape of `label` with an extra trailing dimension of
    /// size 3. Every value must be a valid palette index, so ignored pixels
    /// have to be remapped beforehand, e.g. by [ignore_to_background](Self::ignore_to_background).
    pub fn decode(&self, label: &Tensor) -> Result<Tensor> {
        let palette = self.schema.palette_tensor()?;
        let num_colors = palette.size()[0];

        let mut shape = label.size();
        shape.push(3);

        if label.numel() == 0 {
            return Ok(Tensor::zeros(&shape, (Kind::Uint8, Device::Cpu)));
        }

        let indices = label.to_kind(Kind::Int64).f_reshape(&[-1])?;
        let min = i64::from(indices.min());
        let max = i64::from(indices.max());
        let invalid = if min < 0 {
            Some(min)
        } else if max >= num_colors {
            Some(max)
        } else {
            None
        };
        if let Some(value) = invalid {
            return Err(DatasetError::Range {
                value,
                len: num_colors as usize,
            });
        }

        let colors = palette
            .to_device(indices.device())
            .f_index_select(0, &indices)?
            .f_reshape(&shape)?;
        Ok(colors)
    }

    /// Replace the ignore label by class 0.
    pub fn ignore_to_background(&self, label: &Tensor) -> Result<Tensor> {
        let mask = label.f_eq(self.schema.ignore_label)?;
        let label = label.f_masked_fill(&mask, 0)?;
        Ok(label)
    }
}

impl<D> SegmentationDataset for IndexedSegmentationDataset<D>
where
    D: ImageDecoder,
{
    fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    fn num_records(&self) -> usize {
        self.len()
    }

    fn nth(&self, index: usize) -> Result<(Tensor, Tensor)> {
        self.get(index)
    }
}

/// List `*.jpg` files directly in `dir` in lexicographic order.
///
/// A missing directory yields an empty list.
fn scan_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        IMAGE_EXTENSION
    );
    let paths = glob::glob(&pattern)
        .map_err(|err| {
            DatasetError::config(format!("invalid scan pattern '{}': {}", pattern, err))
        })?
        .map(|result| {
            result.map_err(|err| {
                warn!("unable to read '{}': {}", err.path().display(), err);
                DatasetError::Io(err.into_error())
            })
        })
        .filter_ok(|path| path.is_file())
        .collect::<Result<Vec<_>>>()?;
    Ok(paths)
}

/// Drop the leading channel dimension of a `[1, H, W]` label.
fn squeeze_channel(label: Tensor) -> Result<Tensor> {
    let size = label.size();
    let label = match size.as_slice() {
        &[1, _, _] => label.f_select(0, 0)?,
        _ => label,
    };
    Ok(label)
}
