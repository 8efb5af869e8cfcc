//! Class list, ignore label and color palette of a dataset.

use crate::common::*;

/// The label value of pixels excluded from the loss.
pub const DEFAULT_IGNORE_LABEL: i64 = -1;

/// The classes of the SUN RGB-D benchmark in label order.
pub const SUN_RGBD_CLASSES: [&str; 37] = [
    "wall",
    "floor",
    "cabinet",
    "bed",
    "chair",
    "sofa",
    "table",
    "door",
    "window",
    "bookshelf",
    "picture",
    "counter",
    "blinds",
    "desk",
    "shelves",
    "curtain",
    "dresser",
    "pillow",
    "mirror",
    "floor mat",
    "clothes",
    "ceiling",
    "books",
    "fridge",
    "tv",
    "paper",
    "towel",
    "shower curtain",
    "box",
    "whiteboard",
    "person",
    "night stand",
    "toilet",
    "sink",
    "lamp",
    "bathtub",
    "bag",
];

/// The per-dataset configuration of classes and visualization colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSchema {
    /// Class names in label index order.
    #[serde(default)]
    pub classes: IndexSet<String>,
    /// The sentinel marking pixels to be ignored.
    #[serde(default = "default_ignore_label")]
    pub ignore_label: i64,
    /// Colors indexed by class, used by [decode](crate::IndexedSegmentationDataset::decode).
    #[serde(default)]
    pub palette: Option<Vec<[u8; 3]>>,
}

impl Default for DatasetSchema {
    fn default() -> Self {
        Self {
            classes: IndexSet::new(),
            ignore_label: DEFAULT_IGNORE_LABEL,
            palette: None,
        }
    }
}

impl DatasetSchema {
    /// Build a schema from class names, without palette.
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// The SUN RGB-D schema, 37 classes colored by [voc_palette].
    pub fn sun_rgbd() -> Self {
        Self::new(SUN_RGBD_CLASSES).with_voc_palette()
    }

    /// Load a schema from a JSON5 file.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let schema: Self = json5::from_str(&text).map_err(|err| {
            DatasetError::config(format!(
                "failed to parse schema file '{}': {}",
                path.display(),
                err
            ))
        })?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn with_palette(mut self, palette: Vec<[u8; 3]>) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Attach a palette generated by [voc_palette] with one color per class.
    pub fn with_voc_palette(self) -> Self {
        let palette = voc_palette(self.class_count());
        self.with_palette(palette)
    }

    pub fn with_ignore_label(mut self, ignore_label: i64) -> Self {
        self.ignore_label = ignore_label;
        self
    }

    /// The number of known classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Check that the palette, if any, has a color for every class.
    pub fn validate(&self) -> Result<()> {
        if let Some(palette) = &self.palette {
            if palette.len() < self.class_count() {
                return Err(DatasetError::config(format!(
                    "palette has {} colors but {} classes are declared",
                    palette.len(),
                    self.class_count()
                )));
            }
        }
        Ok(())
    }

    /// The palette as a `[N, 3]` uint8 tensor.
    pub fn palette_tensor(&self) -> Result<Tensor> {
        let palette = self
            .palette
            .as_ref()
            .ok_or_else(|| DatasetError::config("the dataset schema has no palette"))?;
        let flat: Vec<u8> = palette.iter().flatten().copied().collect();
        let tensor = Tensor::of_slice(&flat).f_reshape(&[palette.len() as i64, 3])?;
        Ok(tensor)
    }
}

/// The PASCAL VOC color map.
///
/// The bits of the class index are spread over the three channels starting
/// from the most significant bit, so that small indices get distinct colors.
pub fn voc_palette(num_classes: usize) -> Vec<[u8; 3]> {
    (0..num_classes)
        .map(|index| {
            let mut color = [0u8; 3];
            let mut code = index;
            for shift in (0..8).rev() {
                for (channel, value) in color.iter_mut().enumerate() {
                    *value |= (((code >> channel) & 1) as u8) << shift;
                }
                code >>= 3;
            }
            color
        })
        .collect()
}

fn default_ignore_label() -> i64 {
    DEFAULT_IGNORE_LABEL
}
