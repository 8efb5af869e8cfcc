//! Dataset configuration format.

use crate::{
    common::*,
    dataset::{IndexedSegmentationDataset, Split},
    schema::DatasetSchema,
};

/// The configuration file of a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = json5::from_str(&text).map_err(|err| {
            DatasetError::config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                err
            ))
        })?;
        Ok(config)
    }
}

/// Dataset options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// The directory containing `images/` and `annotations/`.
    pub root: PathBuf,
    /// Either `train` or `val`.
    pub split: Split,
    #[serde(default)]
    pub schema: SchemaConfig,
}

impl DatasetConfig {
    /// Scan the dataset directory with the libtorch decoder.
    pub fn build(&self) -> Result<IndexedSegmentationDataset> {
        let schema = self.schema.load()?;
        IndexedSegmentationDataset::open(&self.root, self.split, schema)
    }
}

/// Where the classes and palette come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SchemaConfig {
    /// No classes and no palette.
    Empty,
    /// The built-in SUN RGB-D schema.
    SunRgbd,
    /// A JSON5 schema file.
    File { path: PathBuf },
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self::Empty
    }
}

impl SchemaConfig {
    pub fn load(&self) -> Result<DatasetSchema> {
        let schema = match self {
            Self::Empty => DatasetSchema::default(),
            Self::SunRgbd => DatasetSchema::sun_rgbd(),
            Self::File { path } => DatasetSchema::open(path)?,
        };
        Ok(schema)
    }
}
