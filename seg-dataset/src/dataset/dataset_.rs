use crate::{common::*, schema::DatasetSchema};

/// The generic segmentation dataset trait.
pub trait SegmentationDataset
where
    Self: Debug + Send + Sync,
{
    /// The class list, ignore label and palette of the dataset.
    fn schema(&self) -> &DatasetSchema;

    /// Get number of records in the dataset.
    fn num_records(&self) -> usize;

    /// Get the (image, label) pair of the nth record in the dataset.
    fn nth(&self, index: usize) -> Result<(Tensor, Tensor)>;
}
