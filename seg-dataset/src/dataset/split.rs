use crate::common::*;

/// A named partition of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Split {
    Train,
    Val,
}

impl Split {
    /// The short name accepted by [FromStr], `train` or `val`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Val => "val",
        }
    }

    /// The directory name of the split under `images/` and `annotations/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Train => "training",
            Self::Val => "validation",
        }
    }
}

impl Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = DatasetError;

    fn from_str(text: &str) -> Result<Self> {
        let split = match text {
            "train" => Self::Train,
            "val" => Self::Val,
            _ => {
                return Err(DatasetError::config(format!(
                    "invalid split '{}', expect 'train' or 'val'",
                    text
                )))
            }
        };
        Ok(split)
    }
}

impl TryFrom<String> for Split {
    type Error = DatasetError;

    fn try_from(text: String) -> Result<Self> {
        text.parse()
    }
}

impl From<Split> for String {
    fn from(split: Split) -> Self {
        split.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_split_names() -> Result<()> {
        assert_eq!("train".parse::<Split>()?, Split::Train);
        assert_eq!("val".parse::<Split>()?, Split::Val);
        assert_eq!(Split::Train.dir_name(), "training");
        assert_eq!(Split::Val.dir_name(), "validation");
        Ok(())
    }

    #[test]
    fn reject_unknown_split_names() {
        for text in ["test", "training", "validation", "Train", "VAL", "", " train"] {
            let result = text.parse::<Split>();
            assert!(
                matches!(result, Err(DatasetError::Configuration(_))),
                "'{}' should be rejected",
                text
            );
        }
    }
}
