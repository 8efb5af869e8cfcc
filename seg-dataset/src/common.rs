pub use crate::error::{DatasetError, Result};
pub use derivative::Derivative;
pub use indexmap::IndexSet;
pub use itertools::Itertools as _;
pub use log::{debug, info, warn};
pub use serde::{Deserialize, Serialize};
pub use std::{
    convert::TryFrom,
    fmt::{self, Debug, Display},
    path::{Path, PathBuf},
    str::FromStr,
};
pub use tch::{vision, Device, Kind, Tensor};
