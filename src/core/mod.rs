pub mod batch;
pub mod document;
pub mod engine;
pub mod layout;
pub mod overrides;
pub mod paths;
pub mod pcl;
pub mod pipeline;
pub mod reader;
pub mod sections;

pub use crate::domain::model::{DelimitedRecord, GeneratedDocument, PrintConfiguration, TransformResult};
pub use crate::domain::ports::{ConfigProvider, ObjectStorage, Pipeline};
pub use crate::utils::error::Result;
