pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::{LambdaConfig, S3Storage};

pub use config::cli::LocalStorage;
pub use core::batch::{BatchProcessor, BatchResponse};
pub use core::document::{assemble, render_document, PCL_CONTENT_TYPE};
pub use core::engine::ConversionEngine;
pub use core::layout::generate_pages;
pub use core::pipeline::PclPipeline;
pub use core::reader::{read_records, RecordReader};
pub use core::sections::{generate_footer, generate_header};
pub use domain::model::{
    BatchFile, BatchPayload, ConvertedFile, DelimitedRecord, GeneratedDocument,
    PrintConfiguration, SourceDescriptor, TextEncoding,
};
pub use utils::error::{PclError, Result};
