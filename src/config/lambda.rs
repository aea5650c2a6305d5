#[cfg(feature = "lambda")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "lambda")]
use crate::core::{ConfigProvider, ObjectStorage};
#[cfg(feature = "lambda")]
use crate::domain::model::{PrintConfiguration, StoredObject};
#[cfg(feature = "lambda")]
use crate::utils::error::{PclError, Result};
#[cfg(feature = "lambda")]
use aws_sdk_s3::operation::get_object::GetObjectError;
#[cfg(feature = "lambda")]
use aws_sdk_s3::operation::head_object::HeadObjectError;
#[cfg(feature = "lambda")]
use aws_sdk_s3::Client as S3Client;
#[cfg(feature = "lambda")]
use std::env;

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub input_bucket: String,
    pub output_bucket: String,
    pub s3_region: String,
    pub print: PrintConfiguration,
}

#[cfg(feature = "lambda")]
impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let input_bucket = env::var("INPUT_BUCKET").map_err(|_| PclError::ConfigError {
            message: "INPUT_BUCKET environment variable is required".to_string(),
        })?;
        let output_bucket = env::var("OUTPUT_BUCKET").unwrap_or_else(|_| input_bucket.clone());

        let print = match env::var("PRINT_CONFIG") {
            Ok(path) => TomlConfig::from_file(&path)?.print,
            Err(_) => PrintConfiguration::default(),
        };

        Ok(Self {
            input_bucket,
            output_bucket,
            s3_region: env::var("S3_REGION").unwrap_or_else(|_| "sa-east-1".to_string()),
            print,
        })
    }
}

#[cfg(feature = "lambda")]
impl ConfigProvider for LambdaConfig {
    fn input_bucket(&self) -> &str {
        &self.input_bucket
    }

    fn output_bucket(&self) -> &str {
        &self.output_bucket
    }

    fn print_config(&self) -> &PrintConfiguration {
        &self.print
    }
}

#[cfg(feature = "lambda")]
impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_s3_bucket_name("input_bucket", &self.input_bucket)?;
        validate_s3_bucket_name("output_bucket", &self.output_bucket)?;
        validate_aws_region("s3_region", &self.s3_region)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(feature = "lambda")]
fn validate_s3_bucket_name(field_name: &str, bucket_name: &str) -> Result<()> {
    let invalid = |reason: &str| PclError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: bucket_name.to_string(),
        reason: reason.to_string(),
    };

    if bucket_name.len() < 3 || bucket_name.len() > 63 {
        return Err(invalid("S3 bucket name must be between 3 and 63 characters"));
    }

    if !bucket_name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.')
    {
        return Err(invalid(
            "S3 bucket name can only contain lowercase letters, numbers, hyphens, and dots",
        ));
    }

    if bucket_name.starts_with('-') || bucket_name.ends_with('-') {
        return Err(invalid("S3 bucket name cannot start or end with a hyphen"));
    }

    Ok(())
}

#[cfg(feature = "lambda")]
fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    crate::utils::validation::validate_non_empty_string(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(PclError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "AWS region can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

#[cfg(feature = "lambda")]
#[derive(Debug, Clone)]
pub struct S3Storage {
    client: S3Client,
}

#[cfg(feature = "lambda")]
impl S3Storage {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "lambda")]
impl ObjectStorage for S3Storage {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let resp = match self.client.get_object().bucket(bucket).key(key).send().await {
            Ok(resp) => resp,
            Err(err) => {
                return Err(match err.into_service_error() {
                    GetObjectError::NoSuchKey(_) => PclError::SourceNotFound {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    },
                    other => PclError::StorageError {
                        message: format!("Failed to read s3://{}/{}: {}", bucket, key, other),
                    },
                })
            }
        };

        let data = resp
            .body
            .collect()
            .await
            .map_err(|e| PclError::StorageError {
                message: format!("Failed to collect s3://{}/{}: {}", bucket, key, e),
            })?;

        Ok(data.into_bytes().to_vec())
    }

    async fn store(
        &self,
        bucket: &str,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<StoredObject> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(data.to_vec().into())
            .send()
            .await
            .map_err(|err| PclError::StorageError {
                message: format!(
                    "Failed to write s3://{}/{}: {}",
                    bucket,
                    key,
                    err.into_service_error()
                ),
            })?;

        Ok(StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            location: format!("s3://{}/{}", bucket, key),
        })
    }

    async fn exists(&self, bucket: &str, key: &str) -> Result<bool> {
        match self.client.head_object().bucket(bucket).key(key).send().await {
            Ok(_) => Ok(true),
            Err(err) => match err.into_service_error() {
                HeadObjectError::NotFound(_) => Ok(false),
                other => Err(PclError::StorageError {
                    message: format!("Failed to check s3://{}/{}: {}", bucket, key, other),
                }),
            },
        }
    }
}
