pub mod cli;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::config::toml_config::TomlConfig;
    use crate::core::ConfigProvider;
    use crate::domain::model::{BatchFile, PrintConfiguration};
    use crate::utils::error::{PclError, Result};
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "mala-direta-pcl")]
    #[command(about = "Converts address lists into PCL envelope print jobs")]
    pub struct CliConfig {
        /// Data files (.csv, or tab/pipe delimited), relative to --input-dir
        #[arg(required = true)]
        pub files: Vec<String>,

        #[arg(long, default_value = ".")]
        pub input_dir: String,

        #[arg(long, default_value = "./output")]
        pub output_dir: String,

        /// TOML print profile
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(long)]
        pub paper_format: Option<String>,

        #[arg(long)]
        pub envelope_type: Option<String>,

        #[arg(long)]
        pub full_address: Option<bool>,

        #[arg(long)]
        pub postal_code: Option<bool>,

        #[arg(long)]
        pub logo: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log CPU and memory usage per phase")]
        pub monitor: bool,

        #[arg(skip)]
        pub print: PrintConfiguration,
    }

    impl CliConfig {
        /// Loads the print profile (if any) and applies the command-line flags on top.
        pub fn resolve_print_config(&mut self) -> Result<()> {
            let mut print = match &self.config {
                Some(path) => {
                    let profile = TomlConfig::from_file(path)?;
                    profile.validate()?;
                    profile.print
                }
                None => PrintConfiguration::default(),
            };

            if let Some(format) = &self.paper_format {
                print.paper_format = format.clone();
            }
            if let Some(envelope) = &self.envelope_type {
                print.envelope_type = envelope.clone();
            }
            if let Some(full_address) = self.full_address {
                print.include_full_address = full_address;
            }
            if let Some(postal_code) = self.postal_code {
                print.include_postal_code = postal_code;
            }
            if let Some(logo) = &self.logo {
                print.company_logo = Some(logo.clone());
            }

            self.print = print;
            Ok(())
        }

        pub fn batch_files(&self) -> Vec<BatchFile> {
            self.files
                .iter()
                .map(|file| BatchFile {
                    file_name: std::path::Path::new(file)
                        .file_name()
                        .and_then(|name| name.to_str())
                        .unwrap_or(file)
                        .to_string(),
                    storage_key: file.clone(),
                    bucket: None,
                    declared_page_count: 0,
                })
                .collect()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input_dir", &self.input_dir)?;
            validate_path("output_dir", &self.output_dir)?;
            if self.files.is_empty() {
                return Err(PclError::MissingConfigError {
                    field: "files".to_string(),
                });
            }
            for file in &self.files {
                validate_path("files", file)?;
            }
            Ok(())
        }
    }

    impl ConfigProvider for CliConfig {
        fn input_bucket(&self) -> &str {
            &self.input_dir
        }

        fn output_bucket(&self) -> &str {
            &self.output_dir
        }

        fn print_config(&self) -> &PrintConfiguration {
            &self.print
        }

        fn monitoring_enabled(&self) -> bool {
            self.monitor
        }
    }

}
