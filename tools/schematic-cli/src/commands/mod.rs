pub mod create_sql;
pub mod dialects;
pub mod schema;

use std::{fs, path::Path};

use anyhow::{Result, bail};
use clap::Args;
use schematic::{
    Schematic, SchematicBuilder,
    core::InferenceConfig,
    csv::CsvOptions,
};

/// Inference flags shared by every command that reads a CSV file.
#[derive(Args)]
pub struct InferenceArgs {
    /// Maximum number of data rows to sample (default: all rows)
    #[arg(long)]
    sample_size: Option<usize>,

    /// Field value treated as null; repeat to give several (replaces the defaults)
    #[arg(long = "null-marker")]
    null_markers: Vec<String>,

    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Reduce the sample in parallel batches of this many rows
    #[arg(long)]
    parallel: Option<usize>,
}

impl InferenceArgs {
    pub fn builder(&self) -> Result<SchematicBuilder> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be an ASCII character, got '{}'", self.delimiter);
        }
        let delimiter = self.delimiter as u8;

        let mut config = InferenceConfig::builder().with_sample_size(self.sample_size);
        if !self.null_markers.is_empty() {
            config = config.with_null_markers(self.null_markers.iter().cloned());
        }

        let mut builder = Schematic::builder()
            .with_config(config.build())
            .with_csv_options(CsvOptions::default().with_delimiter(delimiter));
        if let Some(batch_size) = self.parallel {
            builder = builder.with_parallel_batch_size(batch_size);
        }
        Ok(builder)
    }
}

/// Write `text` to `output`, or stdout if no path is given.
pub fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{text}\n"))?,
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::InferenceArgs;

    fn args(delimiter: char) -> InferenceArgs {
        InferenceArgs {
            sample_size: None,
            null_markers: Vec::new(),
            delimiter,
            parallel: None,
        }
    }

    #[test]
    fn delimiter_must_be_ascii() {
        assert!(args(';').builder().is_ok());
        assert!(args('\t').builder().is_ok());

        let Err(err) = args('é').builder() else {
            panic!("non-ASCII delimiter accepted");
        };
        assert_eq!(err.to_string(), "delimiter must be an ASCII character, got 'é'");
    }
}
