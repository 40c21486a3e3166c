use std::{collections::HashMap, path::PathBuf};

use modern_cli_domain::naming::output_path;
use modern_cli_ports::{
    filesystem::{FileTransformer, OutputWriter},
    progress::{NoProgress, ProgressSink},
};
use modern_cli_shared_kernel::{ApplicationError, Result};

use crate::dto::{FileFailure, PlannedOutput, ProcessReport, ProcessRequest, WrittenFile};

/// Transforms every requested file in turn and writes the results.
///
/// A failing file is recorded and the run moves on to the next one. An input whose
/// output path was already written earlier in the same run is rejected instead of
/// overwriting that output.
pub struct ProcessFiles<'a> {
    transformer: &'a dyn FileTransformer,
    writer: &'a dyn OutputWriter,
    progress: &'a dyn ProgressSink,
}

impl<'a> ProcessFiles<'a> {
    pub fn new(transformer: &'a dyn FileTransformer, writer: &'a dyn OutputWriter) -> Self {
        Self { transformer, writer, progress: &NoProgress }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// Output locations for each input, without touching the filesystem.
    pub fn plan(request: &ProcessRequest) -> Vec<PlannedOutput> {
        request
            .files
            .iter()
            .map(|input| PlannedOutput {
                input: input.clone(),
                output: output_path(&request.output_dir, input, &request.transform),
            })
            .collect()
    }

    pub fn run(&self, request: &ProcessRequest) -> ProcessReport {
        let mut report = ProcessReport::default();
        // output path -> input that produced it
        let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

        self.progress.on_start(request.files.len());
        for planned in Self::plan(request) {
            tracing::debug!(input = %planned.input.display(), "processing file");
            match self.process_one(request, &planned, &claimed) {
                Ok(written) => {
                    tracing::info!(
                        bytes = written.processed_size,
                        output = %written.output.display(),
                        "wrote transformed file"
                    );
                    claimed.insert(written.output.clone(), written.input.clone());
                    self.progress.on_file(&planned.input, true);
                    report.written.push(written);
                }
                Err(error) => {
                    tracing::error!(input = %planned.input.display(), %error, "failed to process file");
                    self.progress.on_file(&planned.input, false);
                    report.failures.push(FileFailure { input: planned.input, error });
                }
            }
        }
        self.progress.on_complete();

        report
    }

    fn process_one(
        &self,
        request: &ProcessRequest,
        planned: &PlannedOutput,
        claimed: &HashMap<PathBuf, PathBuf>,
    ) -> Result<WrittenFile> {
        if let Some(first_input) = claimed.get(&planned.output) {
            return Err(ApplicationError::OutputCollision {
                output: planned.output.clone(),
                first_input: first_input.clone(),
            }
            .into());
        }

        let result = self.transformer.transform(&planned.input, &request.transform)?;
        self.writer.write(&planned.output, &result.result)?;
        Ok(WrittenFile {
            input: planned.input.clone(),
            output: planned.output.clone(),
            processed_size: result.processed_size,
        })
    }
}
