use std::io::Write;
use std::path::Path;
use tempfile::TempPath;

use crate::Result;

/// Temporary input/output pair for a single kraken run. Both files are
/// removed when the workspace is dropped, whether the run succeeded or not.
pub struct OcrWorkspace {
    input: TempPath,
    output: TempPath,
}

impl OcrWorkspace {
    pub fn create(image_bytes: &[u8]) -> Result<Self> {
        let mut input = tempfile::Builder::new().suffix(".jpg").tempfile()?;
        input.write_all(image_bytes)?;
        input.flush()?;

        let output = tempfile::Builder::new().suffix(".txt").tempfile()?;

        let workspace = Self {
            input: input.into_temp_path(),
            output: output.into_temp_path(),
        };
        log::debug!(
            "Created OCR workspace: input {}, output {}",
            workspace.input_path().display(),
            workspace.output_path().display()
        );
        Ok(workspace)
    }

    pub fn input_path(&self) -> &Path {
        &self.input
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Removes both files now and reports failures instead of ignoring them.
    pub fn close(self) -> Result<()> {
        let Self { input, output } = self;
        let input_result = input.close();
        let output_result = output.close();
        input_result?;
        output_result?;
        Ok(())
    }
}
