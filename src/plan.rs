use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};

use image::ImageError;

use crate::arg_parsers::{ColorSpec, Transparency};
use crate::decode::decode;
use crate::error::OverlayError;
use crate::operations::{self, Operation};
use crate::utils::{filename::insert_suffix_before_extension, timer::Timer};
use crate::{encode, ov_err};

/// Inserted before the extension of the input file name to name the output
pub const OUTPUT_SUFFIX: &str = "-out";

/// Where the results are written
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OutputTarget {
    /// `<stem>-out.<ext>` next to each input file
    #[default]
    NextToInput,
    /// An explicit file name. Numbered if there are several inputs.
    File(PathBuf),
    /// `<stem>-out.<ext>` inside this directory
    Directory(PathBuf),
}

/// Plan of operations for the whole run over multiple files
#[derive(Debug, Default)]
pub struct ExecutionPlan {
    /// Operations applied to every input file, in order
    ops: Vec<Operation>,
    input_files: Vec<PathBuf>,
    output: OutputTarget,
    show: bool,
}

impl ExecutionPlan {
    /// Inverts every file and puts it over a `color` background with the given transparency.
    pub fn new(color: ColorSpec, transparency: Transparency) -> Self {
        Self {
            ops: vec![
                Operation::Negate,
                Operation::Underlay {
                    color,
                    alpha: transparency.alpha(),
                },
            ],
            ..Default::default()
        }
    }

    pub fn add_input_file(&mut self, file: PathBuf) {
        self.input_files.push(file);
    }

    pub fn set_output(&mut self, output: OutputTarget) {
        self.output = output;
    }

    pub fn set_show(&mut self, show: bool) {
        self.show = show;
    }

    /// Processes the files one after another, handing each outcome to `on_outcome` as soon as it is known.
    ///
    /// Failing to read or write a file does not stop the run.
    /// Any other failure is reported and aborts the remaining files.
    pub fn execute(&self, on_outcome: impl FnMut(&FileOutcome)) -> Result<(), OverlayError> {
        if self.input_files.is_empty() {
            return Err(ov_err!("no images defined"));
        }
        crate::init::init();
        self.run(|index, input| self.process_file(index, input), on_outcome)
    }

    fn run(
        &self,
        mut process: impl FnMut(usize, &Path) -> FileOutcome,
        mut on_outcome: impl FnMut(&FileOutcome),
    ) -> Result<(), OverlayError> {
        for (index, input) in self.input_files.iter().enumerate() {
            let outcome = process(index, input);
            on_outcome(&outcome);
            if let Err(error) = &outcome.result {
                if !error.is_recoverable() {
                    // the error itself has already been handed to `on_outcome`
                    return Err(ov_err!(
                        "aborting after unexpected error on `{}'",
                        input.display()
                    ));
                }
            }
        }
        Ok(())
    }

    fn process_file(&self, index: usize, input: &Path) -> FileOutcome {
        let mut warnings = Vec::new();
        let result = self.transform(index, input, &mut warnings);
        FileOutcome {
            input: input.to_owned(),
            result,
            warnings,
        }
    }

    fn transform(
        &self,
        index: usize,
        input: &Path,
        warnings: &mut Vec<String>,
    ) -> Result<PathBuf, FileError> {
        let _timer = Timer::new(format!("{}: time elapsed: ", input.display()));

        let mut image = decode(input).map_err(FileError::Load)?;
        // Paths such as `..` or `/` name no file to read, and no output can be named after them
        let output = self.output_location(index).ok_or_else(|| {
            FileError::Load(ImageError::IoError(io::Error::new(
                io::ErrorKind::InvalidInput,
                "the path does not name a file",
            )))
        })?;
        for operation in &self.ops {
            operation.execute(&mut image).map_err(FileError::Process)?;
        }
        if self.show {
            if let Err(error) = operations::show(&image) {
                warnings.push(format!("unable to display `{}': {error}", input.display()));
            }
        }
        encode::encode(&image, &output).map_err(FileError::Save)?;
        Ok(output)
    }

    /// `None` if the input path has no file name to build the output name from, e.g. `..`
    fn output_location(&self, index: usize) -> Option<PathBuf> {
        let input = &self.input_files[index];
        let file_name = Path::new(input.file_name()?);
        match &self.output {
            OutputTarget::NextToInput => Some(insert_suffix_before_extension(input, OUTPUT_SUFFIX)),
            OutputTarget::Directory(dir) => {
                Some(dir.join(insert_suffix_before_extension(file_name, OUTPUT_SUFFIX)))
            }
            OutputTarget::File(file) if self.input_files.len() > 1 => {
                // indexing for output images starts at 1
                let suffix = format!("-{}", index + 1);
                Some(insert_suffix_before_extension(file, &suffix))
            }
            OutputTarget::File(file) => Some(file.clone()),
        }
    }
}

/// What happened to a single input file
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    /// The path the result was written to
    pub result: Result<PathBuf, FileError>,
    /// Problems that did not prevent the file from being written
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub enum FileError {
    /// The input could not be opened or decoded
    Load(ImageError),
    /// The result could not be encoded or written
    Save(OverlayError),
    /// Anything else; not tied to the I/O of this particular file
    Process(OverlayError),
}

impl FileError {
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FileError::Process(_))
    }
}

impl Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Load(error) => write!(f, "unable to open image: {error}"),
            FileError::Save(error) => write!(f, "unable to save image: {error}"),
            FileError::Process(error) => write!(f, "{error}"),
        }
    }
}
