//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::{
    arg_parsers::{parse_transparency, ColorSpec, Transparency},
    help,
    plan::{ExecutionPlan, OutputTarget},
};

#[derive(Parser, Debug)]
#[command(
    name = "mkvidoverlay",
    version = help::version_string(),
    about = "Invert an image and put it over a background that has TRANSPARENCY% of transparency",
    after_help = help::color_help()
)]
pub struct Cli {
    /// Paths to the image files
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Transparency of the background: 0, 10, 20, ..., 100
    #[arg(
        short,
        long,
        value_name = "PERCENT",
        default_value = "40",
        value_parser = parse_transparency
    )]
    pub transparency: Transparency,

    /// Display the result after processing
    #[arg(short, long)]
    pub show: bool,

    /// Output file name, numbered when several files are given
    #[arg(short, long, value_name = "FILE", conflicts_with = "outpath")]
    pub outfile: Option<PathBuf>,

    /// Directory to write the results to
    #[arg(long, value_name = "DIR")]
    pub outpath: Option<PathBuf>,

    /// Background color: 0-255, rrggbb or (r,g,b)
    #[arg(short, long, value_name = "COLOR", default_value = "0")]
    pub color: String,

    /// Log more details, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    /// The background color, plus a message to show the user if it had to fall back to black
    pub fn background_color(&self) -> (ColorSpec, Option<String>) {
        let (color, error) = ColorSpec::parse_or_default(&self.color);
        let message = error.map(|e| {
            format!(
                "{}, using {color} instead",
                e.display_with_arg("color", &self.color)
            )
        });
        (color, message)
    }

    pub fn into_plan(self, color: ColorSpec) -> ExecutionPlan {
        let mut plan = ExecutionPlan::new(color, self.transparency);
        plan.set_output(match (self.outfile, self.outpath) {
            (Some(file), _) => OutputTarget::File(file),
            (None, Some(dir)) => OutputTarget::Directory(dir),
            (None, None) => OutputTarget::NextToInput,
        });
        plan.set_show(self.show);
        for file in self.files {
            plan.add_input_file(file);
        }
        plan
    }
}
