//! Command-line interface for reconstructing or shuffling a single image

use crate::algorithm::cost::CostModel;
use crate::algorithm::executor::{UnshredConfig, Unshredder};
use crate::io::configuration::DEFAULT_SHRED_WIDTH;
use crate::io::error::Result;
use crate::io::image::{OutputFormat, assemble, export_image, load_source};
use crate::io::progress::ProgressManager;
use crate::io::shuffle::shuffle_shreds;
use crate::spatial::ShredLayout;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "unshred")]
#[command(
    author,
    version,
    about = "Reassemble an image cut into shuffled vertical strips"
)]
/// Command-line arguments for the reconstruction tool
pub struct Cli {
    /// Shredded image to reconstruct
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination of the reconstructed image
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Width of each shred in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_SHRED_WIDTH)]
    pub shred_width: u32,

    /// Pixel metric used to score seams
    #[arg(short, long, value_enum, default_value_t = CostModel::LogSquared)]
    pub cost_model: CostModel,

    /// Output encoding, independent of the output file extension
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Jpeg)]
    pub format: OutputFormat,

    /// Compute edge costs on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Shuffle the input's shreds with this seed instead of reconstructing
    #[arg(short, long, value_name = "SEED")]
    pub shuffle: Option<u64>,

    /// Suppress progress output and informational logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Reconstruction parameters selected on the command line
    pub const fn config(&self) -> UnshredConfig {
        UnshredConfig {
            shred_width: self.shred_width,
            cost_model: self.cost_model,
            parallel: !self.sequential,
        }
    }
}

/// Runs one reconstruction or shuffle from the parsed arguments
pub struct FileProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process the input according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be loaded, the image cannot be
    /// reconstructed, or the output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let start_time = Instant::now();
        let unshredder = Unshredder::new(self.cli.config())?;
        let source = load_source(&self.cli.input)?;
        let layout = ShredLayout::for_source(&source, self.cli.shred_width)?;

        let output = if let Some(seed) = self.cli.shuffle {
            let shuffled = shuffle_shreds(&source, &layout, seed);
            log::info!(
                "Shuffled {} shreds with seed {seed}; restoring order is {:?}",
                layout.shred_count(),
                shuffled.expected_order()
            );
            shuffled.image
        } else {
            self.progress_manager
                .start_image(&self.cli.input, layout.shred_count());

            let progress = &self.progress_manager;
            let result = unshredder.reconstruct_with_progress(&source, &|| progress.row_done());

            let reconstruction = match result {
                Ok(reconstruction) => reconstruction,
                Err(error) => {
                    self.progress_manager.abandon();
                    return Err(error);
                }
            };
            self.progress_manager.complete_image(start_time.elapsed());

            assemble(&source, &reconstruction.layout, &reconstruction.order)
        };

        export_image(&output, &self.cli.output, self.cli.format)?;
        log::debug!("Finished in {:.2?}", start_time.elapsed());

        Ok(())
    }
}
