use crate::{
    algorithm::cancellation::CancellationToken,
    algorithm::chain::build_order,
    algorithm::cost::CostModel,
    algorithm::matching::{Matching, greedy_match},
    algorithm::table::{EdgeCostTable, TableOptions},
    io::configuration::DEFAULT_SHRED_WIDTH,
    io::error::{Result, invalid_parameter},
    spatial::{PixelSource, ShredLayout},
};

/// Parameters controlling how an image is split and scored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnshredConfig {
    /// Width of every shred in pixels
    pub shred_width: u32,
    /// Pixel metric used for edge costs
    pub cost_model: CostModel,
    /// Whether the cost table is computed on the rayon thread pool
    pub parallel: bool,
}

impl Default for UnshredConfig {
    fn default() -> Self {
        Self {
            shred_width: DEFAULT_SHRED_WIDTH,
            cost_model: CostModel::default(),
            parallel: true,
        }
    }
}

/// Everything derived while reconstructing one image
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// Shred geometry of the source
    pub layout: ShredLayout,
    /// Edge costs between every pair of shreds
    pub costs: EdgeCostTable,
    /// Links accepted by the greedy matcher
    pub matching: Matching,
    /// Left-to-right shred order
    pub order: Vec<usize>,
}

/// Runs layout, cost table, matching and chain building for a source image
#[derive(Debug, Clone)]
pub struct Unshredder {
    config: UnshredConfig,
    cancellation: CancellationToken,
}

impl Unshredder {
    /// Create an unshredder with validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the shred width is zero
    pub fn new(config: UnshredConfig) -> Result<Self> {
        if config.shred_width == 0 {
            return Err(invalid_parameter(
                "shred_width",
                &config.shred_width,
                &"shred width must be at least one pixel",
            ));
        }

        Ok(Self {
            config,
            cancellation: CancellationToken::new(),
        })
    }

    /// Share an existing cancellation token
    #[must_use]
    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// Token that stops the cost table computation when cancelled
    pub const fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Active configuration
    pub const fn config(&self) -> &UnshredConfig {
        &self.config
    }

    /// Reconstruct the shred order of `source`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source does not store 8-bit samples
    /// - The image holds no complete shred
    /// - The computation is cancelled
    /// - The greedy matching does not form a single chain
    pub fn reconstruct<S>(&self, source: &S) -> Result<Reconstruction>
    where
        S: PixelSource + Sync + ?Sized,
    {
        self.reconstruct_with_progress(source, &|| {})
    }

    /// Reconstruct the shred order, reporting each finished cost table row
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source does not store 8-bit samples
    /// - The image holds no complete shred
    /// - The computation is cancelled
    /// - The greedy matching does not form a single chain
    pub fn reconstruct_with_progress<S>(
        &self,
        source: &S,
        on_row: &(dyn Fn() + Sync),
    ) -> Result<Reconstruction>
    where
        S: PixelSource + Sync + ?Sized,
    {
        source.check_samples()?;
        let layout = ShredLayout::for_source(source, self.config.shred_width)?;
        log::info!(
            "Image {}x{} holds {} shreds of width {}",
            layout.image_width(),
            layout.height(),
            layout.shred_count(),
            layout.shred_width()
        );
        if layout.ignored_columns() > 0 {
            log::warn!(
                "Ignoring {} trailing columns that do not fill a shred",
                layout.ignored_columns()
            );
        }

        let options = TableOptions {
            parallel: self.config.parallel,
            cancellation: self.cancellation.clone(),
            on_row,
        };
        let costs = EdgeCostTable::compute_with(source, &layout, &self.config.cost_model, &options)?;

        let matching = greedy_match(&costs);
        let order = build_order(&matching)?;
        log::info!("Recovered order {order:?}");

        Ok(Reconstruction {
            layout,
            costs,
            matching,
            order,
        })
    }
}
