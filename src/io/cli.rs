//! Command-line interface for scoring PNG artwork files

use crate::io::configuration::{DEFAULT_SEED, DEFAULT_TRIALS};
use crate::io::error::{ForgeError, Result};
use crate::io::image::load_artwork;
use crate::io::progress::ProgressManager;
use crate::io::report::{render_report, render_simulation};
use crate::metadata::attributes::prepare_metadata_draft;
use crate::rarity::engine::RaritySelector;
use crate::rarity::stats::compute_rarity_stats;
use crate::rarity::tier::RarityTier;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pixelforge")]
#[command(
    author,
    version,
    about = "Score pixel art rarity odds and roll NFT rarity tiers"
)]
/// Command-line arguments for the rarity scoring tool
pub struct Cli {
    /// Input PNG file or directory to score
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible rolls
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Run a Monte-Carlo verification with this many rolls
    #[arg(short, long, num_args = 0..=1, default_missing_value = "10000")]
    pub trials: Option<u64>,

    /// Print the NFT metadata attribute document as JSON
    #[arg(short, long)]
    pub attributes: bool,

    /// NFT name for the metadata document (defaults to the file stem)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Creator message embedded as a metadata attribute
    #[arg(short, long)]
    pub message: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Roll count for the simulation pass, if one was requested
    ///
    /// A zero count falls back to the default so `--trials` always
    /// simulates something observable.
    pub fn simulation_trials(&self) -> Option<u64> {
        self.trials.map(|t| if t == 0 { DEFAULT_TRIALS } else { t })
    }
}

/// Orchestrates batch scoring of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Score files according to CLI arguments
    ///
    /// All files share one seeded selector, so a batch run consumes draws
    /// in file order and is reproducible end to end.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, artwork loading, or metadata
    /// preparation fails.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut selector = RaritySelector::new(self.cli.seed);

        for file in &files {
            self.score_file(file, &mut selector)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(crate::io::error::io_error("Target file must be a PNG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target).map_err(|e| {
                ForgeError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read directory",
                    source: e,
                }
            })? {
                let path = entry
                    .map_err(|e| ForgeError::FileSystem {
                        path: self.cli.target.clone(),
                        operation: "read directory entry",
                        source: e,
                    })?
                    .path();
                if path.extension().and_then(|s| s.to_str()) == Some("png") {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    // Allow print for the user-facing report output
    #[allow(clippy::print_stdout)]
    fn score_file(&self, input_path: &Path, selector: &mut RaritySelector) -> Result<()> {
        let grid = load_artwork(input_path)?;
        let pixels = grid.to_pixel_map();
        let outcome = compute_rarity_stats(&pixels, grid.size(), selector);

        let label = input_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        print!("{}", render_report(&label, &outcome, grid.size()));

        if let Some(trials) = self.cli.simulation_trials() {
            let bar = self
                .progress_manager
                .as_ref()
                .map(|pm| pm.simulation_bar(&label, trials));

            let mut counts = [0_u64; RarityTier::COUNT];
            for _ in 0..trials {
                let tier = selector.roll_table(&outcome.probabilities);
                if let Some(slot) = counts.get_mut(tier.index()) {
                    *slot += 1;
                }
                if let Some(ref bar) = bar {
                    bar.inc(1);
                }
            }

            if let Some(bar) = bar {
                bar.finish_and_clear();
            }

            print!(
                "{}",
                render_simulation(&outcome.probabilities, &counts, trials)
            );
        }

        if self.cli.attributes {
            let name = match self.cli.name {
                Some(ref name) => name.clone(),
                None => input_path
                    .file_stem()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            };

            let draft = prepare_metadata_draft(
                &name,
                &outcome,
                grid.size(),
                self.cli.message.as_deref(),
            )?;
            let json =
                serde_json::to_string_pretty(&draft).map_err(|e| ForgeError::Serialization {
                    document: "metadata draft",
                    source: e,
                })?;
            println!("{json}");
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }
}
