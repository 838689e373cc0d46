use crate::models::Preset;
use clap::Parser;
use reel_core::args::CommonArgs;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Valuation rule set to start from (file and REEL_* env values override it)
    #[arg(long, value_enum, default_value_t = Preset::ProfitAndTax)]
    pub preset: Preset,

    /// Use the built-in dashboard watchlist instead of the saved one
    #[arg(long)]
    pub demo: bool,

    /// Seed for the price history generator
    #[arg(long)]
    pub seed: Option<u64>,
}
