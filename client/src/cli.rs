use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Play Quoridor matches between registered agents")]
pub struct Cli {
    /// Agent taking the first seat in game one.
    #[arg(long, default_value = "walker")]
    pub player1: String,

    /// Agent taking the second seat in game one.
    #[arg(long, default_value = "random")]
    pub player2: String,

    /// Number of games to play; seats alternate between games.
    #[arg(long)]
    pub games: Option<usize>,

    /// HOCON file with game and match options.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Draw the board after every move.
    #[arg(long)]
    pub visualise: bool,
}
