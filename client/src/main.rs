mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use common::ConfigLoader;
use dotenv::dotenv;
use env_logger::Env;
use log::info;

use arena::{play_match, AgentRegistry, BoxedAgent, MatchOptions};
use quoridor::{Engine, GameOptions, GameState};

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();

    builder.build()?.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let cli = Cli::parse();

    let (game_options, mut match_options) = match &cli.config {
        Some(path) => {
            let loader = ConfigLoader::new(path)?;
            (loader.load::<GameOptions>()?, loader.load::<MatchOptions>()?)
        }
        None => (GameOptions::default(), MatchOptions::default()),
    };

    if let Some(games) = cli.games {
        match_options.num_games = games;
    }
    match_options.visualise |= cli.visualise;

    let registry = AgentRegistry::with_default_agents();
    let player1 = registry.factory(&cli.player1)?;
    let player2 = registry.factory(&cli.player2)?;
    let make_player1: &dyn Fn() -> BoxedAgent = &|| player1();
    let make_player2: &dyn Fn() -> BoxedAgent = &|| player2();

    info!(
        "{} vs {}: {} games on a {}x{} board, {} walls each, {}ms per move",
        cli.player1,
        cli.player2,
        match_options.num_games,
        game_options.board_size,
        game_options.board_size,
        game_options.walls_per_player,
        match_options.move_timeout_ms
    );

    let engine = Engine::new();
    let result = play_match(
        &engine,
        &|| GameState::new(game_options),
        [make_player1, make_player2],
        &match_options,
    )
    .await;

    info!("{}", serde_json::to_string(&result)?);

    Ok(())
}
