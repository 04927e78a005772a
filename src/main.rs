use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use take_six::presentation::{prompt_menu, prompt_play_again, prompt_player_count, write_rules};
use take_six::{GameConfig, GameSession, MenuChoice, TerminalPresenter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the prompts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "take_six=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base = GameConfig::from_env().context("invalid TAKE_SIX_* environment")?;
    let mut presenter = TerminalPresenter::stdin();

    loop {
        let choice = {
            let (mut lines, out) = presenter.split();
            prompt_menu(&mut lines, out)?
        };

        match choice {
            MenuChoice::Play => {
                let count = {
                    let (mut lines, out) = presenter.split();
                    prompt_player_count(&mut lines, out)?
                };
                let Some(count) = count else { return Ok(()) };
                let config = base.clone().with_player_count(count)?;
                play_games(&config, &mut presenter)?;
            }
            MenuChoice::HowToPlay => write_rules(presenter.output())?,
            MenuChoice::Exit => return Ok(()),
        }
    }
}

/// Play until the human declines another game.
fn play_games(config: &GameConfig, presenter: &mut TerminalPresenter) -> anyhow::Result<()> {
    for game in 0u64.. {
        let mut config = config.clone();
        // A fixed seed still gives a different deal each game.
        if let Some(seed) = config.seed {
            config = config.with_seed(seed.wrapping_add(game));
        }

        let mut session = GameSession::new(config)?;
        tracing::info!(game, seed = session.seed(), "starting game");
        session.run(presenter)?;

        let again = {
            let (mut lines, out) = presenter.split();
            prompt_play_again(&mut lines, out)?
        };
        if !again {
            break;
        }
    }
    Ok(())
}
