use std::io;
use std::process::ExitCode;

use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rust_guess::{game, Console, GameRng};

/// Log to stderr, silent unless `RUST_LOG` asks for more.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), io::stderr());
    let mut rng = GameRng::from_entropy();

    // The sole translation of game results to a process exit status:
    // any completed game is a success, any validation or stream failure
    // is not. Diagnostics were already written at the point of failure.
    match game::run(&mut console, &mut rng) {
        Ok(outcome) => {
            debug!(?outcome, "game over");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "run aborted");
            ExitCode::FAILURE
        }
    }
}
