#![warn(clippy::pedantic)]

use playtrack::playback::{self, Outcome};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let Some(uri) = std::env::args().nth(1) else {
        println!("Insufficient arguments!");
        std::process::exit(-1);
    };
    let outcome = match playtrack::spotify::init().await {
        Ok(spotify) => playback::play_track(&spotify, &uri).await,
        Err(e) => {
            log::error!("Failed to set up the Spotify session: {e:#}");
            Outcome::Failed
        }
    };
    // Informal result code for callers that parse stdout; the process
    // exit status stays 0 for all three outcomes.
    println!("{}", outcome.code());
}
