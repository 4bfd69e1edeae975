mod config;
mod error;
mod models;
mod utils;

use dotenv::dotenv;
use log::{error, info};
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};

use crate::config::Config;
use crate::utils::portal::{fetch_report, login};
use crate::utils::retry::RetryPolicy;
use crate::utils::session::SessionClient;
use crate::utils::store::{MemorySessionStore, SessionStore};

// One run is one user interaction: log in, fetch the results page, print
// the report. A chat front-end would drive the same calls per user.
#[tokio::main]
async fn main() {
    // Environment variables from a `.env` file, if present.
    dotenv().ok();

    // Terminal logging with mixed output and automatic color support.
    TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return;
        }
    };

    let session = match SessionClient::new(&config.login_url) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to build the web session: {}", e);
            return;
        }
    };

    let policy = RetryPolicy::default();
    let user = config.credentials.username.clone();
    let mut sessions = MemorySessionStore::new();

    let logged_in = match login(&session, &policy, &config.login_url, &config.credentials).await {
        Ok(logged_in) => logged_in,
        Err(e) => {
            error!("Error reaching the portal: {}", e);
            return;
        }
    };

    if !logged_in {
        println!("❌ Login failed. Please try again.");
        return;
    }
    info!("Login successful");

    // The authenticated session lives in the store for the rest of the
    // run; a front-end holding several users would keep one per user.
    sessions.put(&user, session);

    if let Some(session) = sessions.get(&user) {
        let report = fetch_report(&session, &policy, &config.result_url).await;
        println!("{}", report);
    }

    sessions.evict(&user);
}
