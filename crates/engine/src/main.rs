//! Scorebook Engine - replays a scoresheet and reports the line score and
//! batting lines.
//!
//! Usage: `scorebook-engine [SCORESHEET.json]`, falling back to `SCOREBOOK_SCRIPT`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scorebook_engine::infrastructure::{
    clock::SystemClock, config::EngineConfig, memory::InMemoryRepositories,
};
use scorebook_engine::scoresheet::{self, Scoresheet};
use scorebook_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root when run from `crates/engine`.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scorebook_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env();
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.script.clone())
        .context("no scoresheet given: pass a path or set SCOREBOOK_SCRIPT")?;

    tracing::info!(path = %path.display(), "Replaying scoresheet");
    let sheet = Scoresheet::load(&path)
        .with_context(|| format!("loading scoresheet {}", path.display()))?;

    let app = App::new(
        InMemoryRepositories::new(),
        Arc::new(SystemClock::new()),
        config,
    );
    let summary = scoresheet::replay(&app, sheet).await?;

    for entry in summary.line_score.entries() {
        tracing::info!(
            inning = entry.inning,
            half = %entry.half,
            runs = entry.runs,
            "Line score"
        );
    }
    if let Some(score) = summary.game.final_score() {
        tracing::info!(
            opponent = %summary.game.opponent(),
            team_runs = score.team_runs,
            opponent_runs = score.opponent_runs,
            win = score.is_win(),
            "Final"
        );
    }
    if summary.ended_early() {
        tracing::info!(
            innings_played = summary.innings_played,
            scheduled = summary.scheduled_innings,
            "Game ended before the scheduled innings"
        );
    }

    for (name, line) in &summary.players {
        tracing::info!(
            player = %name,
            ab = line.at_bats(),
            h = line.hits(),
            r = line.runs(),
            rbi = line.rbis(),
            bb = line.walks(),
            so = line.strikeouts(),
            avg = line.batting_average(),
            obp = line.on_base_percentage(),
            slg = line.slugging_percentage(),
            ops = line.ops(),
            "Batting line"
        );
    }
    tracing::info!(
        ab = summary.team.counters.at_bats,
        h = summary.team.counters.hits,
        avg = summary.team.metrics.batting_average,
        ops = summary.team.metrics.ops,
        "Team"
    );

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
