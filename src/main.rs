// SPDX-License-Identifier: MPL-2.0
//! Command-line front end for the layout-fit engine.
//!
//! ```text
//! player_view [--video WxH] [--screen WxH] [--container W] [--fit MODE]
//!             [--fullscreen] [--lang LOCALE]
//! ```

use player_view::config;
use player_view::domain::layout::{FitMode, ScreenMetrics};
use player_view::domain::video::VideoSize;
use player_view::i18n::I18n;
use player_view::ui::compute_layout;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "player_view=info";

struct Args {
    video: (u32, u32),
    screen: Option<(u32, u32)>,
    container: Option<u32>,
    fit: Option<FitMode>,
    fullscreen: bool,
    lang: Option<String>,
}

fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width = width.trim().parse::<u32>().map_err(|err| err.to_string())?;
    let height = height.trim().parse::<u32>().map_err(|err| err.to_string())?;
    Ok((width, height))
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let parsed = Args {
        video: args
            .opt_value_from_fn("--video", parse_size)?
            .unwrap_or((1920, 1080)),
        screen: args.opt_value_from_fn("--screen", parse_size)?,
        container: args.opt_value_from_str("--container")?,
        fit: args.opt_value_from_str("--fit")?,
        fullscreen: args.contains("--fullscreen"),
        lang: args.opt_value_from_str("--lang")?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(parsed)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let config = config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "using default settings");
        config::Config::default()
    });
    let i18n = I18n::new(args.lang, &config);

    let metrics = args.screen.map_or_else(ScreenMetrics::default, |(width, height)| {
        ScreenMetrics::new(width, height, height)
    });
    let fit = args.fit.unwrap_or_else(|| config.fit_mode());
    let container = args.container.unwrap_or(metrics.width);
    let video = VideoSize::new(args.video.0, args.video.1);

    let layout = compute_layout(video, container, args.fullscreen, fit, metrics);
    tracing::debug!(?layout, %fit, "layout computed");

    let width = layout.surface_width.to_string();
    let height = layout.surface_height.to_string();
    let container_height = layout.container_height.to_string();
    println!(
        "{}",
        i18n.tr_with_args(
            "cli-layout-result",
            &[
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("container", container_height.as_str()),
            ],
        )
    );
    ExitCode::SUCCESS
}
