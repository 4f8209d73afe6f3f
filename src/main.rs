//! savour-api - recipe persistence for the Savour cookbook.
//! Copyright (C) 2024  savour contributors
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use std::path::{Path, PathBuf};

use color_eyre::{
	Section,
	eyre::{self, WrapErr},
};
use savour_api::recipes::{InMemoryRecipeStore, MySqlRecipeStore, RecipeStore};
use tokio::net::TcpListener;

use self::config::{Config, StoreBackend};

mod cli;
mod config;
mod runtime;
mod signal;
mod telemetry;

fn main() -> eyre::Result<()>
{
	color_eyre::install()?;

	let cli_args = cli::args();
	let cli::Args::Serve { config_path, env_file, .. } = &cli_args;
	let env_file = load_env_file(env_file.as_deref())?;

	let mut config = match config_path.as_deref() {
		Some(path) => Config::load_from_file(path)?,
		None => Config::default(),
	};

	config.apply_environment()?;
	cli_args.apply_to_config(&mut config);

	let _guard = telemetry::init(&config.tracing).wrap_err("failed to initialize tracing")?;

	runtime::panic_hook::install();

	if let Some(path) = env_file {
		tracing::debug!(?path, "loaded environment variables");
	}

	tracing::debug!(?config);

	runtime::build(&config.runtime)
		.wrap_err("failed to build tokio runtime")?
		.block_on(serve(config))
}

/// Loads `path`, or `./.env` if no path was given.
///
/// A missing `./.env` is fine; a missing custom file is not.
fn load_env_file(path: Option<&Path>) -> eyre::Result<Option<PathBuf>>
{
	if let Some(path) = path {
		return dotenvy::from_path(path)
			.wrap_err_with(|| format!("failed to load environment file {path:?}"))
			.map(|()| Some(path.to_path_buf()));
	}

	match dotenvy::dotenv() {
		Ok(path) => Ok(Some(path)),
		Err(err) if err.not_found() => Ok(None),
		Err(err) => Err(err).wrap_err("failed to load `.env` file"),
	}
}

async fn serve(config: Config) -> eyre::Result<()>
{
	match config.database.backend {
		StoreBackend::Mysql => {
			let database = savour_api::database::connect(config.database.connect_options())
				.await
				.wrap_err("failed to connect to database")
				.suggestion("make sure the database is running and `DATABASE_URL` is correct")?;

			serve_with(MySqlRecipeStore::new(database), &config).await
		},
		StoreBackend::Memory => {
			tracing::warn!("using in-memory store; recipes will be lost on shutdown");
			serve_with(InMemoryRecipeStore::new(), &config).await
		},
	}
}

async fn serve_with<S: RecipeStore>(store: S, config: &Config) -> eyre::Result<()>
{
	let router = savour_api::http::router(store)
		.allowed_origins(config.http.cors.allowed_origins().collect())
		.include_http_headers(config.tracing.include_http_headers)
		.build();

	let socket_addr = config.http.socket_addr();
	let tcp_listener = TcpListener::bind(socket_addr)
		.await
		.wrap_err_with(|| format!("failed to bind to {socket_addr}"))?;

	tracing::info!("listening on http://{}", tcp_listener.local_addr()?);

	axum::serve(tcp_listener, router)
		.with_graceful_shutdown(signal::shutdown())
		.await
		.wrap_err("failed to run http server")?;

	tracing::info!("shut down");

	Ok(())
}
