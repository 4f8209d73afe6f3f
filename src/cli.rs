use std::net::IpAddr;
use std::path::Path;

pub(crate) fn args() -> Args
{
	<Args as clap::Parser>::parse()
}

/// Recipe storage API
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) enum Args
{
	/// Run the HTTP server
	#[clap(name = "serve")]
	Serve
	{
		/// Path to a TOML configuration file
		///
		/// Built-in defaults are used if this is omitted.
		#[arg(long = "config", value_name = "FILE")]
		config_path: Option<Box<Path>>,

		/// Load environment variables from this file instead of `./.env`
		#[arg(long, value_name = "FILE")]
		env_file: Option<Box<Path>>,

		/// The IP address the server should listen on
		#[arg(long = "ip")]
		ip_addr: Option<IpAddr>,

		/// The port the server should listen on
		#[arg(long)]
		port: Option<u16>,
	},
}

impl Args
{
	/// Applies CLI overrides to a loaded configuration.
	pub(crate) fn apply_to_config(&self, config: &mut crate::config::Config)
	{
		let Self::Serve { ip_addr, port, .. } = self;

		if let Some(ip_addr) = *ip_addr {
			config.http.ip_addr = ip_addr;
		}

		if let Some(port) = *port {
			config.http.port = port;
		}
	}
}

#[cfg(test)]
mod tests
{
	use std::net::Ipv4Addr;

	use clap::Parser;

	use super::*;
	use crate::config::Config;

	#[test]
	fn serve_flags() -> color_eyre::Result<()>
	{
		let args = Args::try_parse_from([
			"savour-api",
			"serve",
			"--config",
			"savour.toml",
			"--ip",
			"0.0.0.0",
			"--port",
			"9000",
		])?;

		let Args::Serve { ref config_path, ref env_file, .. } = args;
		assert_eq!(config_path.as_deref(), Some(Path::new("savour.toml")));
		assert!(env_file.is_none());

		let mut config = Config::default();
		args.apply_to_config(&mut config);

		assert_eq!(config.http.ip_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
		assert_eq!(config.http.port, 9000);

		Ok(())
	}

	#[test]
	fn no_overrides_keep_config() -> color_eyre::Result<()>
	{
		let args = Args::try_parse_from(["savour-api", "serve"])?;
		let mut config = Config::default();
		args.apply_to_config(&mut config);

		assert_eq!(config.http.ip_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
		assert_eq!(config.http.port, 8080);

		Ok(())
	}
}
