use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use savour_api::http::DEFAULT_ALLOWED_ORIGIN;
use serde::{Deserialize, Deserializer, de};
use url::Url;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct HttpConfig
{
	#[serde(default = "default_ip_addr")]
	pub ip_addr: IpAddr,

	#[serde(default = "default_port")]
	pub port: u16,
	pub cors: CorsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct CorsConfig
{
	/// Origins allowed to make cross-origin requests.
	///
	/// Entries are URLs; only their origin (scheme, host, port) is used.
	#[serde(default = "default_allowed_origins", deserialize_with = "deserialize_allowed_origins")]
	pub allowed_origins: Box<[http::HeaderValue]>,
}

impl HttpConfig
{
	pub(crate) fn socket_addr(&self) -> SocketAddr
	{
		SocketAddr::new(self.ip_addr, self.port)
	}
}

impl Default for HttpConfig
{
	fn default() -> Self
	{
		Self {
			ip_addr: default_ip_addr(),
			port: default_port(),
			cors: CorsConfig::default(),
		}
	}
}

impl CorsConfig
{
	pub(crate) fn allowed_origins(&self) -> impl Iterator<Item = http::HeaderValue>
	{
		self.allowed_origins.iter().cloned()
	}
}

impl Default for CorsConfig
{
	fn default() -> Self
	{
		Self { allowed_origins: default_allowed_origins() }
	}
}

fn default_ip_addr() -> IpAddr
{
	IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16
{
	8080
}

fn default_allowed_origins() -> Box<[http::HeaderValue]>
{
	Box::from([http::HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)])
}

fn deserialize_allowed_origins<'de, D>(
	deserializer: D,
) -> Result<Box<[http::HeaderValue]>, D::Error>
where
	D: Deserializer<'de>,
{
	struct HeaderListVisitor;

	impl<'de> de::Visitor<'de> for HeaderListVisitor
	{
		type Value = Box<[http::HeaderValue]>;

		fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
		{
			fmt.write_str("a list of CORS origins")
		}

		fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
		where
			A: de::SeqAccess<'de>,
		{
			let size_hint = seq.size_hint().unwrap_or_default();
			let mut header_values = Vec::with_capacity(size_hint);

			while let Some(url) = seq.next_element::<Url>()? {
				// `Origin` headers never carry a path, not even `/`
				let origin = url.origin();

				if !origin.is_tuple() {
					return Err(de::Error::custom(format_args!(
						"invalid CORS origin: `{url}` has no host"
					)));
				}

				match http::HeaderValue::try_from(origin.ascii_serialization()) {
					Ok(header_value) => header_values.push(header_value),
					Err(err) => {
						return Err(de::Error::custom(format_args!("invalid CORS origin: {err}")));
					},
				}
			}

			Ok(header_values.into_boxed_slice())
		}
	}

	deserializer.deserialize_seq(HeaderListVisitor)
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn origins_drop_paths_and_default_ports() -> color_eyre::Result<()>
	{
		let config = toml::from_str::<CorsConfig>(
			r#"allowed-origins = ["http://localhost:3000/", "https://savour.example:443/app"]"#,
		)?;

		assert_eq!(&*config.allowed_origins, ["http://localhost:3000", "https://savour.example"]);

		Ok(())
	}

	#[test]
	fn origins_must_have_a_host()
	{
		assert!(
			toml::from_str::<CorsConfig>(r#"allowed-origins = ["file:///tmp/index.html"]"#)
				.is_err_and(|err| err.message().contains("has no host"))
		);
	}

	#[test]
	fn origins_must_be_urls()
	{
		assert!(
			toml::from_str::<CorsConfig>(r#"allowed-origins = ["localhost"]"#)
				.is_err_and(|err| err.message().contains("invalid value"))
		);
	}
}
