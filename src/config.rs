//! Engine constants and runtime configuration for the command line front end.

use crate::models::MAX_LENGTH;
use std::error::Error;
use std::str::FromStr;

/// Rows returned by an enumeration unless the caller asks otherwise.
pub const DEFAULT_ENUMERATION_LIMIT: usize = 256;

/// log4rs configuration file used when `SUBNET_LOG_CONFIG` is not set.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Longest prefix length accepted on the command line.
pub const MAX_PREFIX: u8 = MAX_LENGTH;

pub const USAGE: &str = "usage: ipv4-subnet-engine <address> <cidr> [parent_cidr]";

/// How the binary renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Context,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "context" => Ok(OutputFormat::Context),
            other => Err(format!("Unknown output format '{other}', expected table|json|context").into()),
        }
    }
}

/// Inputs for one run of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub address: String,
    pub cidr: u8,
    pub parent_cidr: Option<u8>,
    pub limit: usize,
    pub output: OutputFormat,
    pub log_config: String,
}

impl Config {
    /// Build from positional arguments (program name already stripped) and
    /// an environment lookup.
    ///
    /// Reads `SUBNET_ENUM_LIMIT`, `SUBNET_OUTPUT` and `SUBNET_LOG_CONFIG`.
    pub fn from_args<F>(args: &[String], env: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (address, cidr, parent_cidr) = match args {
            [address, cidr] => (address, cidr, None),
            [address, cidr, parent] => (address, cidr, Some(parent)),
            _ => return Err(USAGE.into()),
        };

        let cidr = parse_prefix(cidr)?;
        let parent_cidr = parent_cidr.map(|p| parse_prefix(p)).transpose()?;

        let limit = match env("SUBNET_ENUM_LIMIT") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid SUBNET_ENUM_LIMIT '{v}'"))?,
            None => DEFAULT_ENUMERATION_LIMIT,
        };
        let output = match env("SUBNET_OUTPUT") {
            Some(v) => v.parse()?,
            None => OutputFormat::Table,
        };
        let log_config = env("SUBNET_LOG_CONFIG").unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string());

        Ok(Config {
            address: address.trim().to_string(),
            cidr,
            parent_cidr,
            limit,
            output,
            log_config,
        })
    }

    /// Build from the process arguments and environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Config::from_args(&args, |key| std::env::var(key).ok())
    }
}

/// Accepts `24` or `/24`, up to [`MAX_PREFIX`].
fn parse_prefix(text: &str) -> Result<u8, Box<dyn Error>> {
    let text = text.trim();
    let digits = text.strip_prefix('/').unwrap_or(text);
    let prefix = digits
        .parse::<u8>()
        .map_err(|_| format!("Invalid prefix length '{text}'\n{USAGE}"))?;
    if prefix > MAX_PREFIX {
        return Err(format!("Prefix length '{text}' is above /{MAX_PREFIX}\n{USAGE}").into());
    }
    Ok(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_args(&args(&["192.168.1.10", "26"]), |_| None).unwrap();
        assert_eq!(config.address, "192.168.1.10");
        assert_eq!(config.cidr, 26);
        assert_eq!(config.parent_cidr, None);
        assert_eq!(config.limit, DEFAULT_ENUMERATION_LIMIT);
        assert_eq!(config.output, OutputFormat::Table);
        assert_eq!(config.log_config, DEFAULT_LOG_CONFIG);
    }

    #[test]
    fn test_config_from_env() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SUBNET_ENUM_LIMIT", "16"),
            ("SUBNET_OUTPUT", "JSON"),
            ("SUBNET_LOG_CONFIG", "/tmp/log.yml"),
        ]);
        let config = Config::from_args(&args(&["10.0.0.1", "/30", "/8"]), |k| {
            env.get(k).map(|v| v.to_string())
        })
        .unwrap();
        assert_eq!(config.cidr, 30);
        assert_eq!(config.parent_cidr, Some(8));
        assert_eq!(config.limit, 16);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_config, "/tmp/log.yml");
    }

    #[test]
    fn test_config_errors() {
        assert!(Config::from_args(&args(&["10.0.0.1"]), |_| None).is_err());
        assert!(Config::from_args(&args(&["10.0.0.1", "x"]), |_| None).is_err());
        assert!(Config::from_args(&args(&["10.0.0.1", "24", "8", "extra"]), |_| None).is_err());
        assert!(Config::from_args(&args(&["10.0.0.1", "24"]), |k| {
            (k == "SUBNET_OUTPUT").then(|| "xml".to_string())
        })
        .is_err());
    }

    #[test]
    fn test_config_prefix_range() {
        let config = Config::from_args(&args(&["10.0.0.1", "/32", "0"]), |_| None).unwrap();
        assert_eq!(config.cidr, MAX_PREFIX);
        assert_eq!(config.parent_cidr, Some(0));

        let err = Config::from_args(&args(&["10.0.0.1", "33"]), |_| None).unwrap_err();
        assert!(err.to_string().starts_with("Prefix length '33' is above /32"));
        assert!(Config::from_args(&args(&["10.0.0.1", "24", "/40"]), |_| None).is_err());
    }

    #[test]
    fn test_config_usage_message() {
        let err = Config::from_args(&args(&[]), |_| None).unwrap_err();
        assert_eq!(err.to_string(), USAGE);
        let err = Config::from_args(&args(&["10.0.0.1", "x"]), |_| None).unwrap_err();
        assert_eq!(err.to_string(), format!("Invalid prefix length 'x'\n{USAGE}"));
    }
}
