use super::{ColorMode, Host};
use crate::Result;
use crate::attributes::{ChainResolver, EnvResolver, MapResolver, OutputsResolver};
use crate::config::Config;
use crate::control::{ControlResult, Outcome};
use crate::query::ArmClient;
use crate::reports::{ReportFormat, generate_console, generate_json};
use camino::Utf8PathBuf;
use clap::Args;
use core::time::Duration;
use ohno::{app_err, bail};

/// Log target for the check command
const LOG_TARGET: &str = "check";

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Configuration file [default: ./resource-controls.toml when present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// `terraform output -json` file to read attributes from
    #[arg(long, value_name = "PATH")]
    pub outputs: Option<Utf8PathBuf>,

    /// Set an attribute directly; takes precedence over every other source
    #[arg(long = "attr", value_name = "NAME=VALUE", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,

    /// Azure subscription that owns the resource group
    #[arg(long, value_name = "ID")]
    pub subscription: Option<String>,

    /// Give up on the lookup after this long (e.g. "10s", "2m")
    #[arg(long, value_name = "DURATION", value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    pub format: ReportFormat,

    /// Whether to color console output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("attribute name missing in '{s}'"));
    }

    Ok((name.to_string(), value.to_string()))
}

/// Run the configured control and report its result.
pub async fn check_control(host: &mut impl Host, args: &CheckArgs) -> Result<Outcome> {
    let base_dir = host.current_dir()?;

    let mut config = Config::load(&base_dir, args.config.as_ref())?;
    apply_overrides(&mut config, args);
    config.validate()?;

    let vars = host.env_vars();
    let resolver = build_resolver(&config, args, vars.clone())?;

    let token = lookup(&vars, &config.query.token_env)
        .ok_or_else(|| app_err!("no access token found; set the {} environment variable", config.query.token_env))?;

    if config.query.subscription_id.trim().is_empty() {
        bail!("no subscription id configured; set query.subscription_id or pass --subscription");
    }

    let client = ArmClient::new(config.endpoint_url()?, config.query.subscription_id.as_str(), token)?
        .with_api_version(config.query.api_version.as_str());

    let control = config.control()?;
    log::info!(target: LOG_TARGET, "Running control '{}' ({})", control.id(), control.title());

    let result = control.run(&resolver, &client).await.map_err(|e| app_err!("{e}"))?;

    let no_color = lookup(&vars, "NO_COLOR").is_some();
    report(host, &result, args.format, args.color.use_colors(no_color))?;

    Ok(result.outcome())
}

fn apply_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(subscription) = &args.subscription {
        config.query.subscription_id.clone_from(subscription);
    }

    if let Some(timeout) = args.timeout {
        config.query.timeout = timeout;
    }

    if let Some(outputs) = &args.outputs {
        config.attributes.outputs_file = Some(outputs.clone());
    }
}

/// Attribute sources in precedence order: `--attr`, outputs file, environment.
fn build_resolver(config: &Config, args: &CheckArgs, vars: Vec<(String, String)>) -> Result<ChainResolver> {
    let mut chain = ChainResolver::new();

    if !args.attrs.is_empty() {
        chain.push(args.attrs.iter().cloned().collect::<MapResolver>());
    }

    if let Some(path) = &config.attributes.outputs_file {
        log::debug!(target: LOG_TARGET, "Reading attributes from '{path}'");
        chain.push(OutputsResolver::load(path).map_err(|e| app_err!("{e}"))?);
    }

    chain.push(EnvResolver::from_vars(config.attributes.env_prefix.as_str(), vars));
    Ok(chain)
}

fn lookup(vars: &[(String, String)], name: &str) -> Option<String> {
    vars.iter()
        .find(|(key, value)| key == name && !value.is_empty())
        .map(|(_, value)| value.clone())
}

fn report(host: &mut impl Host, result: &ControlResult, format: ReportFormat, use_colors: bool) -> Result<()> {
    let mut output = host.output();
    match format {
        ReportFormat::Console => generate_console(result, use_colors, &mut output),
        ReportFormat::Json => generate_json(result, &mut output),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::attributes::AttributeResolver;

    fn args() -> CheckArgs {
        CheckArgs {
            config: None,
            outputs: None,
            attrs: Vec::new(),
            subscription: None,
            timeout: None,
            format: ReportFormat::Console,
            color: ColorMode::Never,
        }
    }

    #[test]
    fn test_parse_attr() {
        assert_eq!(
            parse_attr("cluster_name=aks-prod-01").unwrap(),
            ("cluster_name".to_string(), "aks-prod-01".to_string())
        );
        assert_eq!(parse_attr("x=a=b").unwrap(), ("x".to_string(), "a=b".to_string()));
        assert_eq!(parse_attr("x=").unwrap(), ("x".to_string(), String::new()));
        assert!(parse_attr("cluster_name").is_err());
        assert!(parse_attr("=value").is_err());
    }

    #[test]
    fn test_overrides_win() {
        let mut config = Config::default();
        let mut args = args();
        args.subscription = Some("sub-9".to_string());
        args.timeout = Some(Duration::from_secs(3));
        args.outputs = Some(Utf8PathBuf::from("outputs.json"));

        apply_overrides(&mut config, &args);
        assert_eq!(config.query.subscription_id, "sub-9");
        assert_eq!(config.query.timeout, Duration::from_secs(3));
        assert_eq!(config.attributes.outputs_file, Some(Utf8PathBuf::from("outputs.json")));
    }

    #[test]
    fn test_resolver_precedence() {
        let config = Config::default();
        let mut args = args();
        args.attrs = vec![("cluster_name".to_string(), "from-args".to_string())];
        let vars = vec![
            ("RC_ATTR_CLUSTER_NAME".to_string(), "from-env".to_string()),
            ("RC_ATTR_RESOURCE_GROUP".to_string(), "rg-env".to_string()),
        ];

        let resolver = build_resolver(&config, &args, vars).unwrap();
        assert_eq!(resolver.get("cluster_name").unwrap(), "from-args");
        assert_eq!(resolver.get("resource_group").unwrap(), "rg-env");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_resolver_outputs_file_beats_env() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("outputs.json")).unwrap();
        std::fs::write(&path, r#"{"resource_group": {"value": "rg-tf"}}"#).unwrap();

        let mut config = Config::default();
        config.attributes.outputs_file = Some(path);
        let vars = vec![("RC_ATTR_RESOURCE_GROUP".to_string(), "rg-env".to_string())];

        let resolver = build_resolver(&config, &args(), vars).unwrap();
        assert_eq!(resolver.get("resource_group").unwrap(), "rg-tf");
    }

    #[test]
    fn test_lookup_skips_empty_values() {
        let vars = vec![("TOKEN".to_string(), String::new())];
        assert_eq!(lookup(&vars, "TOKEN"), None);
        assert_eq!(lookup(&vars, "OTHER"), None);
    }
}
