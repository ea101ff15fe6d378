//! Subcommand implementations

use std::cmp::Ordering;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use semrange::{FourPartVersion, RangeParser, SemanticVersion, Semver};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version to parse
    pub version: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,

    /// Report equality only when every field, build metadata included, matches
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct SatisfiesArgs {
    /// Range query, e.g. ">=1.2.0 && <2.0.0"
    pub range: String,

    /// Versions to test
    #[arg(required = true)]
    pub versions: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Platform version, e.g. 10.0.19041.1
    pub version: String,
}

#[derive(Serialize, Debug)]
struct VersionInfo {
    version: String,
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    prerelease: String,
    build: String,
    has_wildcard: bool,
}

impl From<&SemanticVersion> for VersionInfo {
    fn from(version: &SemanticVersion) -> Self {
        VersionInfo {
            version: version.to_string(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            prerelease: version.prerelease().to_string(),
            build: version.build().to_string(),
            has_wildcard: version.has_wildcard(),
        }
    }
}

fn component(value: Option<u64>) -> String {
    value.map_or_else(|| semrange::WILDCARD.to_string(), |v| v.to_string())
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    }
}

fn parse_version(input: &str) -> Result<SemanticVersion> {
    SemanticVersion::parse(input).with_context(|| format!("Could not parse version \"{}\"", input))
}

pub fn parse(args: ParseArgs) -> Result<i32> {
    let version = parse_version(&args.version)?;
    let info = VersionInfo::from(&version);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(0);
    }

    println!("version:      {}", info.version);
    println!("major:        {}", component(info.major));
    println!("minor:        {}", component(info.minor));
    println!("patch:        {}", component(info.patch));
    println!("prerelease:   {}", info.prerelease);
    println!("build:        {}", info.build);
    println!("has_wildcard: {}", info.has_wildcard);

    Ok(0)
}

pub fn compare(args: CompareArgs) -> Result<i32> {
    let left = parse_version(&args.left)?;
    let right = parse_version(&args.right)?;

    let ordering = left.precedence_cmp(&right);
    let symbol = if args.strict && ordering == Ordering::Equal && !left.strict_eq(&right) {
        "!="
    } else {
        ordering_symbol(ordering)
    };

    println!("{}", symbol);
    Ok(0)
}

pub fn satisfies(args: SatisfiesArgs) -> Result<i32> {
    let predicate = RangeParser::new()
        .parse(&args.range)
        .with_context(|| format!("Could not parse range \"{}\"", args.range))?;

    let mut matched = 0;
    for input in &args.versions {
        match SemanticVersion::parse(input) {
            Ok(version) if predicate.matches(&version) => {
                println!("{}", input);
                matched += 1;
            }
            Ok(_) => log::debug!("{} does not satisfy {}", input, predicate),
            Err(e) => log::warn!("Skipping \"{}\": {}", input, e),
        }
    }

    Ok(if matched > 0 { 0 } else { 1 })
}

pub fn sort(args: SortArgs) -> Result<i32> {
    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    let sorted = if args.reverse {
        Semver::rsort(&versions)
    } else {
        Semver::sort(&versions)
    };

    for version in sorted {
        println!("{}", version);
    }
    Ok(0)
}

pub fn convert(args: ConvertArgs) -> Result<i32> {
    let platform: FourPartVersion = args
        .version
        .parse()
        .with_context(|| format!("Could not parse platform version \"{}\"", args.version))?;

    println!("{}", SemanticVersion::from(platform));
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_renders_wildcard() {
        assert_eq!(component(Some(3)), "3");
        assert_eq!(component(None), "*");
    }

    #[test]
    fn test_ordering_symbol() {
        assert_eq!(ordering_symbol(Ordering::Less), "<");
        assert_eq!(ordering_symbol(Ordering::Equal), "==");
        assert_eq!(ordering_symbol(Ordering::Greater), ">");
    }

    #[test]
    fn test_version_info_json() {
        let version = SemanticVersion::parse("1.2.*").unwrap();
        let json = serde_json::to_value(VersionInfo::from(&version)).unwrap();
        assert_eq!(json["version"], "1.2.*");
        assert_eq!(json["major"], 1);
        assert!(json["patch"].is_null());
        assert_eq!(json["has_wildcard"], true);
    }

    #[test]
    fn test_satisfies_exit_code() {
        let args = SatisfiesArgs {
            range: ">=2.0.0".to_string(),
            versions: vec!["1.0.0".to_string(), "bogus".to_string()],
        };
        assert_eq!(satisfies(args).unwrap(), 1);

        let args = SatisfiesArgs {
            range: ">=2.0.0".to_string(),
            versions: vec!["2.1.0".to_string()],
        };
        assert_eq!(satisfies(args).unwrap(), 0);
    }

    #[test]
    fn test_satisfies_rejects_bad_range() {
        let args = SatisfiesArgs {
            range: "1.0.0 &&".to_string(),
            versions: vec!["1.0.0".to_string()],
        };
        assert!(satisfies(args).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_version() {
        let args = ParseArgs {
            version: "01.0.0".to_string(),
            json: false,
        };
        assert!(parse(args).is_err());
    }

    #[test]
    fn test_convert() {
        assert_eq!(convert(ConvertArgs { version: "1.2.3.4".to_string() }).unwrap(), 0);
        assert!(convert(ConvertArgs { version: "1".to_string() }).is_err());
    }
}
