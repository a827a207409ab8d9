//! `homolog.toml` configuration and its merge with command-line flags.
//!
//! Precedence, highest first: flags, the configuration file, built-in
//! defaults (the `assets/` layout next to the working directory).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use homolog_ingest::SheetNames;
use homolog_model::HomologationOptions;
use homolog_report::{DEFAULT_OUTPUT, OutputFormat};

use crate::cli::RunArgs;

/// Loaded automatically from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "homolog.toml";
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_ROSTER: &str = "Datos.xlsx";
pub const DEFAULT_TRANSLATIONS: &str = "lut_paises.csv";
pub const DEFAULT_WORKBOOK: &str = "formato.xlsx";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub inputs: InputsSection,
    pub sheets: SheetNames,
    pub output: OutputSection,
    pub options: HomologationOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct InputsSection {
    pub assets_dir: Option<PathBuf>,
    pub roster: Option<PathBuf>,
    pub translations: Option<PathBuf>,
    pub workbook: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    /// JSON run report.
    pub report: Option<PathBuf>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read configuration {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in {}", path.display()))
    }

    /// The file named by `--config`, else `homolog.toml` if it exists, else
    /// an empty configuration.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Fully resolved settings for one `run`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub roster: PathBuf,
    pub translations: PathBuf,
    pub workbook: PathBuf,
    pub sheets: SheetNames,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub report: Option<PathBuf>,
    pub options: HomologationOptions,
    pub dry_run: bool,
}

impl RunSettings {
    pub fn resolve(file: ConfigFile, args: &RunArgs) -> Self {
        let ConfigFile {
            inputs,
            sheets,
            output,
            mut options,
        } = file;
        let assets_dir = args
            .assets_dir
            .clone()
            .or(inputs.assets_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));
        let input = |flag: &Option<PathBuf>, configured: Option<PathBuf>, default: &str| {
            flag.clone()
                .or(configured)
                .unwrap_or_else(|| assets_dir.join(default))
        };

        if let Some(fallback) = args.canonical_fallback {
            options.canonical_fallback = fallback.into();
        }
        if let Some(order) = args.rule_order {
            options.rule_order = order.into();
        }
        if args.no_restore_accents {
            options.restore_accents = false;
        }

        Self {
            roster: input(&args.roster, inputs.roster, DEFAULT_ROSTER),
            translations: input(&args.translations, inputs.translations, DEFAULT_TRANSLATIONS),
            workbook: input(&args.workbook, inputs.workbook, DEFAULT_WORKBOOK),
            sheets,
            output: args
                .output
                .clone()
                .or(output.path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            format: args.format.map(Into::into).or(output.format).unwrap_or_default(),
            report: args.report.clone().or(output.report),
            options,
            dry_run: args.dry_run,
        }
    }
}
