use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Print the segments with `{:#?}`.
    Debug,
    /// Print the corrected sentence with deletions and additions marked inline.
    Inline,
    /// Print the original and the corrected sentence next to each other.
    Side,
    /// Print the segments as JSON.
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerStyle {
    /// `[-deleted-]` and `{+added+}`, like `git diff --word-diff`.
    Brackets,
    /// Red strike-through for deletions, bold green for additions.
    Ansi,
}

macro_rules! config_structs {
    {
        $(
            $( #[config_opt($attr:meta)] )*
            pub $name:ident: $typ:ty,
        )*
        $(
            #[config_alias($atarget:ident = $avalue:expr)]
            $( #[config_opt($aattr:meta)] )*
            pub $aname:ident: bool,
        )*
    } => {
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct Config {
            $( pub $name: $typ, )*
        }

        #[derive(Args, Deserialize, Default, Debug)]
        #[serde(deny_unknown_fields)]
        pub struct ConfigOpt {
            $( $( #[$aattr] )* #[serde(skip)] pub $aname: bool, )*
            $( $( #[$attr] )* pub $name: Option<$typ>, )*
        }

        impl Config {
            pub fn update(self, mut opt: ConfigOpt) -> Config {
                $(
                    if opt.$aname {
                        opt.$atarget = Some($avalue);
                    }
                )*
                Config {
                    $( $name: opt.$name.unwrap_or(self.$name), )*
                }
            }
        }
    }
}

config_structs! {
    #[config_opt(arg(short, long))]
    pub mode: OutputMode,

    #[config_opt(arg(long))]
    pub marker_style: MarkerStyle,

    #[config_opt(arg(long, require_equals = true, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL", group = "coalesce_group"))]
    pub coalesce: bool,

    #[config_opt(arg(long, value_name = "COLUMNS"))]
    pub side_width: usize,

    #[config_opt(arg(long, value_name = "BYTES"))]
    pub max_input_bytes: usize,

    #[config_opt(arg(long, require_equals = true, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL", group = "trim_final_newline_group"))]
    pub trim_final_newline: bool,

    #[config_opt(arg(long, require_equals = true, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL", group = "validate_group"))]
    pub validate: bool,

    #[config_alias(coalesce = false)]
    #[config_opt(arg(long, group = "coalesce_group"))]
    pub no_coalesce: bool,

    #[config_alias(trim_final_newline = false)]
    #[config_opt(arg(long, group = "trim_final_newline_group"))]
    pub no_trim_final_newline: bool,

    #[config_alias(validate = false)]
    #[config_opt(arg(long, group = "validate_group"))]
    pub no_validate: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            mode: OutputMode::Inline,
            marker_style: MarkerStyle::Brackets,
            coalesce: true,
            side_width: 40,
            // Sentences, not documents.
            max_input_bytes: 2000,
            trim_final_newline: true,
            validate: true,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sentdiff").join("config.toml"))
}

pub fn parse_config_file(content: &str) -> Result<ConfigOpt> {
    Ok(toml::from_str(content)?)
}

pub fn read_config_file(path: &Path) -> Result<ConfigOpt> {
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_config_file(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Defaults, then the config file, then command line options.
///
/// An explicitly given `path` must exist. Without one, the default location is used if a file is there.
pub fn load_config(path: Option<&Path>, cli_opt: ConfigOpt) -> Result<Config> {
    let mut config = Config::default();
    let path = match path {
        Some(path) => Some(path.to_owned()),
        None => default_config_path().filter(|path| path.exists()),
    };
    if let Some(path) = path {
        debug!(path = %path.display(), "loading config file");
        config = config.update(read_config_file(&path)?);
    }
    Ok(config.update(cli_opt))
}
