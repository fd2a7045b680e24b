// crates/hinclude-cli/src/options.rs

use clap::Parser;
use hinclude_core::search_path::default_pathsep;
use hinclude_core::{ExpandConfig, SearchPath};
use std::path::PathBuf;

use crate::config::{ConfigError, HincludeConfig};

#[derive(Parser, Debug)]
#[command(
    name = "hinclude",
    version,
    about = "Flatten #include directives into a single file"
)]
pub struct Args {
    /// Source file to expand
    #[arg(required = true, help = "Source file to expand")]
    pub input: PathBuf,

    /// Output file (use "-" for stdout)
    #[arg(
        short,
        long,
        default_value = "-",
        help = "Output file, truncated before writing. Use - for stdout"
    )]
    pub output: PathBuf,

    /// Search directories, in order
    #[arg(
        short = 'I',
        long = "include-dir",
        help = "Search directory for includes (repeatable, searched in order)"
    )]
    pub include_dirs: Vec<PathBuf>,

    /// Pathsep-separated list of search directories
    #[arg(long, help = "Pathsep-separated list of search directories")]
    pub include: Option<String>,

    /// Path separator for --include
    #[arg(long = "pathsep", default_value_t = default_pathsep().to_string(),
          help = "Path separator character (; on Windows, : on Unix-like systems)")]
    pub pathsep: String,

    /// Persist the output only when expansion succeeds
    #[arg(long, help = "Write the output only if expansion succeeds",
          action = clap::ArgAction::SetTrue, overrides_with = "no_staged")]
    pub staged: bool,

    /// Write directly to the output even if the config file asks for staging
    #[arg(long, help = "Write directly to the output file, overriding the config",
          action = clap::ArgAction::SetTrue, overrides_with = "staged")]
    pub no_staged: bool,

    #[arg(long, help = "Maximum include nesting depth")]
    pub max_depth: Option<usize>,

    /// Config file path
    #[arg(long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: "-".into(),
            include_dirs: vec![],
            include: None,
            pathsep: default_pathsep().to_string(),
            staged: false,
            no_staged: false,
            max_depth: None,
            config: None,
            verbose: 0,
        }
    }
}

impl Args {
    /// The staging choice made on the command line, if any.
    fn staged_flag(&self) -> Option<bool> {
        match (self.staged, self.no_staged) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    pub search_path: SearchPath,
    pub expand: ExpandConfig,
}

impl Options {
    pub fn from_args_and_config(args: Args) -> Result<Self, ConfigError> {
        let file_config = match args.config.as_ref() {
            Some(path) => HincludeConfig::from_explicit_file(path)?,
            None => HincludeConfig::from_nearest()?,
        };
        Ok(Self::merge(args, file_config))
    }

    /// Command line values take precedence; search directories accumulate
    /// as `-I`, then `--include`, then the config file.
    pub fn merge(args: Args, file_config: HincludeConfig) -> Self {
        let staged_flag = args.staged_flag();
        let mut dirs = args.include_dirs;
        if let Some(list) = args.include.as_deref() {
            dirs.extend(SearchPath::parse(list, &args.pathsep).dirs().iter().cloned());
        }
        if let Some(config_dirs) = file_config.include_dirs {
            dirs.extend(config_dirs);
        }

        let defaults = ExpandConfig::default();
        let staged_output = staged_flag
            .or(file_config.staged)
            .unwrap_or(defaults.staged_output);
        Self {
            input: args.input,
            output: args.output,
            search_path: SearchPath::new(dirs),
            expand: ExpandConfig {
                max_depth: args
                    .max_depth
                    .or(file_config.max_depth)
                    .unwrap_or(defaults.max_depth),
                staged_output,
            },
        }
    }
}
