use crate::domain::constants::{DEFAULT_OUTPUT_ROOT, DEFAULT_TOPICS_FILE};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "artgen", version, about = "Article scaffolding CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_TOPICS_FILE,
        help = "Path to the topics file"
    )]
    pub topics: String,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_OUTPUT_ROOT,
        help = "Root directory for scaffolded article configs"
    )]
    pub out_dir: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Scaffold {
        #[arg(
            long,
            default_value_t = false,
            help = "Continue past failing topics and report them at the end"
        )]
        keep_going: bool,
    },
    Topics {
        query: Option<String>,
    },
    Show {
        slug: String,
    },
    Validate,
    Fetch {
        url: String,
    },
}
