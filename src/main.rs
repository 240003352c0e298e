use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use index_show::areas::index_file::{DEFAULT_INDEX_PATH, IndexFile};
use index_show::areas::inspector::{DecodeOptions, Inspector};
use index_show::artifacts::core::Output;
use index_show::artifacts::index::entry_flags::ExtendedFlagsPolicy;
use index_show::artifacts::index::hash_algorithm::HashAlgorithm;
use index_show::commands::porcelain::large_files::{LargeFilesOptions, parse_size};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
    name = "index-show",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Show the contents of a git index file",
    long_about = "Decodes the header and entries of a git index (.git/index) \
    and prints them as text. The index is only read, never modified.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "sha1",
        help = "Object format of the repository the index belongs to"
    )]
    hash: HashArg,
    #[arg(
        long,
        global = true,
        help = "Fail on entries with extended flags instead of skipping the extra word"
    )]
    reject_extended: bool,
    #[arg(long, global = true, help = "Write straight to stdout, even on a terminal")]
    no_pager: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum HashArg {
    Sha1,
    Sha256,
}

impl From<HashArg> for HashAlgorithm {
    fn from(arg: HashArg) -> Self {
        match arg {
            HashArg::Sha1 => HashAlgorithm::Sha1,
            HashArg::Sha256 => HashAlgorithm::Sha256,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "show",
        about = "Print the header and every entry",
        long_about = "Prints the header fields followed by one line per entry: \
        mode, uid, gid, flags, ctime, mtime, inode, object id, size and path."
    )]
    Show {
        #[arg(index = 1, env = "GIT_INDEX_FILE", default_value = DEFAULT_INDEX_PATH)]
        file: PathBuf,
    },
    #[command(name = "header", about = "Print the header fields only")]
    Header {
        #[arg(index = 1, env = "GIT_INDEX_FILE", default_value = DEFAULT_INDEX_PATH)]
        file: PathBuf,
    },
    #[command(
        name = "largefiles",
        about = "List the largest tracked files",
        long_about = "Lists entries by their recorded size, largest first. \
        Example: largefiles -t 10 -s 1M lists the 10 largest files of at least 1 MiB."
    )]
    LargeFiles {
        #[arg(index = 1, env = "GIT_INDEX_FILE", default_value = DEFAULT_INDEX_PATH)]
        file: PathBuf,
        #[arg(short, long, default_value_t = 0, help = "Show at most N files (0 = all)")]
        top: usize,
        #[arg(
            short,
            long,
            default_value = "0",
            value_parser = parse_size,
            help = "Size floor, e.g. 10, 10K, 1M, 2G"
        )]
        size: u64,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    colored::control::set_override(std::io::stdout().is_terminal());

    let policy = if cli.reject_extended {
        ExtendedFlagsPolicy::Reject
    } else {
        ExtendedFlagsPolicy::Skip
    };
    let options = DecodeOptions::new(cli.hash.into(), policy);
    let output = Output::select(cli.no_pager);

    let result = match &cli.command {
        Commands::Show { file } => {
            let inspector = Inspector::new(
                IndexFile::new(file.clone().into_boxed_path()),
                output.writer(),
                options,
            );
            inspector.show_index()
        }
        Commands::Header { file } => {
            let inspector = Inspector::new(
                IndexFile::new(file.clone().into_boxed_path()),
                output.writer(),
                options,
            );
            inspector.show_header()
        }
        Commands::LargeFiles { file, top, size } => {
            let inspector = Inspector::new(
                IndexFile::new(file.clone().into_boxed_path()),
                output.writer(),
                options,
            );
            inspector.large_files(&LargeFilesOptions::new(*top, *size))
        }
    };

    // Whatever was written before a failure still reaches the user
    output.finish_after(result)
}
