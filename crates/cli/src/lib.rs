mod explain;
mod generate;
mod list;
mod view;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hookgen",
    version,
    about = "Generate EzXHelper hook snippets from a decompiled symbol model",
    long_about = "hookgen reads a JSON symbol model exported from a decompiler and prints Kotlin \
                  hook templates that re-locate a class, field or method at runtime. Methods that \
                  share a name and parameter types with others get extra filters picked so the \
                  finder chain matches exactly one declaration."
)]
pub struct Cli {
    /// Also write log events to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the hook snippet for a declaration
    #[command(
        name = "gen",
        long_about = "Resolves REFERENCE (`Class`, `Class#member` or `Class#member(T1, T2)`) against \
                      the model and prints the snippet. Options are read from ~/.hookgen/options.json \
                      unless --config is given; flags override the file."
    )]
    Gen(GenArgs),
    /// List the declarations of one class, or every class in the model
    List {
        /// Path to the JSON symbol model
        #[arg(value_name = "MODEL")]
        model: PathBuf,

        /// Raw class name to list members of
        #[arg(value_name = "CLASS")]
        class: Option<String>,
    },
    /// Print the discriminator chosen for a method as JSON
    Explain {
        #[command(flatten)]
        target: TargetArgs,

        /// Options file to use instead of the default one
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Canonicalize return types without `ClassUtils.loadClass`
        #[arg(long)]
        no_class_optimization: bool,
    },
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Path to the JSON symbol model
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Declaration reference, e.g. `com.a.B#c(int)`
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Zero-based index among declarations matching the reference
    #[arg(long)]
    pub nth: Option<usize>,
}

#[derive(Args, Debug)]
pub struct GenArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Options file to use instead of the default one
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Always emit the full access and modifier filter
    #[arg(long)]
    pub force_access: bool,

    /// Always emit the return type filter
    #[arg(long)]
    pub force_return_type: bool,

    /// Use `::class.java` for every type instead of `ClassUtils.loadClass`
    #[arg(long)]
    pub no_class_optimization: bool,

    /// Annotate the snippet with signature and search comments
    #[arg(long)]
    pub debug: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = hookgen_core::logging::init_logging("cli", cli.verbose);

    match cli.command {
        Commands::Gen(args) => generate::run(args),
        Commands::List { model, class } => list::run(model, class),
        Commands::Explain {
            target,
            config,
            no_class_optimization,
        } => explain::run(target, config, no_class_optimization),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_arguments() {
        let cli = Cli::try_parse_from([
            "hookgen",
            "gen",
            "model.json",
            "com.a.B#c(int)",
            "--nth",
            "1",
            "--force-return-type",
        ])
        .unwrap();

        let Commands::Gen(args) = cli.command else {
            panic!("expected gen");
        };
        assert_eq!(args.target.model, PathBuf::from("model.json"));
        assert_eq!(args.target.reference, "com.a.B#c(int)");
        assert_eq!(args.target.nth, Some(1));
        assert!(args.force_return_type);
        assert!(!args.force_access);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_list_class_is_optional() {
        let cli = Cli::try_parse_from(["hookgen", "list", "model.json", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List { class: None, .. }));
    }
}
