//! The `Args` module helps giving command line options to crepl

use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "crepl", about = "A basic REPL front-end for clang++")]
pub struct Args {
    #[structopt(short, long)]
    version: bool,

    #[structopt(short, long)]
    debug: bool,

    /// Compiler flags passed to clang++
    #[structopt(long, default_value = "")]
    cflags: String,

    /// Command line arguments passed to the compiled program
    #[structopt(long, default_value = "")]
    rargs: String,
}

impl Args {
    fn print_version() {
        println!("{}", env!("CARGO_PKG_VERSION"));

        std::process::exit(0);
    }

    /// Parses the command line arguments, executes stopping options (such as --help
    /// or --version) and returns the given arguments
    pub fn handle() -> Args {
        let args = Args::from_args();

        if args.version {
            Args::print_version()
        }

        args
    }

    /// Is the session launched in debug mode
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Flags forwarded to every compile
    pub fn cflags(&self) -> &str {
        &self.cflags
    }

    /// Arguments forwarded to every run of the compiled program
    pub fn rargs(&self) -> &str {
        &self.rargs
    }
}
