mod args;

use args::Args;
use crepl::{BuildRunner, Repl, TermEditor};

fn main() -> anyhow::Result<()> {
    let args = Args::handle();
    if args.debug() {
        crepl::log::enable();
    }

    let editor = TermEditor::new()?;
    let runner = BuildRunner::new(args.cflags(), args.rargs())?;

    Repl::new(editor, runner).launch()?;

    Ok(())
}
