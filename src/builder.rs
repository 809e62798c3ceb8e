//! Compiling and running the accumulated program. Every commit rebuilds the
//! whole translation unit from scratch inside a session-owned scratch
//! directory; nothing is cached between turns.

use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use crate::error::{ErrKind, Error};
use crate::log;

/// Compiler looked up on PATH for every build
const COMPILER: &str = "clang++";

const PREAMBLE: &str = "#include <stdio.h>\nint main(int argc, char** argv) {\n";
const EPILOGUE: &str = "\nreturn 0;}";

/// What a commit attempt produced
#[derive(Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The compiler rejected the program. Its diagnostics already went to
    /// the terminal
    CompileFailed,
    /// The program was built and executed
    Ran {
        exit_code: i32,
        /// Merged stdout and stderr, split on `\n`, trailing segment kept
        output: Vec<String>,
    },
}

/// Materializes, compiles and runs the accumulated program. The scratch
/// directory lives as long as the runner and is removed when it drops.
pub struct BuildRunner {
    scratch: TempDir,
    cflags: Vec<String>,
    rargs: Vec<String>,
}

impl BuildRunner {
    /// `cflags` and `rargs` are whitespace-split once and reused every turn
    pub fn new(cflags: &str, rargs: &str) -> Result<BuildRunner, Error> {
        Ok(BuildRunner {
            scratch: tempfile::tempdir()?,
            cflags: cflags.split_whitespace().map(String::from).collect(),
            rargs: rargs.split_whitespace().map(String::from).collect(),
        })
    }

    /// Rebuild the whole program from `lines` and, if it compiles, run it.
    ///
    /// An `Err` means the compiler or the produced binary could not be
    /// invoked at all; diagnostics from a failed compile are not captured,
    /// they pass straight through to the terminal.
    pub fn build_and_run(&self, lines: &[String]) -> Result<BuildOutcome, Error> {
        let src_path = self
            .scratch
            .path()
            .join(format!("repl{}.cpp", lines.len()));
        fs::write(&src_path, synthesize(lines))?;

        let bin_path = self.bin_path();

        log!(
            build,
            "{} {} -o {} {}",
            COMPILER,
            self.cflags.join(" "),
            bin_path.display(),
            src_path.display()
        );

        let status = Command::new(COMPILER)
            .args(&self.cflags)
            .arg("-o")
            .arg(&bin_path)
            .arg(&src_path)
            .status()
            .map_err(|e| {
                Error::new(ErrKind::Compiler)
                    .with_msg(format!("could not invoke {COMPILER}: {e}"))
            })?;

        if !status.success() {
            return Ok(BuildOutcome::CompileFailed);
        }

        self.run(&bin_path)
    }

    fn run(&self, bin_path: &Path) -> Result<BuildOutcome, Error> {
        // Both streams write through duplicated handles of one file, so the
        // kernel interleaves them exactly as `prog > f 2>&1` would.
        let sink_path = self.scratch.path().join("run.out");
        let sink = File::create(&sink_path)?;

        log!(run, "{} {}", bin_path.display(), self.rargs.join(" "));

        let status = Command::new(bin_path)
            .args(&self.rargs)
            .stdout(sink.try_clone()?)
            .stderr(sink)
            .status()
            .map_err(|e| {
                Error::new(ErrKind::Program)
                    .with_msg(format!("could not run {}: {e}", bin_path.display()))
            })?;

        let raw = fs::read(&sink_path)?;
        let output: Vec<String> = String::from_utf8_lossy(&raw)
            .split('\n')
            .map(String::from)
            .collect();

        Ok(BuildOutcome::Ran {
            exit_code: status.code().unwrap_or(-1),
            output,
        })
    }

    fn bin_path(&self) -> PathBuf {
        self.scratch
            .path()
            .join(format!("repl{}", env::consts::EXE_SUFFIX))
    }
}

/// Wrap the accepted lines in the fixed program template
fn synthesize(lines: &[String]) -> String {
    format!("{}{}{}", PREAMBLE, lines.join("\n"), EPILOGUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clang_available() -> bool {
        Command::new(COMPILER).arg("--version").output().is_ok()
    }

    fn entries(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn t_synthesize_empty_program() {
        assert_eq!(
            synthesize(&[]),
            "#include <stdio.h>\nint main(int argc, char** argv) {\n\nreturn 0;}"
        );
    }

    #[test]
    fn t_synthesize_joins_lines() {
        let program = entries(&["int x = 5;", "printf(\"%d\\n\", x);"]);

        assert_eq!(
            synthesize(&program),
            "#include <stdio.h>\nint main(int argc, char** argv) {\nint x = 5;\nprintf(\"%d\\n\", x);\nreturn 0;}"
        );
    }

    #[test]
    fn t_flags_are_whitespace_split() {
        let runner = BuildRunner::new(" -O2  -Wall ", "a b").unwrap();

        assert_eq!(runner.cflags, ["-O2", "-Wall"]);
        assert_eq!(runner.rargs, ["a", "b"]);
    }

    #[test]
    fn t_empty_flags_split_to_nothing() {
        let runner = BuildRunner::new("", "").unwrap();

        assert!(runner.cflags.is_empty());
        assert!(runner.rargs.is_empty());
    }

    #[test]
    fn t_runs_a_hello_program() {
        if !clang_available() {
            return;
        }

        let runner = BuildRunner::new("", "").unwrap();
        let program = entries(&["printf(\"hello\\n\");"]);

        match runner.build_and_run(&program).unwrap() {
            BuildOutcome::Ran { exit_code, output } => {
                assert_eq!(exit_code, 0);
                assert_eq!(output, ["hello", ""]);
            }
            BuildOutcome::CompileFailed => panic!("hello program failed to compile"),
        }
    }

    #[test]
    fn t_reports_compile_failure() {
        if !clang_available() {
            return;
        }

        let runner = BuildRunner::new("", "").unwrap();
        let program = entries(&["int x = ;"]);

        assert_eq!(
            runner.build_and_run(&program).unwrap(),
            BuildOutcome::CompileFailed
        );
    }

    #[test]
    fn t_merges_stderr_into_output() {
        if !clang_available() {
            return;
        }

        let runner = BuildRunner::new("", "").unwrap();
        let program = entries(&["fprintf(stderr, \"oops\\n\");"]);

        match runner.build_and_run(&program).unwrap() {
            BuildOutcome::Ran { output, .. } => assert_eq!(output, ["oops", ""]),
            other => panic!("expected a run, got {other:?}"),
        }
    }

    #[test]
    fn t_nonzero_exit_is_reported() {
        if !clang_available() {
            return;
        }

        let runner = BuildRunner::new("", "").unwrap();
        let program = entries(&["return 3;"]);

        match runner.build_and_run(&program).unwrap() {
            BuildOutcome::Ran { exit_code, .. } => assert_eq!(exit_code, 3),
            other => panic!("expected a run, got {other:?}"),
        }
    }

    #[test]
    fn t_program_sees_run_args() {
        if !clang_available() {
            return;
        }

        let runner = BuildRunner::new("", "one two").unwrap();
        let program = entries(&["printf(\"%d\\n\", argc);"]);

        match runner.build_and_run(&program).unwrap() {
            BuildOutcome::Ran { output, .. } => assert_eq!(output, ["3", ""]),
            other => panic!("expected a run, got {other:?}"),
        }
    }
}
