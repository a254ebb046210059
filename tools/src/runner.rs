//! Dispatcher flow: preflight, one external invocation, summary.
//!
//! `run` returns the process exit code instead of exiting so the whole
//! flow is assertable in tests; `main` owns the actual `process::exit`.

use crate::colors::{cprintln, BLUE, BRIGHT, CYAN, GREEN, MAGENTA, RED, WHITE, YELLOW};
use crate::command::{Command, CommandSpec};
use crate::preflight;
use anyhow::Result;
use std::path::Path;
use std::process::{Command as Process, Stdio};

/// Seam for the external test invocation.
pub trait TestInvoker {
    /// Run the external command to completion. Ok(true) iff it exited 0.
    fn invoke(&mut self, spec: &CommandSpec) -> Result<bool>;
}

/// Production invoker: blocking subprocess with inherited streams, so the
/// test tool's own progress output reaches the terminal in real time.
pub struct ProcessInvoker;

impl TestInvoker for ProcessInvoker {
    fn invoke(&mut self, spec: &CommandSpec) -> Result<bool> {
        let status = Process::new(spec.program)
            .args(spec.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(status.success())
    }
}

pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "--help" || arg == "-h")
}

/// Full dispatcher flow against the project at `base`. Returns the exit
/// code for `main` to apply.
pub fn run(args: &[String], base: &Path, invoker: &mut dyn TestInvoker) -> Result<i32> {
    if wants_help(args) {
        print_usage();
        return Ok(0);
    }

    print_banner();

    if !preflight::manifest_present(base) {
        cprintln(
            RED,
            "❌ Error: package.json not found. Please run this tool from the project root.",
        );
        return Ok(1);
    }

    let test_files = preflight::discover_test_files(base)?;
    cprintln(MAGENTA, "\n📁 Test Files Found:");
    for file in &test_files {
        cprintln(YELLOW, &format!("  • {file}"));
    }
    if test_files.is_empty() {
        cprintln(RED, "❌ No test files found in ./tests/");
        return Ok(1);
    }
    cprintln(GREEN, &format!("\n🎯 Found {} test files", test_files.len()));

    let command = Command::parse(args.first().map(String::as_str));
    let spec = command.spec();
    log::debug!("dispatching {command:?}: {}", spec.command_line());

    cprintln(BRIGHT, &format!("\n{}", spec.heading));
    let success = run_external(&spec, invoker);

    if success && spec.show_coverage_hint && coverage_report_available(base) {
        cprintln(GREEN, "\n📊 Coverage report generated in ./coverage/");
        cprintln(
            CYAN,
            "Open ./coverage/lcov-report/index.html in your browser to view detailed coverage",
        );
    }

    cprintln(BLUE, &format!("\n{}", "=".repeat(50)));
    if success {
        cprintln(GREEN, "🎉 All tests completed successfully!");
        cprintln(CYAN, "\nNext steps:");
        cprintln(YELLOW, "  • Run \"npm run test:coverage\" for detailed coverage report");
        cprintln(YELLOW, "  • Run \"npm run serve\" to start the development server");
        cprintln(YELLOW, "  • Open index.html in your browser to test the application");
        Ok(0)
    } else {
        cprintln(RED, "💥 Some tests failed. Please check the output above.");
        Ok(1)
    }
}

/// One external invocation. A spawn error is caught and reported like a
/// failing run; it never crashes the dispatcher itself.
fn run_external(spec: &CommandSpec, invoker: &mut dyn TestInvoker) -> bool {
    cprintln(CYAN, &format!("\n{}", spec.description));
    cprintln(BLUE, &"=".repeat(50));
    match invoker.invoke(spec) {
        Ok(true) => {
            cprintln(GREEN, &format!("✅ {} completed successfully", spec.description));
            true
        }
        Ok(false) => {
            cprintln(RED, &format!("❌ {} failed", spec.description));
            false
        }
        Err(error) => {
            cprintln(RED, &format!("❌ {} failed", spec.description));
            cprintln(RED, &format!("Error: {error}"));
            false
        }
    }
}

fn coverage_report_available(base: &Path) -> bool {
    base.join("coverage").exists()
}

fn print_banner() {
    cprintln(BRIGHT, "🧪 MockCall Test Runner");
    cprintln(BLUE, "========================");
}

fn print_usage() {
    print_banner();
    cprintln(CYAN, "\nUsage: test-runner [command]");
    cprintln(YELLOW, "\nCommands:");
    cprintln(WHITE, "  all         Run all tests (default)");
    cprintln(WHITE, "  unit        Run unit tests only");
    cprintln(WHITE, "  integration Run integration tests only");
    cprintln(WHITE, "  app         Run application tests only");
    cprintln(WHITE, "  coverage    Run tests with coverage report");
    cprintln(WHITE, "  watch       Run tests in watch mode");
    cprintln(YELLOW, "\nExamples:");
    cprintln(WHITE, "  test-runner");
    cprintln(WHITE, "  test-runner unit");
    cprintln(WHITE, "  test-runner coverage");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    /// Records dispatched command lines and returns a scripted result.
    struct RecordingInvoker {
        invoked: Vec<String>,
        result: Result<bool>,
    }

    impl RecordingInvoker {
        fn succeeding() -> Self {
            Self { invoked: Vec::new(), result: Ok(true) }
        }

        fn failing() -> Self {
            Self { invoked: Vec::new(), result: Ok(false) }
        }

        fn erroring() -> Self {
            Self { invoked: Vec::new(), result: Err(anyhow::anyhow!("spawn failed: ENOENT")) }
        }
    }

    impl TestInvoker for RecordingInvoker {
        fn invoke(&mut self, spec: &CommandSpec) -> Result<bool> {
            self.invoked.push(spec.command_line());
            match &self.result {
                Ok(success) => Ok(*success),
                Err(error) => Err(anyhow::anyhow!("{error}")),
            }
        }
    }

    fn project(with_manifest: bool, test_files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        if with_manifest {
            File::create(dir.path().join(preflight::MANIFEST_FILE)).unwrap();
        }
        fs::create_dir(dir.path().join(preflight::TEST_DIR)).unwrap();
        for name in test_files {
            File::create(dir.path().join(preflight::TEST_DIR).join(name)).unwrap();
        }
        dir
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    const UNIT_FILES: [&str; 4] = [
        "complaints.test.js",
        "speechService.test.js",
        "qualityScoring.test.js",
        "messageHandler.test.js",
    ];

    /// Every recognized command dispatches exactly one external invocation.
    #[test]
    fn exactly_once_dispatch_for_each_command() {
        let dir = project(true, &UNIT_FILES);
        for literal in ["all", "unit", "integration", "app", "coverage", "watch"] {
            let mut invoker = RecordingInvoker::succeeding();
            let code = run(&args(&[literal]), dir.path(), &mut invoker).unwrap();
            assert_eq!(code, 0, "command {literal} should succeed");
            assert_eq!(
                invoker.invoked.len(),
                1,
                "command {literal} should invoke exactly once"
            );
            assert_eq!(
                invoker.invoked[0],
                Command::parse(Some(literal)).spec().command_line(),
            );
        }
    }

    /// End-to-end: `unit` with manifest and the four unit files present runs
    /// the filtered invocation and exits 0.
    #[test]
    fn unit_command_runs_the_filtered_suite() {
        let dir = project(true, &UNIT_FILES);
        let mut invoker = RecordingInvoker::succeeding();
        let code = run(&args(&["unit"]), dir.path(), &mut invoker).unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            invoker.invoked,
            ["npm test -- --testPathPattern=(complaints|speechService|qualityScoring|messageHandler).test.js"],
        );
    }

    /// End-to-end: no arguments and no manifest means an immediate exit 1
    /// with nothing invoked.
    #[test]
    fn missing_manifest_aborts_before_any_invocation() {
        let dir = project(false, &UNIT_FILES);
        let mut invoker = RecordingInvoker::succeeding();
        let code = run(&args(&[]), dir.path(), &mut invoker).unwrap();
        assert_eq!(code, 1);
        assert!(invoker.invoked.is_empty());
    }

    #[test]
    fn zero_test_files_aborts_before_any_invocation() {
        let dir = project(true, &[]);
        let mut invoker = RecordingInvoker::succeeding();
        let code = run(&args(&["all"]), dir.path(), &mut invoker).unwrap();
        assert_eq!(code, 1);
        assert!(invoker.invoked.is_empty());
    }

    /// Help anywhere among the arguments short-circuits everything, even
    /// when the environment checks would fail.
    #[test]
    fn help_flag_short_circuits_in_any_position() {
        let dir = TempDir::new().unwrap(); // no manifest, no tests dir
        for help_args in [
            args(&["--help"]),
            args(&["-h"]),
            args(&["unit", "--help"]),
            args(&["--help", "coverage", "extra"]),
        ] {
            let mut invoker = RecordingInvoker::succeeding();
            let code = run(&help_args, dir.path(), &mut invoker).unwrap();
            assert_eq!(code, 0, "help should exit 0 for {help_args:?}");
            assert!(invoker.invoked.is_empty());
        }
    }

    /// An unrecognized command behaves exactly like `all`.
    #[test]
    fn unknown_command_dispatches_the_full_suite() {
        let dir = project(true, &UNIT_FILES);
        let mut invoker = RecordingInvoker::succeeding();
        let code = run(&args(&["covrage"]), dir.path(), &mut invoker).unwrap();
        assert_eq!(code, 0);
        assert_eq!(invoker.invoked, ["npm test"]);
    }

    #[test]
    fn failing_suite_exits_one() {
        let dir = project(true, &UNIT_FILES);
        let mut invoker = RecordingInvoker::failing();
        let code = run(&args(&["all"]), dir.path(), &mut invoker).unwrap();
        assert_eq!(code, 1);
        assert_eq!(invoker.invoked.len(), 1);
    }

    /// A spawn error is folded into the failure path, not propagated.
    #[test]
    fn invoker_error_is_caught_and_exits_one() {
        let dir = project(true, &UNIT_FILES);
        let mut invoker = RecordingInvoker::erroring();
        let code = run(&args(&["integration"]), dir.path(), &mut invoker).unwrap();
        assert_eq!(code, 1);
        assert_eq!(invoker.invoked.len(), 1);
    }

    /// Coverage success is unaffected by whether the report directory was
    /// actually produced.
    #[test]
    fn coverage_success_does_not_require_report_directory() {
        let without = project(true, &UNIT_FILES);
        let mut invoker = RecordingInvoker::succeeding();
        let code = run(&args(&["coverage"]), without.path(), &mut invoker).unwrap();
        assert_eq!(code, 0);
        assert!(!coverage_report_available(without.path()));

        let with = project(true, &UNIT_FILES);
        fs::create_dir(with.path().join("coverage")).unwrap();
        let mut invoker = RecordingInvoker::succeeding();
        let code = run(&args(&["coverage"]), with.path(), &mut invoker).unwrap();
        assert_eq!(code, 0);
        assert!(coverage_report_available(with.path()));
    }

    #[test]
    fn help_detection_is_order_independent() {
        assert!(wants_help(&args(&["unit", "-h"])));
        assert!(wants_help(&args(&["--help"])));
        assert!(!wants_help(&args(&["unit"])));
        assert!(!wants_help(&args(&[])));
    }
}
