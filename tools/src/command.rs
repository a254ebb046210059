//! Command model — the dispatch table is data, not control flow.
//!
//! Each CLI command maps to exactly one external npm invocation. Adding a
//! command means adding an enum variant and a table entry; the runner flow
//! does not change.

/// The six dispatchable commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    All,
    Unit,
    Integration,
    App,
    Coverage,
    Watch,
}

/// One dispatch table entry: what to print, what to run, and whether to
/// look for a coverage report afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Banner line printed before the run, e.g. "🔬 Running Unit Tests Only".
    pub heading: &'static str,
    /// Short label used in per-run status lines.
    pub description: &'static str,
    pub program: &'static str,
    pub args: &'static [&'static str],
    /// Post-success hook: point at the coverage directory if one exists.
    pub show_coverage_hint: bool,
}

impl Command {
    /// Map the first positional argument to a command.
    ///
    /// An absent or unrecognized argument falls back to `All`. The original
    /// tooling never errored on typos and callers rely on that, so the
    /// looseness is kept on purpose.
    pub fn parse(arg: Option<&str>) -> Self {
        match arg {
            Some("unit") => Self::Unit,
            Some("integration") => Self::Integration,
            Some("app") => Self::App,
            Some("coverage") => Self::Coverage,
            Some("watch") => Self::Watch,
            Some(_) | None => Self::All,
        }
    }

    pub fn spec(self) -> CommandSpec {
        match self {
            Self::All => CommandSpec {
                heading: "🚀 Running All Tests",
                description: "All Tests",
                program: "npm",
                args: &["test"],
                show_coverage_hint: false,
            },
            Self::Unit => CommandSpec {
                heading: "🔬 Running Unit Tests Only",
                description: "Unit Tests",
                program: "npm",
                args: &[
                    "test",
                    "--",
                    "--testPathPattern=(complaints|speechService|qualityScoring|messageHandler).test.js",
                ],
                show_coverage_hint: false,
            },
            Self::Integration => CommandSpec {
                heading: "🔗 Running Integration Tests Only",
                description: "Integration Tests",
                program: "npm",
                args: &["test", "--", "--testPathPattern=integration.test.js"],
                show_coverage_hint: false,
            },
            Self::App => CommandSpec {
                heading: "🖥️  Running Application Tests Only",
                description: "Application Tests",
                program: "npm",
                args: &["test", "--", "--testPathPattern=app.test.js"],
                show_coverage_hint: false,
            },
            Self::Coverage => CommandSpec {
                heading: "📊 Running Tests with Coverage Report",
                description: "Coverage Tests",
                program: "npm",
                args: &["run", "test:coverage"],
                show_coverage_hint: true,
            },
            Self::Watch => CommandSpec {
                heading: "👀 Running Tests in Watch Mode",
                description: "Watch Mode Tests",
                program: "npm",
                args: &["run", "test:watch"],
                show_coverage_hint: false,
            },
        }
    }
}

impl CommandSpec {
    /// Full command line, as a human would type it. Used for logging and
    /// for asserting dispatch equality in tests.
    pub fn command_line(&self) -> String {
        let mut line = String::from(self.program);
        for arg in self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
