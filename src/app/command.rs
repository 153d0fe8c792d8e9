//! Subprocess invocation
//!
//! Children are spawned directly with an explicit argument vector, never
//! through a shell, so version strings and paths with special characters
//! cannot be reinterpreted. Stdout and stderr are inherited from this
//! process; each step blocks until its child exits.

use tokio::process::Command;
use tracing::{debug, info};

use crate::app::Platform;
use crate::constants::npm;
use crate::errors::{CommandError, CommandResult};

/// One external command invocation with a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStep {
    program: String,
    args: Vec<String>,
    label: String,
}

impl CommandStep {
    /// Create a step from a program, its argument vector and a label used
    /// in progress and error messages.
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            label: label.into(),
        }
    }

    /// Label for progress and error messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The full command line, for echoing to the operator.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run the command and wait for it to exit.
    ///
    /// Fails with [`CommandError::Spawn`] when the program cannot be started,
    /// [`CommandError::ExitStatus`] carrying the child's own code when it
    /// exits non-zero, and [`CommandError::Terminated`] when the child was
    /// killed without reporting a code.
    pub async fn run(&self) -> CommandResult<()> {
        debug!("Spawning: {}", self.command_line());

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .await
            .map_err(|source| CommandError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            info!("{} completed", self.label);
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(CommandError::ExitStatus {
                label: self.label.clone(),
                code,
            }),
            None => Err(CommandError::Terminated {
                label: self.label.clone(),
            }),
        }
    }
}

/// The fixed command sequence for a release: `npm install`, then the
/// platform's build script.
pub fn release_steps(platform: Platform) -> Vec<CommandStep> {
    vec![
        CommandStep::new(npm::PROGRAM, [npm::INSTALL], "npm install"),
        CommandStep::new(
            npm::PROGRAM,
            [npm::RUN.to_string(), platform.build_script()],
            format!("npm run {}", platform.build_script()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_steps_are_install_then_platform_build() {
        let steps = release_steps(Platform::Mac);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].command_line(), "npm install");
        assert_eq!(steps[1].command_line(), "npm run build:mac");

        let steps = release_steps(Platform::Windows);
        assert_eq!(steps[1].command_line(), "npm run build:windows");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_command_returns_ok() {
        let step = CommandStep::new("true", Vec::<String>::new(), "true");
        assert!(step.run().await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_command_reports_child_exit_code() {
        let step = CommandStep::new("false", Vec::<String>::new(), "false");
        let err = step.run().await.unwrap_err();
        assert!(matches!(err, CommandError::ExitStatus { code: 1, .. }));
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let step = CommandStep::new(
            "definitely-not-a-real-program",
            Vec::<String>::new(),
            "missing",
        );
        let err = step.run().await.unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn later_steps_never_run_after_a_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let marker = dir.path().join("marker");

        let steps = vec![
            CommandStep::new("false", Vec::<String>::new(), "first"),
            CommandStep::new(
                "touch",
                [marker.to_string_lossy().to_string()],
                "second",
            ),
        ];

        let mut result = Ok(());
        for step in &steps {
            result = step.run().await;
            if result.is_err() {
                break;
            }
        }

        assert!(matches!(
            result,
            Err(CommandError::ExitStatus { code: 1, .. })
        ));
        assert!(!marker.exists());
    }
}
