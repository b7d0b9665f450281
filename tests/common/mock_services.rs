//! Mock services for testing

use async_trait::async_trait;
use forge_import::domain::value_objects::scm_type::ScmType;
use forge_import::infrastructure::process::{
    CommandExecutorError, CommandRunner, ExecutionConfig, ExecutionResult, OutputLine,
    OutputStream,
};
use forge_import::infrastructure::scm::ScmAvailability;
use mockall::mock;
use std::sync::Mutex;

mock! {
    pub Probe {}

    #[async_trait]
    impl ScmAvailability for Probe {
        async fn is_available(&self, scm: ScmType) -> bool;
    }
}

/// A probe reporting exactly `installed` as available
pub fn probe_with(installed: &[ScmType]) -> MockProbe {
    let installed = installed.to_vec();
    let mut probe = MockProbe::new();
    probe
        .expect_is_available()
        .returning(move |scm| installed.contains(&scm));
    probe
}

/// Runner that records every command instead of spawning it
pub struct RecordingRunner {
    calls: Mutex<Vec<(String, ExecutionConfig)>>,
    exit_code: i32,
    output: Vec<OutputLine>,
}

impl RecordingRunner {
    pub fn new(exit_code: i32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            exit_code,
            output: Vec::new(),
        }
    }

    /// Lines replayed through the output callback on every run
    pub fn with_output(mut self, stream: OutputStream, text: &str) -> Self {
        self.output.push(OutputLine {
            stream,
            text: text.to_string(),
        });
        self
    }

    pub fn calls(&self) -> Vec<(String, ExecutionConfig)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(
        &self,
        command: &str,
        config: &ExecutionConfig,
        on_line: &(dyn for<'a> Fn(&'a OutputLine) + Send + Sync),
    ) -> Result<ExecutionResult, CommandExecutorError> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), config.clone()));
        for line in &self.output {
            on_line(line);
        }
        Ok(ExecutionResult::new(self.exit_code, String::new(), String::new(), 1))
    }
}
