use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::common::ConfigBuilder;
use crate::error::DrawError;
use crate::render::{EngineInvocation, LayoutEngine, RenderRequest, RenderResult};

/// Runs render requests against a layout engine
pub struct RenderInvoker<'e> {
    engine: &'e dyn LayoutEngine,
}

impl<'e> RenderInvoker<'e> {
    pub fn new(engine: &'e dyn LayoutEngine) -> Self {
        Self { engine }
    }

    /// Validate selector strings, then render.
    ///
    /// Unknown selectors fail with [`DrawError::InvalidArgument`] before the
    /// engine is touched.
    pub fn render_with(
        &self,
        dot: impl Into<String>,
        algorithm: &str,
        format: &str,
        output: Option<PathBuf>,
    ) -> Result<RenderResult, DrawError> {
        let request = RenderRequest::builder()
            .with_dot(dot)
            .with_algorithm(algorithm)
            .with_format(format)
            .with_output(output)
            .build()?;
        self.render(request)
    }

    pub fn render(&self, request: RenderRequest) -> Result<RenderResult, DrawError> {
        let args = request.engine_args();
        let (dot, algorithm, format, output) = request.into_parts();
        debug!(%algorithm, %format, output = ?output, "rendering DOT document");

        // A file left over from an earlier run must not count as output
        let previous = output.as_deref().and_then(modified_time);
        let result = self.engine.execute(EngineInvocation {
            args,
            input: dot.into_bytes(),
            capture_stdout: output.is_none(),
        })?;

        if !result.status.success {
            return Err(DrawError::RenderFailure {
                program: self.engine.program().to_string(),
                reason: result.status.describe(),
                stderr: result.stderr_text(),
            });
        }

        match output {
            Some(path) if modified_time(&path).is_some_and(|now| previous != Some(now)) => {
                Ok(RenderResult::File(path))
            }
            Some(path) => Err(DrawError::RenderFailure {
                program: self.engine.program().to_string(),
                reason: format!("no output was written to '{}'", path.display()),
                stderr: result.stderr_text(),
            }),
            None => Ok(RenderResult::Bytes(result.stdout)),
        }
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use tempfile::TempDir;

    use super::*;
    use crate::render::{EngineOutput, EngineStatus};

    struct ScriptedEngine {
        calls: Mutex<Vec<EngineInvocation>>,
        status: EngineStatus,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
        /// Written to the `-o` argument when set
        writes: Option<Vec<u8>>,
    }

    impl ScriptedEngine {
        fn succeeding(stdout: &[u8]) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                status: EngineStatus {
                    success: true,
                    code: Some(0),
                },
                stdout: stdout.to_vec(),
                stderr: Vec::new(),
                writes: None,
            }
        }

        fn writing(contents: &[u8]) -> Self {
            Self {
                writes: Some(contents.to_vec()),
                ..Self::succeeding(b"")
            }
        }

        fn failing(code: i32, stderr: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                status: EngineStatus {
                    success: false,
                    code: Some(code),
                },
                stdout: b"partial".to_vec(),
                stderr: stderr.as_bytes().to_vec(),
                writes: None,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl LayoutEngine for ScriptedEngine {
        fn program(&self) -> &str {
            "scripted"
        }

        fn execute(&self, invocation: EngineInvocation) -> Result<EngineOutput, DrawError> {
            let position = invocation.args.iter().position(|arg| arg == "-o");
            if let (Some(contents), Some(path)) = (
                self.writes.as_ref(),
                position.and_then(|i| invocation.args.get(i + 1)),
            ) {
                fs::write(path, contents)?;
            }
            self.calls.lock().unwrap().push(invocation);
            Ok(EngineOutput {
                status: self.status,
                stdout: self.stdout.clone(),
                stderr: self.stderr.clone(),
            })
        }
    }

    #[test]
    fn test_bytes_returned_without_output_path() {
        let engine = ScriptedEngine::succeeding(b"<svg/>");
        let invoker = RenderInvoker::new(&engine);

        let result = invoker
            .render_with("digraph {\n}\n", "dot", "svg", None)
            .unwrap();

        assert_eq!(result, RenderResult::Bytes(b"<svg/>".to_vec()));
        let calls = engine.calls.lock().unwrap();
        assert_eq!(calls[0].input, b"digraph {\n}\n");
        assert!(calls[0].capture_stdout);
    }

    #[test]
    fn test_unknown_format_never_reaches_engine() {
        let engine = ScriptedEngine::succeeding(b"");
        let invoker = RenderInvoker::new(&engine);

        let err = invoker
            .render_with("graph {\n}\n", "dot", "raw", None)
            .unwrap_err();

        assert!(matches!(err, DrawError::InvalidArgument { .. }));
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_unknown_algorithm_never_reaches_engine() {
        let engine = ScriptedEngine::succeeding(b"");
        let invoker = RenderInvoker::new(&engine);

        let err = invoker
            .render_with("graph {\n}\n", "special", "png", None)
            .unwrap_err();

        assert!(matches!(err, DrawError::InvalidArgument { .. }));
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_non_zero_exit_is_render_failure_without_output() {
        let engine = ScriptedEngine::failing(1, "Error: syntax error in line 1\n");
        let invoker = RenderInvoker::new(&engine);

        let err = invoker
            .render_with("graph {", "dot", "png", None)
            .unwrap_err();

        match err {
            DrawError::RenderFailure {
                program,
                reason,
                stderr,
            } => {
                assert_eq!(program, "scripted");
                assert_eq!(reason, "exited with status 1");
                assert_eq!(stderr, "Error: syntax error in line 1");
            }
            other => panic!("Expected RenderFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_output_path_must_exist_after_success() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("graph.svg");
        let engine = ScriptedEngine::succeeding(b"");
        let invoker = RenderInvoker::new(&engine);

        let err = invoker
            .render_with("graph {\n}\n", "neato", "svg", Some(path.clone()))
            .unwrap_err();
        assert!(err.is_render_failure());
        assert!(!engine.calls.lock().unwrap()[0].capture_stdout);

        let engine = ScriptedEngine::writing(b"<svg/>");
        let result = RenderInvoker::new(&engine)
            .render_with("graph {\n}\n", "neato", "svg", Some(path.clone()))
            .unwrap();
        assert_eq!(result, RenderResult::File(path.clone()));
        assert_eq!(fs::read(&path).unwrap(), b"<svg/>");
    }

    fn backdate(path: &Path) {
        fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000))
            .unwrap();
    }

    #[test]
    fn test_stale_output_file_is_not_confirmed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("graph.svg");
        fs::write(&path, "<svg>old</svg>").unwrap();
        backdate(&path);
        let engine = ScriptedEngine::succeeding(b"");

        let err = RenderInvoker::new(&engine)
            .render_with("graph {\n}\n", "dot", "svg", Some(path.clone()))
            .unwrap_err();

        match err {
            DrawError::RenderFailure { reason, .. } => {
                assert!(reason.starts_with("no output was written"))
            }
            other => panic!("Expected RenderFailure, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg>old</svg>");
    }

    #[test]
    fn test_overwritten_output_file_is_confirmed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("graph.svg");
        fs::write(&path, "<svg>old</svg>").unwrap();
        backdate(&path);
        let engine = ScriptedEngine::writing(b"<svg>new</svg>");

        let result = RenderInvoker::new(&engine)
            .render_with("graph {\n}\n", "dot", "svg", Some(path.clone()))
            .unwrap();

        assert_eq!(result, RenderResult::File(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg>new</svg>");
    }
}
