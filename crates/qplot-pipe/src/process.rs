use crate::session::Session;
use crate::transport::{Channel, Transport, TransportError};
use std::io::{self, Read, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

#[cfg(unix)]
use std::os::unix::io::{AsRawFd, RawFd};

/// Spawns one backend process per session.
///
/// The script for a plot is streamed into the process's stdin. Closing the
/// session closes stdin, which is what makes backends like gnuplot or python
/// start executing, and then waits for the process to exit.
///
/// # Example
///
/// ```no_run
/// use qplot_pipe::{ProcessTransport, Transport};
/// use std::io::Write;
/// use std::time::Duration;
///
/// let gnuplot = ProcessTransport::new("gnuplot").with_timeout(Duration::from_secs(10));
/// let mut session = gnuplot.open()?;
/// session.write_all(b"set terminal png\nset output 'sin.png'\nplot sin(x)\n")?;
/// session.close()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProcessTransport {
    program: String,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    capture_output: bool,
    timeout: Option<Duration>,
}

impl ProcessTransport {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            capture_output: false,
            timeout: Some(Duration::from_secs(30)),
        }
    }

    /// Runs `command_line` through the platform shell.
    pub fn shell(command_line: impl Into<String>) -> Self {
        if cfg!(target_os = "windows") {
            Self::new("cmd").arg("/C").arg(command_line)
        } else {
            Self::new("sh").arg("-c").arg(command_line)
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Pipe the backend's stdout so it can be read through
    /// [`Session::reader`]. Without this the backend inherits our stdout.
    ///
    /// Output that is never read can fill the pipe and stall the backend
    /// until the close timeout kills it.
    pub fn capture_output(mut self) -> Self {
        self.capture_output = true;
        self
    }

    /// How long closing a session waits for the backend to exit.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn spawn(&self) -> Result<ProcessChannel, TransportError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::piped())
            .stderr(Stdio::inherit());

        if self.capture_output {
            cmd.stdout(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let mut child = cmd.spawn().map_err(|source| TransportError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        log::debug!("spawned `{}` (pid {})", self.command_line(), child.id());

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();

        Ok(ProcessChannel {
            label: self.command_line(),
            child,
            stdin,
            stdout,
            timeout: self.timeout,
            finished: false,
        })
    }
}

impl Transport for ProcessTransport {
    fn open(&self) -> Result<Session, TransportError> {
        Ok(Session::new(self.spawn()?))
    }
}

/// A running backend process.
pub struct ProcessChannel {
    label: String,
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: Option<ChildStdout>,
    timeout: Option<Duration>,
    finished: bool,
}

impl ProcessChannel {
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    fn shutdown(&mut self) -> Result<(), TransportError> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        // EOF on stdin is the backend's cue to run what it was sent.
        drop(self.stdin.take());

        let status = match self.timeout {
            Some(duration) => match self.child.wait_timeout(duration)? {
                Some(status) => status,
                None => {
                    self.child.kill()?;
                    self.child.wait()?;
                    return Err(TransportError::Timeout(self.label.clone(), duration));
                }
            },
            None => self.child.wait()?,
        };

        log::debug!("`{}` exited with {}", self.label, status);
        if !status.success() {
            return Err(TransportError::CommandFailed(self.label.clone(), status));
        }
        Ok(())
    }
}

impl Write for ProcessChannel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.stdin.as_mut() {
            Some(stdin) => stdin.write(buf),
            None => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "backend input already closed",
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.stdin.as_mut() {
            Some(stdin) => stdin.flush(),
            None => Ok(()),
        }
    }
}

impl Channel for ProcessChannel {
    fn close(mut self: Box<Self>) -> Result<(), TransportError> {
        let flushed = self.flush();
        // A backend that died early reports through its exit status, which
        // says more than the broken pipe does.
        self.shutdown()?;
        flushed?;
        Ok(())
    }

    fn reader(&mut self) -> Option<&mut dyn Read> {
        self.stdout.as_mut().map(|stdout| stdout as &mut dyn Read)
    }

    #[cfg(unix)]
    fn fd_r(&self) -> Option<RawFd> {
        self.stdout.as_ref().map(AsRawFd::as_raw_fd)
    }

    #[cfg(unix)]
    fn fd_w(&self) -> Option<RawFd> {
        self.stdin.as_ref().map(AsRawFd::as_raw_fd)
    }
}

impl Drop for ProcessChannel {
    fn drop(&mut self) {
        if let Err(err) = self.shutdown() {
            log::warn!("backend shutdown on drop failed: {}", err);
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_script_reaches_process() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.gp");
        let transport = ProcessTransport::shell(format!("cat > '{}'", path.display()));

        let mut session = transport.open().unwrap();
        session.write_all(b"set output 'a.png'\nplot x\n").unwrap();
        session.close().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "set output 'a.png'\nplot x\n");
    }

    #[test]
    fn test_capture_output_exposes_reader() {
        let transport = ProcessTransport::new("cat").capture_output();
        let mut session = transport.open().unwrap();
        assert!(session.fd_r().is_some());
        assert!(session.fd_w().is_some());

        session.write_all(b"echoed\n").unwrap();
        session.flush().unwrap();

        let mut buf = [0u8; 7];
        session.reader().unwrap().read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"echoed\n");
        session.close().unwrap();
    }

    #[test]
    fn test_spawn_failure_names_program() {
        let transport = ProcessTransport::new("qplot-definitely-not-installed");
        match transport.open() {
            Err(TransportError::Spawn { program, .. }) => {
                assert_eq!(program, "qplot-definitely-not-installed")
            }
            other => panic!("Expected Spawn error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_nonzero_exit_is_reported_on_close() {
        let transport = ProcessTransport::shell("cat > /dev/null; exit 3");
        let session = transport.open().unwrap();
        match session.close() {
            Err(TransportError::CommandFailed(label, status)) => {
                assert!(label.contains("exit 3"));
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_timeout_kills_backend() {
        let transport = ProcessTransport::shell("sleep 5").with_timeout(Duration::from_millis(200));
        let session = transport.open().unwrap();

        let start = std::time::Instant::now();
        let res = session.close();
        assert!(matches!(res, Err(TransportError::Timeout(_, _))));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_builder_collects_arguments() {
        let transport = ProcessTransport::new("gnuplot")
            .arg("-persist")
            .args(["-e", "x=1"])
            .env("GNUTERM", "png")
            .without_timeout();

        assert_eq!(transport.program(), "gnuplot");
        assert_eq!(transport.command_line(), "gnuplot -persist -e x=1");
        assert_eq!(transport.timeout(), None);
    }
}
