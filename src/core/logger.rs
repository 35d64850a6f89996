//! Logger instance: emission path, destination management, rotation

use crate::core::error::{LogError, Result};
use crate::core::format::{render, stamp_line};
use crate::core::rotation::{Rotation, RotationPolicy};
use crate::core::severity::{LevelMask, Severity};
use chrono::{DateTime, Local};
use parking_lot::{Mutex, RwLock};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};

/// A level-filtered logger writing to a console stream or a rolling file.
///
/// All methods take `&self`; the logger is safe to share across threads.
/// The rotation check and the write of each line happen under one lock,
/// so concurrent emitters never interleave within a line and never write
/// through a handle that is mid-rotation. Rendering happens outside the
/// lock.
pub struct Logger {
    level: RwLock<LevelMask>,
    highlight: AtomicBool,
    fail_fast: AtomicBool,
    inner: Mutex<Inner>,
}

struct Inner {
    prefix: String,
    output: Output,
    rotation: Rotation,
}

enum Output {
    /// Opaque byte sink; never rotates
    Handle(Box<dyn Write + Send>),
    /// File destination remembered by path so rotation can rename it
    File(FileOutput),
}

struct FileOutput {
    path: PathBuf,
    /// `None` after a failed reopen; the next write retries
    file: Option<File>,
    written: u64,
}

impl Logger {
    /// A logger writing to standard error with every severity enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stderr()))
    }

    /// A logger writing to an arbitrary byte sink.
    #[must_use]
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            level: RwLock::new(LevelMask::all()),
            highlight: AtomicBool::new(false),
            fail_fast: AtomicBool::new(false),
            inner: Mutex::new(Inner {
                prefix: String::new(),
                output: Output::Handle(writer),
                rotation: Rotation::new(RotationPolicy::Never, Local::now()),
            }),
        }
    }

    /// Log at an explicit severity. Unlike [`Logger::fatal`], logging
    /// `Severity::Fatal` through this method does not end the process.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        self.emit(severity, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.emit(Severity::Debug, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.emit(Severity::Info, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        self.emit(Severity::Warning, message.into(), Location::caller());
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.emit(Severity::Error, message.into(), Location::caller());
    }

    /// Write the record, then end the process with a non-zero exit code.
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.emit(Severity::Fatal, message.into(), Location::caller());
        process::exit(1);
    }

    /// Write a fatal-severity record, then unwind with the message.
    ///
    /// The unwind is catchable upstream; the record is on its way to the
    /// destination before it starts.
    #[track_caller]
    pub fn panic(&self, message: impl Into<String>) -> ! {
        let message: String = message.into();
        self.emit(Severity::Fatal, message.clone(), Location::caller());
        std::panic::panic_any(message);
    }

    fn emit(&self, severity: Severity, message: String, location: &'static Location<'static>) {
        if !self.level.read().enables(severity) {
            return;
        }
        let body = render(severity, self.highlighting(), &message);
        let mut inner = self.inner.lock();
        if let Err(err) = inner.write_record(&body, location, Local::now()) {
            // Fallback channel: never the logger's own destination. The
            // line that hit the failure is dropped, not queued.
            eprintln!("rollog: {err}");
        }
    }

    pub fn set_level(&self, mask: LevelMask) {
        *self.level.write() = mask;
    }

    /// Set the level from a name such as `"warn"`; unknown names enable
    /// everything (see [`LevelMask::from_name`]).
    pub fn set_level_by_name(&self, name: &str) {
        self.set_level(LevelMask::from_name(name));
    }

    pub fn level(&self) -> LevelMask {
        *self.level.read()
    }

    pub fn set_highlighting(&self, enabled: bool) {
        self.highlight.store(enabled, Ordering::Relaxed);
    }

    pub fn highlighting(&self) -> bool {
        self.highlight.load(Ordering::Relaxed)
    }

    /// When enabled, a failure to open an output file ends the process
    /// instead of being returned from [`Logger::set_output_path`].
    pub fn set_fail_fast(&self, enabled: bool) {
        self.fail_fast.store(enabled, Ordering::Relaxed);
    }

    pub fn fail_fast(&self) -> bool {
        self.fail_fast.load(Ordering::Relaxed)
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.inner.lock().prefix = prefix.into();
    }

    pub fn prefix(&self) -> String {
        self.inner.lock().prefix.clone()
    }

    /// Route output to an arbitrary byte sink. Clears any file path, so
    /// rotation no longer applies until a path is set again.
    pub fn set_writer(&self, writer: Box<dyn Write + Send>) {
        self.inner.lock().output = Output::Handle(writer);
    }

    /// Open `path` for append and route output to it, remembering the
    /// path for rotation.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be opened. With
    /// fail-fast enabled the process ends here instead.
    pub fn set_output_path(&self, path: impl AsRef<Path>) -> Result<()> {
        match FileOutput::open(path.as_ref().to_path_buf()) {
            Ok(output) => {
                self.inner.lock().output = Output::File(output);
                Ok(())
            }
            Err(err) if self.fail_fast() => {
                eprintln!("rollog: {err}");
                process::exit(1);
            }
            Err(err) => Err(err),
        }
    }

    /// The current output file path, if the destination is a file.
    pub fn output_path(&self) -> Option<PathBuf> {
        match &self.inner.lock().output {
            Output::File(out) => Some(out.path.clone()),
            Output::Handle(_) => None,
        }
    }

    /// Swap the output file at local-day boundaries.
    pub fn set_rotate_daily(&self) {
        self.set_rotation(RotationPolicy::Daily);
    }

    /// Swap the output file at local-hour boundaries.
    pub fn set_rotate_hourly(&self) {
        self.set_rotation(RotationPolicy::Hourly);
    }

    /// Swap the output file when it reaches `max_bytes`, keeping up to
    /// `max_backups` numbered backups.
    pub fn set_rotate_by_size(&self, max_bytes: u64, max_backups: usize) {
        self.set_rotation(RotationPolicy::Size {
            max_bytes,
            max_backups: max_backups.max(1),
        });
    }

    fn set_rotation(&self, policy: RotationPolicy) {
        self.inner.lock().rotation = Rotation::new(policy, Local::now());
    }

    pub fn rotation_policy(&self) -> RotationPolicy {
        self.inner.lock().rotation.policy()
    }

    pub fn flush(&self) -> Result<()> {
        self.inner.lock().flush()
    }

    /// Build an independent logger seeded from this one's level, prefix,
    /// highlighting and rotation policy. A file destination is reopened
    /// from its path; the handle itself is never shared.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the output file cannot be reopened.
    pub fn try_clone(&self) -> Result<Logger> {
        let (prefix, path, policy) = {
            let inner = self.inner.lock();
            let path = match &inner.output {
                Output::File(out) => Some(out.path.clone()),
                Output::Handle(_) => None,
            };
            (inner.prefix.clone(), path, inner.rotation.policy())
        };

        let clone = Logger::new();
        clone.set_level(self.level());
        clone.set_highlighting(self.highlighting());
        clone.set_prefix(prefix);
        if let Some(path) = path {
            clone.set_output_path(path)?;
        }
        match policy {
            RotationPolicy::Never => {}
            RotationPolicy::Daily => clone.set_rotate_daily(),
            RotationPolicy::Hourly => clone.set_rotate_hourly(),
            RotationPolicy::Size {
                max_bytes,
                max_backups,
            } => clone.set_rotate_by_size(max_bytes, max_backups),
        }
        clone.set_fail_fast(self.fail_fast());
        Ok(clone)
    }

    #[cfg(test)]
    pub(crate) fn emit_at(&self, severity: Severity, message: &str, now: DateTime<Local>) {
        if !self.level.read().enables(severity) {
            return;
        }
        let body = render(severity, self.highlighting(), message);
        let mut inner = self.inner.lock();
        if let Err(err) = inner.write_record(&body, Location::caller(), now) {
            eprintln!("rollog: {err}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn write_record(
        &mut self,
        body: &str,
        location: &Location<'_>,
        now: DateTime<Local>,
    ) -> Result<()> {
        if let Output::File(out) = &mut self.output {
            match self.rotation.policy() {
                RotationPolicy::Never => {}
                RotationPolicy::Daily | RotationPolicy::Hourly => {
                    if let Some(candidate) = self.rotation.time_due(now) {
                        let backup = suffixed(&out.path, self.rotation.stored_suffix());
                        out.swap(backup)?;
                        self.rotation.advance(candidate);
                    }
                }
                RotationPolicy::Size {
                    max_bytes,
                    max_backups,
                } => {
                    if out.written >= max_bytes {
                        shift_backups(&out.path, max_backups);
                        out.swap(numbered(&out.path, 1))?;
                    }
                }
            }
        }

        let line = stamp_line(&self.prefix, now, location, body);
        match &mut self.output {
            Output::Handle(writer) => writer.write_all(line.as_bytes()).map_err(LogError::from),
            Output::File(out) => out.write_line(&line),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match &mut self.output {
            Output::Handle(writer) => writer.flush().map_err(LogError::from),
            Output::File(out) => {
                if let Some(file) = out.file.as_mut() {
                    file.flush().map_err(LogError::from)?;
                }
                Ok(())
            }
        }
    }
}

impl FileOutput {
    fn open(path: PathBuf) -> Result<Self> {
        let file = open_append(&path)?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);
        Ok(Self {
            path,
            file: Some(file),
            written,
        })
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let file = match self.file.as_mut() {
            Some(file) => file,
            None => {
                // A previous rotation lost the handle; retry here.
                let file = open_append(&self.path)?;
                self.written = file.metadata().map(|m| m.len()).unwrap_or(0);
                self.file.insert(file)
            }
        };
        file.write_all(line.as_bytes()).map_err(LogError::from)?;
        self.written += line.len() as u64;
        Ok(())
    }

    /// Close the active file, move it to `backup`, and start fresh.
    ///
    /// On failure the handle stays closed and the error propagates; the
    /// next write attempts a reopen of the original path.
    fn swap(&mut self, backup: PathBuf) -> Result<()> {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }
        fs::rename(&self.path, &backup).map_err(|e| {
            LogError::rename(
                self.path.display().to_string(),
                backup.display().to_string(),
                e,
            )
        })?;
        let file = open_append(&self.path)?;
        self.written = 0;
        self.file = Some(file);
        Ok(())
    }
}

fn open_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| LogError::open(parent.display().to_string(), e))?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::open(path.display().to_string(), e))
}

/// The name a finished time bucket is kept under: `<path>.<suffix>`.
fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

fn numbered(path: &Path, index: usize) -> PathBuf {
    suffixed(path, &index.to_string())
}

/// Shift numbered backups up by one, dropping the oldest. Best effort:
/// a backup that cannot be moved is left behind rather than blocking
/// the swap of the active file.
fn shift_backups(path: &Path, max_backups: usize) {
    let oldest = numbered(path, max_backups);
    if oldest.exists() {
        let _ = fs::remove_file(&oldest);
    }
    for i in (1..max_backups).rev() {
        let from = numbered(path, i);
        if from.exists() {
            let _ = fs::rename(&from, numbered(path, i + 1));
        }
    }
}
