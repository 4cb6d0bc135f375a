use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::error::{PokekaError, Result};

pub const ENV_CLIPBOARD_BACKEND: &str = "POKEKA_CLIPBOARD_BACKEND";

/// Common OSC 52 size limit (base64 payload bytes).
pub const MAX_OSC52_PAYLOAD: usize = 74_994;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardBackend {
    Osc52,
    External(ExternalBackend),
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalBackend {
    MacOS,
    Windows,
    Wayland,
    X11,
}

/// Completion signal of a detached clipboard write.
pub type CopyReceipt = oneshot::Receiver<Result<()>>;

#[derive(Debug, Clone, Copy)]
pub struct Clipboard {
    backend: ClipboardBackend,
}

impl Clipboard {
    pub fn new(backend: ClipboardBackend) -> Self {
        Self { backend }
    }

    /// Prefer a native clipboard tool, fall back to OSC 52. The
    /// `POKEKA_CLIPBOARD_BACKEND` variable overrides detection.
    pub fn detect() -> Self {
        let detected = detect_external_backend()
            .map(ClipboardBackend::External)
            .unwrap_or(ClipboardBackend::Osc52);

        let override_value = env::var(ENV_CLIPBOARD_BACKEND).ok();
        let backend = apply_backend_override(override_value.as_deref(), detected);

        info!(backend = ?backend, "Clipboard backend detected");
        Self { backend }
    }

    pub fn backend(&self) -> ClipboardBackend {
        self.backend
    }

    /// OSC 52 writes must go through the terminal's own writer, between
    /// frames, instead of a worker thread.
    pub fn writes_to_terminal(&self) -> bool {
        self.backend() == ClipboardBackend::Osc52
    }

    /// Emit the OSC 52 sequence for `content` on `writer`.
    pub fn set_osc52(&self, content: &str, writer: &mut impl Write) -> Result<()> {
        if !self.writes_to_terminal() {
            return Err(PokekaError::Clipboard(format!(
                "OSC 52 not enabled for backend {:?}",
                self.backend
            )));
        }
        let seq = osc52_sequence(content)?;
        writer.write_all(seq.as_bytes())?;
        writer.flush()?;
        debug!(bytes = content.len(), "OSC 52 clipboard write");
        Ok(())
    }

    /// Write `content` on a blocking worker and return right away. The
    /// receiver reports the outcome; dropping it is fine. Not for OSC 52,
    /// see [`set_osc52`](Self::set_osc52).
    pub fn copy(&self, handle: &Handle, content: String) -> CopyReceipt {
        let (tx, rx) = oneshot::channel();
        let backend = self.backend;

        handle.spawn_blocking(move || {
            debug!(backend = ?backend, bytes = content.len(), "Clipboard write");
            let result = write_clipboard(backend, &content);
            // Receiver may already be gone.
            let _ = tx.send(result);
        });

        rx
    }
}

/// Apply the `POKEKA_CLIPBOARD_BACKEND` value, if any, on top of the
/// detected backend. Unknown values keep the detected one.
pub fn apply_backend_override(value: Option<&str>, detected: ClipboardBackend) -> ClipboardBackend {
    let Some(value) = value else {
        return detected;
    };

    match parse_backend_override(value) {
        Some(backend) => {
            info!(backend = ?backend, "Clipboard backend overridden from {}", ENV_CLIPBOARD_BACKEND);
            backend
        }
        None => {
            warn!(
                "Invalid {} value '{}', defaulting to {:?}",
                ENV_CLIPBOARD_BACKEND, value, detected
            );
            detected
        }
    }
}

pub fn parse_backend_override(value: &str) -> Option<ClipboardBackend> {
    match value.trim().to_ascii_lowercase().as_str() {
        "osc52" => Some(ClipboardBackend::Osc52),
        "macos" => Some(ClipboardBackend::External(ExternalBackend::MacOS)),
        "windows" => Some(ClipboardBackend::External(ExternalBackend::Windows)),
        "wayland" => Some(ClipboardBackend::External(ExternalBackend::Wayland)),
        "x11" => Some(ClipboardBackend::External(ExternalBackend::X11)),
        "none" => Some(ClipboardBackend::Unavailable),
        _ => None,
    }
}

/// OSC 52 "set clipboard" sequence for `content`.
pub fn osc52_sequence(content: &str) -> Result<String> {
    let encoded = STANDARD.encode(content.as_bytes());
    if encoded.len() > MAX_OSC52_PAYLOAD {
        return Err(PokekaError::Clipboard(format!(
            "OSC 52 payload too large ({} > {})",
            encoded.len(),
            MAX_OSC52_PAYLOAD
        )));
    }
    Ok(format!("\x1b]52;c;{encoded}\x07"))
}

fn write_clipboard(backend: ClipboardBackend, content: &str) -> Result<()> {
    match backend {
        ClipboardBackend::Osc52 => Err(PokekaError::Clipboard(
            "OSC 52 writes need the terminal writer".to_string(),
        )),
        ClipboardBackend::External(ExternalBackend::MacOS) => {
            run_command_with_input("pbcopy", &[], content)
        }
        ClipboardBackend::External(ExternalBackend::Windows) => {
            run_command_with_input("clip", &[], content)
        }
        ClipboardBackend::External(ExternalBackend::Wayland) => {
            run_command_with_input("wl-copy", &[], content)
        }
        ClipboardBackend::External(ExternalBackend::X11) => {
            run_command_with_input("xclip", &["-selection", "clipboard"], content)
                .or_else(|_| run_command_with_input("xsel", &["--clipboard", "--input"], content))
        }
        ClipboardBackend::Unavailable => {
            Err(PokekaError::Clipboard("clipboard not available".to_string()))
        }
    }
}

fn detect_external_backend() -> Option<ExternalBackend> {
    if cfg!(target_os = "macos") && command_exists("pbcopy") {
        return Some(ExternalBackend::MacOS);
    }
    if cfg!(target_os = "windows") && command_exists("clip") {
        return Some(ExternalBackend::Windows);
    }
    if env::var_os("WAYLAND_DISPLAY").is_some() && command_exists("wl-copy") {
        return Some(ExternalBackend::Wayland);
    }
    if env::var_os("DISPLAY").is_some() && (command_exists("xclip") || command_exists("xsel")) {
        return Some(ExternalBackend::X11);
    }
    None
}

fn command_exists(command: &str) -> bool {
    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };

    env::split_paths(&path_var).any(|dir| {
        dir.join(command).is_file()
            || (cfg!(target_os = "windows") && dir.join(format!("{command}.exe")).is_file())
    })
}

fn run_command_with_input(cmd: &str, args: &[&str], content: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| PokekaError::Clipboard(format!("{cmd}: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(content.as_bytes())
            .map_err(|e| PokekaError::Clipboard(format!("{cmd}: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| PokekaError::Clipboard(format!("{cmd}: {e}")))?;
    if status.success() {
        Ok(())
    } else {
        Err(PokekaError::Clipboard(format!("clipboard command failed: {cmd}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_wraps_base64_payload() {
        let seq = osc52_sequence("ミュウ").unwrap();
        let expected = format!("\x1b]52;c;{}\x07", STANDARD.encode("ミュウ"));
        assert_eq!(seq, expected);
    }

    #[test]
    fn osc52_rejects_oversized_payload() {
        let huge = "a".repeat(MAX_OSC52_PAYLOAD);
        let err = osc52_sequence(&huge).unwrap_err();
        assert!(matches!(err, PokekaError::Clipboard(_)));
    }

    #[test]
    fn osc52_goes_through_given_writer() {
        let clipboard = Clipboard::new(ClipboardBackend::Osc52);
        assert!(clipboard.writes_to_terminal());

        let mut out: Vec<u8> = Vec::new();
        clipboard.set_osc52("ピカチュウ", &mut out).unwrap();
        assert_eq!(out, osc52_sequence("ピカチュウ").unwrap().into_bytes());
    }

    #[test]
    fn osc52_refused_for_other_backends() {
        let clipboard = Clipboard::new(ClipboardBackend::External(ExternalBackend::X11));
        assert!(!clipboard.writes_to_terminal());

        let mut out: Vec<u8> = Vec::new();
        assert!(clipboard.set_osc52("Mew", &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn osc52_worker_never_touches_stdout() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let clipboard = Clipboard::new(ClipboardBackend::Osc52);

        let result = rt.block_on(clipboard.copy(rt.handle(), "Mew".to_string())).unwrap();
        assert!(matches!(result, Err(PokekaError::Clipboard(_))));
    }

    #[test]
    fn parses_overrides() {
        assert_eq!(parse_backend_override("OSC52"), Some(ClipboardBackend::Osc52));
        assert_eq!(
            parse_backend_override(" x11 "),
            Some(ClipboardBackend::External(ExternalBackend::X11))
        );
        assert_eq!(parse_backend_override("none"), Some(ClipboardBackend::Unavailable));
        assert_eq!(parse_backend_override("gopher"), None);
    }

    #[test]
    fn unknown_override_keeps_detected_backend() {
        let detected = ClipboardBackend::External(ExternalBackend::Wayland);
        assert_eq!(apply_backend_override(Some("gopher"), detected), detected);
        assert_eq!(apply_backend_override(None, detected), detected);
        assert_eq!(
            apply_backend_override(Some("osc52"), detected),
            ClipboardBackend::Osc52
        );
    }

    #[test]
    fn unavailable_backend_reports_failure() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let clipboard = Clipboard::new(ClipboardBackend::Unavailable);

        let receipt = clipboard.copy(rt.handle(), "ピカチュウ".to_string());
        let result = rt.block_on(receipt).unwrap();
        assert!(matches!(result, Err(PokekaError::Clipboard(_))));
    }

    #[test]
    fn dropped_receipt_does_not_panic_worker() {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let clipboard = Clipboard::new(ClipboardBackend::Unavailable);
        drop(clipboard.copy(rt.handle(), "Mew".to_string()));
        rt.shutdown_timeout(std::time::Duration::from_secs(1));
    }
}
