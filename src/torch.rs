//! Torch toggle, as a state machine independent of any camera API.
//!
//! The host owns the device. It calls [`Torch::toggle`] on each button press
//! and performs the returned [`TorchCommand`]; once an acquisition settles it
//! reports back through [`Torch::acquisition_finished`]. At most one
//! acquisition is outstanding: presses while it runs are ignored.
//!
//! ```
//! # use torchlite::{Torch, TorchCommand, TorchError, TorchState};
//! let mut torch = Torch::new(true);
//! assert_eq!(torch.toggle(), TorchCommand::Acquire);
//! assert_eq!(torch.state(), TorchState::Acquiring);
//!
//! let failure = TorchError::from_name("NotAllowedError");
//! assert_eq!(torch.acquisition_finished(Err(failure)), TorchCommand::Release);
//! assert_eq!(torch.state(), TorchState::Off);
//! assert_eq!(torch.error(), Some(&TorchError::PermissionDenied));
//! ```

use std::error;
use std::fmt::{self, Display, Formatter};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorchState {
    /// The platform offers no camera access
    Unsupported,
    Off,
    /// Waiting for the camera track and the torch constraint
    Acquiring,
    On,
}

/// What the host has to do with the camera after a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorchCommand {
    /// Open the rear camera and enable its torch
    Acquire,
    /// Stop the camera track
    Release,
    Nothing,
}

/// Why the torch could not be turned on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TorchError {
    /// The user refused camera access
    PermissionDenied,
    /// There is no rear camera
    NoCamera,
    /// The camera exists but can not drive its torch
    Unsupported,
    /// Any other failure, with the name reported by the platform
    Unavailable(String),
}

impl TorchError {
    /// Classify a failure from the platform exception name
    pub fn from_name(name: &str) -> Self {
        match name {
            "NotAllowedError" => Self::PermissionDenied,
            "NotFoundError" => Self::NoCamera,
            "OverconstrainedError" => Self::Unsupported,
            other => Self::Unavailable(other.to_string()),
        }
    }

    /// Message shown to the user
    pub fn message(&self) -> &'static str {
        match *self {
            Self::PermissionDenied => {
                "Camera permission denied. Please allow access to use the flashlight."
            }
            Self::NoCamera => "No rear camera found.",
            Self::Unsupported => "Flashlight control is not supported on this device/browser.",
            Self::Unavailable(_) => "Could not access flashlight.",
        }
    }
}

impl Display for TorchError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Unavailable(ref name) => write!(fmt, "{} ({})", self.message(), name),
            _ => write!(fmt, "{}", self.message()),
        }
    }
}

impl error::Error for TorchError {}

/// Message shown when the platform has no camera access at all
pub const UNSUPPORTED_MESSAGE: &str =
    "Your browser doesn't support camera access needed for the flashlight.";

#[derive(Debug, Clone)]
pub struct Torch {
    state: TorchState,
    error: Option<TorchError>,
}

impl Torch {
    /// Create a torch that is off, or permanently unsupported when the
    /// platform has no camera access.
    pub fn new(supported: bool) -> Self {
        let state = if supported {
            TorchState::Off
        } else {
            TorchState::Unsupported
        };
        Self { state, error: None }
    }

    /// Handle a press on the torch button.
    pub fn toggle(&mut self) -> TorchCommand {
        let command = match self.state {
            TorchState::Off => {
                self.error = None;
                self.state = TorchState::Acquiring;
                TorchCommand::Acquire
            }
            TorchState::On => {
                self.error = None;
                self.state = TorchState::Off;
                TorchCommand::Release
            }
            TorchState::Acquiring | TorchState::Unsupported => TorchCommand::Nothing,
        };
        debug!(state = ?self.state, ?command, "torch toggled");
        command
    }

    /// Report the outcome of the acquisition requested by
    /// [`toggle`](#method.toggle).
    ///
    /// A failed acquisition asks for the partially opened track to be
    /// released. So does a successful one settling after
    /// [`shutdown`](#method.shutdown), since nobody wants that track anymore.
    pub fn acquisition_finished(&mut self, outcome: Result<(), TorchError>) -> TorchCommand {
        if self.state != TorchState::Acquiring {
            debug!(state = ?self.state, "stale torch acquisition");
            return if outcome.is_ok() {
                TorchCommand::Release
            } else {
                TorchCommand::Nothing
            };
        }
        match outcome {
            Ok(()) => {
                self.state = TorchState::On;
                debug!("torch on");
                TorchCommand::Nothing
            }
            Err(error) => {
                warn!(%error, "torch acquisition failed");
                self.state = TorchState::Off;
                self.error = Some(error);
                TorchCommand::Release
            }
        }
    }

    /// Turn the torch off for good, as when the widget goes away.
    pub fn shutdown(&mut self) -> TorchCommand {
        match self.state {
            TorchState::On | TorchState::Acquiring => {
                self.state = TorchState::Off;
                TorchCommand::Release
            }
            TorchState::Off | TorchState::Unsupported => TorchCommand::Nothing,
        }
    }

    pub fn state(&self) -> TorchState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state == TorchState::On
    }

    /// Check if a press on the button would do anything
    pub fn is_enabled(&self) -> bool {
        match self.state {
            TorchState::Off | TorchState::On => true,
            TorchState::Acquiring | TorchState::Unsupported => false,
        }
    }

    /// The failure of the last acquisition, until the next press
    pub fn error(&self) -> Option<&TorchError> {
        self.error.as_ref()
    }
}
