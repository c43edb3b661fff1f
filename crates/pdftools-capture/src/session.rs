// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Camera session — exclusive ownership of the preview stream.
//
// The stream is acquired in `open`, released by `stop`, and released again
// on drop so page teardown never leaks the camera. Switching facing stops
// the current stream before starting the other camera; the two are never
// held at once.

use pdftools_core::CameraFacing;
use pdftools_core::error::{PdfToolsError, Result};
use tracing::{debug, info};

use crate::traits::CameraBridge;

/// An open camera stream. There is at most one per bridge; the session owns
/// the bridge for its whole lifetime.
pub struct CameraSession {
    bridge: Box<dyn CameraBridge>,
    facing: CameraFacing,
}

impl CameraSession {
    /// Open a session on the platform camera.
    pub fn open(facing: CameraFacing) -> Result<Self> {
        Self::with_bridge(crate::platform_camera(), facing)
    }

    /// Open a session on a specific bridge (used by tests and the platform
    /// dispatcher).
    pub fn with_bridge(mut bridge: Box<dyn CameraBridge>, facing: CameraFacing) -> Result<Self> {
        bridge.start(facing)?;
        info!(platform = bridge.platform_name(), ?facing, "camera stream acquired");
        Ok(Self { bridge, facing })
    }

    /// The facing of the active stream.
    pub fn facing(&self) -> CameraFacing {
        self.facing
    }

    pub fn is_active(&self) -> bool {
        self.bridge.is_active()
    }

    /// Capture one JPEG frame from the active stream.
    pub fn capture_frame(&mut self, quality: u8) -> Result<Vec<u8>> {
        if !self.bridge.is_active() {
            return Err(PdfToolsError::Bridge("camera stream is not active".into()));
        }
        self.bridge.capture_jpeg(quality)
    }

    /// Stop the current stream and restart with the other camera.
    pub fn switch_facing(&mut self) -> Result<CameraFacing> {
        self.bridge.stop();
        self.facing = self.facing.toggled();
        self.bridge.start(self.facing)?;
        info!(facing = ?self.facing, "camera facing switched");
        Ok(self.facing)
    }

    /// Release the stream explicitly. The session is unusable afterwards.
    pub fn stop(&mut self) {
        self.bridge.stop();
        debug!("camera stream released");
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        if self.bridge.is_active() {
            self.bridge.stop();
            debug!("camera stream released on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    /// Test double that records stream lifecycle calls.
    struct FakeCamera {
        active: Arc<AtomicBool>,
        starts: Arc<AtomicU32>,
        stops: Arc<AtomicU32>,
        deny: bool,
    }

    impl FakeCamera {
        fn working() -> (Box<dyn CameraBridge>, Arc<AtomicBool>, Arc<AtomicU32>, Arc<AtomicU32>) {
            let active = Arc::new(AtomicBool::new(false));
            let starts = Arc::new(AtomicU32::new(0));
            let stops = Arc::new(AtomicU32::new(0));
            let camera = FakeCamera {
                active: Arc::clone(&active),
                starts: Arc::clone(&starts),
                stops: Arc::clone(&stops),
                deny: false,
            };
            (Box::new(camera), active, starts, stops)
        }

        fn denying() -> Box<dyn CameraBridge> {
            Box::new(FakeCamera {
                active: Arc::new(AtomicBool::new(false)),
                starts: Arc::new(AtomicU32::new(0)),
                stops: Arc::new(AtomicU32::new(0)),
                deny: true,
            })
        }
    }

    impl CameraBridge for FakeCamera {
        fn platform_name(&self) -> &str {
            "Fake"
        }

        fn start(&mut self, _facing: CameraFacing) -> Result<()> {
            if self.deny {
                return Err(PdfToolsError::CameraDenied("user refused".into()));
            }
            self.starts.fetch_add(1, Ordering::SeqCst);
            self.active.store(true, Ordering::SeqCst);
            Ok(())
        }

        fn capture_jpeg(&mut self, _quality: u8) -> Result<Vec<u8>> {
            Ok(vec![0xFF, 0xD8, 0xFF, 0xD9])
        }

        fn stop(&mut self) {
            if self.active.swap(false, Ordering::SeqCst) {
                self.stops.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn is_active(&self) -> bool {
            self.active.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn open_acquires_the_stream() {
        let (bridge, active, starts, _) = FakeCamera::working();
        let session = CameraSession::with_bridge(bridge, CameraFacing::Rear).unwrap();
        assert!(session.is_active());
        assert!(active.load(Ordering::SeqCst));
        assert_eq!(starts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn capture_returns_a_frame() {
        let (bridge, _, _, _) = FakeCamera::working();
        let mut session = CameraSession::with_bridge(bridge, CameraFacing::Rear).unwrap();
        let frame = session.capture_frame(90).unwrap();
        assert_eq!(&frame[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn capture_after_stop_fails() {
        let (bridge, _, _, _) = FakeCamera::working();
        let mut session = CameraSession::with_bridge(bridge, CameraFacing::Rear).unwrap();
        session.stop();
        assert!(session.capture_frame(90).is_err());
    }

    #[test]
    fn switch_facing_restarts_the_stream() {
        let (bridge, _, starts, stops) = FakeCamera::working();
        let mut session = CameraSession::with_bridge(bridge, CameraFacing::Rear).unwrap();
        let facing = session.switch_facing().unwrap();
        assert_eq!(facing, CameraFacing::Front);
        assert_eq!(starts.load(Ordering::SeqCst), 2);
        assert_eq!(stops.load(Ordering::SeqCst), 1);
        assert!(session.is_active());
    }

    #[test]
    fn drop_releases_the_stream() {
        let (bridge, active, _, stops) = FakeCamera::working();
        {
            let _session = CameraSession::with_bridge(bridge, CameraFacing::Rear).unwrap();
        }
        assert!(!active.load(Ordering::SeqCst));
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn explicit_stop_then_drop_releases_once() {
        let (bridge, _, _, stops) = FakeCamera::working();
        {
            let mut session = CameraSession::with_bridge(bridge, CameraFacing::Rear).unwrap();
            session.stop();
        }
        assert_eq!(stops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn denied_permission_never_opens_a_session() {
        let result = CameraSession::with_bridge(FakeCamera::denying(), CameraFacing::Rear);
        assert!(matches!(result, Err(PdfToolsError::CameraDenied(_))));
    }
}
