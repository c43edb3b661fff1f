// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDFTools — Native camera bridge abstractions.
//
// Defines the camera trait and platform dispatch for the scan page. The
// high-level code talks to one `CameraBridge` regardless of whether frames
// come from iOS (UIKit), Android (ART/JNI), or nowhere (desktop stub).

pub mod session;
pub mod traits;

#[cfg(target_os = "ios")]
pub mod ios;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod stub;

pub use session::CameraSession;
pub use traits::CameraBridge;

/// Retrieve the camera bridge implementation for the target operating system.
pub fn platform_camera() -> Box<dyn traits::CameraBridge> {
    #[cfg(target_os = "ios")]
    {
        Box::new(ios::IosCamera::new())
    }
    #[cfg(target_os = "android")]
    {
        Box::new(android::AndroidCamera::new())
    }
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        // Desktop/CI: the scan page falls back to a file dialog.
        Box::new(stub::StubCamera::default())
    }
}
