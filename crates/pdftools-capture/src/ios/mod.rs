// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iOS camera bridge via objc2 and UIImagePickerController.
//
// Requires compilation with the iOS SDK (Xcode). All UIKit interactions
// require the main thread; methods return `PdfToolsError::Bridge` if called
// off-main. Frames are delivered JPEG-encoded by UIKit.

#![cfg(target_os = "ios")]

use std::cell::RefCell;
use std::ffi::c_void;
use std::sync::mpsc;

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, NSObject};
use objc2::{MainThreadMarker, define_class, msg_send};
use objc2_foundation::{NSDictionary, NSString};
use objc2_ui_kit::{
    UIImagePickerController, UIImagePickerControllerCameraDevice,
    UIImagePickerControllerDelegate, UIImagePickerControllerSourceType,
    UINavigationControllerDelegate, UIViewController,
};

use pdftools_core::CameraFacing;
use pdftools_core::error::{PdfToolsError, Result};

use crate::traits::CameraBridge;

extern "C" {
    /// Key into the `info` dictionary passed to the image-picker delegate.
    /// The value is the original `UIImage` taken by the user.
    static UIImagePickerControllerOriginalImage: &'static NSString;

    /// Convert a `UIImage` to JPEG `NSData`.
    fn UIImageJPEGRepresentation(
        image: *const AnyObject,
        compression_quality: f64,
    ) -> *mut AnyObject;
}

/// Assert that we are on the main thread and return the marker.
fn require_main_thread() -> Result<MainThreadMarker> {
    MainThreadMarker::new()
        .ok_or_else(|| PdfToolsError::Bridge("must be called from the main thread".into()))
}

/// Obtain the root `UIViewController` from the key window for presentation.
fn root_view_controller() -> Result<Retained<UIViewController>> {
    let mtm = require_main_thread()?;
    let app = objc2_ui_kit::UIApplication::sharedApplication(mtm);

    // SAFETY: msg_send! to well-known UIApplication selectors (keyWindow,
    // rootViewController), on the main thread.
    let root: Option<Retained<UIViewController>> = unsafe {
        let window: Option<Retained<AnyObject>> = msg_send![&app, keyWindow];
        window.and_then(|w| msg_send![&w, rootViewController])
    };

    root.ok_or_else(|| PdfToolsError::Bridge("no root view controller available".into()))
}

// ---------------------------------------------------------------------------
// Picker delegate
// ---------------------------------------------------------------------------
// Carries an `mpsc::Sender` so `capture_jpeg` can block until the user takes
// a photo or cancels.

struct PickerDelegateIvars {
    /// Taken (`Option::take`) on first callback to prevent double-sends.
    sender: RefCell<Option<mpsc::Sender<Option<Vec<u8>>>>>,
    /// JPEG compression quality in 0.0..=1.0.
    quality: f64,
}

// SAFETY: define_class! declares an ObjC class inheriting from NSObject, as
// objc2 requires. MainThreadOnly keeps delegate callbacks on the main thread.
define_class! {
    #[unsafe(super(NSObject))]
    #[thread_kind = MainThreadOnly]
    #[name = "PdfToolsCameraDelegate"]
    #[ivars = PickerDelegateIvars]
    struct PickerDelegate;

    unsafe impl UIImagePickerControllerDelegate for PickerDelegate {
        #[unsafe(method(imagePickerController:didFinishPickingMediaWithInfo:))]
        fn did_finish(
            &self,
            picker: &UIImagePickerController,
            info: &NSDictionary<NSString, AnyObject>,
        ) {
            // SAFETY: objectForKey with the UIKit extern key; nil when absent.
            let jpeg: Option<Vec<u8>> = unsafe {
                info.objectForKey(UIImagePickerControllerOriginalImage)
            }
            .and_then(|ui_image: Retained<AnyObject>| {
                // SAFETY: UIKit C function; returns autoreleased NSData*
                // (nil on failure). Bytes are copied out immediately.
                let raw = unsafe {
                    UIImageJPEGRepresentation(
                        &*ui_image as *const AnyObject,
                        self.ivars().quality,
                    )
                };
                if raw.is_null() {
                    None
                } else {
                    let ns_data: &objc2_foundation::NSData =
                        unsafe { &*(raw as *const objc2_foundation::NSData) };
                    Some(ns_data.to_vec())
                }
            });

            // SAFETY: standard UIViewController selector, main thread.
            unsafe {
                let _: () = msg_send![
                    picker,
                    dismissViewControllerAnimated: true,
                    completion: std::ptr::null::<c_void>()
                ];
            }

            if let Some(tx) = self.ivars().sender.borrow_mut().take() {
                let _ = tx.send(jpeg);
            }
        }

        #[unsafe(method(imagePickerControllerDidCancel:))]
        fn did_cancel(&self, picker: &UIImagePickerController) {
            // SAFETY: as above.
            unsafe {
                let _: () = msg_send![
                    picker,
                    dismissViewControllerAnimated: true,
                    completion: std::ptr::null::<c_void>()
                ];
            }
            if let Some(tx) = self.ivars().sender.borrow_mut().take() {
                let _ = tx.send(None);
            }
        }
    }

    // UIImagePickerController requires its delegate to also conform to
    // UINavigationControllerDelegate.
    unsafe impl UINavigationControllerDelegate for PickerDelegate {}
}

impl PickerDelegate {
    fn new(
        mtm: MainThreadMarker,
        tx: mpsc::Sender<Option<Vec<u8>>>,
        quality: f64,
    ) -> Retained<Self> {
        let this = mtm.alloc::<Self>();
        let this = this.set_ivars(PickerDelegateIvars {
            sender: RefCell::new(Some(tx)),
            quality,
        });
        // SAFETY: standard NSObject init via super.
        unsafe { msg_send![super(this), init] }
    }
}

// ---------------------------------------------------------------------------
// Bridge struct
// ---------------------------------------------------------------------------

/// iOS camera bridge. The "stream" is the availability claim on the camera
/// source; each frame is taken through the system capture UI.
pub struct IosCamera {
    facing: CameraFacing,
    active: bool,
}

impl IosCamera {
    pub fn new() -> Self {
        Self {
            facing: CameraFacing::Rear,
            active: false,
        }
    }

    fn camera_device(&self) -> UIImagePickerControllerCameraDevice {
        match self.facing {
            CameraFacing::Front => UIImagePickerControllerCameraDevice::Front,
            CameraFacing::Rear => UIImagePickerControllerCameraDevice::Rear,
        }
    }
}

impl CameraBridge for IosCamera {
    fn platform_name(&self) -> &str {
        "iOS"
    }

    fn start(&mut self, facing: CameraFacing) -> Result<()> {
        let mtm = require_main_thread()?;

        let available = UIImagePickerController::isSourceTypeAvailable(
            UIImagePickerControllerSourceType::Camera,
            mtm,
        );
        if !available {
            // No camera hardware (e.g. Simulator).
            return Err(PdfToolsError::CameraUnavailable);
        }

        self.facing = facing;
        self.active = true;
        tracing::info!(facing = ?facing, "iOS: camera stream acquired");
        Ok(())
    }

    fn capture_jpeg(&mut self, quality: u8) -> Result<Vec<u8>> {
        let mtm = require_main_thread()?;
        if !self.active {
            return Err(PdfToolsError::Bridge("camera stream is not active".into()));
        }

        tracing::info!("iOS: presenting UIImagePickerController");

        let picker = UIImagePickerController::new(mtm);
        // SAFETY: property setters on the picker; camera availability was
        // verified in start().
        unsafe {
            picker.setSourceType(UIImagePickerControllerSourceType::Camera);
            picker.setCameraDevice(self.camera_device());
        }

        let (tx, rx) = mpsc::channel();
        let delegate = PickerDelegate::new(mtm, tx, quality as f64 / 100.0);

        // SAFETY: PickerDelegate conforms to both required delegate protocols
        // (define_class! above); the cast to AnyObject is a plain upcast.
        unsafe {
            let delegate_obj: &AnyObject =
                &*((&*delegate) as *const PickerDelegate as *const AnyObject);
            picker.setDelegate(Some(delegate_obj));
        }

        let root_vc = root_view_controller()?;
        // SAFETY: presentViewController on the main thread.
        unsafe {
            root_vc.presentViewController_animated_completion(&picker, true, None);
        }

        match rx.recv() {
            Ok(Some(jpeg)) => Ok(jpeg),
            Ok(None) => Err(PdfToolsError::Bridge("capture cancelled".into())),
            Err(err) => Err(PdfToolsError::Bridge(format!(
                "camera delegate dropped: {err}"
            ))),
        }
    }

    fn stop(&mut self) {
        if self.active {
            self.active = false;
            tracing::info!("iOS: camera stream released");
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
