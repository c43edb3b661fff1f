// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android camera bridge via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. The heavy lifting lives in a small Kotlin
// helper class (`org.hyperpolymath.pdftools.CameraHelper`) shipped with the
// host app; this module drives it through static method calls. The helper
// owns the CameraX preview use-case; the JNI surface is start / capture /
// stop, mirroring the `CameraBridge` trait one-to-one.

#![cfg(target_os = "android")]

use jni::JNIEnv;
use jni::objects::{JObject, JValue};

use pdftools_core::CameraFacing;
use pdftools_core::error::{PdfToolsError, Result};

use crate::traits::CameraBridge;

/// Fully-qualified name of the Kotlin helper class.
const HELPER_CLASS: &str = "org/hyperpolymath/pdftools/CameraHelper";

/// Obtain a [`JNIEnv`] handle from the global Android context.
///
/// Retrieves the `JavaVM*` set by the NDK glue code and attaches the current
/// thread if it is not already attached.
fn jni_env() -> Result<JNIEnv<'static>> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is valid for the lifetime of the process.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| PdfToolsError::Bridge(format!("failed to obtain JavaVM: {e}")))?;
    vm.attach_current_thread()
        .map_err(|e| PdfToolsError::Bridge(format!("failed to attach JNI thread: {e}")))
}

/// Obtain the hosting `Activity` as a [`JObject`].
fn activity() -> Result<JObject<'static>> {
    let ctx = ndk_context::android_context();
    let ptr = ctx.context();
    if ptr.is_null() {
        return Err(PdfToolsError::Bridge(
            "Android context is null — native activity not initialised".into(),
        ));
    }
    // SAFETY: the NDK guarantees this pointer is a valid global jobject for
    // the hosting Activity.
    Ok(unsafe { JObject::from_raw(ptr.cast()) })
}

fn jni_err(context: &str, e: jni::errors::Error) -> PdfToolsError {
    PdfToolsError::Bridge(format!("{context}: {e}"))
}

/// Map the helper's negative status codes onto the error taxonomy.
///
/// The Kotlin side returns 0 for success, -1 when camera permission was
/// refused, and -2 when no camera exists.
fn status_to_result(status: i32) -> Result<()> {
    match status {
        0 => Ok(()),
        -1 => Err(PdfToolsError::CameraDenied(
            "android.permission.CAMERA refused".into(),
        )),
        -2 => Err(PdfToolsError::CameraUnavailable),
        other => Err(PdfToolsError::Bridge(format!(
            "CameraHelper returned status {other}"
        ))),
    }
}

/// Android camera bridge. All camera state lives on the Kotlin side; this
/// struct only tracks whether we currently hold the stream.
pub struct AndroidCamera {
    active: bool,
}

impl AndroidCamera {
    pub fn new() -> Self {
        Self { active: false }
    }
}

impl CameraBridge for AndroidCamera {
    fn platform_name(&self) -> &str {
        "Android"
    }

    fn start(&mut self, facing: CameraFacing) -> Result<()> {
        let mut env = jni_env()?;
        let activity = activity()?;

        let lens = match facing {
            CameraFacing::Front => 0_i32,
            CameraFacing::Rear => 1_i32,
        };

        tracing::info!(facing = ?facing, "Android: starting camera preview");

        let status = env
            .call_static_method(
                HELPER_CLASS,
                "startPreview",
                "(Landroid/app/Activity;I)I",
                &[JValue::Object(&activity), JValue::Int(lens)],
            )
            .map_err(|e| jni_err("CameraHelper.startPreview", e))?
            .i()
            .map_err(|e| jni_err("startPreview->i", e))?;

        status_to_result(status)?;
        self.active = true;
        Ok(())
    }

    fn capture_jpeg(&mut self, quality: u8) -> Result<Vec<u8>> {
        if !self.active {
            return Err(PdfToolsError::Bridge("camera stream is not active".into()));
        }

        let mut env = jni_env()?;

        let result = env
            .call_static_method(
                HELPER_CLASS,
                "captureJpeg",
                "(I)[B",
                &[JValue::Int(quality as i32)],
            )
            .map_err(|e| jni_err("CameraHelper.captureJpeg", e))?
            .l()
            .map_err(|e| jni_err("captureJpeg->l", e))?;

        if result.is_null() {
            return Err(PdfToolsError::Bridge(
                "CameraHelper.captureJpeg returned null".into(),
            ));
        }

        let byte_array = jni::objects::JByteArray::from(result);
        let bytes = env
            .convert_byte_array(&byte_array)
            .map_err(|e| jni_err("convert_byte_array", e))?;

        tracing::debug!(bytes = bytes.len(), "Android: frame captured");
        Ok(bytes)
    }

    fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        match jni_env() {
            Ok(mut env) => {
                if let Err(e) =
                    env.call_static_method(HELPER_CLASS, "stopPreview", "()V", &[])
                {
                    tracing::warn!(error = %e, "Android: stopPreview failed");
                } else {
                    tracing::info!("Android: camera preview stopped");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Android: could not attach JNI thread to stop preview");
            }
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
