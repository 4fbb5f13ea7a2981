//! FFI bindings for Podium Coach
//!
//! This module provides C-compatible functions for calling the engine from
//! other languages. All functions use C strings (null-terminated) and return
//! allocated memory that must be freed by the caller using
//! `podium_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::pipeline::form_to_report_json;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Analyze attempt-form JSON and return report payload JSON.
///
/// # Safety
/// - `form_json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `podium_free_string`.
/// - Returns NULL on error; call `podium_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn podium_analyze_form_json(form_json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(form_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid form JSON string pointer");
            return ptr::null_mut();
        }
    };

    match form_to_report_json(&json_str) {
        Ok(report_json) => string_to_cstr(&report_json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a string returned by Podium functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a Podium function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn podium_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next Podium function call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn podium_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

/// Get the engine library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn podium_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn sample_form_json() -> CString {
        CString::new(
            r#"{
                "question": "Why do you want this role?",
                "answer": "I enjoy building reliable systems. For example, I rebuilt our deploy pipeline. It cut release failures in half.",
                "pauseSeconds": "0.4",
                "wpm": "135",
                "fillerCount": "1",
                "confidenceScore": "0.8",
                "eyeContact": "0.75",
                "smileFreq": "3",
                "gestures": "minimal",
                "emotionDistribution": "neutral 80%, happy 20%"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_ffi_analyze_form_json() {
        let form = sample_form_json();

        unsafe {
            let result = podium_analyze_form_json(form.as_ptr());
            assert!(!result.is_null());

            let result_str = CStr::from_ptr(result).to_str().unwrap();
            assert!(result_str.contains("report_version"));
            assert!(result_str.contains("podium-coach"));

            podium_free_string(result);
        }
    }

    #[test]
    fn test_ffi_error_handling() {
        let invalid = CString::new("not json").unwrap();

        unsafe {
            let result = podium_analyze_form_json(invalid.as_ptr());
            assert!(result.is_null());

            let error = podium_last_error();
            assert!(!error.is_null());

            let error_str = CStr::from_ptr(error).to_str().unwrap();
            assert!(!error_str.is_empty());
        }
    }

    #[test]
    fn test_ffi_null_pointer() {
        unsafe {
            let result = podium_analyze_form_json(ptr::null());
            assert!(result.is_null());
            assert!(!podium_last_error().is_null());
        }
    }

    #[test]
    fn test_ffi_version() {
        unsafe {
            let version = podium_version();
            assert!(!version.is_null());

            let version_str = CStr::from_ptr(version).to_str().unwrap();
            assert!(!version_str.is_empty());
        }
    }
}
