use std::ffi::{CStr, CString};
use std::ptr;

use super::ProcessError;

/// A null-terminated `argv` ready to hand to `execvp`.
///
/// Built in the parent so the child does not allocate between fork and exec.
#[derive(Debug)]
pub struct ArgVector {
    args: Vec<CString>,
    ptrs: Vec<*const libc::c_char>,
}

impl ArgVector {
    pub fn new(tokens: &[&str]) -> Result<Self, ProcessError> {
        let program = tokens.first().copied().unwrap_or_default();
        let args = tokens
            .iter()
            .map(|token| CString::new(*token))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ProcessError::InvalidArgument(program.to_string()))?;

        let mut ptrs: Vec<*const libc::c_char> = args.iter().map(|arg| arg.as_ptr()).collect();
        ptrs.push(ptr::null());

        Ok(Self { args, ptrs })
    }

    /// The first argument, looked up on `PATH` by `execvp`.
    pub fn program(&self) -> Option<&CStr> {
        self.args.first().map(CString::as_c_str)
    }

    pub fn as_ptr(&self) -> *const *const libc::c_char {
        self.ptrs.as_ptr()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CStr> {
        self.args.iter().map(CString::as_c_str)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}
