//! Real Python execution through the embedded interpreter
//!
//! The user's code is wrapped so `sys.stdout` and `sys.stderr` are
//! redirected into string buffers, executed with a fresh globals dict, and
//! both buffers are read back afterwards. Exceptions raised by the user
//! code (syntax or runtime) are caught and rendered, never propagated.

use std::ffi::CString;

use pyo3::prelude::*;
use pyo3::types::PyDict;
use tracing::debug;

use crate::engine::NO_OUTPUT_MESSAGE;

/// Captured output buffers of one run.
struct Captured {
    stdout: String,
    stderr: String,
}

/// Execute Python code, returning the rendered output text.
pub(crate) async fn execute(code: &str) -> String {
    let code = code.to_string();
    let joined = tokio::task::spawn_blocking(move || run_blocking(&code)).await;

    match joined {
        Ok(Ok(captured)) => render(captured),
        Ok(Err(message)) => format!("Error executing Python code:\n{message}\n"),
        Err(join_err) => format!("Error executing Python code:\n{join_err}\n"),
    }
}

fn wrap(code: &str) -> String {
    format!(
        "import sys\n\
         from io import StringIO\n\
         \n\
         sys.stdout = StringIO()\n\
         sys.stderr = StringIO()\n\
         \n\
         {code}\n\
         \n\
         _stdout = sys.stdout.getvalue()\n\
         _stderr = sys.stderr.getvalue()\n"
    )
}

fn run_blocking(code: &str) -> Result<Captured, String> {
    let wrapped = wrap(code);
    let program = CString::new(wrapped).map_err(|err| err.to_string())?;

    Python::with_gil(|py| {
        let globals = PyDict::new(py);
        py.run(program.as_c_str(), Some(&globals), None)
            .map_err(|err| err.to_string())?;

        let stdout = read_str(&globals, "_stdout")?;
        let stderr = read_str(&globals, "_stderr")?;
        debug!(
            stdout_len = stdout.len(),
            stderr_len = stderr.len(),
            "python run captured output"
        );
        Ok(Captured { stdout, stderr })
    })
}

fn read_str(globals: &Bound<'_, PyDict>, key: &str) -> Result<String, String> {
    match globals.get_item(key).map_err(|err| err.to_string())? {
        Some(value) => value.extract::<String>().map_err(|err| err.to_string()),
        None => Ok(String::new()),
    }
}

fn render(captured: Captured) -> String {
    let mut out = String::new();
    out.push_str(&captured.stdout);
    if !captured.stderr.is_empty() {
        out.push_str("Error: ");
        out.push_str(&captured.stderr);
    }

    if out.is_empty() {
        NO_OUTPUT_MESSAGE.to_string()
    } else {
        out
    }
}
