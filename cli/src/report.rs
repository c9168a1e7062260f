use std::process::ExitCode;
use cdnrules::types::Diagnostic;

/// One line per diagnostic.
pub fn lines(diags: &[Diagnostic]) -> String {
    diags.iter()
        .map(|diag| format!("{diag}\n"))
        .collect()
}

pub fn yaml(diags: &[Diagnostic]) -> Result<String, String> {
    serde_yaml::to_string(diags)
        .map_err(|e| format!("error writing diagnostics: {e}"))
}

pub fn exit_code(valid: bool) -> ExitCode {
    if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
