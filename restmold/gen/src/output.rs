//! Validation, formatting and file writing for scaffolded models.
//!
//! ## Safety Guarantees
//!
//! - **Validation**: Rendered stubs are parsed with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes
//! - **No overwrites**: An existing model file is left untouched

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::GeneratorError;
use crate::scaffold::{
    DEFAULT_DIR, DEFAULT_NAMESPACE, REST_MODEL_STUB, StubVariables, class_name, render_stub,
    target_path,
};

/// What to scaffold and where.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Model name as given by the user; normalized before use.
    pub name: String,
    pub dir: PathBuf,
    pub namespace: String,
    /// Render and validate without touching the filesystem.
    pub dry_run: bool,
}

impl ScaffoldOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dir: PathBuf::from(DEFAULT_DIR),
            namespace: DEFAULT_NAMESPACE.to_string(),
            dry_run: false,
        }
    }
}

/// Result of a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
    DryRun { path: PathBuf, code: String },
}

impl ScaffoldOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(path) | Self::AlreadyExists(path) | Self::DryRun { path, .. } => path,
        }
    }
}

/// Validates rendered code using syn.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the code fails to parse.
pub fn validate_code(code: &str) -> Result<syn::File, GeneratorError> {
    syn::parse_file(code)
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats a parsed file with prettyplease and prepends a generated-by notice.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!(
        "// This file was scaffolded by restmold-gen. It is yours to edit.\n\n{}",
        formatted
    )
}

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created as needed.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Renders the model stub for `options.name` and writes it unless the
/// target already exists.
///
/// ## Errors
///
/// Returns an error if:
/// - The name cannot be turned into a type name
/// - The rendered stub is not valid Rust
/// - File writing fails
pub fn scaffold(options: &ScaffoldOptions) -> Result<ScaffoldOutcome, GeneratorError> {
    let class_name = class_name(&options.name)?;
    let vars = StubVariables::new(class_name).with_namespace(options.namespace.clone());
    let path = target_path(&options.dir, &vars);

    if path.exists() {
        info!(path = %path.display(), "model file already exists");
        return Ok(ScaffoldOutcome::AlreadyExists(path));
    }

    let rendered = render_stub(REST_MODEL_STUB, &vars);
    let file = validate_code(&rendered)?;
    let code = format_code(&file);
    debug!(type_name = %vars.type_name(), bytes = code.len(), "rendered model stub");

    if options.dry_run {
        return Ok(ScaffoldOutcome::DryRun { path, code });
    }

    write_atomic(&path, &code)?;
    info!(path = %path.display(), "model file created");
    Ok(ScaffoldOutcome::Created(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options_in(dir: &TempDir, name: &str) -> ScaffoldOptions {
        ScaffoldOptions {
            dir: dir.path().join("api_models"),
            ..ScaffoldOptions::new(name)
        }
    }

    // === validate_code / format_code ===

    #[test]
    fn validate_code_accepts_rendered_stub() {
        let rendered = render_stub(REST_MODEL_STUB, &StubVariables::new("User"));
        assert!(validate_code(&rendered).is_ok());
    }

    #[test]
    fn validate_code_rejects_broken_rust() {
        let Err(err) = validate_code("pub struct {") else {
            panic!("expected invalid code to be rejected");
        };
        assert!(matches!(err, GeneratorError::CodeGenError(_)));
        assert!(err.to_string().contains("Generated code is invalid"));
    }

    #[test]
    fn format_code_keeps_docs_and_adds_notice() {
        let rendered = render_stub(REST_MODEL_STUB, &StubVariables::new("User"));
        let code = format_code(&validate_code(&rendered).unwrap());

        assert!(code.starts_with("// This file was scaffolded by restmold-gen"));
        assert!(code.contains("//!"));
        assert!(code.contains("impl RestModel for UserModel"));
    }

    // === write_atomic ===

    #[test]
    fn write_atomic_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("model.rs");

        write_atomic(&path, "// hi\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "// hi\n");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn write_atomic_reports_unwritable_parent() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let err = write_atomic(&blocker.join("model.rs"), "").unwrap_err();
        assert!(matches!(err, GeneratorError::WriteError { .. }));
    }

    // === scaffold ===

    #[test]
    fn scaffold_creates_model_file() {
        let temp_dir = TempDir::new().unwrap();
        let options = options_in(&temp_dir, "user");

        let outcome = scaffold(&options).unwrap();

        let expected = temp_dir.path().join("api_models").join("user_model.rs");
        assert_eq!(outcome, ScaffoldOutcome::Created(expected.clone()));
        let content = fs::read_to_string(expected).unwrap();
        assert!(content.contains("pub struct UserModel;"));
        assert!(content.contains("`crate::api_models::user_model`"));
    }

    #[test]
    fn scaffold_never_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let options = options_in(&temp_dir, "user");
        let path = scaffold(&options).unwrap().path().to_path_buf();
        fs::write(&path, "// edited\n").unwrap();

        let outcome = scaffold(&options).unwrap();

        assert_eq!(outcome, ScaffoldOutcome::AlreadyExists(path.clone()));
        assert_eq!(fs::read_to_string(path).unwrap(), "// edited\n");
    }

    #[test]
    fn scaffold_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let options = ScaffoldOptions {
            dry_run: true,
            ..options_in(&temp_dir, "order items")
        };

        let outcome = scaffold(&options).unwrap();

        match outcome {
            ScaffoldOutcome::DryRun { path, code } => {
                assert!(path.ends_with("order_item_model.rs"));
                assert!(!path.exists());
                assert!(code.contains("pub struct OrderItemModel;"));
            }
            other => panic!("expected DryRun, got {other:?}"),
        }
        assert!(!temp_dir.path().join("api_models").exists());
    }

    #[test]
    fn scaffold_rejects_invalid_name_before_touching_disk() {
        let temp_dir = TempDir::new().unwrap();
        let options = options_in(&temp_dir, "123");

        let err = scaffold(&options).unwrap_err();

        assert!(matches!(err, GeneratorError::InvalidName { .. }));
        assert!(!temp_dir.path().join("api_models").exists());
    }

    #[test]
    fn scaffold_uses_custom_namespace() {
        let temp_dir = TempDir::new().unwrap();
        let options = ScaffoldOptions {
            namespace: "crate::remote".to_string(),
            dry_run: true,
            ..options_in(&temp_dir, "invoice")
        };

        let ScaffoldOutcome::DryRun { code, .. } = scaffold(&options).unwrap() else {
            panic!("expected DryRun");
        };
        assert!(code.contains("`crate::remote::invoice_model`"));
    }
}
