//! Stub rendering and naming rules for new model files.
//!
//! A model named `user profiles` becomes the type `UserProfileModel` in
//! `<dir>/user_profile_model.rs`. The last word is singularized with
//! `pluralizer`, casing is normalized with `heck`, and the result must be a
//! plain ASCII identifier.

use std::path::{Path, PathBuf};

use heck::{ToSnakeCase, ToUpperCamelCase};

use crate::errors::GeneratorError;

/// The model template, with `{{NAMESPACE}}`, `{{MODULE}}`, `{{CLASSNAME}}`
/// and `{{EXTENDS}}` placeholders.
pub const REST_MODEL_STUB: &str = include_str!("../stubs/rest_model.stub");

/// Module path recorded in the generated file's header.
pub const DEFAULT_NAMESPACE: &str = "crate::api_models";

/// Directory new models are written to.
pub const DEFAULT_DIR: &str = "src/api_models";

/// Trait the generated model implements.
pub const DEFAULT_EXTENDS: &str = "RestModel";

/// Values substituted into the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubVariables {
    pub namespace: String,
    pub class_name: String,
    pub extends: String,
}

impl StubVariables {
    /// Creates variables for an already-normalized class name.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            class_name: class_name.into(),
            extends: DEFAULT_EXTENDS.to_string(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// The generated type name, e.g. `UserModel`.
    pub fn type_name(&self) -> String {
        format!("{}Model", self.class_name)
    }

    /// The file stem of the generated module, e.g. `user_model`.
    pub fn module_name(&self) -> String {
        self.type_name().to_snake_case()
    }

    fn replacements(&self) -> [(&'static str, String); 4] {
        [
            ("{{NAMESPACE}}", self.namespace.clone()),
            ("{{MODULE}}", self.module_name()),
            ("{{CLASSNAME}}", self.class_name.clone()),
            ("{{EXTENDS}}", self.extends.clone()),
        ]
    }
}

/// Normalizes a user-supplied name into a singular PascalCase class name.
///
/// ## Errors
///
/// Returns [`GeneratorError::InvalidName`] when nothing usable is left
/// after normalization, or when the result does not start with an ASCII
/// letter.
///
/// ## Examples
///
/// ```
/// use restmold_gen::scaffold::class_name;
///
/// assert_eq!(class_name("user profile").unwrap(), "UserProfile");
/// assert_eq!(class_name("billing-accounts").unwrap(), "BillingAccount");
/// assert!(class_name("42").is_err());
/// ```
pub fn class_name(raw: &str) -> Result<String, GeneratorError> {
    let words = raw.trim().to_snake_case();
    let name = match words.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", singular(last)),
        None => singular(&words),
    }
    .to_upper_camel_case();
    let invalid = |reason: &str| GeneratorError::InvalidName {
        name: raw.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("must contain at least one letter"));
    }
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(invalid("must start with an ASCII letter"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid("may only contain ASCII letters and digits"));
    }

    Ok(name)
}

fn singular(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    pluralizer::pluralize(word, 1, false)
}

/// Replaces every placeholder in `template`.
pub fn render_stub(template: &str, vars: &StubVariables) -> String {
    vars.replacements()
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(key, value)
        })
}

/// Path of the file that will hold the model.
pub fn target_path(dir: &Path, vars: &StubVariables) -> PathBuf {
    dir.join(format!("{}.rs", vars.module_name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_normalizes_case_and_separators() {
        assert_eq!(class_name("user").unwrap(), "User");
        assert_eq!(class_name("user_profile").unwrap(), "UserProfile");
        assert_eq!(class_name("  order items ").unwrap(), "OrderItem");
        assert_eq!(class_name("ApiExample").unwrap(), "ApiExample");
    }

    #[test]
    fn class_name_is_singularized() {
        assert_eq!(class_name("users").unwrap(), "User");
        assert_eq!(class_name("Users").unwrap(), "User");
        assert_eq!(class_name("categories").unwrap(), "Category");
        assert_eq!(class_name("people").unwrap(), "Person");
        assert_eq!(class_name("UserProfiles").unwrap(), "UserProfile");
    }

    #[test]
    fn singular_names_are_unchanged() {
        assert_eq!(class_name("user").unwrap(), "User");
        assert_eq!(class_name("invoice").unwrap(), "Invoice");
    }

    #[test]
    fn plural_name_targets_singular_file() {
        let vars = StubVariables::new(class_name("users").unwrap());
        assert_eq!(vars.type_name(), "UserModel");
        assert_eq!(
            target_path(Path::new(DEFAULT_DIR), &vars),
            PathBuf::from("src/api_models/user_model.rs")
        );
    }

    #[test]
    fn class_name_rejects_unusable_names() {
        for raw in ["", "   ", "---", "42users", "café"] {
            let err = class_name(raw).unwrap_err();
            assert!(
                matches!(err, GeneratorError::InvalidName { ref name, .. } if name == raw),
                "expected InvalidName for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn module_and_type_names() {
        let vars = StubVariables::new("UserProfile");
        assert_eq!(vars.type_name(), "UserProfileModel");
        assert_eq!(vars.module_name(), "user_profile_model");
    }

    #[test]
    fn target_path_uses_module_name() {
        let vars = StubVariables::new("User");
        assert_eq!(
            target_path(Path::new(DEFAULT_DIR), &vars),
            PathBuf::from("src/api_models/user_model.rs")
        );
    }

    #[test]
    fn render_replaces_every_placeholder() {
        let vars = StubVariables::new("User").with_namespace("crate::clients");
        let code = render_stub(REST_MODEL_STUB, &vars);

        assert!(!code.contains("{{"), "unreplaced placeholder in:\n{code}");
        assert!(code.contains("`crate::clients::user_model`"));
        assert!(code.contains("pub struct UserModel;"));
        assert!(code.contains("impl RestModel for UserModel"));
        assert!(code.contains("http://localhost:8080/api/v1"));
    }

    #[test]
    fn render_leaves_unknown_text_alone() {
        let vars = StubVariables::new("User");
        assert_eq!(
            render_stub("{{CLASSNAME}} {{OTHER}}", &vars),
            "User {{OTHER}}"
        );
    }
}
