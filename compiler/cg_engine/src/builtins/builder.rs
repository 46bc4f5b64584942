//! Builder synthesis.
//!
//! For every in-scope class `C`, registers a companion class `C` + suffix
//! (`com.acme.Widget` -> `com.acme.WidgetBuilder`). Each `void` method of `C`
//! whose name starts with `set` is mirrored on the builder with the same
//! name, parameters and thrown types, returning the builder and with the
//! body `return this;`.
//!
//! The generated methods do not forward to the mirrored setter; they only
//! return the builder. A class in scope with no setters still gets an
//! (empty) builder.

use cg_ir::{Block, Expr, MethodDecl, MethodSig, Modifiers, Stmt, TypeDecl, TypeRef};

use crate::{GenError, GenResult, OutputRegistry, Processor};

/// Configuration for [`BuilderProcessor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Qualified-name prefix a declaration must start with to be processed.
    /// The empty prefix admits every declaration.
    pub scope_prefix: String,
    /// Appended to the source class name to name the builder.
    pub suffix: String,
    /// Fail on a bodyless setter instead of skipping it.
    pub strict: bool,
}

impl BuilderConfig {
    pub const DEFAULT_SUFFIX: &'static str = "Builder";

    /// Builders for every class under `scope_prefix`.
    pub fn new(scope_prefix: impl Into<String>) -> Self {
        BuilderConfig {
            scope_prefix: scope_prefix.into(),
            suffix: Self::DEFAULT_SUFFIX.to_owned(),
            strict: false,
        }
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Setter shape: name starts with `set` and the return type is exactly `void`.
pub fn is_setter(sig: &MethodSig<'_>) -> bool {
    sig.name.starts_with("set") && sig.return_type.is_void()
}

/// Mirror `setter` on a builder: public, same name, parameters and thrown
/// types, returning `builder`, with the body `return this;`.
pub fn builder_method(builder: &TypeRef, setter: &MethodSig<'_>) -> MethodDecl {
    MethodDecl::new(
        Modifiers::PUBLIC,
        builder.clone(),
        setter.name,
        setter.params.to_vec(),
        setter.thrown.to_vec(),
    )
    .with_body(Block::of(Stmt::ret(Expr::This)))
}

/// Synthesizes builder companion classes.
///
/// Stateless across declarations: everything a `process` call produces
/// goes into the output registry.
#[derive(Clone, Debug)]
pub struct BuilderProcessor {
    name: String,
    config: BuilderConfig,
}

impl BuilderProcessor {
    pub const NAME: &'static str = "builder";

    pub fn new(config: BuilderConfig) -> Self {
        Self::named(Self::NAME, config)
    }

    /// A builder processor registered under a custom name.
    pub fn named(name: impl Into<String>, config: BuilderConfig) -> Self {
        BuilderProcessor {
            name: name.into(),
            config,
        }
    }
}

impl Processor for BuilderProcessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_applicable(&self, decl: &TypeDecl) -> GenResult<bool> {
        Ok(decl.name().starts_with(&self.config.scope_prefix))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(class = %decl.name()))]
    fn process(&mut self, decl: &TypeDecl, output: &mut OutputRegistry) -> GenResult<()> {
        let builder_name = decl.name().with_suffix(&self.config.suffix);
        let builder_ty = TypeRef::Named(builder_name.clone());
        let builder = output.create_class(builder_name, Modifiers::PUBLIC)?;

        for method in decl.methods() {
            let sig = method.sig();
            if !is_setter(&sig) {
                continue;
            }
            if !sig.has_body {
                if self.config.strict {
                    return Err(GenError::InvalidEligibilityShape {
                        class: decl.name().clone(),
                        method: method.name.clone(),
                    });
                }
                tracing::warn!(method = %sig, "skipping setter without body");
                continue;
            }
            tracing::trace!(method = %sig, "mirroring setter");
            builder.add_method(builder_method(&builder_ty, &sig));
        }

        tracing::debug!(
            builder = %builder.name(),
            methods = builder.methods().len(),
            "builder generated"
        );
        Ok(())
    }

    fn on_complete(&mut self, output: &OutputRegistry) -> GenResult<()> {
        tracing::info!(processor = %self.name, generated = output.len(), "done");
        Ok(())
    }
}
