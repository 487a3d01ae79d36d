//! Render context and the symbol-resolution seam.

/// Answers name queries about the declaration that owns the documentation
/// being rendered.
///
/// Both queries are exact ordinal matches: no trimming, no case folding.
/// The renderer only ever asks these two questions, so implementations can
/// be backed by compiler metadata, a fixed table, or a test double.
pub trait SymbolResolver {
    /// Whether the declaration has a parameter with exactly this name.
    fn has_parameter(&self, name: &str) -> bool;

    /// Whether the declaration has a type parameter with exactly this name.
    fn has_type_parameter(&self, name: &str) -> bool;
}

/// [`SymbolResolver`] backed by fixed name tables.
#[derive(Clone, Debug, Default)]
pub struct StaticSymbol {
    parameters: Vec<String>,
    type_parameters: Vec<String>,
}

impl StaticSymbol {
    /// Create a symbol with the given parameter and type-parameter names.
    #[must_use]
    pub fn new<P, T>(parameters: P, type_parameters: T) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
            type_parameters: type_parameters.into_iter().map(Into::into).collect(),
        }
    }
}

impl SymbolResolver for StaticSymbol {
    fn has_parameter(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p == name)
    }

    fn has_type_parameter(&self, name: &str) -> bool {
        self.type_parameters.iter().any(|p| p == name)
    }
}

/// Per-invocation rendering context, passed by reference through the walk.
pub struct RenderContext<'a> {
    /// The declaration that owns the comment.
    pub symbol: &'a dyn SymbolResolver,
    /// Render soft line breaks as hard break elements.
    pub soft_breaks_as_hard: bool,
    /// Optional rewrite of link and image targets, applied before URL
    /// escaping.
    pub uri_resolver: Option<&'a dyn Fn(&str) -> String>,
}

impl<'a> RenderContext<'a> {
    /// Create a context with default settings for the given symbol.
    #[must_use]
    pub fn new(symbol: &'a dyn SymbolResolver) -> Self {
        Self {
            symbol,
            soft_breaks_as_hard: false,
            uri_resolver: None,
        }
    }

    /// Render soft line breaks as hard breaks.
    #[must_use]
    pub fn with_hard_soft_breaks(mut self) -> Self {
        self.soft_breaks_as_hard = true;
        self
    }

    /// Set a link-target rewriter.
    #[must_use]
    pub fn with_uri_resolver(mut self, resolver: &'a dyn Fn(&str) -> String) -> Self {
        self.uri_resolver = Some(resolver);
        self
    }
}
