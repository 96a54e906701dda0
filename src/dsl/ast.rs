//! Parsed representation of a wiring description.

/// The three module kinds a wiring line can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    /// The entry module, declared by the literal name `broadcaster`
    Broadcaster,
    /// Declared with a `%` prefix
    FlipFlop,
    /// Declared with a `&` prefix
    Conjunction,
}

/// One parsed wiring line: a named module and its declared destinations.
#[derive(Debug, Clone)]
pub struct ModuleDef {
    /// Module name with the kind prefix stripped
    pub name: String,
    /// Kind derived from the declaration prefix
    pub kind: ModuleKind,
    /// Destination names in declaration order
    pub destinations: Vec<String>,
    /// 1-based source line, for error reporting
    pub line: usize,
}

/// A complete parsed wiring description.
#[derive(Debug, Clone, Default)]
pub struct WiringAst {
    /// Module definitions in declaration order
    pub modules: Vec<ModuleDef>,
}

impl WiringAst {
    /// Create an empty wiring description.
    pub fn new() -> Self {
        Self::default()
    }
}
