use quill_parser::ast::FunctionDecl;
use quill_value::Value;
use std::collections::HashMap;

/// State private to one evaluation: the top level program or a single function call.
///
/// Scoping is flat. Blocks share the frame they appear in and a call never sees
/// the caller's variables or functions.
#[derive(Debug, Default)]
pub struct Frame<'ast> {
    variables: HashMap<String, Value>,
    functions: HashMap<&'ast str, &'ast FunctionDecl>,
    pending_return: Option<Value>,
}

impl<'ast> Frame<'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frame with pre-bound variables (a call's parameters) and no functions.
    pub fn with_variables(variables: HashMap<String, Value>) -> Self {
        Self {
            variables,
            ..Self::default()
        }
    }

    pub fn variable(&self, ident: &str) -> Option<&Value> {
        self.variables.get(ident)
    }

    /// Binds `ident` to `value`, overwriting any previous binding.
    pub fn set_variable(&mut self, ident: &str, value: Value) {
        self.variables.insert(ident.to_string(), value);
    }

    pub fn variables(&self) -> &HashMap<String, Value> {
        &self.variables
    }

    pub fn function(&self, ident: &str) -> Option<&'ast FunctionDecl> {
        self.functions.get(ident).copied()
    }

    /// Registers `decl`. A later declaration with the same name replaces the earlier one.
    pub fn declare_function(&mut self, decl: &'ast FunctionDecl) {
        self.functions.insert(&decl.ident, decl);
    }

    pub fn pending_return(&self) -> Option<&Value> {
        self.pending_return.as_ref()
    }

    pub fn set_return(&mut self, value: Value) {
        self.pending_return = Some(value);
    }

    /// The value of the last executed `return`, or [`Value::None`] if there was none.
    pub fn into_return(self) -> Value {
        self.pending_return.unwrap_or(Value::None)
    }
}
