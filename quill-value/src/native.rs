//! Native (builtin) functions.

use crate::{Host, Value};
use std::collections::HashMap;
use std::fmt;
use std::io;

pub type NativeFnPtr = &'static dyn Fn(&mut dyn Host, &[Value]) -> io::Result<Value>;

#[derive(Clone)]
pub struct NativeFn {
    pub ident: String,
    pub func: NativeFnPtr,
}

impl NativeFn {
    pub fn call(&self, host: &mut dyn Host, args: &[Value]) -> io::Result<Value> {
        (self.func)(host, args)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.ident)
    }
}

/// Native functions callable by name without a declaration.
/// Builtins take precedence over user declared functions with the same name.
#[derive(Debug, Clone, Default)]
pub struct BuiltinFns {
    fns: HashMap<String, NativeFn>,
}

impl BuiltinFns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `func` under `ident`, replacing any previous function with that name.
    pub fn add_native_fn(&mut self, ident: &str, func: NativeFnPtr) {
        self.fns.insert(
            ident.to_string(),
            NativeFn {
                ident: ident.to_string(),
                func,
            },
        );
    }

    pub fn get(&self, ident: &str) -> Option<&NativeFn> {
        self.fns.get(ident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryHost;

    fn count(_host: &mut dyn Host, args: &[Value]) -> io::Result<Value> {
        Ok(Value::Integer(args.len() as i64))
    }

    fn shout(host: &mut dyn Host, _args: &[Value]) -> io::Result<Value> {
        host.write("!")?;
        Ok(Value::None)
    }

    #[test]
    fn test_registry() {
        let mut builtins = BuiltinFns::new();
        assert!(builtins.get("count").is_none());
        builtins.add_native_fn("count", &count);
        builtins.add_native_fn("shout", &shout);

        let mut host = MemoryHost::new();
        let count = builtins.get("count").unwrap();
        assert_eq!(
            count.call(&mut host, &[Value::None, Value::Bool(true)]).unwrap(),
            Value::Integer(2)
        );
        builtins.get("shout").unwrap().call(&mut host, &[]).unwrap();
        assert_eq!(host.output, "!");
        assert!(builtins.get("missing").is_none());
    }

    #[test]
    fn test_replace() {
        let mut builtins = BuiltinFns::new();
        builtins.add_native_fn("f", &count);
        builtins.add_native_fn("f", &shout);
        let mut host = MemoryHost::new();
        assert_eq!(builtins.get("f").unwrap().call(&mut host, &[]).unwrap(), Value::None);
        assert_eq!(format!("{:?}", builtins.get("f").unwrap()), "<native fn f>");
    }
}
