use quill_value::{BuiltinFns, Host, Value};
use std::io;

/// Returns the default [`BuiltinFns`] that should be used.
pub fn default_builtin_fns() -> BuiltinFns {
    let mut builtin_fns = BuiltinFns::new();
    builtin_fns.add_native_fn("print", &print);
    builtin_fns.add_native_fn("input", &input);
    builtin_fns
}

/// Writes all arguments separated by a space, followed by a newline.
pub fn print(host: &mut dyn Host, args: &[Value]) -> io::Result<Value> {
    let mut line = join(args);
    line.push('\n');
    host.write(&line)?;

    Ok(Value::None)
}

/// Writes the arguments as a prompt, then reads one line.
pub fn input(host: &mut dyn Host, args: &[Value]) -> io::Result<Value> {
    if !args.is_empty() {
        host.write(&join(args))?;
    }

    match host.read_line()? {
        Some(line) => Ok(Value::Str(line)),
        None => Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input reached end of file",
        )),
    }
}

fn join(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
