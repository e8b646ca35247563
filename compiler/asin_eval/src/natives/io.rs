//! Console input and file handles.

use super::{Arity, CallContext, NativeFunction};
use crate::errors::{io_error, EvalError, EvalResult};
use crate::value::{FileHandle, FileMode, FileRef, Value};

pub(super) const FUNCTIONS: &[NativeFunction] = &[
    NativeFunction::new("pahingi", Arity::Range(0, 1), pahingi),
    NativeFunction::new("buksan", Arity::Exact(2), buksan),
    NativeFunction::new("basahin", Arity::Exact(1), basahin),
    NativeFunction::new("linya", Arity::Exact(1), linya),
    NativeFunction::new("isulat", Arity::Exact(2), isulat),
    NativeFunction::new("isara", Arity::Exact(1), isara),
];

/// Print the optional prompt, then read one line without its terminator.
fn pahingi(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    if let Some(prompt) = args.first() {
        ctx.print.print(&prompt.to_string());
    }
    let line = ctx
        .input
        .read_line()
        .map_err(|err| io_error(&err))?
        .ok_or_else(|| EvalError::io("EOF when reading a line"))?;
    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(Value::str(line))
}

/// `buksan(path, mode)` with mode `r`, `w`, `a` or their `+` forms.
fn buksan(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let path = ctx.str(args, 0)?;
    let mode = ctx.str(args, 1)?;
    let mode =
        FileMode::parse(mode).ok_or_else(|| ctx.error(format!("invalid mode: \"{mode}\"")))?;
    let handle = FileHandle::open(path, mode)?;
    Ok(Value::File(FileRef::new(handle)))
}

/// Rest of the file from the cursor.
fn basahin(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    ctx.file(args, 0)?.handle().read_to_end().map(Value::Str)
}

/// One line including `\n`; `""` at end of file.
fn linya(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    ctx.file(args, 0)?.handle().read_line().map(Value::Str)
}

fn isulat(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let text = ctx.str(args, 1)?;
    ctx.file(args, 0)?.handle().write(text)?;
    Ok(Value::Void)
}

fn isara(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    ctx.file(args, 0)?.handle().close()?;
    Ok(Value::Void)
}
