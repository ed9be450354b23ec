use std::io::Write;

use serde::Serialize;

use crate::error::ExportError;

/// Write records to `sink` as newline-delimited JSON.
///
/// One compact JSON object per line, each terminated by `\n`, with nothing
/// after the final newline. The stream stops at the first failed record and
/// propagates its error; everything written before it stays on the sink and
/// remains valid.
pub fn write_jsonl<W, I, T>(records: I, sink: &mut W) -> Result<(), ExportError>
where
    W: Write,
    I: IntoIterator<Item = Result<T, ExportError>>,
    T: Serialize,
{
    for record in records {
        serde_json::to_writer(&mut *sink, &record?)?;
        sink.write_all(b"\n")?;
    }
    Ok(())
}
