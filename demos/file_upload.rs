//! File fields and textarea line breaks.
//!
//! Run with: cargo run --example file_upload

use form_json::{to_writer, FormData, FormFile};
use std::error::Error;
use std::io::{self, Cursor, Write};

fn main() -> Result<(), Box<dyn Error>> {
    let mut form = FormData::new();
    form.append_text("title", "Quarterly report", "text");
    form.append_text("notes", "first line\nsecond line", "textarea");

    let file = FormFile::from_reader(
        "report.csv",
        "text/csv",
        Cursor::new("quarter,total\nQ1,42\n"),
    )?;
    form.append_file("attachments[]", file, "file");
    form.append_file(
        "attachments[]",
        FormFile::new("logo.png", "image/png", vec![0x89, b'P', b'N', b'G']),
        "file",
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    to_writer(&mut handle, &form)?;
    writeln!(handle)?;

    Ok(())
}
