//! Console output for rendered trees and parsed entries

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagram::{EntryKind, ParsedEntry};
use crate::tree::TreeLine;

/// Write a diagram with the root line, colouring directories and error lines.
pub fn write_tree<W: WriteColor>(out: &mut W, root_line: &str, lines: &[TreeLine]) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
    writeln!(out, "{}", root_line)?;
    out.reset()?;

    for line in lines {
        write!(out, "{}{}", line.prefix(), line.connector())?;
        match line {
            TreeLine::Error { .. } => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            }
            TreeLine::Entry { is_dir: true, .. } => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            TreeLine::Entry { .. } => {}
        }
        write!(out, "{}", line.label())?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print a diagram to stdout.
pub fn print_tree(root_line: &str, lines: &[TreeLine], use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_tree(&mut stdout, root_line, lines)
}

/// One `dir`/`file` line per entry, for dry runs.
pub fn write_entries<W: Write>(out: &mut W, entries: &[ParsedEntry]) -> io::Result<()> {
    for entry in entries {
        let kind = match entry.kind {
            EntryKind::Dir => "dir ",
            EntryKind::File => "file",
        };
        writeln!(out, "{}  {}", kind, entry.path)?;
    }
    Ok(())
}

/// Print parsed entries as pretty-printed JSON to stdout.
pub fn print_entries_json(entries: &[ParsedEntry]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use super::*;

    #[test]
    fn test_write_tree_plain() {
        let lines = vec![
            TreeLine::entry(0, false, "src", true),
            TreeLine::entry(1, true, "main.rs", false),
            TreeLine::error("denied"),
            TreeLine::entry(0, true, "README.md", false),
        ];
        let mut out = NoColor::new(Vec::new());
        write_tree(&mut out, "proj/", &lines).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(
            text,
            "proj/\n├── src/\n    └── main.rs\n# error: denied\n└── README.md\n"
        );
    }

    #[test]
    fn test_write_entries() {
        let entries = vec![ParsedEntry::dir("a/", 1), ParsedEntry::file("a/b.txt", 2)];
        let mut out = Vec::new();
        write_entries(&mut out, &entries).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "dir   a/\nfile  a/b.txt\n");
    }
}
