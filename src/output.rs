use std::io::{self, Write};

pub fn format_values(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Echoes the values as read, on a fresh line after the prompts.
pub fn write_unsorted<W: Write>(out: &mut W, values: &[i32]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Unsorted: {}", format_values(values))
}

pub fn write_sorted<W: Write>(out: &mut W, values: &[i32]) -> io::Result<()> {
    writeln!(out, "Sorted array:")?;
    writeln!(out, "{}", format_values(values))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_spaces() {
        assert_eq!(format_values(&[1, -2, 30]), "1 -2 30");
        assert_eq!(format_values(&[7]), "7");
        assert_eq!(format_values(&[]), "");
    }

    #[test]
    fn sorted_block_has_header() {
        let mut out = Vec::new();
        write_sorted(&mut out, &[1, 2, 3]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Sorted array:\n1 2 3\n");
    }

    #[test]
    fn unsorted_line_starts_fresh() {
        let mut out = Vec::new();
        write_unsorted(&mut out, &[3, 1]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nUnsorted: 3 1\n");
    }
}
