use super::ReportTable;
use crate::Result;
use core::fmt::Write;
use std::borrow::Cow;

/// Field separator of the generated report.
pub const REPORT_DELIMITER: char = ';';

pub fn generate<W: Write>(table: &ReportTable, writer: &mut W) -> Result<()> {
    write_line(table.header(), writer)?;
    for row in table.rows() {
        write_line(row, writer)?;
    }

    Ok(())
}

fn write_line<W: Write>(fields: &[String], writer: &mut W) -> Result<()> {
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            writer.write_char(REPORT_DELIMITER)?;
        }
        write!(writer, "{}", escape_field(field))?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Quotes a field that contains the delimiter, a double quote, or a line break.
///
/// Internal double quotes are doubled.
fn escape_field(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(REPORT_DELIMITER) || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_field_no_special_chars() {
        let result = escape_field("src/foo.c");
        assert_eq!(result, "src/foo.c");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_field_with_quotes() {
        let result = escape_field("operator\"\"_km");
        assert_eq!(result, "\"operator\"\"\"\"_km\"");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn test_escape_field_with_delimiter() {
        let result = escape_field("a;b");
        assert_eq!(result, "\"a;b\"");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn test_escape_field_with_comma_is_untouched() {
        let result = escape_field("max(int, int)");
        assert_eq!(result, "max(int, int)");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_field_with_newline() {
        assert_eq!(escape_field("a\nb"), "\"a\nb\"");
        assert_eq!(escape_field("a\r\nb"), "\"a\r\nb\"");
    }

    #[test]
    fn test_escape_field_empty() {
        let result = escape_field("");
        assert_eq!(result, "");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_generate_empty_table() {
        let table = ReportTable::default();
        let mut output = String::new();
        generate(&table, &mut output).unwrap();
        assert_eq!(output, "\n");
    }
}
