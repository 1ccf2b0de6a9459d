/// Byte offset of the opcode mnemonic on an instruction line.
pub const OPCODE_COLUMN: usize = 8;

/// Byte offset of the operand text on an instruction line.
pub const OPERAND_COLUMN: usize = 12;

/// What a source line is, decided by its first character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineKind {
    /// The whole line is a label name. This includes empty lines.
    Label,
    /// The line starts with `#` and is ignored.
    Comment,
    /// The line starts with a space and carries an opcode and operand.
    Instruction,
}

/// One stored line of program text.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    text: String,
}

impl Line {
    pub fn new(text: &str) -> Line {
        Line {
            text: text.to_string(),
        }
    }

    pub fn kind(&self) -> LineKind {
        match self.text.bytes().next() {
            Some(b'#') => LineKind::Comment,
            Some(b' ') => LineKind::Instruction,
            _ => LineKind::Label,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The three-character opcode field, or `None` when the line is too
    /// short to carry one.
    pub fn opcode(&self) -> Option<&str> {
        self.text.get(OPCODE_COLUMN..OPCODE_COLUMN + 3)
    }

    /// Everything from the operand column to the end of the line.
    pub fn operand(&self) -> &str {
        self.text.get(OPERAND_COLUMN..).unwrap_or("")
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Line::new("MAIN").kind(), LineKind::Label);
        assert_eq!(Line::new("# a remark").kind(), LineKind::Comment);
        assert_eq!(Line::new("        ADD").kind(), LineKind::Instruction);
        assert_eq!(Line::new("").kind(), LineKind::Label);
    }

    #[test]
    fn test_fields() {
        let line = Line::new("        LDI 5");
        assert_eq!(line.opcode(), Some("LDI"));
        assert_eq!(line.operand(), "5");
        let line = Line::new("        PRN Hello, World!");
        assert_eq!(line.opcode(), Some("PRN"));
        assert_eq!(line.operand(), "Hello, World!");
    }

    #[test]
    fn test_short_line() {
        let line = Line::new("      ");
        assert_eq!(line.kind(), LineKind::Instruction);
        assert_eq!(line.opcode(), None);
        assert_eq!(line.operand(), "");
        let line = Line::new("        HLT");
        assert_eq!(line.opcode(), Some("HLT"));
        assert_eq!(line.operand(), "");
    }
}
