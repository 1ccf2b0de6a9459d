/// ## Virtual machine instruction set
///
/// The machine has no registers. Every operation works on the operand
/// stack, the instruction's operand text, or both.
///
/// Mnemonics are exactly three characters and are matched exactly
/// against the opcode field of an instruction line.

#[derive(Clone, Copy, PartialEq)]
pub enum Opcode {
    // *** Arithmetic
    /// Pop two, push the wrapping sum.
    Add,
    /// Pop two, push the wrapping difference.
    Sub,
    /// Pop two, push the wrapping product.
    Mul,
    /// Pop two, push the quotient. Division by zero is an error.
    Div,
    /// Pop two, push the remainder. Modulo by zero is an error.
    Mod,
    /// Pop one, push the value plus one.
    Inc,
    /// Pop one, push the value minus one.
    Dec,
    /// Pop two, push the bitwise and.
    And,
    /// Pop two, push the bitwise or.
    Oar,
    /// Pop two, push the bitwise exclusive or.
    Xor,
    /// Pop one, push the bitwise complement.
    Not,
    /// Pop two, push the left operand shifted left.
    Bls,
    /// Pop two, push the left operand shifted right.
    Brs,

    // *** Comparison
    /// Pop two, push 1 when equal else 0.
    Ceq,
    /// Pop two, push 1 when not equal else 0.
    Cne,
    /// Pop two, push 1 when less than else 0.
    Clt,
    /// Pop two, push 1 when less than or equal else 0.
    Cle,
    /// Pop two, push 1 when greater than else 0.
    Cgt,
    /// Pop two, push 1 when greater than or equal else 0.
    Cge,

    // *** Stack manipulation
    /// Pop one, push it twice.
    Dup,

    // *** Memory and immediates
    /// Push the cell at the operand address.
    Lda,
    /// Pop one, store it at the operand address.
    Sta,
    /// Push the operand literal.
    Ldi,

    // *** Branch control
    /// Branch to the operand label.
    Bra,
    /// Pop one, branch to the operand label when zero.
    Bez,
    /// Pop one, branch to the operand label when not zero.
    Bnz,
    /// Push the program counter on the call stack, branch to the
    /// operand label.
    Jal,
    /// Pop the call stack into the program counter, 0 when empty.
    Rtn,

    // *** Output
    /// Pop one, emit its decimal representation and a line break.
    Out,
    /// Emit the operand text verbatim and a line break.
    Prn,

    // *** Halt
    /// Stop execution.
    Hlt,
}

impl Opcode {
    pub fn from_mnemonic(code: &str) -> Option<Opcode> {
        use Opcode::*;
        match code {
            "ADD" => Some(Add),
            "SUB" => Some(Sub),
            "MUL" => Some(Mul),
            "DIV" => Some(Div),
            "MOD" => Some(Mod),
            "INC" => Some(Inc),
            "DEC" => Some(Dec),
            "AND" => Some(And),
            "OAR" => Some(Oar),
            "XOR" => Some(Xor),
            "NOT" => Some(Not),
            "BLS" => Some(Bls),
            "BRS" => Some(Brs),
            "CEQ" => Some(Ceq),
            "CNE" => Some(Cne),
            "CLT" => Some(Clt),
            "CLE" => Some(Cle),
            "CGT" => Some(Cgt),
            "CGE" => Some(Cge),
            "DUP" => Some(Dup),
            "LDA" => Some(Lda),
            "STA" => Some(Sta),
            "LDI" => Some(Ldi),
            "BRA" => Some(Bra),
            "BEZ" => Some(Bez),
            "BNZ" => Some(Bnz),
            "JAL" => Some(Jal),
            "RTN" => Some(Rtn),
            "OUT" => Some(Out),
            "PRN" => Some(Prn),
            "HLT" => Some(Hlt),
            _ => None,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        use Opcode::*;
        match self {
            Add => "ADD",
            Sub => "SUB",
            Mul => "MUL",
            Div => "DIV",
            Mod => "MOD",
            Inc => "INC",
            Dec => "DEC",
            And => "AND",
            Oar => "OAR",
            Xor => "XOR",
            Not => "NOT",
            Bls => "BLS",
            Brs => "BRS",
            Ceq => "CEQ",
            Cne => "CNE",
            Clt => "CLT",
            Cle => "CLE",
            Cgt => "CGT",
            Cge => "CGE",
            Dup => "DUP",
            Lda => "LDA",
            Sta => "STA",
            Ldi => "LDI",
            Bra => "BRA",
            Bez => "BEZ",
            Bnz => "BNZ",
            Jal => "JAL",
            Rtn => "RTN",
            Out => "OUT",
            Prn => "PRN",
            Hlt => "HLT",
        }
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(Opcode::from_mnemonic("ADD"), Some(Opcode::Add));
        assert_eq!(Opcode::from_mnemonic("add"), None);
        assert_eq!(Opcode::from_mnemonic("AD"), None);
        assert_eq!(Opcode::from_mnemonic("FOO"), None);
    }

    #[test]
    fn test_mnemonic_round_trip() {
        for code in &["LDI", "OUT", "BRA", "JAL", "HLT", "OAR"] {
            let opcode = Opcode::from_mnemonic(code).unwrap();
            assert_eq!(&opcode.mnemonic(), code);
        }
    }
}
