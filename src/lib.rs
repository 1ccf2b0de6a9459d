//! # Stackline
//!
//! A tiny line-oriented stack machine. Programs are plain text, one
//! instruction per line, executed against an operand stack, a call
//! stack, and a flat memory of 32-bit cells.
//!
//! The first character of a line decides what it is. A `#` starts a
//! comment, a space starts an instruction, and anything else makes the
//! whole line a label. Instruction lines put the three-character opcode
//! at column 8 and the operand text at column 12:
//!
//! ```text
//! # count down from five
//! MAIN
//!         LDI 5
//! LOOP
//!         DUP
//!         OUT
//!         DEC
//!         DUP
//!         BNZ LOOP
//!         HLT
//! ```
//!
//! Execution begins at the `MAIN` label, or at the first line when no
//! `MAIN` is defined. Run a program by piping it to the interpreter:
//!
//! ```text
//! stackline < demos/countdown.sl
//! ```

pub mod lang;
pub mod mach;
