use super::operation::int_literal;
use super::{truncated, Cell, Memory, Opcode, Operation, Program, Stack, SymbolTable};
use super::{CALL_STACK_SIZE, MAX_LINE_LEN, STACK_SIZE};
use crate::error;
use crate::lang::{Error, Line, LineKind, LineNumber};
use std::io::{BufRead, Write};

type Result<T> = std::result::Result<T, Error>;

/// Label that selects the entry point. Execution starts at line 0 when
/// no such label is defined.
pub const ENTRY_LABEL: &str = "MAIN";

/// What the loader does when input exceeds a capacity limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadPolicy {
    /// Cut the input down to fit and record a warning.
    Truncate,
    /// Fail the load.
    Reject,
}

impl Default for LoadPolicy {
    fn default() -> LoadPolicy {
        LoadPolicy::Truncate
    }
}

/// ## Execution engine
///
/// Owns the whole machine state: program, symbols, memory, both stacks,
/// the program counter, and the halted flag. `load_line` builds the
/// program and symbol table; `run` executes until a halt condition.

#[derive(Debug)]
pub struct Runtime {
    program: Program,
    symbols: SymbolTable,
    memory: Memory,
    stack: Stack<Cell>,
    calls: Stack<LineNumber>,
    pc: LineNumber,
    done: bool,
    policy: LoadPolicy,
    warnings: Vec<Error>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::with_policy(LoadPolicy::default())
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn with_policy(policy: LoadPolicy) -> Runtime {
        Runtime {
            program: Program::new(),
            symbols: SymbolTable::new(),
            memory: Memory::new(),
            stack: Stack::new(STACK_SIZE),
            calls: Stack::new(CALL_STACK_SIZE),
            pc: 0,
            done: false,
            policy,
            warnings: Vec::new(),
        }
    }

    /// Warnings recorded while loading under [`LoadPolicy::Truncate`].
    pub fn warnings(&self) -> &[Error] {
        &self.warnings
    }

    /// Feed every line from a reader through [`Runtime::load_line`],
    /// stripping end-of-line markers.
    pub fn load<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            self.load_line(line)?;
        }
        Ok(())
    }

    /// Feed one source line, already stripped of its end-of-line marker.
    ///
    /// A label line registers a symbol for the line number it is about
    /// to occupy; every line is then appended to the program verbatim.
    pub fn load_line(&mut self, text: &str) -> Result<()> {
        let line_number = self.program.len();
        let text = if text.len() > MAX_LINE_LEN {
            if self.policy == LoadPolicy::Reject {
                return Err(error!(LineBufferOverflow, line_number));
            }
            self.warnings.push(error!(LineBufferOverflow, line_number));
            truncated(text, MAX_LINE_LEN)
        } else {
            text
        };
        if self.program.is_full() {
            if self.policy == LoadPolicy::Reject {
                return Err(error!(OutOfMemory, line_number; "PROGRAM FULL"));
            }
            self.warnings
                .push(error!(OutOfMemory, line_number; "PROGRAM FULL"));
            return Ok(());
        }
        let line = Line::new(text);
        if line.kind() == LineKind::Label {
            if self.symbols.is_full() {
                if self.policy == LoadPolicy::Reject {
                    return Err(error!(OutOfMemory, line_number; "SYMBOL TABLE FULL"));
                }
                self.warnings
                    .push(error!(OutOfMemory, line_number; "SYMBOL TABLE FULL"));
            } else {
                self.symbols.define(line.text(), line_number);
            }
        }
        self.program.push(line);
        Ok(())
    }

    /// Execute the loaded program, writing `OUT`/`PRN` lines to
    /// `output`. Returns the fatal error that stopped the run, if any.
    ///
    /// Branching instructions store the target label's own line number;
    /// the loop increment then lands execution on the line after it.
    pub fn run(&mut self, output: &mut dyn Write) -> Result<()> {
        self.pc = self.symbols.resolve(ENTRY_LABEL).unwrap_or(0);
        self.done = false;
        while !self.done && self.pc < self.program.len() {
            let line = match self.program.get(self.pc) {
                Some(line) => line,
                None => break,
            };
            if line.kind() != LineKind::Instruction {
                self.pc += 1;
                continue;
            }
            let opcode = match line.opcode().and_then(Opcode::from_mnemonic) {
                Some(opcode) => opcode,
                None => return Err(error!(BadOpCode, self.pc)),
            };
            let operand = line.operand().to_string();
            let line_number = self.pc;
            self.execute(opcode, &operand, output)
                .map_err(|error| error.in_line_number(line_number))?;
            self.pc += 1;
        }
        Ok(())
    }

    fn execute(&mut self, opcode: Opcode, operand: &str, output: &mut dyn Write) -> Result<()> {
        use Opcode::*;
        match opcode {
            Add => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(Operation::add(lhs, rhs));
            }
            Sub => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(Operation::subtract(lhs, rhs));
            }
            Mul => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(Operation::multiply(lhs, rhs));
            }
            Div => {
                let (lhs, rhs) = self.stack.pop_2();
                let val = Operation::divide(lhs, rhs)?;
                self.stack.push(val);
            }
            Mod => {
                let (lhs, rhs) = self.stack.pop_2();
                let val = Operation::modulo(lhs, rhs)?;
                self.stack.push(val);
            }
            Inc => {
                let val = self.stack.pop();
                self.stack.push(Operation::increment(val));
            }
            Dec => {
                let val = self.stack.pop();
                self.stack.push(Operation::decrement(val));
            }
            And => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(lhs & rhs);
            }
            Oar => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(lhs | rhs);
            }
            Xor => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(lhs ^ rhs);
            }
            Not => {
                let val = self.stack.pop();
                self.stack.push(Operation::complement(val));
            }
            Bls => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(Operation::shift_left(lhs, rhs));
            }
            Brs => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(Operation::shift_right(lhs, rhs));
            }
            Ceq => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(Operation::equal(lhs, rhs));
            }
            Cne => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(Operation::not_equal(lhs, rhs));
            }
            Clt => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(Operation::less(lhs, rhs));
            }
            Cle => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(Operation::less_equal(lhs, rhs));
            }
            Cgt => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(Operation::greater(lhs, rhs));
            }
            Cge => {
                let (lhs, rhs) = self.stack.pop_2();
                self.stack.push(Operation::greater_equal(lhs, rhs));
            }
            Dup => {
                let val = self.stack.pop();
                self.stack.push(val);
                self.stack.push(val);
            }
            Lda => {
                let val = self.memory.fetch(int_literal(operand))?;
                self.stack.push(val);
            }
            Sta => {
                let val = self.stack.pop();
                self.memory.store(int_literal(operand), val)?;
            }
            Ldi => {
                self.stack.push(int_literal(operand));
            }
            Bra => {
                self.pc = self.branch_target(operand)?;
            }
            Bez => {
                if self.stack.pop() == 0 {
                    self.pc = self.branch_target(operand)?;
                }
            }
            Bnz => {
                if self.stack.pop() != 0 {
                    self.pc = self.branch_target(operand)?;
                }
            }
            Jal => {
                self.calls.push(self.pc);
                self.pc = self.branch_target(operand)?;
            }
            Rtn => {
                self.pc = self.calls.pop();
            }
            Out => {
                writeln!(output, "{}", self.stack.pop())?;
            }
            Prn => {
                writeln!(output, "{}", operand)?;
            }
            Hlt => {
                self.done = true;
            }
        }
        Ok(())
    }

    fn branch_target(&self, label: &str) -> Result<LineNumber> {
        match self.symbols.resolve(label) {
            Some(line_number) => Ok(line_number),
            None => Err(error!(UndefinedLabel)),
        }
    }
}
