//! Primitive commands.
//!
//! The ten single-step stack operations form a closed enum dispatched by
//! one exhaustive match, so every keyword is handled at compile time and
//! the only reachable miss is an unknown token at dispatch level.

use stacc_core::{Stack, StackError};

/// A primitive stack command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    Sub,
    Mult,
    Div,
    Dup,
    Pop,
    Print,
    Lt,
    Gt,
    Eq,
}

impl Command {
    /// Resolve a token to a command, if it names one.
    pub fn from_token(token: &str) -> Option<Command> {
        match token {
            "ADD" => Some(Command::Add),
            "SUB" => Some(Command::Sub),
            "MULT" => Some(Command::Mult),
            "DIV" => Some(Command::Div),
            "DUP" => Some(Command::Dup),
            "POP" => Some(Command::Pop),
            "PRINT" => Some(Command::Print),
            "LT" => Some(Command::Lt),
            "GT" => Some(Command::Gt),
            "EQ" => Some(Command::Eq),
            _ => None,
        }
    }

    /// The keyword naming this command.
    pub fn name(self) -> &'static str {
        match self {
            Command::Add => "ADD",
            Command::Sub => "SUB",
            Command::Mult => "MULT",
            Command::Div => "DIV",
            Command::Dup => "DUP",
            Command::Pop => "POP",
            Command::Print => "PRINT",
            Command::Lt => "LT",
            Command::Gt => "GT",
            Command::Eq => "EQ",
        }
    }

    /// Apply this command to the stack.
    pub fn apply(self, stack: &mut Stack) -> Result<(), StackError> {
        match self {
            Command::Add => stack.add(),
            Command::Sub => stack.sub(),
            Command::Mult => stack.mult(),
            Command::Div => stack.div(),
            Command::Dup => stack.dup(),
            Command::Pop => stack.pop().map(|_| ()),
            Command::Print => stack.print_top().map(|_| ()),
            Command::Lt => stack.lt(),
            Command::Gt => stack.gt(),
            Command::Eq => stack.eq(),
        }
    }
}
