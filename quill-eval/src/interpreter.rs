use crate::{EvalError, Frame};
use quill_parser::ast::{Condition, Flow, Node};
use quill_parser::lexer::TokenKind;
use quill_value::{BuiltinFns, Host, Value};
use std::collections::HashMap;

/// Walks a syntax tree to completion.
///
/// The interpreter itself only holds what every frame shares: the builtins and the host.
/// All program state lives in [`Frame`]s.
pub struct Interpreter<'h> {
    builtins: &'h BuiltinFns,
    host: &'h mut dyn Host,
}

impl<'h> Interpreter<'h> {
    pub fn new(builtins: &'h BuiltinFns, host: &'h mut dyn Host) -> Self {
        Self { builtins, host }
    }

    /// Runs `program` in a fresh top level frame and returns that frame once done.
    pub fn interpret<'ast>(&mut self, program: &'ast Node) -> Result<Frame<'ast>, EvalError> {
        let mut frame = Frame::new();
        self.eval(&mut frame, program)?;
        Ok(frame)
    }

    /// Evaluates a single node inside `frame`.
    /// Statements evaluate to [`Value::None`], except `return` which yields its value.
    pub fn eval<'ast>(
        &mut self,
        frame: &mut Frame<'ast>,
        node: &'ast Node,
    ) -> Result<Value, EvalError> {
        match node {
            Node::Integer(val) => Ok(Value::Integer(*val)),
            Node::String(val) => Ok(Value::Str(val.clone())),
            Node::Bool(val) => Ok(Value::Bool(*val)),
            Node::Void => Ok(Value::None),
            Node::BinOp { lhs, op, rhs } => {
                // both sides are always evaluated, left first
                let lhs = self.eval(frame, lhs)?;
                let rhs = self.eval(frame, rhs)?;
                binary_op(lhs, *op, rhs)
            }
            Node::UnaryOp { op, arg } => {
                let arg = self.eval(frame, arg)?;
                unary_op(*op, arg)
            }
            Node::Variable(ident) => frame
                .variable(ident)
                .cloned()
                .ok_or_else(|| EvalError::UndefinedVariable(ident.clone())),
            Node::SetVariable { ident, value } => {
                let value = self.eval(frame, value)?;
                frame.set_variable(ident, value);
                Ok(Value::None)
            }
            Node::Block(body) | Node::Program(body) => {
                // `return` only records a value, the remaining statements still run
                for stmt in body {
                    self.eval(frame, stmt)?;
                }
                Ok(Value::None)
            }
            Node::Condition(condition) => self.eval_condition(frame, condition),
            Node::Flow(flow) => self.eval_flow(frame, flow),
            Node::FunctionDecl(decl) => {
                frame.declare_function(decl);
                Ok(Value::None)
            }
            Node::FunctionCall { ident, args } => self.eval_fn_call(frame, ident, args),
            Node::ReturnStatement(value) => {
                let value = self.eval(frame, value)?;
                frame.set_return(value.clone());
                Ok(value)
            }
            Node::While { condition, body } => {
                while self.eval_predicate(frame, condition)? {
                    self.eval(frame, body)?;
                }
                Ok(Value::None)
            }
        }
    }

    /// Evaluates a predicate that must produce a boolean.
    fn eval_predicate<'ast>(
        &mut self,
        frame: &mut Frame<'ast>,
        predicate: &'ast Node,
    ) -> Result<bool, EvalError> {
        let value = self.eval(frame, predicate)?;
        value.cast_to_bool().ok_or_else(|| {
            EvalError::TypeMismatch(format!(
                "condition must be a bool, found {}",
                value.type_name()
            ))
        })
    }

    fn eval_condition<'ast>(
        &mut self,
        frame: &mut Frame<'ast>,
        condition: &'ast Condition,
    ) -> Result<Value, EvalError> {
        if self.eval_predicate(frame, &condition.predicate)? {
            self.eval(frame, &condition.body)?;
        }
        Ok(Value::None)
    }

    /// Selects a branch by its predicate, then runs that branch as a [`Condition`],
    /// which evaluates the predicate a second time.
    fn eval_flow<'ast>(&mut self, frame: &mut Frame<'ast>, flow: &'ast Flow) -> Result<Value, EvalError> {
        let branches = std::iter::once(&flow.if_branch).chain(&flow.elseif_branches);
        for branch in branches {
            if self.eval_predicate(frame, &branch.predicate)? {
                return self.eval_condition(frame, branch);
            }
        }
        self.eval_condition(frame, &flow.else_branch)
    }

    fn eval_fn_call<'ast>(
        &mut self,
        frame: &mut Frame<'ast>,
        ident: &str,
        args: &'ast [Node],
    ) -> Result<Value, EvalError> {
        let builtins = self.builtins;
        if let Some(native) = builtins.get(ident) {
            let args = self.eval_args(frame, args)?;
            return Ok(native.call(&mut *self.host, &args)?);
        }

        let decl = frame
            .function(ident)
            .ok_or_else(|| EvalError::UndefinedFunction(ident.to_string()))?;
        let args = self.eval_args(frame, args)?;

        // Extra parameters stay unbound, extra arguments are dropped.
        let variables: HashMap<String, Value> = decl.params.iter().cloned().zip(args).collect();
        // The callee starts without any declared functions, not even its own.
        let mut callee = Frame::with_variables(variables);
        self.eval(&mut callee, &decl.body)?;
        Ok(callee.into_return())
    }

    /// Evaluates call arguments left to right in the caller's frame.
    fn eval_args<'ast>(
        &mut self,
        frame: &mut Frame<'ast>,
        args: &'ast [Node],
    ) -> Result<Vec<Value>, EvalError> {
        args.iter().map(|arg| self.eval(frame, arg)).collect()
    }
}

fn binary_op(lhs: Value, op: TokenKind, rhs: Value) -> Result<Value, EvalError> {
    match (op, lhs, rhs) {
        (TokenKind::Plus, Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
        (TokenKind::Plus, Value::Integer(a), Value::Integer(b)) => checked(a.checked_add(b)),
        (TokenKind::Minus, Value::Integer(a), Value::Integer(b)) => checked(a.checked_sub(b)),
        (TokenKind::Mul, Value::Integer(a), Value::Integer(b)) => checked(a.checked_mul(b)),
        (TokenKind::Div, Value::Integer(_), Value::Integer(0)) => Err(EvalError::DivisionByZero),
        (TokenKind::Div, Value::Integer(a), Value::Integer(b)) => checked(floor_div(a, b)),
        (TokenKind::Equals, lhs, rhs) => Ok(Value::Bool(lhs == rhs)),
        (TokenKind::LThan, Value::Integer(a), Value::Integer(b)) => Ok(Value::Bool(a < b)),
        (TokenKind::LThan, Value::Str(a), Value::Str(b)) => Ok(Value::Bool(a < b)),
        (TokenKind::GThan, Value::Integer(a), Value::Integer(b)) => Ok(Value::Bool(a > b)),
        (TokenKind::GThan, Value::Str(a), Value::Str(b)) => Ok(Value::Bool(a > b)),
        (
            TokenKind::Plus | TokenKind::Minus | TokenKind::Mul | TokenKind::Div | TokenKind::LThan
            | TokenKind::GThan,
            lhs,
            rhs,
        ) => Err(EvalError::TypeMismatch(format!(
            "unsupported operands for {}: {} and {}",
            op,
            lhs.type_name(),
            rhs.type_name()
        ))),
        (op, _, _) => Err(EvalError::InvalidOperator(op)),
    }
}

fn unary_op(op: TokenKind, arg: Value) -> Result<Value, EvalError> {
    match (op, arg) {
        (TokenKind::Plus, Value::Integer(val)) => Ok(Value::Integer(val)),
        (TokenKind::Minus, Value::Integer(val)) => checked(val.checked_neg()),
        (TokenKind::Plus | TokenKind::Minus, arg) => Err(EvalError::TypeMismatch(format!(
            "unsupported operand for unary {}: {}",
            op,
            arg.type_name()
        ))),
        (op, _) => Err(EvalError::InvalidOperator(op)),
    }
}

fn checked(result: Option<i64>) -> Result<Value, EvalError> {
    result.map(Value::Integer).ok_or(EvalError::IntegerOverflow)
}

/// Integer division rounding toward negative infinity.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}
