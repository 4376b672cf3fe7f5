use crate::ast::{BinOp, Expr, UnOp};
use crate::error::Error;
use crate::eval::Interpreter;
use crate::value::Value;

/// The type an expression will evaluate to. Operator mismatches raise a type
/// error at the offending operator during typing; `Undefined` is reserved for
/// operands that cannot be typed in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ty {
    Int,
    Bool,
    Undefined,
}

pub fn ty_of(value: Value) -> Ty {
    match value {
        Value::Int(_) => Ty::Int,
        Value::Bool(_) => Ty::Bool,
    }
}

impl Interpreter {
    /// Computes an expression's type by recursive inspection, without running
    /// its operators. Names must already be bound. A list subscript has the
    /// type of the element it denotes (lists may mix element types), so the
    /// index expression is evaluated here; so is the left operand of `or` and
    /// `and`, whose right operand stays untouched once the left decides the
    /// result.
    pub(crate) fn expr_type(&mut self, expr: &Expr) -> Result<Ty, Error> {
        match expr {
            Expr::Number { .. } => Ok(Ty::Int),
            Expr::Bool { .. } => Ok(Ty::Bool),
            Expr::Name { name, pos } => match self.env.get_scalar(name) {
                Some(v) => Ok(ty_of(v)),
                None => Err(Error::semantic(
                    *pos,
                    format!("Variable '{name}' is not defined"),
                )),
            },
            Expr::Index { name, index, pos } => {
                let v = self.list_element(name, index, *pos)?;
                Ok(ty_of(v))
            }
            Expr::Unary { op, expr, pos } => {
                let inner = self.expr_type(expr)?;
                match (op, inner) {
                    (UnOp::Not, Ty::Bool) => Ok(Ty::Bool),
                    (UnOp::Neg, Ty::Int) => Ok(Ty::Int),
                    (UnOp::Not, _) => {
                        Err(Error::type_error(*pos, "Operand of 'not' must be boolean"))
                    }
                    (UnOp::Neg, _) => {
                        Err(Error::type_error(*pos, "Operand of unary '-' must be integer"))
                    }
                }
            }
            Expr::Binary {
                op,
                left,
                right,
                pos,
            } => match op {
                // Typing shares the evaluator's short-circuit rule: the right
                // operand is not even type-checked once the left operand has
                // fixed the result.
                BinOp::Or | BinOp::And => {
                    let message = if *op == BinOp::Or {
                        "Operands of 'or' must be boolean"
                    } else {
                        "Operands of 'and' must be boolean"
                    };
                    if self.expr_type(left)? != Ty::Bool {
                        return Err(Error::type_error(*pos, message));
                    }
                    let left_value = self.expect_bool(left)?;
                    let decided = if *op == BinOp::Or {
                        left_value
                    } else {
                        !left_value
                    };
                    if !decided && self.expr_type(right)? != Ty::Bool {
                        return Err(Error::type_error(*pos, message));
                    }
                    Ok(Ty::Bool)
                }
                BinOp::Eq | BinOp::Ne => {
                    let lt = self.expr_type(left)?;
                    let rt = self.expr_type(right)?;
                    if lt == Ty::Undefined || lt != rt {
                        return Err(Error::type_error(
                            *pos,
                            "Operands of '==' and '!=' must be of the same type (int or bool)",
                        ));
                    }
                    Ok(Ty::Bool)
                }
                BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => {
                    let lt = self.expr_type(left)?;
                    let rt = self.expr_type(right)?;
                    if lt != Ty::Int || rt != Ty::Int {
                        return Err(Error::type_error(
                            *pos,
                            "Operands of '<', '<=', '>', '>=' must be integers",
                        ));
                    }
                    Ok(Ty::Bool)
                }
                BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div => {
                    let lt = self.expr_type(left)?;
                    let rt = self.expr_type(right)?;
                    if lt != Ty::Int || rt != Ty::Int {
                        return Err(Error::type_error(
                            *pos,
                            "Operands of arithmetic expressions must be integers",
                        ));
                    }
                    Ok(Ty::Int)
                }
            },
        }
    }
}
