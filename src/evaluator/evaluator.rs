use tracing::trace;

use crate::{
    ast::{
        ast::{Node, NodeKind, NodeWrapper},
        expressions::{BinaryExpr, Name, NegativeExpr, NumberLiteral, StringLiteral},
        statements::{BlockStmt, IfStmt, WhileStmt},
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    environment::Environment,
    value::{Value, FALSE},
};

/// Evaluation behaviour of one node variant.
pub trait Evaluate {
    fn evaluate(&self, environment: &mut Environment) -> Result<Value, Error>;
}

/// Evaluates any node by dispatching on its kind.
///
/// Generic `Leaf` and `List` nodes, empty statements and the function
/// syntax nodes have no meaning here and fail with `CannotEvaluate`.
pub fn evaluate(node: &NodeWrapper, environment: &mut Environment) -> Result<Value, Error> {
    trace!(kind = %node.get_node_kind(), "evaluate");

    match node.get_node_kind() {
        NodeKind::NumberLiteral => downcast::<NumberLiteral>(node)?.evaluate(environment),
        NodeKind::StringLiteral => downcast::<StringLiteral>(node)?.evaluate(environment),
        NodeKind::Name => downcast::<Name>(node)?.evaluate(environment),
        NodeKind::NegativeExpr => downcast::<NegativeExpr>(node)?.evaluate(environment),
        NodeKind::BinaryExpr => downcast::<BinaryExpr>(node)?.evaluate(environment),
        NodeKind::BlockStmt => downcast::<BlockStmt>(node)?.evaluate(environment),
        NodeKind::IfStmt => downcast::<IfStmt>(node)?.evaluate(environment),
        NodeKind::WhileStmt => downcast::<WhileStmt>(node)?.evaluate(environment),
        NodeKind::Leaf
        | NodeKind::List
        | NodeKind::NullStmt
        | NodeKind::Arguments
        | NodeKind::ParameterList
        | NodeKind::DefStmt => Err(Error::new(
            ErrorImpl::CannotEvaluate {
                node: node.describe(),
            },
            position_of(node),
        )),
    }
}

fn downcast<T: 'static>(node: &NodeWrapper) -> Result<&T, Error> {
    node.as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| malformed(node))
}

fn malformed(node: &dyn Node) -> Error {
    Error::new(
        ErrorImpl::MalformedNode {
            kind: node.get_node_kind().to_string(),
        },
        position_of(node),
    )
}

fn position_of(node: &dyn Node) -> Position {
    node.location().unwrap_or_else(Position::null)
}

/// The `i`th child, or `MalformedNode` if the parser never built it.
fn required<'a>(parent: &'a dyn Node, child: Option<&'a NodeWrapper>) -> Result<&'a NodeWrapper, Error> {
    child.ok_or_else(|| malformed(parent))
}

// LITERALS

impl Evaluate for NumberLiteral {
    fn evaluate(&self, _environment: &mut Environment) -> Result<Value, Error> {
        self.value().map(Value::Integer).ok_or_else(|| malformed(self))
    }
}

impl Evaluate for StringLiteral {
    fn evaluate(&self, _environment: &mut Environment) -> Result<Value, Error> {
        Ok(Value::from(self.value()))
    }
}

impl Evaluate for Name {
    fn evaluate(&self, environment: &mut Environment) -> Result<Value, Error> {
        environment.get(self.name()).cloned().ok_or_else(|| {
            Error::new(
                ErrorImpl::UndefinedName {
                    name: self.name().to_string(),
                },
                self.token.position.clone(),
            )
        })
    }
}

// COMPLEX

impl Evaluate for NegativeExpr {
    fn evaluate(&self, environment: &mut Environment) -> Result<Value, Error> {
        let operand = required(self, self.operand())?;

        match evaluate(operand, environment)? {
            Value::Integer(value) => value.checked_neg().map(Value::Integer).ok_or_else(|| {
                Error::new(
                    ErrorImpl::ArithmeticOverflow {
                        operator: String::from("-"),
                    },
                    position_of(self),
                )
            }),
            Value::String(_) => Err(Error::new(
                ErrorImpl::BadOperandType {
                    operator: String::from("-"),
                },
                position_of(self),
            )),
        }
    }
}

impl Evaluate for BinaryExpr {
    fn evaluate(&self, environment: &mut Environment) -> Result<Value, Error> {
        let operator = self.operator().ok_or_else(|| malformed(self))?;
        let left = required(self, self.left())?;
        let right = required(self, self.right())?;

        if operator == "=" {
            let value = evaluate(right, environment)?;
            return assign(left, value, environment);
        }

        let left = evaluate(left, environment)?;
        let right = evaluate(right, environment)?;

        compute(operator, left, right).map_err(|error_impl| Error::new(error_impl, position_of(self)))
    }
}

/// Binds `target` to `value`. Only a plain name can be assigned to.
fn assign(target: &NodeWrapper, value: Value, environment: &mut Environment) -> Result<Value, Error> {
    if target.get_node_kind() != NodeKind::Name {
        return Err(Error::new(ErrorImpl::BadAssignment, position_of(target)));
    }

    let name = downcast::<Name>(target)?;
    environment.put(name.name(), value.clone());
    Ok(value)
}

fn compute(operator: &str, left: Value, right: Value) -> Result<Value, ErrorImpl> {
    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => compute_integer(operator, left, right),
        (left, right) => match operator {
            "+" => Ok(Value::String(format!("{}{}", left, right))),
            "==" => Ok(Value::from(left == right)),
            _ => Err(ErrorImpl::BadOperandType {
                operator: operator.to_string(),
            }),
        },
    }
}

fn compute_integer(operator: &str, left: i64, right: i64) -> Result<Value, ErrorImpl> {
    let result = match operator {
        "+" => left.checked_add(right),
        "-" => left.checked_sub(right),
        "*" => left.checked_mul(right),
        "/" | "%" if right == 0 => return Err(ErrorImpl::DivisionByZero),
        // Truncates toward zero
        "/" => left.checked_div(right),
        "%" => left.checked_rem(right),
        "==" => return Ok(Value::from(left == right)),
        ">" => return Ok(Value::from(left > right)),
        "<" => return Ok(Value::from(left < right)),
        _ => {
            return Err(ErrorImpl::BadOperator {
                operator: operator.to_string(),
            })
        }
    };

    result.map(Value::Integer).ok_or_else(|| ErrorImpl::ArithmeticOverflow {
        operator: operator.to_string(),
    })
}

// STATEMENTS

impl Evaluate for BlockStmt {
    /// The value of the last statement run, or 0 for an empty block.
    fn evaluate(&self, environment: &mut Environment) -> Result<Value, Error> {
        let mut result = FALSE;

        for statement in &self.children {
            if statement.get_node_kind() == NodeKind::NullStmt {
                continue;
            }
            result = evaluate(statement, environment)?;
        }

        Ok(result)
    }
}

impl Evaluate for IfStmt {
    fn evaluate(&self, environment: &mut Environment) -> Result<Value, Error> {
        let condition = required(self, self.condition())?;
        let then_block = required(self, self.then_block())?;

        if evaluate(condition, environment)?.is_truthy() {
            evaluate(then_block, environment)
        } else if let Some(else_block) = self.else_block() {
            evaluate(else_block, environment)
        } else {
            Ok(FALSE)
        }
    }
}

impl Evaluate for WhileStmt {
    /// The value of the last body run, or 0 if the body never ran.
    fn evaluate(&self, environment: &mut Environment) -> Result<Value, Error> {
        let condition = required(self, self.condition())?;
        let body = required(self, self.body())?;

        let mut result = FALSE;
        while evaluate(condition, environment)?.is_truthy() {
            result = evaluate(body, environment)?;
        }

        Ok(result)
    }
}
