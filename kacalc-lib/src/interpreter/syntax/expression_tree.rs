use crate::interpreter::error::{CalculationError, SyntaxError};
use crate::interpreter::function::Function;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::parser::{last_operand, pop_operand, PostfixToken};
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_function_call, walk_unary_operation, SyntaxVisitor,
};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Deepest tree the parser will build. Drawing and dropping a tree recurse once per level,
/// so a long flat chain such as a sum of more than this many terms has no tree either.
pub const MAX_DEPTH: usize = 1000;

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    // Terminal symbols (leaves)
    Number(f64),
    // Non-terminal symbols (non-leaves)
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    FunctionCall {
        function: Function,
        argument: Box<Node>,
    },
}

impl Node {
    pub fn new_number(value: f64) -> Node {
        Node::Number(value)
    }

    pub fn new_unary_operation(operator: UnaryOperator, operand: Node) -> Node {
        Node::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_function_call(function: Function, argument: Node) -> Node {
        Node::FunctionCall {
            function,
            argument: Box::new(argument),
        }
    }

    /// Counts every node in the tree, this one included.
    pub fn size(&self) -> usize {
        let mut visitor = CountingVisitor { count: 0 };
        self.accept(&mut visitor);
        visitor.count
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Number(value) => visitor.visit_number(*value),
            Node::UnaryOperation { operator, operand } => {
                visitor.visit_unary_operation(operator, operand)
            }
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::FunctionCall { function, argument } => {
                visitor.visit_function_call(function, argument)
            }
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        if write_tree(&visitor.builder.build(), &mut buffer).is_err() {
            return Err(fmt::Error);
        }
        let text = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

/// Generates an expression tree based off of the given tokens.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
pub fn new_tree(postfix_tokens: Vec<PostfixToken>) -> Result<Node, CalculationError> {
    // Each operand is kept alongside the depth of its subtree.
    let mut operands: Vec<(Node, usize)> = Vec::new();

    for token in postfix_tokens {
        let (node, depth) = match token {
            PostfixToken::Number(value) => (Node::new_number(value), 1),
            PostfixToken::UnaryOperator(operator) => {
                let (operand, depth) = pop_operand(&mut operands, &token)?;
                (Node::new_unary_operation(operator, operand), depth + 1)
            }
            PostfixToken::Function(function) => {
                let (argument, depth) = pop_operand(&mut operands, &token)?;
                (Node::new_function_call(function, argument), depth + 1)
            }
            PostfixToken::BinaryOperator(operator) => {
                let (right_operand, right_depth) = pop_operand(&mut operands, &token)?;
                let (left_operand, left_depth) = pop_operand(&mut operands, &token)?;
                let node = Node::new_binary_operation(operator, left_operand, right_operand);
                (node, left_depth.max(right_depth) + 1)
            }
        };
        if depth > MAX_DEPTH {
            return Err(SyntaxError::NestingTooDeep(MAX_DEPTH).into());
        }
        operands.push((node, depth));
    }

    let (root, _) = last_operand(operands)?;
    Ok(root)
}

struct CountingVisitor {
    count: usize,
}

impl SyntaxVisitor for CountingVisitor {
    fn visit_number(&mut self, _value: f64) {
        self.count += 1;
    }
    fn visit_unary_operation(&mut self, _operator: &UnaryOperator, operand: &Node) {
        self.count += 1;
        walk_unary_operation(self, operand);
    }
    fn visit_binary_operation(
        &mut self,
        _operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.count += 1;
        walk_binary_operation(self, left_operand, right_operand);
    }
    fn visit_function_call(&mut self, _function: &Function, argument: &Node) {
        self.count += 1;
        walk_function_call(self, argument);
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number(&mut self, value: f64) {
        self.builder.add_empty_child(format!("{}", value));
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.builder.begin_child(format!("{} (sign)", operator));
        walk_unary_operation(self, operand);
        self.builder.end_child();
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_function_call(&mut self, function: &Function, argument: &Node) {
        self.builder.begin_child(format!("{}()", function));
        walk_function_call(self, argument);
        self.builder.end_child();
    }
}
